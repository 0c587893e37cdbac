//! Search-node state for retrosynthetic MCTS
//!
//! A [`Node`] holds the frontier of a partial route at one point of the tree:
//! - `precursors_to_expand`: molecules that still need to be broken down,
//!   in the order the search will work through them
//! - `new_precursors`: molecules produced by the rule application that
//!   created this node (provenance only)
//!
//! The head of `precursors_to_expand` is the current precursor. Once it has
//! been expanded, the next one in line becomes current in the child node.
//! Nodes are never mutated; each search step derives a new one.

use crate::mcts::precursor::Precursor;
use crate::{Result, RetroError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

fn no_precursors() -> Arc<[Precursor]> {
    Arc::from(Vec::new())
}

/// A node in the retrosynthetic search tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Precursors still requiring expansion, head first
    precursors_to_expand: Arc<[Precursor]>,

    /// Precursors generated by the last applied reaction rule
    #[serde(default = "no_precursors")]
    new_precursors: Arc<[Precursor]>,
}

impl Node {
    /// Creates a node from the pending and produced precursor sequences
    ///
    /// Both inputs are copied into the node, so later changes to the
    /// caller's collections never reach it. Pass an empty sequence for a
    /// terminal state.
    pub fn new<P, N>(precursors_to_expand: P, new_precursors: N) -> Self
    where
        P: IntoIterator,
        P::Item: Into<Precursor>,
        N: IntoIterator,
        N::Item: Into<Precursor>,
    {
        let node = Node {
            precursors_to_expand: precursors_to_expand.into_iter().map(Into::into).collect(),
            new_precursors: new_precursors.into_iter().map(Into::into).collect(),
        };

        log::trace!(
            "node created: {} to expand, {} new",
            node.precursors_to_expand.len(),
            node.new_precursors.len()
        );

        node
    }

    /// Creates the root node for a target molecule
    pub fn root(target: impl Into<Precursor>) -> Self {
        let target: Precursor = target.into();
        Node::new([target], std::iter::empty::<Precursor>())
    }

    /// Creates a node from inputs that may be absent
    ///
    /// # Errors
    /// Returns [`RetroError::MissingInput`] when `precursors_to_expand` is
    /// `None`. A missing `new_precursors` is treated as empty.
    pub fn try_new<P, N>(precursors_to_expand: Option<P>, new_precursors: Option<N>) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: Into<Precursor>,
        N: IntoIterator,
        N::Item: Into<Precursor>,
    {
        let pending = precursors_to_expand.ok_or(RetroError::MissingInput("precursors_to_expand"))?;

        Ok(match new_precursors {
            Some(produced) => Node::new(pending, produced),
            None => Node::new(pending, std::iter::empty::<Precursor>()),
        })
    }

    /// The precursor to expand next, `None` once the node is solved
    pub fn curr_precursor(&self) -> Option<&Precursor> {
        self.precursors_to_expand.first()
    }

    /// Precursors queued behind the current one (empty when solved)
    pub fn next_precursor(&self) -> &[Precursor] {
        self.precursors_to_expand.get(1..).unwrap_or(&[])
    }

    /// All precursors still to expand, current one first
    pub fn precursors_to_expand(&self) -> &[Precursor] {
        &self.precursors_to_expand
    }

    /// Precursors produced by the rule application that created this node
    pub fn new_precursors(&self) -> &[Precursor] {
        &self.new_precursors
    }

    /// Number of precursors left to expand
    pub fn len(&self) -> usize {
        self.precursors_to_expand.len()
    }

    /// True when no precursor is left to expand
    pub fn is_empty(&self) -> bool {
        self.precursors_to_expand.is_empty()
    }

    /// Checks if this is a terminal node (no precursors left to expand)
    pub fn is_solved(&self) -> bool {
        self.precursors_to_expand.is_empty()
    }

    /// Derives the child node produced by expanding the current precursor
    ///
    /// `produced` are the molecules a reaction rule generated from
    /// [`Node::curr_precursor`]. Those for which `needs_expansion` returns
    /// true are queued ahead of [`Node::next_precursor`]; the others (e.g.
    /// purchasable building blocks) are only recorded as new precursors.
    ///
    /// # Errors
    /// Returns [`RetroError::AlreadySolved`] if this node has no current
    /// precursor.
    pub fn successor<I, F>(&self, produced: I, mut needs_expansion: F) -> Result<Node>
    where
        I: IntoIterator,
        I::Item: Into<Precursor>,
        F: FnMut(&Precursor) -> bool,
    {
        let curr = self.curr_precursor().ok_or(RetroError::AlreadySolved)?;

        let new_precursors: Arc<[Precursor]> = produced.into_iter().map(Into::into).collect();
        let precursors_to_expand: Arc<[Precursor]> = new_precursors
            .iter()
            .filter(|p| needs_expansion(*p))
            .chain(self.next_precursor())
            .cloned()
            .collect();

        log::debug!(
            "expanded {} into {} precursors, {} left to expand",
            curr,
            new_precursors.len(),
            precursors_to_expand.len()
        );

        Ok(Node {
            precursors_to_expand,
            new_precursors,
        })
    }
}

/// Flattened view of a node, derived fields included, for inspection output
#[derive(Debug, Clone, Serialize)]
pub struct NodeSummary<'a> {
    pub precursors_to_expand: &'a [Precursor],
    pub new_precursors: &'a [Precursor],
    pub curr_precursor: Option<&'a Precursor>,
    pub next_precursor: &'a [Precursor],
    pub len: usize,
    pub is_solved: bool,
}

impl Node {
    /// Borrowed snapshot of the node with its derived fields
    pub fn summary(&self) -> NodeSummary<'_> {
        NodeSummary {
            precursors_to_expand: self.precursors_to_expand(),
            new_precursors: self.new_precursors(),
            curr_precursor: self.curr_precursor(),
            next_precursor: self.next_precursor(),
            len: self.len(),
            is_solved: self.is_solved(),
        }
    }

    /// Pretty-printed JSON of [`Node::summary`]
    pub fn summary_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summary())?)
    }
}

struct PrecursorList<'a>(&'a [Precursor]);

impl std::fmt::Display for PrecursorList<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:?}", p.as_str())?;
        }
        write!(f, "]")
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "New precursors: {}", PrecursorList(&self.new_precursors))?;
        writeln!(
            f,
            "Precursors to expand: {}",
            PrecursorList(&self.precursors_to_expand)
        )
    }
}
