//! # Retrosynthetic MCTS Search State
//!
//! Node state for Monte Carlo Tree Search over retrosynthetic routes: which
//! molecules still need to be broken down, which were just produced, and
//! whether a route is complete.
//!
//! ## Usage
//!
//! ```rust
//! use retro_mcts::Node;
//!
//! let root = Node::root("CC(=O)Oc1ccccc1C(=O)O");
//! assert!(!root.is_solved());
//!
//! // Both products are purchasable: nothing left to expand
//! let child = root.successor(["CC(=O)O", "Oc1ccccc1C(=O)O"], |_| false).unwrap();
//! assert!(child.is_solved());
//! ```

// ============================================================================
// PUBLIC API MODULES
// ============================================================================

/// Search-tree node state
pub mod mcts;

/// Logger initialisation for binaries
pub mod logging;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use mcts::{Node, Precursor};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Main error type for the retro_mcts library
#[derive(Debug, thiserror::Error)]
pub enum RetroError {
    #[error("Missing input: {0}")]
    MissingInput(&'static str),

    #[error("Node is already solved: no precursor left to expand")]
    AlreadySolved,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RetroError>;

// ============================================================================
// LIBRARY VERSION INFO
// ============================================================================

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Library description
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
