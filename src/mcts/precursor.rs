use serde::{Deserialize, Serialize};

/// A molecule identifier (typically a SMILES string) taking part in a route.
///
/// The identifier is opaque: no parsing, validation or canonicalisation
/// happens here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Precursor(String);

impl Precursor {
    pub fn new(id: impl Into<String>) -> Self {
        Precursor(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Precursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Precursor {
    fn from(id: String) -> Self {
        Precursor(id)
    }
}

impl From<&str> for Precursor {
    fn from(id: &str) -> Self {
        Precursor(id.to_string())
    }
}

impl From<&String> for Precursor {
    fn from(id: &String) -> Self {
        Precursor(id.clone())
    }
}

impl From<&Precursor> for Precursor {
    fn from(p: &Precursor) -> Self {
        p.clone()
    }
}

impl AsRef<str> for Precursor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Precursor {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Precursor {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_raw_identifier() {
        let p = Precursor::from("CC(=O)Oc1ccccc1C(=O)O");
        assert_eq!(p.to_string(), "CC(=O)Oc1ccccc1C(=O)O");
        assert_eq!(p, "CC(=O)Oc1ccccc1C(=O)O");
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let p = Precursor::new("CCO");
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"CCO\"");

        let back: Precursor = serde_json::from_str("\"CCO\"").unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_no_canonicalisation() {
        // Same molecule, different notation: still distinct identifiers
        assert_ne!(Precursor::from("OCC"), Precursor::from("CCO"));
        assert_eq!(Precursor::from("").as_str(), "");
    }
}
