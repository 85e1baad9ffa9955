use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// Set of field paths applied by an update operation.
///
/// On the wire this is a single comma-joined string of camelCase paths,
/// e.g. `"finalUrls,responsiveSearchAd.headlines"`. Masks are computed
/// from the populated fields of the update payload; callers never write
/// path strings by hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMask {
    paths: Vec<String>,
}

impl FieldMask {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.paths.contains(&path) {
            self.paths.push(path);
        }
    }

    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|p| p == path)
    }
}

impl<S: Into<String>> FromIterator<S> for FieldMask {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut mask = FieldMask::new();
        for path in iter {
            mask.push(path);
        }
        mask
    }
}

impl Serialize for FieldMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.paths.join(","))
    }
}

impl<'de> Deserialize<'de> for FieldMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let joined = String::deserialize(deserializer)?;
        if joined.chars().any(char::is_whitespace) {
            return Err(de::Error::custom("field mask must not contain whitespace"));
        }
        Ok(joined.split(',').filter(|p| !p.is_empty()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_comma_joined_string() {
        let mask: FieldMask = ["status", "networkSettings.targetSearchNetwork"]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, "\"status,networkSettings.targetSearchNetwork\"");
    }

    #[test]
    fn duplicate_paths_collapse() {
        let mut mask = FieldMask::new();
        mask.push("finalUrls");
        mask.push("finalUrls");
        assert_eq!(mask.paths(), ["finalUrls"]);
    }

    #[test]
    fn deserializes_from_string() {
        let mask: FieldMask = serde_json::from_str("\"a,b.c\"").unwrap();
        assert!(mask.contains("a"));
        assert!(mask.contains("b.c"));
        assert_eq!(mask.paths().len(), 2);
    }
}
