//! Manual ordering ranks
//!
//! Reserved for letting users override the alphabetical sort. The tree walk
//! does not consult it yet.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Relative path to manual rank, stored as `file_order.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileOrder(BTreeMap<String, u32>);

impl FileOrder {
    /// Parse the JSON object form, e.g. `{"notes/todo.md": 0}`
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[must_use]
    pub fn rank(&self, path: &str) -> Option<u32> {
        self.0.get(path).copied()
    }

    pub fn set_rank(&mut self, path: impl Into<String>, rank: u32) {
        self.0.insert(path.into(), rank);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rank_map() {
        let order = FileOrder::from_json(r#"{"notes/b.md": 0, "notes/a.md": 1}"#).unwrap();
        assert_eq!(order.rank("notes/b.md"), Some(0));
        assert_eq!(order.rank("notes/missing.md"), None);
    }

    #[test]
    fn rejects_non_numeric_ranks() {
        assert!(FileOrder::from_json(r#"{"notes/a.md": "first"}"#).is_err());
    }

    #[test]
    fn set_rank_overwrites() {
        let mut order = FileOrder::default();
        order.set_rank("notes/a.md", 3);
        order.set_rank("notes/a.md", 1);
        let json = order.to_json().unwrap();
        assert_eq!(FileOrder::from_json(&json).unwrap().rank("notes/a.md"), Some(1));
    }
}
