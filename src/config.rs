//! Tree Configuration
//!
//! Options controlling how a `Tree` is grown.
use crate::errors::TreeError;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct TreeConfig {
    /// Build the children of a branch in parallel.
    pub parallel: bool,
}

impl TreeConfig {
    /// Set whether sibling subtrees are built in parallel.
    /// * `parallel` - Use the rayon thread pool for sibling subtrees.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Load a configuration from a JSON string.
    ///
    /// * `json_str` - Missing fields take their default values.
    pub fn from_json(json_str: &str) -> Result<Self, TreeError> {
        match serde_json::from_str::<TreeConfig>(json_str) {
            Ok(c) => Ok(c),
            Err(e) => Err(TreeError::UnableToRead(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters() {
        let cfg = TreeConfig::default().set_parallel(true);
        assert!(cfg.parallel);
        assert_eq!(TreeConfig::default(), TreeConfig { parallel: false });
    }

    #[test]
    fn test_from_json() {
        let cfg = TreeConfig::from_json(r#"{"parallel": true}"#).unwrap();
        assert_eq!(cfg, TreeConfig::default().set_parallel(true));
        assert_eq!(TreeConfig::from_json("{}").unwrap(), TreeConfig::default());
        assert!(matches!(
            TreeConfig::from_json(r#"{"parallel": "yes"}"#),
            Err(TreeError::UnableToRead(_))
        ));
    }
}
