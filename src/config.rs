use fractic_server_error::ServerError;
use serde_derive::Deserialize;

use crate::errors::{InvalidRon, ReadError};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub enum StoreConfig {
    /// No store: bills pages stay empty.
    #[default]
    Disabled,
    /// Empty in-process store.
    Memory,
    /// In-process store seeded from a JSON array of bills.
    JsonFile(String),
}

/// Application settings, written in RON:
///
/// ```ron
/// (
///     store: JsonFile("fixtures/bills.json"),
///     accepted_file_extensions: ["jpg", "jpeg", "png"],
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BilledConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default = "default_accepted_file_extensions")]
    pub accepted_file_extensions: Vec<String>,
}

fn default_accepted_file_extensions() -> Vec<String> {
    vec!["jpg".into(), "jpeg".into(), "png".into()]
}

impl Default for BilledConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            accepted_file_extensions: default_accepted_file_extensions(),
        }
    }
}

impl BilledConfig {
    pub fn from_ron(s: &str) -> Result<Self, ServerError> {
        ron::from_str(s).map_err(|e| InvalidRon::with_debug("BilledConfig", &e))
    }

    pub async fn from_file<P>(path: P) -> Result<Self, ServerError>
    where
        P: AsRef<std::path::Path>,
    {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Self::from_ron(&contents)
    }
}
