use serde::{Deserialize, Serialize};
use std::fmt;

/// Display language for catalog names.
///
/// Selects which name field to render; never affects matching or ranking.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Language::En => "en",
            Language::De => "de",
        };
        write!(f, "{}", s)
    }
}
