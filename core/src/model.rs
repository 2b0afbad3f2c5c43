//! Catalog record types.

use crate::types::{Language, PokemonId};
use serde::{Deserialize, Serialize};

/// One catalog entry, immutable once the corpus is built.
///
/// Field names serialize as camelCase to match the JSON data file written by
/// `pokesort-fetch`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pokemon {
    pub id: PokemonId,
    /// Zero-padded display form of `id`. Renormalized by the corpus on load
    /// so the width is uniform across the whole record set.
    pub number: String,
    pub name_en: String,
    pub name_de: String,
    /// Artwork URI. Not consulted by search.
    #[serde(default)]
    pub sprite: Option<String>,
}

impl Pokemon {
    /// The name to render for the given display language.
    pub fn display_name(&self, language: Language) -> &str {
        match language {
            Language::En => &self.name_en,
            Language::De => &self.name_de,
        }
    }
}

/// Zero-pads `id` to `width` digits. Ids wider than `width` keep their
/// natural length.
pub fn display_number(id: PokemonId, width: usize) -> String {
    format!("{:0width$}", u32::from(id))
}
