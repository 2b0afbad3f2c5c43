pub(crate) mod config;
pub use config::{Config, ConfigFileError, SavedConfig};

pub(crate) mod id;
pub use id::{PokemonId, PokemonIdError};

pub(crate) mod language;
pub use language::Language;
