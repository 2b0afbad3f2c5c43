pub mod corpus;
pub mod error;
pub mod model;
pub mod recent;
pub mod types;

pub use corpus::Corpus;
pub use error::{CorpusError, Error, RecentStoreError, Result};
pub use model::{Pokemon, display_number};
pub use recent::{RECENT_CAP, RecentEntry, RecentOrder, RecentStore, RecentView};
pub use types::{Config, Language, PokemonId, SavedConfig};
