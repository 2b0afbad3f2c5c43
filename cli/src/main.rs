//! pokesort-fetch: builds the JSON data file from PokeAPI.
//!
//! Re-runnable: fetched records merge into the existing file keyed by id, so
//! a partial run (id range or explicit list) never clobbers what is already
//! there. Per-id failures are reported and skipped.

use anyhow::{Context, Result};
use clap::Parser;
use pokesort_core::{Pokemon, PokemonId, display_number};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

/// Highest id currently served by PokeAPI.
const TOTAL_POKEMON: u32 = 1025;

const API_BASE: &str = "https://pokeapi.co/api/v2";

/// Pause between requests, with a longer one after each batch, to stay
/// polite toward the public API.
const REQUEST_DELAY: Duration = Duration::from_millis(100);
const BATCH_SIZE: usize = 20;
const BATCH_DELAY: Duration = Duration::from_millis(500);

#[derive(Parser, Debug)]
#[command(
    name = "pokesort-fetch",
    about = "Fetch catalog data from PokeAPI into the JSON data file"
)]
struct Args {
    /// Output data file (merged into if it already exists)
    #[arg(long, default_value = "data/pokemon.json")]
    out: PathBuf,
    /// First id to fetch
    #[arg(long, default_value_t = 1)]
    from: u32,
    /// Last id to fetch, inclusive
    #[arg(long, default_value_t = TOTAL_POKEMON)]
    to: u32,
    /// Explicit comma-separated ids to fetch instead of the range
    #[arg(long, value_delimiter = ',')]
    ids: Vec<u32>,
}

#[derive(Deserialize)]
struct ApiPokemon {
    id: u32,
    name: String,
    sprites: ApiSprites,
}

#[derive(Deserialize)]
struct ApiSprites {
    front_default: Option<String>,
    other: Option<ApiOtherSprites>,
}

#[derive(Deserialize)]
struct ApiOtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<ApiArtwork>,
}

#[derive(Deserialize)]
struct ApiArtwork {
    front_default: Option<String>,
}

#[derive(Deserialize)]
struct ApiSpecies {
    names: Vec<ApiName>,
}

#[derive(Deserialize)]
struct ApiName {
    name: String,
    language: ApiLanguage,
}

#[derive(Deserialize)]
struct ApiLanguage {
    name: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let ids: Vec<u32> = if args.ids.is_empty() {
        (args.from..=args.to).collect()
    } else {
        args.ids.clone()
    };

    let mut records = load_existing(&args.out)?;
    println!(
        "fetching {} entries into {} ({} already present)",
        ids.len(),
        args.out.display(),
        records.len()
    );

    let client = Client::new();
    let total = ids.len();
    let mut fetched = 0usize;

    for (i, &id) in ids.iter().enumerate() {
        match fetch_one(&client, id) {
            Ok(record) => {
                records.insert(id, record);
                fetched += 1;
            }
            Err(err) => eprintln!("id {id}: {err:#}"),
        }

        if (i + 1) % 50 == 0 {
            println!("{}/{}", i + 1, total);
        }

        if (i + 1) % BATCH_SIZE == 0 {
            thread::sleep(BATCH_DELAY);
        } else {
            thread::sleep(REQUEST_DELAY);
        }
    }

    write_merged(&args.out, &records)?;
    println!(
        "wrote {} ({} fetched, {} total)",
        args.out.display(),
        fetched,
        records.len()
    );
    Ok(())
}

/// Reads the current data file, keyed by id. A missing file is an empty
/// set; an unparsable one is a hard error so a bad run can't overwrite
/// good data.
fn load_existing(path: &Path) -> Result<BTreeMap<u32, Pokemon>> {
    if !path.exists() {
        return Ok(BTreeMap::new());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<Pokemon> = serde_json::from_str(&content)
        .with_context(|| format!("parsing {}", path.display()))?;
    Ok(records.into_iter().map(|r| (u32::from(r.id), r)).collect())
}

fn fetch_one(client: &Client, id: u32) -> Result<Pokemon> {
    let pokemon: ApiPokemon = client
        .get(format!("{API_BASE}/pokemon/{id}"))
        .send()?
        .error_for_status()?
        .json()
        .context("decoding pokemon response")?;
    let species: ApiSpecies = client
        .get(format!("{API_BASE}/pokemon-species/{id}"))
        .send()?
        .error_for_status()?
        .json()
        .context("decoding species response")?;

    // Localized names can be absent; the canonical API name is the fallback.
    let name_en = localized_name(&species, "en").unwrap_or_else(|| pokemon.name.clone());
    let name_de = localized_name(&species, "de").unwrap_or_else(|| pokemon.name.clone());

    let sprite = pokemon
        .sprites
        .other
        .as_ref()
        .and_then(|other| other.official_artwork.as_ref())
        .and_then(|artwork| artwork.front_default.clone())
        .or(pokemon.sprites.front_default);

    let id = PokemonId::try_from(pokemon.id).context("API returned id 0")?;
    Ok(Pokemon {
        id,
        number: display_number(id, 3),
        name_en,
        name_de,
        sprite,
    })
}

fn localized_name(species: &ApiSpecies, language: &str) -> Option<String> {
    species
        .names
        .iter()
        .find(|n| n.language.name == language)
        .map(|n| n.name.clone())
}

fn write_merged(path: &Path, records: &BTreeMap<u32, Pokemon>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let ordered: Vec<&Pokemon> = records.values().collect();
    let json = serde_json::to_string_pretty(&ordered)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
