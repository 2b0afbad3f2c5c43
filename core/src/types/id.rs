use nutype::nutype;

/// Positive catalog identifier, the primary key of a record.
///
/// Validated at every boundary: construction, JSON deserialization, and
/// ingestion all reject zero.
#[nutype(
    validate(greater = 0),
    derive(
        Debug,
        Clone,
        Copy,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        Hash,
        TryFrom,
        Into,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct PokemonId(u32);
