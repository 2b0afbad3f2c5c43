//! End-to-end: load a corpus from disk, record selections, reopen, read back.

use pokesort_core::recent::view;
use pokesort_core::{Corpus, PokemonId, RecentEntry, RecentOrder, RecentStore};
use tempfile::TempDir;

fn write_data_file(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("pokemon.json");
    std::fs::write(
        &path,
        r#"[
            {"id": 1, "number": "001", "nameEn": "Bulbasaur", "nameDe": "Bisasam"},
            {"id": 4, "number": "004", "nameEn": "Charmander", "nameDe": "Glumanda"},
            {"id": 7, "number": "007", "nameEn": "Squirtle", "nameDe": "Schiggy"}
        ]"#,
    )
    .unwrap();
    path
}

#[test]
fn selections_survive_a_restart() {
    let temp = TempDir::new().unwrap();
    let data_path = write_data_file(&temp);
    let db_path = temp.path().join("pokesort.redb");

    let corpus = Corpus::load(&data_path).unwrap();

    {
        let mut store = RecentStore::open(&db_path).unwrap();
        for id in [4u32, 7, 4] {
            let id = PokemonId::try_from(id).unwrap();
            let record = corpus.get(id).unwrap();
            store.select(RecentEntry::from(record)).unwrap();
        }
    }

    let store = RecentStore::open(&db_path).unwrap();
    let entries = store.load();

    // Re-selecting id 4 moved it back to the front without duplicating.
    let ids: Vec<u32> = entries.iter().map(|e| u32::from(e.id)).collect();
    assert_eq!(ids, vec![4, 7]);
    assert_eq!(entries[0].name_de, "Glumanda");
    assert_eq!(entries[0].number, "004");

    let rows = view(&entries, RecentOrder::ByNumber);
    assert_eq!(u32::from(rows[0].entry.id), 4);
    assert!(rows[0].is_latest);
}
