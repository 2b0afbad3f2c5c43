use super::*;
use tempfile::TempDir;

#[test]
fn defaults() {
    let config = SavedConfig::default();
    assert_eq!(config.language, Language::En);
    assert_eq!(config.threshold, 0.4);
    assert_eq!(config.weight_name_en, 1.0);
    assert_eq!(config.weight_name_de, 1.0);
    assert_eq!(config.weight_number, 0.8);
}

#[test]
fn load_missing_file_returns_defaults() {
    let temp = TempDir::new().unwrap();
    let path = SavedConfig::path(temp.path());

    let config = SavedConfig::load(&path).unwrap();
    assert_eq!(config.threshold, SavedConfig::default().threshold);
}

#[test]
fn save_and_load_round_trip() {
    let temp = TempDir::new().unwrap();
    let path = SavedConfig::path(temp.path());

    let config = SavedConfig {
        language: Language::De,
        threshold: 0.3,
        weight_name_en: 2.0,
        weight_name_de: 1.5,
        weight_number: 0.5,
    };
    config.save(&path).unwrap();

    let loaded = SavedConfig::load(&path).unwrap();
    assert_eq!(loaded.language, Language::De);
    assert_eq!(loaded.threshold, 0.3);
    assert_eq!(loaded.weight_name_en, 2.0);
    assert_eq!(loaded.weight_name_de, 1.5);
    assert_eq!(loaded.weight_number, 0.5);
}

#[test]
fn partial_file_fills_in_defaults() {
    let temp = TempDir::new().unwrap();
    let path = SavedConfig::path(temp.path());
    std::fs::write(&path, "language = \"de\"\n").unwrap();

    let config = SavedConfig::load(&path).unwrap();
    assert_eq!(config.language, Language::De);
    assert_eq!(config.threshold, 0.4);
}

#[test]
fn corrupt_file_errors_but_load_or_default_recovers() {
    let temp = TempDir::new().unwrap();
    let path = SavedConfig::path(temp.path());
    std::fs::write(&path, "not valid toml [[[").unwrap();

    SavedConfig::load(&path).unwrap_err();

    let config = SavedConfig::load_or_default(&path);
    assert_eq!(config.threshold, SavedConfig::default().threshold);
}

#[test]
fn config_paths() {
    let config = Config {
        base_path: PathBuf::from("/tmp/pokesort"),
        saved: SavedConfig::default(),
    };
    assert_eq!(config.db_path(), PathBuf::from("/tmp/pokesort/pokesort.redb"));
    assert_eq!(config.data_path(), PathBuf::from("/tmp/pokesort/pokemon.json"));
    assert_eq!(
        config.config_path(),
        PathBuf::from("/tmp/pokesort/config.toml")
    );
}
