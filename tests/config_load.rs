use spellbee::config::Config;

#[tokio::test]
async fn missing_file_falls_back_to_defaults() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("absent.toml");
    let config = Config::load_or_default(path.to_str().unwrap()).await.unwrap();
    assert_eq!(config.storage.data_dir, "./data");
    assert_eq!(config.game.command_prefix(), "/");
}

#[tokio::test]
async fn partial_file_overrides_only_given_keys() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("spellbee.toml");
    tokio::fs::write(
        &path,
        "[storage]\ndata_dir = \"/srv/spellbee\"\n\n[audio]\ncommand = \"\"\n",
    )
    .await
    .unwrap();

    let config = Config::load(path.to_str().unwrap()).await.unwrap();
    assert_eq!(config.storage.data_dir, "/srv/spellbee");
    assert_eq!(config.game.max_clues, 3);
    assert_eq!(config.audio.rate_wpm, 120);
}

#[tokio::test]
async fn malformed_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("bad.toml");
    tokio::fs::write(&path, "[game\nmax_clues = ").await.unwrap();
    let err = Config::load(path.to_str().unwrap()).await.unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}
