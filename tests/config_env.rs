// Kept in its own test binary: it mutates process environment variables.

use probabilistic_interleave::InterleavingConfig;

#[test]
fn environment_overrides_file_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("interleaving.toml");
    std::fs::write(&path, "tau = 2.0\nseed = 1\n").unwrap();

    std::env::set_var("INTERLEAVING_TAU", "4.5");
    std::env::set_var("INTERLEAVING_SEED", "not-a-number");
    let (config, _) = InterleavingConfig::load(Some(path.clone())).unwrap();
    assert_eq!(config.tau, 4.5);
    assert_eq!(config.seed, Some(1));

    std::env::set_var("INTERLEAVING_SEED", "900");
    std::env::set_var("INTERLEAVING_CONFIG_PATH", path.to_string_lossy().to_string());
    let (config, resolved) = InterleavingConfig::load(None).unwrap();
    assert_eq!(config.seed, Some(900));
    assert_eq!(resolved, Some(path));

    std::env::remove_var("INTERLEAVING_TAU");
    std::env::remove_var("INTERLEAVING_SEED");
    std::env::remove_var("INTERLEAVING_CONFIG_PATH");
}
