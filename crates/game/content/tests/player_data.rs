use std::fs;

use farm_content::{ConfigLoader, ContentFactory, PlayerDataLoader};
use farm_core::{FarmConfig, StatKind, zones};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("fixture should be writable");
    path
}

/// Farming walkthrough from a saved JSON profile.
///
/// 1. Load psychic power 580T at multiplier 2048
/// 2. Farm at the bridge until 1Qa
/// 3. Switch to an autoclicker (delay 1.05) with multiplier 4096 at the waterfall
/// 4. Project hourly gains, a long session, and the road to 1Qi
#[test]
fn json_profile_walkthrough() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "example.json",
        r#"{
            "psychicPower": { "amount": "580T", "multiplier": 2048 },
            "fist": { "amount": 1000, "multiplier": 1 },
            "hp": { "amount": "1K" },
            "tokens count": { "amount": 12, "multiplier": 1000 }
        }"#,
    );

    let mut stats = PlayerDataLoader::load_statistics(&path, &FarmConfig::default())
        .expect("profile should load");
    assert_eq!(stats.tokens().base_multiplier(), 5.0);

    stats.enter_zone(zones::find(StatKind::PsychicPower, "bridge").unwrap());
    let pp = stats.psychic_power();
    assert_eq!(pp.amount_to_reach_compact("1Qa").unwrap(), "420.0T");
    assert_eq!(pp.time_to_reach("1Qa").unwrap(), "3d 13h 26m 57.1875s");

    let pp = stats.stat_mut(StatKind::PsychicPower);
    pp.set_amount("1Qa").unwrap();
    pp.set_delay(1.05).unwrap();
    pp.set_multiplier(4096.0).unwrap();
    stats.enter_zone(zones::find(StatKind::PsychicPower, "waterfall").unwrap());

    let pp = stats.psychic_power();
    assert_eq!(pp.projected_amount_compact("1h").unwrap(), "1.404Qa");
    assert_eq!(pp.amount_after_compact("1d 15h 48m 8s").unwrap(), "56.90Qa");
    assert_eq!(pp.time_to_reach("1Qi").unwrap(), "29d 15h 21m 53.0859375s");

    stats.leave_zone();
    assert_eq!(stats.psychic_power().zone_multiplier(), None);
}

#[test]
fn factory_applies_directory_config() {
    let dir = TempDir::new().unwrap();
    write(
        &dir,
        "config.toml",
        "psychic_power_delay = 1.05\ntokens_multiplier = 6\n",
    );
    write(
        &dir,
        "player.toml",
        "[pp]\namount = \"1Qa\"\nmultiplier = 4096\n\n[skulls]\namount = 3\n",
    );

    let stats = ContentFactory::new(dir.path()).load_statistics().unwrap();
    assert_eq!(stats.psychic_power().delay(), 1.05);
    assert_eq!(stats.psychic_power().rate(), 4096.0 / 1.05);
    assert_eq!(stats.tokens().base_multiplier(), 6.0);
    assert_eq!(stats.tokens().amount(), 3.0);
}

#[test]
fn factory_without_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    write(&dir, "player.ron", r#"{ "body": (amount: Some("2.5M")) }"#);

    let factory = ContentFactory::new(dir.path());
    assert_eq!(factory.load_config().unwrap(), FarmConfig::default());

    let stats = factory.load_statistics().unwrap();
    assert_eq!(stats.body_toughness().amount(), 2.5e6);
    assert_eq!(stats.body_toughness().delay(), 1.25);
}

#[test]
fn factory_requires_player_file() {
    let dir = TempDir::new().unwrap();
    let err = ContentFactory::new(dir.path()).load_statistics().unwrap_err();
    assert!(err.to_string().contains("No player data file"));
}

#[test]
fn errors_name_the_offending_file() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "broken.json", r#"{ "pp": { "amount": "12zz" } }"#);

    let err = PlayerDataLoader::load_statistics(&path, &FarmConfig::default()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("broken.json"), "{message}");
    assert!(message.contains("12zz"), "{message}");
}

#[test]
fn malformed_json_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "player.json", "{ not json");
    assert!(PlayerDataLoader::load(&path).is_err());
}

#[test]
fn config_file_errors_are_reported() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "config.toml", "fist_strength_delay = -1.0\n");
    let err = ConfigLoader::load(&path).unwrap_err();
    assert!(err.to_string().contains("fist_strength"));
}
