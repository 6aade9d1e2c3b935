use super::*;

#[test]
fn missing_fields_take_defaults() {
    let p: MusicProfile = serde_json::from_str(r#"{"energy": 0.9, "timestamp": 12.5}"#).unwrap();
    assert_eq!(p.energy, 0.9);
    assert_eq!(p.valence, 0.5);
    assert_eq!(p.danceability, 0.5);
    assert_eq!(p.acousticness, 0.3);
    assert_eq!(p.unique_score, 50.0);
    assert_eq!(p.timestamp, 12.5);
}

#[test]
fn missing_timestamp_defaults_to_now() {
    let before = now_unix_secs();
    let p: MusicProfile = serde_json::from_str("{}").unwrap();
    let after = now_unix_secs();
    assert!(p.timestamp >= before && p.timestamp <= after);
}

#[test]
fn unique_score_accepts_both_spellings() {
    let camel: MusicProfile =
        serde_json::from_str(r#"{"uniqueScore": 85, "timestamp": 0}"#).unwrap();
    let snake: MusicProfile =
        serde_json::from_str(r#"{"unique_score": 85, "timestamp": 0}"#).unwrap();
    assert_eq!(camel.unique_score, 85.0);
    assert_eq!(camel, snake);
}

#[test]
fn out_of_range_values_are_kept_verbatim() {
    let p: MusicProfile =
        serde_json::from_str(r#"{"energy": 3.5, "valence": -1, "timestamp": 0}"#).unwrap();
    assert_eq!(p.energy, 3.5);
    assert_eq!(p.valence, -1.0);
}

#[test]
fn from_path_reports_missing_file() {
    let err = MusicProfile::from_path("target/definitely/missing/profile.json").unwrap_err();
    assert!(err.to_string().contains("open profile JSON"));
}

#[test]
fn local_time_is_available_for_normal_timestamps() {
    let p = MusicProfile::at(1_700_000_000.0);
    let t = p.local_time().unwrap();
    assert_eq!(t.timestamp(), 1_700_000_000);
}

#[test]
fn metadata_round_trips_profile_values() {
    let p = MusicProfile {
        energy: 0.9,
        valence: 0.8,
        danceability: 0.85,
        acousticness: 0.1,
        unique_score: 85.0,
        timestamp: 1_700_000_000.0,
    };
    let meta = ImageMetadata::new("demo_user_1", &p, Local::now());
    let json = serde_json::to_string_pretty(&meta).unwrap();
    assert!(json.contains(r#""unique_score": 85"#));
    assert!(json.contains(r#""timestamp": 1700000000"#));

    let back: ImageMetadata = serde_json::from_str(&json).unwrap();
    assert_eq!(back.profile(), p);
    assert_eq!(back.user_id, "demo_user_1");
    assert_eq!(back.generated_at, meta.generated_at);
}
