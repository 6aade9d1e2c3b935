use super::*;

fn track(energy: f64, valence: f64, danceability: f64, acousticness: f64, tempo: f64) -> AudioFeatures {
    AudioFeatures {
        energy,
        valence,
        danceability,
        acousticness,
        tempo,
    }
}

#[test]
fn empty_history_uses_defaults() {
    let avg = FeatureAverages::of(&[]);
    assert_eq!(avg.energy, 0.5);
    assert_eq!(avg.valence, 0.5);
    assert_eq!(avg.danceability, 0.5);
    assert_eq!(avg.acousticness, 0.3);
    assert_eq!(avg.tempo, 120.0);
}

#[test]
fn averages_each_feature() {
    let avg = FeatureAverages::of(&[
        track(0.2, 0.4, 0.6, 0.8, 100.0),
        track(0.4, 0.6, 0.8, 1.0, 140.0),
    ]);
    assert!((avg.energy - 0.3).abs() < 1e-12);
    assert!((avg.valence - 0.5).abs() < 1e-12);
    assert!((avg.danceability - 0.7).abs() < 1e-12);
    assert!((avg.acousticness - 0.9).abs() < 1e-12);
    assert!((avg.tempo - 120.0).abs() < 1e-12);
}

#[test]
fn empty_user_id_contributes_nothing() {
    let avg = FeatureAverages::of(&[]);
    let f = uniqueness_factors(&avg, "", 0.0);
    assert_eq!(f[5], 0.0);
    assert_eq!(f[6], 0.0);
}

#[test]
fn user_id_uses_first_char_code() {
    let avg = FeatureAverages::of(&[]);
    // 'a' = 97
    let f = uniqueness_factors(&avg, "abc", 0.0);
    assert!((f[5] - 0.97 * 37.43).abs() < 1e-12);
}

#[test]
fn astral_first_char_uses_its_leading_utf16_unit() {
    let avg = FeatureAverages::of(&[]);
    // U+1F3B5 encodes as 0xD83C 0xDFB5; 0xD83C = 55356.
    let f = uniqueness_factors(&avg, "\u{1F3B5}abc", 0.0);
    assert!((f[5] - 0.56 * 37.43).abs() < 1e-12);
}

#[test]
fn score_wraps_modulo_100_and_floors() {
    assert_eq!(unique_score(&[60.0, 60.0]), 20.0);
    assert_eq!(unique_score(&[10.7, 0.2]), 10.0);
    assert_eq!(unique_score(&[]), 0.0);
}

#[test]
fn aggregate_is_deterministic_and_bounded() {
    let history = [track(0.7, 0.3, 0.9, 0.05, 128.0), track(0.5, 0.2, 0.6, 0.25, 92.0)];
    let a = aggregate_profile(&history, "listener", 1_700_000_123.456);
    let b = aggregate_profile(&history, "listener", 1_700_000_123.456);
    assert_eq!(a, b);
    assert!((0.0..100.0).contains(&a.unique_score));
    assert_eq!(a.unique_score.fract(), 0.0);
    assert_eq!(a.timestamp, 1_700_000_123.456);
}

#[test]
fn session_clock_changes_the_score_component() {
    let avg = FeatureAverages::of(&[]);
    let a = uniqueness_factors(&avg, "x", 1.0);
    let b = uniqueness_factors(&avg, "x", 1.5);
    assert_ne!(a[6], b[6]);
    assert_eq!(a[..6], b[..6]);
}
