use super::*;

fn profile(energy: f64) -> MusicProfile {
    MusicProfile {
        energy,
        valence: 0.8,
        danceability: 0.85,
        acousticness: 0.1,
        unique_score: 85.0,
        timestamp: 1_700_000_000.0,
    }
}

#[test]
fn base_matches_weighted_sum() {
    // 1.7e15 us mod 1e10 == 0
    let s = SeedSet::derive(&profile(0.9));
    assert_eq!(s.base, 9_000 + 16_000 + 25_500 + 4_000 + 42_500);
    assert_eq!(s.generators, [97_000, 97_001, 97_002]);
}

#[test]
fn derivation_is_deterministic() {
    assert_eq!(SeedSet::derive(&profile(0.3)), SeedSet::derive(&profile(0.3)));
}

#[test]
fn energy_step_moves_base_by_at_least_100() {
    let a = SeedSet::derive(&profile(0.5));
    let b = SeedSet::derive(&profile(0.51));
    assert!((b.base - a.base).abs() >= 100);
}

#[test]
fn timestamp_uses_microseconds_modulo_1e10() {
    let mut p = MusicProfile::at(12_345.5);
    p.energy = 0.0;
    p.valence = 0.0;
    p.danceability = 0.0;
    p.acousticness = 0.0;
    p.unique_score = 0.0;
    assert_eq!(SeedSet::derive(&p).base, 2_345_500_000);
}

#[test]
fn generator_seeds_stay_non_negative() {
    let s = SeedSet::from_base(-5);
    assert_eq!(s.generators, [999_999_995, 999_999_996, 999_999_997]);

    let s = SeedSet::from_base(2_999_999_999);
    assert_eq!(s.generators, [999_999_999, 0, 1]);
}

#[test]
fn cycle_is_euclidean() {
    let s = SeedSet::from_base(-1);
    assert_eq!(s.cycle(0, 1000), 999);
    assert_eq!(s.cycle(1, 2), 0);
    assert_eq!(SeedSet::from_base(1234).cycle(200, 1000), 434);
}
