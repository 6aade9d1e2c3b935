use super::*;

fn profile(energy: f64, valence: f64, danceability: f64, acousticness: f64) -> MusicProfile {
    MusicProfile {
        energy,
        valence,
        danceability,
        acousticness,
        ..MusicProfile::at(0.0)
    }
}

#[test]
fn colors_follow_attribute_formulas() {
    let pal = Palette::from_profile(&profile(0.5, 0.5, 0.5, 0.5));
    assert_eq!(pal.color(0), RawRgb { r: 127, g: 100, b: 155 });
    assert_eq!(pal.color(1), RawRgb { r: 127, g: 100, b: 127 });
    assert_eq!(pal.color(2), RawRgb { r: 205, g: 127, b: 100 });
}

#[test]
fn zero_profile_keeps_constant_terms() {
    let pal = Palette::from_profile(&profile(0.0, 0.0, 0.0, 0.0));
    assert_eq!(pal.colors()[0], RawRgb { r: 0, g: 0, b: 255 });
    assert_eq!(pal.colors()[1], RawRgb { r: 0, g: 0, b: 0 });
    assert_eq!(pal.colors()[2], RawRgb { r: 255, g: 0, b: 0 });
}

#[test]
fn out_of_range_attributes_are_not_clamped() {
    let pal = Palette::from_profile(&profile(2.0, -1.0, 0.5, 0.3));
    assert_eq!(pal.color(0).r, -255);
    assert_eq!(pal.color(1).r, 510);
    assert_eq!(pal.color(2).r, 55);
}

#[test]
fn bucket_boundaries_belong_to_the_upper_bucket() {
    assert_eq!(Palette::bucket(0.0), 0);
    assert_eq!(Palette::bucket(0.329_999), 0);
    assert_eq!(Palette::bucket(0.33), 1);
    assert_eq!(Palette::bucket(0.659_999), 1);
    assert_eq!(Palette::bucket(0.66), 2);
    assert_eq!(Palette::bucket(1.4), 2);
    assert_eq!(Palette::bucket(-0.2), 0);
}

#[test]
fn color_index_wraps() {
    let pal = Palette::from_profile(&profile(0.9, 0.8, 0.85, 0.1));
    assert_eq!(pal.color(3), pal.color(0));
    assert_eq!(pal.color(4), pal.color(1));
    assert_eq!(pal.color_for(0.7), pal.color(2));
}
