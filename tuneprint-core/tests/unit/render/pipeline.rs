use super::*;

fn energetic() -> MusicProfile {
    MusicProfile {
        energy: 0.9,
        valence: 0.8,
        danceability: 0.85,
        acousticness: 0.1,
        unique_score: 85.0,
        timestamp: 1_700_000_000.0,
    }
}

fn small(annotate: bool) -> Generator {
    Generator::new(GeneratorOpts {
        size: CanvasSize::new(96, 80).unwrap(),
        annotate,
    })
}

#[test]
fn default_opts_are_500_square_with_captions() {
    let opts = GeneratorOpts::default();
    assert_eq!(opts.size, CanvasSize::new(500, 500).unwrap());
    assert!(opts.annotate);
}

#[test]
fn generation_is_byte_identical_for_equal_profiles() {
    let g = small(true);
    let a = g.generate(&energetic()).unwrap();
    let b = g.generate(&energetic()).unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
    assert_eq!(a.size(), CanvasSize::new(96, 80).unwrap());
}

#[test]
fn small_energy_change_changes_pixels() {
    let g = small(false);
    let a = g.generate(&energetic()).unwrap();
    let mut p = energetic();
    p.energy = 0.91;
    let b = g.generate(&p).unwrap();
    assert_ne!(a.as_bytes(), b.as_bytes());
}

#[test]
fn without_captions_matches_manual_passes() {
    let p = MusicProfile {
        energy: 0.3,
        danceability: 0.2,
        ..energetic()
    };
    let g = small(false);
    let out = g.generate(&p).unwrap();

    let seeds = SeedSet::derive(&p);
    let mut manual = Canvas::new(g.opts().size);
    rasterize_base(
        &mut manual,
        &NoiseField::new(&seeds),
        &Palette::from_profile(&p),
        p.valence,
    );
    assert_eq!(out, manual);
}

#[test]
fn explicit_annotator_without_fonts_leaves_passes_untouched() {
    let size = CanvasSize::new(64, 64).unwrap();
    let captioned =
        Generator::with_annotator(size, TextAnnotator::from_fontdb(usvg::fontdb::Database::new()));
    let plain = Generator::new(GeneratorOpts {
        size,
        annotate: false,
    });
    let p = energetic();
    assert_eq!(captioned.generate(&p).unwrap(), plain.generate(&p).unwrap());
}

#[test]
fn out_of_range_attributes_render_without_panicking() {
    let g = small(false);
    for p in [
        MusicProfile {
            danceability: 1e300,
            ..energetic()
        },
        MusicProfile {
            energy: 1e300,
            valence: -1e300,
            danceability: 1e9,
            acousticness: f64::INFINITY,
            unique_score: f64::NAN,
            timestamp: -1e300,
        },
    ] {
        let canvas = g.generate(&p).unwrap();
        assert_eq!(canvas.as_bytes().len(), 96 * 80 * 3);
    }
}
