use super::*;
use crate::foundation::core::{CanvasSize, Rgb8};

fn gray_canvas(w: u32, h: u32) -> Canvas {
    let size = CanvasSize::new(w, h).unwrap();
    Canvas::from_raw(size, vec![90; size.pixel_count() * 3]).unwrap()
}

#[test]
fn score_formatting() {
    assert_eq!(format_score(85.0), "85");
    assert_eq!(format_score(0.0), "0");
    assert_eq!(format_score(85.3), "85.3");
    assert_eq!(format_score(12.5), "12.5");
}

#[test]
fn captions_carry_score_and_time() {
    let mut p = MusicProfile::at(1_700_000_000.0);
    p.unique_score = 85.0;
    let [score, when] = TextAnnotator::captions(&p);
    assert_eq!(score, "Score: 85/100");
    assert!(when.contains("2023"), "unexpected date caption {when:?}");
}

#[test]
fn xml_special_characters_are_escaped() {
    assert_eq!(escape_xml("a<b & \"c\">"), "a&lt;b &amp; &quot;c&quot;&gt;");
}

#[test]
fn caption_svg_parses() {
    let svg = caption_svg(500, 500, &["Score: 1/100".to_string(), "<now>".to_string()]);
    assert!(usvg::Tree::from_str(&svg, &usvg::Options::default()).is_ok());
}

#[test]
fn premul_over_respects_coverage() {
    let mut canvas = Canvas::new(CanvasSize::new(2, 1).unwrap());
    let layer = [255, 255, 255, 255, 128, 128, 128, 128];
    assert_eq!(composite_premul_over(&mut canvas, &layer), 2);
    assert_eq!(canvas.get(0, 0), Some(Rgb8::WHITE));
    assert_eq!(canvas.get(1, 0), Some(Rgb8::new(128, 128, 128)));

    let mut canvas = gray_canvas(2, 1);
    let layer = [0, 0, 0, 0, 0, 0, 0, 0];
    assert_eq!(composite_premul_over(&mut canvas, &layer), 0);
    assert_eq!(canvas, gray_canvas(2, 1));
}

#[test]
fn empty_font_database_is_a_no_op() {
    let annotator = TextAnnotator::from_fontdb(usvg::fontdb::Database::new());
    let mut canvas = gray_canvas(64, 64);
    let touched = annotator
        .annotate(&mut canvas, &MusicProfile::at(1_700_000_000.0))
        .unwrap();
    assert_eq!(touched, 0);
    assert_eq!(canvas, gray_canvas(64, 64));
}

#[test]
fn system_font_captions_stay_near_the_bottom_left() {
    let annotator = TextAnnotator::with_system_fonts();
    let before = gray_canvas(320, 120);
    let mut canvas = before.clone();
    let p = MusicProfile::at(1_700_000_000.0);
    annotator.annotate(&mut canvas, &p).unwrap();

    for y in 0..120 {
        for x in 0..320 {
            if canvas.get(x, y) != before.get(x, y) {
                assert!(y >= 60, "pixel {x},{y} changed outside the caption band");
            }
        }
    }

    let mut again = before.clone();
    annotator.annotate(&mut again, &p).unwrap();
    assert_eq!(again, canvas);
}
