use deckmint::deck::{DECK, DeckOptions, build_deck, compose};
use deckmint::icons::{IconOptions, IconRenderer, IconSpec, write_icon};
use deckmint::ooxml::pptx::{DeckSummary, MutablePresentation};
use proptest::prelude::*;
use std::collections::HashSet;
use std::io::Read;

fn options_in(dir: &std::path::Path) -> DeckOptions {
    DeckOptions::new()
        .with_icons_dir(dir.join("icons"))
        .with_output(dir.join("deck.pptx"))
}

#[test]
fn pipeline_creates_icons_and_presentation() {
    let tmp = tempfile::tempdir().unwrap();
    let options = options_in(tmp.path());

    let output = build_deck(&options).unwrap();
    assert_eq!(output, tmp.path().join("deck.pptx"));
    assert!(output.is_file());

    for index in 0..10 {
        let path = tmp.path().join("icons").join(format!("icon_{}.png", index));
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (100, 100), "{}", path.display());

        // Corners outside the disc stay transparent
        for (x, y) in [(0, 0), (99, 0), (0, 99), (99, 99)] {
            assert_eq!(img.get_pixel(x, y)[3], 0);
        }
        // Left edge of the disc, clear of the label
        assert_eq!(img.get_pixel(14, 50)[3], 255);
    }
}

#[test]
fn presentation_matches_literal_deck() {
    let tmp = tempfile::tempdir().unwrap();
    let output = build_deck(&options_in(tmp.path())).unwrap();

    let deck = DeckSummary::from_path(&output).unwrap();
    assert_eq!(deck.slide_count(), 10);
    assert_eq!((deck.slide_width, deck.slide_height), (9144000, 6858000));

    for (slide, expected) in deck.slides.iter().zip(DECK.iter()) {
        let title = slide.title().unwrap();
        assert_eq!(title.runs, vec![expected.title.to_string()]);

        let bullets: Vec<String> = slide.bullets().iter().map(|b| b.text()).collect();
        assert_eq!(bullets, expected.bullets);

        assert_eq!(slide.pictures().len(), 1);
    }
}

#[test]
fn package_contains_required_parts() {
    let tmp = tempfile::tempdir().unwrap();
    let output = build_deck(&options_in(tmp.path())).unwrap();

    let mut archive = zip::ZipArchive::new(std::fs::File::open(&output).unwrap()).unwrap();
    let names: HashSet<String> = archive.file_names().map(str::to_string).collect();
    for required in [
        "[Content_Types].xml",
        "_rels/.rels",
        "docProps/core.xml",
        "docProps/app.xml",
        "ppt/presentation.xml",
        "ppt/_rels/presentation.xml.rels",
        "ppt/slideMasters/slideMaster1.xml",
        "ppt/slideLayouts/slideLayout1.xml",
        "ppt/theme/theme1.xml",
        "ppt/slides/slide10.xml",
        "ppt/slides/_rels/slide10.xml.rels",
        "ppt/media/image10.png",
    ] {
        assert!(names.contains(required), "missing {}", required);
    }

    let mut content_types = String::new();
    archive
        .by_name("[Content_Types].xml")
        .unwrap()
        .read_to_string(&mut content_types)
        .unwrap();
    assert!(content_types.contains(r#"Extension="png""#));
    assert!(content_types.contains(r#"PartName="/ppt/slides/slide1.xml""#));
}

#[test]
fn icon_rendering_is_deterministic() {
    let tmp = tempfile::tempdir().unwrap();
    let renderer = IconRenderer::new(&IconOptions::default());
    let spec = IconSpec::new(9, [255, 102, 178]);

    let first = write_icon(tmp.path().join("a.png"), &spec, &renderer).unwrap();
    let second = write_icon(tmp.path().join("b.png"), &spec, &renderer).unwrap();
    assert_eq!(std::fs::read(first).unwrap(), std::fs::read(second).unwrap());
}

#[test]
fn rebuilding_gives_identical_package() {
    let tmp = tempfile::tempdir().unwrap();
    let options = options_in(tmp.path());

    let first = std::fs::read(build_deck(&options).unwrap()).unwrap();
    let second = std::fs::read(build_deck(&options).unwrap()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn missing_icon_file_is_an_error() {
    let tmp = tempfile::tempdir().unwrap();
    let mut pres = MutablePresentation::new();
    let missing = tmp.path().join("nope.png");

    let result = compose::add_slide(&mut pres, "Title", &["bullet"], &[missing]);
    assert!(result.is_err());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn titles_survive_write_and_read(title in "[ -~]{1,40}") {
        let mut pres = MutablePresentation::new();
        compose::add_slide::<&std::path::Path>(&mut pres, &title, &["bullet"], &[]).unwrap();

        let deck = DeckSummary::from_bytes(&pres.to_bytes().unwrap()).unwrap();
        prop_assert_eq!(deck.titles(), vec![title]);
    }
}
