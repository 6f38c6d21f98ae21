use std::fs;
use tempfile::tempdir;
use textloc::viz::{Figure, register_font_file};
use textloc::{Label, LabelOptions, Location, Unit, place_labels};

#[test]
fn svg_contains_every_label() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("panels.svg");

    let (mut fig, axes) = Figure::grid(900, 600, 2, 2);
    let labels = ["A)", "B)", "C)", "D)"].map(Label::from);
    let opts = LabelOptions::default().with_hbuffer(0.3, Unit::Inches);
    place_labels(&mut fig, &axes, &labels, Location::NorthWestOutside, &opts).unwrap();
    fig.render(&path).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    for label in ["A)", "B)", "C)", "D)"] {
        assert!(svg.contains(label), "{label} missing from svg");
    }
    assert!(svg.contains("<rect"), "axes frames missing");
}

#[test]
fn multiline_labels_render_one_text_per_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("multi.svg");

    let mut fig = Figure::new(400, 300);
    let ax = fig.add_axes(50, 40, 300, 220);
    let label = Label::Lines(vec!["first line".into(), "second line".into()]);
    let opts = LabelOptions::default().with_style("fontweight", "bold");
    place_labels(&mut fig, &[ax], &[label], Location::SouthEast, &opts).unwrap();
    fig.render(&path).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("first line"));
    assert!(svg.contains("second line"));
    assert_eq!(svg.matches("<text").count(), 2);
}

#[test]
fn png_without_labels_renders() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("axes.png");

    let (fig, axes) = Figure::grid(320, 240, 1, 2);
    assert_eq!(axes.len(), 2);
    fig.render(&path).unwrap();
    assert!(fs::metadata(&path).unwrap().len() > 0);
}

#[test]
fn png_with_labels_needs_a_font() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("labelled.png");

    let (mut fig, axes) = Figure::grid(320, 240, 1, 1);
    place_labels(
        &mut fig,
        &axes,
        &[Label::from("A)")],
        Location::NorthWest,
        &LabelOptions::default(),
    )
    .unwrap();
    let err = fig.render(&path).unwrap_err();
    assert!(err.to_string().contains("needs a registered font"), "{err}");
    assert!(!path.exists());
}

#[test]
fn junk_font_file_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("junk.ttf");
    fs::write(&path, b"definitely not a font").unwrap();
    let err = register_font_file(&path).unwrap_err();
    assert!(err.to_string().contains("not a usable font file"), "{err}");
    assert!(register_font_file(dir.path().join("missing.ttf")).is_err());
}
