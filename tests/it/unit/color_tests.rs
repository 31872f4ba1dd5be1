//! Unit tests for field color assignment as seen through the viewer.

use crate::helpers::{GREEN, RED, TestViewerBuilder, invoice_viewer};
use labelview::{
    BoundingBox, ColorRegistry, DocumentLabel, LabelViewer, SharedColorRegistry, ViewerProps, ViewerSettings,
};

#[test]
fn test_labels_sharing_a_field_share_a_color() {
    let viewer = invoice_viewer();
    let frame = viewer.render();

    let doc = frame.box_for("doc-1").unwrap();
    let line = frame.box_for("line-3").unwrap();
    assert_eq!(doc.field_key, "amount");
    assert_eq!(line.field_key, "amount");
    assert_eq!(doc.color, line.color);
    assert_ne!(frame.box_for("doc-2").unwrap().color, doc.color);
}

#[test]
fn test_colors_are_stable_across_renders() {
    let viewer = invoice_viewer();
    let first = viewer.render();
    let second = viewer.render();
    for (a, b) in first.boxes.iter().zip(&second.boxes) {
        assert_eq!(a.color, b.color);
    }
}

#[test]
fn test_viewers_sharing_a_registry_agree() {
    let colors = SharedColorRegistry::new(ColorRegistry::new(vec![RED, GREEN]));

    // First viewer sees "date" first, so it takes the first palette slot
    let first = TestViewerBuilder::new()
        .with_document("d", "date", (0.0, 0.0, 1.0, 1.0))
        .with_colors(colors.clone())
        .build();
    let second = TestViewerBuilder::new()
        .with_document("a", "amount", (0.0, 0.0, 1.0, 1.0))
        .with_document("d", "date", (5.0, 5.0, 1.0, 1.0))
        .with_colors(colors.clone())
        .build();

    assert_eq!(first.render().box_for("d").unwrap().color, RED);
    let frame = second.render();
    assert_eq!(frame.box_for("d").unwrap().color, RED);
    assert_eq!(frame.box_for("a").unwrap().color, GREEN);
}

#[test]
fn test_reset_between_cases() {
    let colors = SharedColorRegistry::new(ColorRegistry::new(vec![RED, GREEN]));
    let viewer = TestViewerBuilder::new()
        .with_document("a", "amount", (0.0, 0.0, 1.0, 1.0))
        .with_colors(colors.clone())
        .build();

    colors.get("something-else");
    assert_eq!(viewer.render().box_for("a").unwrap().color, GREEN);

    colors.reset();
    assert_eq!(viewer.render().box_for("a").unwrap().color, RED);
}

#[test]
fn test_palette_exhaustion_cycles() {
    let viewer = TestViewerBuilder::new()
        .with_document("a", "f1", (0.0, 0.0, 1.0, 1.0))
        .with_document("b", "f2", (0.0, 0.0, 1.0, 1.0))
        .with_document("c", "f3", (0.0, 0.0, 1.0, 1.0))
        .build();
    let frame = viewer.render();
    assert_eq!(frame.box_for("a").unwrap().color, RED);
    assert_eq!(frame.box_for("b").unwrap().color, GREEN);
    assert_eq!(frame.box_for("c").unwrap().color, RED);
}

#[test]
fn test_second_viewer_with_settings_keeps_existing_colors() {
    let colors = SharedColorRegistry::default();
    let settings = ViewerSettings::default();
    let props = ViewerProps::new("invoice.png").with_document_labels(vec![
        DocumentLabel::new("v", "vendor", BoundingBox::new(0.0, 0.0, 5.0, 5.0)),
        DocumentLabel::new("a", "amount", BoundingBox::new(10.0, 10.0, 5.0, 5.0)),
    ]);

    let first = LabelViewer::with_settings(props.clone(), colors.clone(), &settings);
    let before = first.render();

    let _second = LabelViewer::with_settings(ViewerProps::new("other.png"), colors.clone(), &settings);
    let after = first.render();

    assert_eq!(after.box_for("v").unwrap().color, before.box_for("v").unwrap().color);
    assert_eq!(after.box_for("a").unwrap().color, before.box_for("a").unwrap().color);
    assert_eq!(colors.len(), 2);
}

#[test]
fn test_changed_palette_in_settings_reassigns() {
    let colors = SharedColorRegistry::default();
    let mut viewer = TestViewerBuilder::new()
        .with_document("a", "amount", (0.0, 0.0, 1.0, 1.0))
        .with_colors(colors.clone())
        .build();
    assert_eq!(viewer.render().box_for("a").unwrap().color.to_hex(), "#ef4444");

    let settings = ViewerSettings {
        palette: vec!["#00ff00".into()],
        ..ViewerSettings::default()
    };
    viewer.apply_settings(&settings);
    assert_eq!(viewer.render().box_for("a").unwrap().color, GREEN);
}
