//! Render pass tests, with inline snapshots of the overlay markup.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::{RecordingCallbacks, down_at, invoice_viewer, move_to};
use labelview::{OutlineStyle, ViewerEvent};

#[test]
fn snapshot_idle_overlay() {
    let viewer = invoice_viewer();
    insta::assert_snapshot!(viewer.render().to_markup(), @r###"
    <img src="invoice.png">
    <div data-label="doc-1" data-kind="document" data-field="amount" style="left: 10%; top: 10%; width: 20%; height: 5%; border: 2px solid #ff0000"></div>
    <div data-label="doc-2" data-kind="document" data-field="date" style="left: 5%; top: 80%; width: 15%; height: 3%; border: 2px solid #00ff00"></div>
    <div data-label="line-3" data-kind="line_item" data-field="amount" style="left: 60%; top: 50%; width: 10%; height: 4%; border: 2px solid #ff0000"></div>
    "###);
}

#[test]
fn snapshot_selecting_overlay() {
    let mut viewer = invoice_viewer();
    viewer.handle_event(ViewerEvent::set_edit_target("line-3"), &mut RecordingCallbacks::default());
    insta::assert_snapshot!(viewer.render().to_markup(), @r###"
    <img src="invoice.png">
    <div data-label="doc-1" data-kind="document" data-field="amount" style="left: 10%; top: 10%; width: 20%; height: 5%; border: 2px solid #ff0000"></div>
    <div data-label="doc-2" data-kind="document" data-field="date" style="left: 5%; top: 80%; width: 15%; height: 3%; border: 2px solid #00ff00"></div>
    <div data-label="line-3" data-kind="line_item" data-field="amount" style="left: 60%; top: 50%; width: 10%; height: 4%; border: 2px dashed #facc15"></div>
    "###);
}

#[test]
fn snapshot_drawing_overlay() {
    let mut viewer = invoice_viewer();
    let mut callbacks = RecordingCallbacks::default();
    viewer.handle_event(ViewerEvent::set_edit_target("doc-1"), &mut callbacks);
    viewer.handle_event(down_at(10.0, 10.0), &mut callbacks);
    viewer.handle_event(move_to(40.0, 30.0), &mut callbacks);

    // doc-1 is hidden under the live box, so "date" is the first field seen
    insta::assert_snapshot!(viewer.render().to_markup(), @r###"
    <img src="invoice.png">
    <div data-label="doc-2" data-kind="document" data-field="date" style="left: 5%; top: 80%; width: 15%; height: 3%; border: 2px solid #ff0000"></div>
    <div data-label="line-3" data-kind="line_item" data-field="amount" style="left: 60%; top: 50%; width: 10%; height: 4%; border: 2px solid #00ff00"></div>
    <div data-draw-box style="left: 10%; top: 10%; width: 30%; height: 20%; border: 2px dashed #facc15; pointer-events: none"></div>
    "###);
}

#[test]
fn test_zero_size_draw_box_not_rendered() {
    let mut viewer = invoice_viewer();
    let mut callbacks = RecordingCallbacks::default();
    viewer.handle_event(ViewerEvent::set_edit_target("doc-1"), &mut callbacks);
    viewer.handle_event(down_at(10.0, 10.0), &mut callbacks);

    let frame = viewer.render();
    assert!(frame.draw_box.is_none());
    assert!(frame.box_for("doc-1").is_none());

    // A pure horizontal drag has no height yet
    viewer.handle_event(move_to(30.0, 10.0), &mut callbacks);
    assert!(viewer.render().draw_box.is_none());
}

#[test]
fn test_highlight_only_while_selecting() {
    let mut viewer = invoice_viewer();
    let mut callbacks = RecordingCallbacks::default();
    viewer.handle_event(ViewerEvent::edit_click("doc-2"), &mut callbacks);

    let frame = viewer.render();
    let armed = frame.box_for("doc-2").unwrap();
    assert!(armed.highlighted);
    assert_eq!(armed.outline, OutlineStyle::Dashed);
    assert_eq!(armed.color, viewer.highlight_color());

    let other = frame.box_for("doc-1").unwrap();
    assert!(!other.highlighted);
    assert_eq!(other.outline, OutlineStyle::Solid);
}

#[test]
fn test_frame_serializes_for_hosts() {
    let viewer = invoice_viewer();
    let json = serde_json::to_value(viewer.render()).unwrap();
    assert_eq!(json["image_url"], "invoice.png");
    assert_eq!(json["boxes"][0]["label_id"], "doc-1");
    assert_eq!(json["boxes"][0]["kind"], "document");
    assert_eq!(json["boxes"][0]["color"], "#ff0000");
    assert_eq!(json["boxes"][2]["kind"], "line_item");
    assert!(json["draw_box"].is_null());
}

#[test]
fn test_markup_escapes_attribute_values() {
    let viewer = crate::helpers::TestViewerBuilder::new()
        .with_document(r#"doc"1"#, "<total>", (10.0, 10.0, 20.0, 5.0))
        .build();
    let markup = viewer.render().to_markup();
    assert!(markup.contains(r#"data-label="doc&quot;1" data-kind="document" data-field="&lt;total&gt;""#));
    assert!(!markup.contains("<total>"));
}
