//! End-to-end redraw scenarios: arm a label, drag, release.

use crate::helpers::{Call, RecordingCallbacks, TestViewerBuilder, down_at, move_to, up_at};
use labelview::{BoundingBox, DiscardReason, EventOutcome, LabelKind, LabelViewer, ViewerEvent};

fn viewer() -> LabelViewer {
    TestViewerBuilder::new()
        .with_document("doc-1", "amount", (12.0, 14.0, 20.0, 4.0))
        .with_document("doc-2", "date", (60.0, 5.0, 15.0, 3.0))
        .with_line_item("line-3", "amount", 2, (70.0, 55.0, 10.0, 3.0))
        .build()
}

#[test]
fn test_redraw_document_label_commits_once() {
    let mut viewer = viewer();
    let mut callbacks = RecordingCallbacks::default();

    viewer.handle_event(ViewerEvent::set_edit_target("doc-1"), &mut callbacks);
    viewer.handle_event(down_at(10.0, 10.0), &mut callbacks);
    viewer.handle_event(move_to(40.0, 30.0), &mut callbacks);
    let outcome = viewer.handle_event(up_at(40.0, 30.0), &mut callbacks);

    let expected = BoundingBox::new(10.0, 10.0, 30.0, 20.0);
    assert_eq!(
        outcome,
        EventOutcome::Committed {
            label_id: "doc-1".into(),
            kind: LabelKind::Document,
            bbox: expected,
        }
    );
    assert_eq!(callbacks.calls, vec![Call::Document("doc-1".into(), expected)]);
    assert_eq!(viewer.edit_target(), None);
    assert_eq!(viewer.draw_box(), None);
}

#[test]
fn test_tiny_redraw_is_discarded() {
    let mut viewer = viewer();
    let mut callbacks = RecordingCallbacks::default();

    viewer.handle_event(ViewerEvent::set_edit_target("doc-1"), &mut callbacks);
    viewer.handle_event(down_at(10.0, 10.0), &mut callbacks);
    let outcome = viewer.handle_event(up_at(10.5, 10.5), &mut callbacks);

    assert_eq!(
        outcome,
        EventOutcome::Discarded {
            reason: DiscardReason::TooSmall
        }
    );
    assert!(callbacks.calls.is_empty());
    assert_eq!(viewer.edit_target(), None);
}

#[test]
fn test_external_target_change_discards_in_progress_draw() {
    let builder = TestViewerBuilder::new()
        .with_document("doc-1", "amount", (12.0, 14.0, 20.0, 4.0))
        .with_line_item("line-3", "amount", 2, (70.0, 55.0, 10.0, 3.0));
    let props = builder.props();
    let mut viewer = builder.build();
    let mut callbacks = RecordingCallbacks::default();

    viewer.handle_event(ViewerEvent::edit_click("doc-1"), &mut callbacks);
    viewer.handle_event(down_at(10.0, 10.0), &mut callbacks);
    viewer.handle_event(move_to(40.0, 30.0), &mut callbacks);
    assert!(viewer.state().is_drawing());

    // Host prop goes from None to "line-3" mid-drag
    let outcome = viewer.set_props(props.with_edit_target(Some("line-3".into())));
    assert_eq!(outcome, Some(EventOutcome::Selected { label_id: "line-3".into() }));
    assert_eq!(viewer.edit_target(), Some("line-3"));
    assert!(viewer.state().is_selecting());
    assert_eq!(viewer.draw_box(), None);

    // Releasing the old drag commits nothing
    viewer.handle_event(up_at(40.0, 30.0), &mut callbacks);
    assert!(callbacks.updates().is_empty());

    // The new target redraws through the line-item callback
    viewer.handle_event(down_at(60.0, 50.0), &mut callbacks);
    viewer.handle_event(up_at(85.0, 58.0), &mut callbacks);
    assert_eq!(
        callbacks.updates(),
        vec![&Call::LineItem("line-3".into(), BoundingBox::new(60.0, 50.0, 25.0, 8.0))]
    );
}

#[test]
fn test_shared_field_key_shares_color() {
    let viewer = viewer();
    let frame = viewer.render();
    assert_eq!(
        frame.box_for("doc-1").unwrap().color,
        frame.box_for("line-3").unwrap().color
    );
}

#[test]
fn test_pointer_leave_aborts_like_a_tiny_draw() {
    let mut viewer = viewer();
    let mut callbacks = RecordingCallbacks::default();

    viewer.handle_event(ViewerEvent::set_edit_target("doc-1"), &mut callbacks);
    viewer.handle_event(down_at(10.0, 10.0), &mut callbacks);
    viewer.handle_event(move_to(60.0, 60.0), &mut callbacks);
    let outcome = viewer.handle_event(ViewerEvent::PointerLeave, &mut callbacks);

    assert_eq!(
        outcome,
        EventOutcome::Discarded {
            reason: DiscardReason::PointerLeft
        }
    );
    assert!(callbacks.calls.is_empty());
    assert_eq!(viewer.edit_target(), None);
    assert!(viewer.render().draw_box.is_none());
}

#[test]
fn test_edit_click_and_external_target_share_transition() {
    let mut by_click = viewer();
    let mut by_prop = viewer();
    let mut callbacks = RecordingCallbacks::default();

    by_click.handle_event(ViewerEvent::edit_click("doc-2"), &mut callbacks);
    by_prop.handle_event(ViewerEvent::set_edit_target("doc-2"), &mut callbacks);

    assert_eq!(by_click.state(), by_prop.state());
    // Only the click notifies the host
    assert_eq!(
        callbacks.calls,
        vec![Call::Edit("doc-2".into(), "date".into(), LabelKind::Document)]
    );
}

#[test]
fn test_off_image_release_clamps_to_edge() {
    let mut viewer = viewer();
    let mut callbacks = RecordingCallbacks::default();

    viewer.handle_event(ViewerEvent::set_edit_target("doc-2"), &mut callbacks);
    viewer.handle_event(down_at(95.0, 90.0), &mut callbacks);
    // Releasing outside the image pins that corner to the image edge
    viewer.handle_event(up_at(130.0, 140.0), &mut callbacks);

    assert_eq!(
        callbacks.updates(),
        vec![&Call::Document("doc-2".into(), BoundingBox::new(95.0, 90.0, 5.0, 10.0))]
    );
}
