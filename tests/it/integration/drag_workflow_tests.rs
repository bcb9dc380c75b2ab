//! End-to-end drag workflow tests: start resolution, cross-column moves,
//! completion notification, and failure absorption.

use crate::helpers::{
    card_center, card_ids, column_center_x, DelegateEvent, TestBoard, TestBoardBuilder,
};
use laneboard::types::{point, Rect};

fn fixture() -> TestBoard {
    TestBoardBuilder::new()
        .with_column("a", "To Do")
        .with_card("c1", "a")
        .with_card("c2", "a")
        .with_column("b", "Doing")
        .build()
}

#[test]
fn test_full_cross_column_drag() {
    let mut fixture = fixture();

    // Lift c1: session live, the real card disappears behind the preview.
    fixture.board.handle_drag_start(card_center(0, 0));
    assert!(fixture.board.drag.is_dragging());
    let c1 = fixture.board.board.find_card("c1").unwrap();
    assert!(c1.read().is_hidden());

    // Cross into column b: reparented onto its head, maps swapped once.
    fixture.board.handle_drag_move(point(column_center_x(1), 300.0));
    assert_eq!(card_ids(&fixture.board.board, "a"), ["c2"]);
    assert_eq!(card_ids(&fixture.board.board, "b"), ["c1"]);
    assert_eq!(c1.read().column_id, "b");
    assert_eq!(fixture.log.board_changes(), 1);

    // Release: visibility restored, completion reported once, machine idle.
    fixture.board.handle_drag_end();
    assert!(!c1.read().is_hidden());
    assert!(fixture.board.drag.is_idle());
    assert_eq!(
        fixture.log.drag_ends(),
        [DelegateEvent::DragEnd {
            source: "a".to_string(),
            destination: "b".to_string(),
            card: "c1".to_string(),
            target_index: 0,
        }]
    );
}

#[test]
fn test_start_refused_over_empty_column() {
    let mut fixture = fixture();

    fixture.board.handle_drag_start(point(column_center_x(1), 300.0));

    assert!(fixture.board.drag.is_idle());
    assert!(fixture.log.events().is_empty());
    assert!(!fixture.board.board.find_card("c1").unwrap().read().is_hidden());
}

#[test]
fn test_start_refused_in_column_gap() {
    let mut fixture = fixture();

    // x = 210 falls between column a (ends at 200) and column b (starts at 220).
    fixture.board.handle_drag_start(point(210.0, 60.0));
    assert!(fixture.board.drag.is_idle());
}

#[test]
fn test_start_refused_for_invisible_card() {
    let mut fixture = fixture();

    // A fully-zero measurement marks c1 as gone from the screen.
    fixture.board.report_card_measurement("c1", Some(Rect::default()));

    fixture.board.handle_drag_start(card_center(0, 0));
    assert!(fixture.board.drag.is_idle());
    assert!(!fixture.board.board.find_card("c1").unwrap().read().is_hidden());
}

#[test]
fn test_second_start_leaves_session_untouched() {
    let mut fixture = fixture();

    fixture.board.handle_drag_start(card_center(0, 0));
    fixture.board.handle_drag_start(card_center(0, 1));

    let session_card = fixture.board.drag.dragged_card().unwrap();
    assert_eq!(session_card.read().id, "c1");
    assert!(!fixture.board.board.find_card("c2").unwrap().read().is_hidden());
}

#[test]
fn test_click_and_release_without_movement() {
    let mut fixture = fixture();

    fixture.board.handle_drag_start(card_center(0, 1));
    fixture.board.handle_drag_end();

    let c2 = fixture.board.board.find_card("c2").unwrap();
    assert!(!c2.read().is_hidden());
    assert!(fixture.board.drag.is_idle());

    // No move happened, so source and destination agree and the card kept
    // its slot.
    assert_eq!(
        fixture.log.drag_ends(),
        [DelegateEvent::DragEnd {
            source: "a".to_string(),
            destination: "a".to_string(),
            card: "c2".to_string(),
            target_index: 1,
        }]
    );
}

#[test]
fn test_end_when_idle_is_noop() {
    let mut fixture = fixture();
    fixture.board.handle_drag_end();
    assert!(fixture.log.events().is_empty());
}

#[test]
fn test_end_is_idempotent() {
    let mut fixture = fixture();

    fixture.board.handle_drag_start(card_center(0, 0));
    fixture.board.handle_drag_end();
    fixture.board.handle_drag_end();

    assert_eq!(fixture.log.drag_ends().len(), 1);
}

#[test]
fn test_move_and_end_ignored_when_idle() {
    let mut fixture = fixture();

    fixture.board.handle_drag_move(point(column_center_x(1), 300.0));
    fixture.board.handle_drag_end();

    assert!(fixture.log.events().is_empty());
    assert_eq!(card_ids(&fixture.board.board, "a"), ["c1", "c2"]);
}

#[test]
fn test_failing_drop_callback_still_resets_machine() {
    let mut fixture = TestBoardBuilder::new()
        .with_column("a", "To Do")
        .with_card("c1", "a")
        .with_card("c2", "a")
        .with_column("b", "Doing")
        .failing_drag_end()
        .build();

    fixture.board.handle_drag_start(card_center(0, 0));
    fixture.board.handle_drag_move(point(column_center_x(1), 300.0));
    fixture.board.handle_drag_end();

    assert!(fixture.board.drag.is_idle());
    assert!(!fixture.board.board.find_card("c1").unwrap().read().is_hidden());
    assert_eq!(fixture.log.drag_ends().len(), 1);

    // The deferred re-measure request still goes out after the failure.
    assert!(fixture.log.events().contains(&DelegateEvent::MeasureRequested));

    // And the machine accepts the next gesture (c2 still sits in slot 1 of
    // column a, where it was measured).
    fixture.board.handle_drag_start(card_center(0, 1));
    assert!(fixture.board.drag.is_dragging());
}

#[test]
fn test_preview_offset_follows_pointer() {
    let mut fixture = fixture();

    let anchor = card_center(0, 0);
    fixture.board.handle_drag_start(anchor);
    fixture.board.handle_drag_move(point(anchor.x + 45.0, anchor.y + 40.0));

    // Captured card size is 200x80, so the preview centers at half that
    // behind the pointer delta.
    let session = fixture.board.drag.session().unwrap();
    assert_eq!(session.preview_offset, point(-55.0, 0.0));
    assert_eq!(session.card_width, 200.0);
    assert_eq!(session.card_height, 80.0);
}

#[test]
fn test_dragging_over_gap_changes_nothing() {
    let mut fixture = fixture();

    fixture.board.handle_drag_start(card_center(0, 0));
    fixture.board.handle_drag_move(point(210.0, 300.0));

    assert_eq!(card_ids(&fixture.board.board, "a"), ["c1", "c2"]);
    assert!(fixture.log.events().is_empty());
}

#[test]
fn test_drag_there_and_back_restores_membership() {
    let mut fixture = fixture();

    fixture.board.handle_drag_start(card_center(0, 0));
    fixture.board.handle_drag_move(point(column_center_x(1), 300.0));
    fixture.board.handle_drag_move(point(column_center_x(0), 300.0));

    // Head insertion on the way back puts c1 in front again.
    assert_eq!(card_ids(&fixture.board.board, "a"), ["c1", "c2"]);
    assert_eq!(card_ids(&fixture.board.board, "b"), Vec::<String>::new());
    assert_eq!(fixture.log.board_changes(), 2);
}

#[test]
fn test_cross_column_move_swaps_map_identity() {
    let mut fixture = fixture();
    let before = fixture.board.board.clone();

    fixture.board.handle_drag_start(card_center(0, 0));
    assert!(before.shares_maps_with(&fixture.board.board));

    fixture.board.handle_drag_move(point(column_center_x(1), 300.0));
    assert!(!before.shares_maps_with(&fixture.board.board));
}
