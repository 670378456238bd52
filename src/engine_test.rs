#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use serde_json::json;
use uuid::Uuid;

use super::*;
use crate::store::SequentialIds;

// =============================================================
// Helpers
// =============================================================

fn engine() -> Engine {
    Engine::with_ids(Box::new(SequentialIds::default()))
}

fn no_payload() -> PartialElement {
    PartialElement::default()
}

/// The current document as an owned collection, in paint order.
fn doc(engine: &Engine) -> Vec<Element> {
    engine.elements().into_iter().cloned().collect()
}

/// Issue an undo and accept the confirmation request.
fn undo_now(engine: &mut Engine) -> Action {
    assert_eq!(engine.undo(), Action::ConfirmRequested { op: HistoryOp::Undo });
    engine.resolve_confirm(true)
}

/// Issue a redo and accept the confirmation request.
fn redo_now(engine: &mut Engine) -> Action {
    assert_eq!(engine.redo(), Action::ConfirmRequested { op: HistoryOp::Redo });
    engine.resolve_confirm(true)
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_engine_is_empty() {
    let engine = engine();
    assert_eq!(engine.element_count(), 0);
    assert_eq!(engine.selected(), None);
    assert_eq!(engine.history_len(), 1);
    assert_eq!(engine.history_cursor(), 0);
    assert!(!engine.can_undo());
    assert!(!engine.can_redo());
}

// =============================================================
// add_element
// =============================================================

#[test]
fn add_commits_and_selects() {
    // Spec scenario 1: empty store, add a shape.
    let mut engine = engine();
    let element = engine.add_element(ElementKind::Shape, &no_payload());
    assert_eq!(engine.element_count(), 1);
    assert_eq!(engine.history_len(), 2);
    assert_eq!(engine.history_cursor(), 1);
    assert_eq!(engine.selected(), Some(element.id));
}

#[test]
fn add_payload_value_beats_kind_default() {
    let mut engine = engine();
    let element = engine.add_element(
        ElementKind::Text,
        &PartialElement {
            props: Some(json!({"color": "#FF0000", "content": "hi"})),
            ..Default::default()
        },
    );
    assert_eq!(element.props, json!({"color": "#FF0000", "content": "hi"}));
}

#[test]
fn each_committing_op_adds_one_history_entry() {
    let mut engine = engine();
    let a = engine.add_element(ElementKind::Shape, &no_payload());
    engine.add_element(ElementKind::Text, &no_payload());
    engine.duplicate_element(&a.id).unwrap();
    engine.delete_element(Some(a.id)).unwrap();
    // Four committing operations on top of the seeded empty snapshot.
    assert_eq!(engine.history_len(), 5);
    assert_eq!(engine.history_cursor(), 4);
}

// =============================================================
// update_element / finalize_edit
// =============================================================

#[test]
fn update_is_transient() {
    let mut engine = engine();
    let element = engine.add_element(ElementKind::Shape, &no_payload());
    engine
        .update_element(
            &element.id,
            &PartialElement { x: Some(500.0), ..Default::default() },
        )
        .unwrap();
    assert_eq!(engine.element(&element.id).map(|e| e.x), Some(500.0));
    assert_eq!(engine.history_len(), 2);
}

#[test]
fn update_unknown_id_is_explicit_error() {
    let mut engine = engine();
    let missing = Uuid::new_v4();
    let result = engine.update_element(
        &missing,
        &PartialElement { x: Some(1.0), ..Default::default() },
    );
    assert_eq!(result, Err(CommandError::UnknownElement(missing)));
}

#[test]
fn update_does_not_move_selection() {
    let mut engine = engine();
    let a = engine.add_element(ElementKind::Shape, &no_payload());
    let b = engine.add_element(ElementKind::Shape, &no_payload());
    assert_eq!(engine.selected(), Some(b.id));
    engine
        .update_element(&a.id, &PartialElement { x: Some(1.0), ..Default::default() })
        .unwrap();
    assert_eq!(engine.selected(), Some(b.id));
}

#[test]
fn finalize_commits_accumulated_transient_edits() {
    let mut engine = engine();
    let element = engine.add_element(ElementKind::Shape, &no_payload());
    for x in [110.0, 120.0, 130.0] {
        engine
            .update_element(&element.id, &PartialElement { x: Some(x), ..Default::default() })
            .unwrap();
    }
    assert!(engine.finalize_edit());
    // The whole drag is one history entry, not three.
    assert_eq!(engine.history_len(), 3);

    undo_now(&mut engine);
    assert_eq!(engine.element(&element.id).map(|e| e.x), Some(100.0));
}

#[test]
fn finalize_without_drift_is_noop() {
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    assert!(!engine.finalize_edit());
    assert_eq!(engine.history_len(), 2);
}

// =============================================================
// delete_element
// =============================================================

#[test]
fn delete_by_id_commits() {
    let mut engine = engine();
    let element = engine.add_element(ElementKind::Shape, &no_payload());
    assert_eq!(engine.delete_element(Some(element.id)), Ok(element.id));
    assert_eq!(engine.element_count(), 0);
    assert_eq!(engine.history_len(), 3);
}

#[test]
fn delete_defaults_to_selection_and_clears_it() {
    // Spec scenario 5: selected E2, deleteElement() with no argument.
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    let e2 = engine.add_element(ElementKind::Shape, &no_payload());
    assert_eq!(engine.selected(), Some(e2.id));

    assert_eq!(engine.delete_element(None), Ok(e2.id));
    assert_eq!(engine.element_count(), 1);
    assert_eq!(engine.selected(), None);
}

#[test]
fn delete_unselected_element_keeps_selection() {
    let mut engine = engine();
    let a = engine.add_element(ElementKind::Shape, &no_payload());
    let b = engine.add_element(ElementKind::Shape, &no_payload());
    engine.delete_element(Some(a.id)).unwrap();
    assert_eq!(engine.selected(), Some(b.id));
}

#[test]
fn delete_with_nothing_selected_is_explicit_error() {
    let mut engine = engine();
    assert_eq!(engine.delete_element(None), Err(CommandError::NothingSelected));
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn delete_unknown_id_is_explicit_error() {
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    let missing = Uuid::new_v4();
    assert_eq!(
        engine.delete_element(Some(missing)),
        Err(CommandError::UnknownElement(missing))
    );
    assert_eq!(engine.element_count(), 1);
    assert_eq!(engine.history_len(), 2);
}

// =============================================================
// duplicate_element
// =============================================================

#[test]
fn duplicate_matches_source_except_id_position_and_z() {
    // Spec scenario 4: E1 (z=1), E2 (z=2); duplicate E1.
    let mut engine = engine();
    let e1 = engine.add_element(
        ElementKind::Shape,
        &PartialElement { x: Some(10.0), y: Some(20.0), ..Default::default() },
    );
    engine.add_element(ElementKind::Shape, &no_payload());

    let e3 = engine.duplicate_element(&e1.id).unwrap();
    assert_eq!(engine.element_count(), 3);
    assert_ne!(e3.id, e1.id);
    assert_eq!(e3.x, e1.x + 20.0);
    assert_eq!(e3.y, e1.y + 20.0);
    assert_eq!(e3.z_index, 3);
    assert_eq!(e3.kind, e1.kind);
    assert_eq!(e3.width, e1.width);
    assert_eq!(e3.height, e1.height);
    assert_eq!(e3.rotation, e1.rotation);
    assert_eq!(e3.opacity, e1.opacity);
    assert_eq!(e3.props, e1.props);
}

#[test]
fn duplicate_commits_and_selects_the_copy() {
    let mut engine = engine();
    let source = engine.add_element(ElementKind::Shape, &no_payload());
    let copy = engine.duplicate_element(&source.id).unwrap();
    assert_eq!(engine.selected(), Some(copy.id));
    assert_eq!(engine.history_len(), 3);
}

#[test]
fn duplicate_unknown_id_is_explicit_error() {
    let mut engine = engine();
    let missing = Uuid::new_v4();
    assert_eq!(
        engine.duplicate_element(&missing),
        Err(CommandError::UnknownElement(missing))
    );
    assert_eq!(engine.history_len(), 1);
}

// =============================================================
// Undo / redo: confirmation protocol
// =============================================================

#[test]
fn undo_at_start_of_history_is_noop() {
    let mut engine = engine();
    assert_eq!(engine.undo(), Action::None);
    assert_eq!(engine.pending_confirm(), None);
}

#[test]
fn redo_at_end_of_history_is_noop() {
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    assert_eq!(engine.redo(), Action::None);
}

#[test]
fn undo_requests_confirmation_before_applying() {
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    assert_eq!(engine.undo(), Action::ConfirmRequested { op: HistoryOp::Undo });
    // Nothing applied until the host answers.
    assert_eq!(engine.element_count(), 1);
    assert_eq!(engine.history_cursor(), 1);
    assert_eq!(engine.pending_confirm(), Some(HistoryOp::Undo));
}

#[test]
fn declined_confirmation_leaves_state_unchanged() {
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    engine.undo();
    assert_eq!(engine.resolve_confirm(false), Action::None);
    assert_eq!(engine.element_count(), 1);
    assert_eq!(engine.history_cursor(), 1);
    assert_eq!(engine.pending_confirm(), None);
}

#[test]
fn resolve_without_request_is_noop() {
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    assert_eq!(engine.resolve_confirm(true), Action::None);
    assert_eq!(engine.element_count(), 1);
}

#[test]
fn accepted_undo_restores_previous_snapshot() {
    // Spec scenario 2: add shape, add text, undo.
    let mut engine = engine();
    let e1 = engine.add_element(ElementKind::Shape, &no_payload());
    engine.add_element(
        ElementKind::Text,
        &PartialElement { props: Some(json!({"content": "hi"})), ..Default::default() },
    );

    assert_eq!(undo_now(&mut engine), Action::DocumentRestored { op: HistoryOp::Undo });
    assert_eq!(engine.element_count(), 1);
    assert!(engine.element(&e1.id).is_some());
    assert_eq!(engine.history_cursor(), 1);
}

#[test]
fn undo_to_seed_empties_the_store() {
    // Spec scenario 3: one element, undo back to the seeded empty snapshot.
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    undo_now(&mut engine);
    assert_eq!(engine.element_count(), 0);
    assert_eq!(engine.history_cursor(), 0);
    assert!(!engine.can_undo());
}

#[test]
fn undo_then_redo_restores_exact_collection() {
    let mut engine = engine();
    engine.add_element(
        ElementKind::Shape,
        &PartialElement { x: Some(1.0), rotation: Some(30.0), ..Default::default() },
    );
    engine.add_element(
        ElementKind::Text,
        &PartialElement { props: Some(json!({"content": "hello"})), ..Default::default() },
    );
    let before = doc(&engine);

    undo_now(&mut engine);
    assert_ne!(doc(&engine), before);
    assert_eq!(redo_now(&mut engine), Action::DocumentRestored { op: HistoryOp::Redo });
    assert_eq!(doc(&engine), before);
}

#[test]
fn commit_after_undo_discards_redo_tail() {
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    engine.add_element(ElementKind::Shape, &no_payload());
    undo_now(&mut engine);
    assert!(engine.can_redo());

    engine.add_element(ElementKind::Text, &no_payload());
    assert!(!engine.can_redo());
    assert_eq!(engine.history_len(), 3);
}

#[test]
fn undo_clears_selection_when_selected_element_vanishes() {
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    let e2 = engine.add_element(ElementKind::Shape, &no_payload());
    assert_eq!(engine.selected(), Some(e2.id));

    undo_now(&mut engine);
    assert_eq!(engine.selected(), None);
}

#[test]
fn undo_keeps_selection_when_element_survives() {
    let mut engine = engine();
    let e1 = engine.add_element(ElementKind::Shape, &no_payload());
    engine.add_element(ElementKind::Shape, &no_payload());
    engine.set_selected(Some(e1.id));

    undo_now(&mut engine);
    assert_eq!(engine.selected(), Some(e1.id));
}

#[test]
fn newer_request_supersedes_unanswered_one() {
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    engine.add_element(ElementKind::Shape, &no_payload());
    undo_now(&mut engine);

    // Both directions are open; the second request replaces the first.
    engine.redo();
    engine.undo();
    assert_eq!(engine.pending_confirm(), Some(HistoryOp::Undo));
    assert_eq!(engine.resolve_confirm(true), Action::DocumentRestored { op: HistoryOp::Undo });
    assert_eq!(engine.history_cursor(), 0);
    assert_eq!(engine.element_count(), 0);
}

// =============================================================
// Selection API
// =============================================================

#[test]
fn set_selected_is_not_validated() {
    let mut engine = engine();
    let ghost = Uuid::new_v4();
    engine.set_selected(Some(ghost));
    assert_eq!(engine.selected(), Some(ghost));
}

#[test]
fn set_selected_none_clears() {
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    engine.set_selected(None);
    assert_eq!(engine.selected(), None);
}

// =============================================================
// Paint order
// =============================================================

#[test]
fn elements_come_back_in_paint_order() {
    let mut engine = engine();
    let top = engine.add_element(
        ElementKind::Shape,
        &PartialElement { z_index: Some(10), ..Default::default() },
    );
    let bottom = engine.add_element(
        ElementKind::Shape,
        &PartialElement { z_index: Some(1), ..Default::default() },
    );
    let order: Vec<_> = engine.elements().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![bottom.id, top.id]);
}

// =============================================================
// load_document
// =============================================================

#[test]
fn load_document_reseeds_everything() {
    let mut engine = engine();
    engine.add_element(ElementKind::Shape, &no_payload());
    engine.add_element(ElementKind::Text, &no_payload());
    engine.undo();

    let loaded = doc(&engine);
    engine.load_document(loaded.clone());
    assert_eq!(doc(&engine), loaded);
    assert_eq!(engine.history_len(), 1);
    assert_eq!(engine.history_cursor(), 0);
    assert_eq!(engine.selected(), None);
    assert_eq!(engine.pending_confirm(), None);
    assert!(!engine.can_undo());
    assert!(!engine.can_redo());
}
