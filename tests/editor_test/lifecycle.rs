//! Open / cancel / reopen transitions

use address_groups::editor::{EditorState, GroupEditor};

use super::common::sample_group;

#[test]
fn test_open_loads_draft_from_group() {
    let mut editor = GroupEditor::new();
    editor.open(Some(sample_group()));

    let draft = editor.draft().unwrap();
    assert_eq!(draft.name, "Payroll");
    assert_eq!(draft.addresses, sample_group().addresses);
    assert!(draft.pending_address.is_empty());
    assert!(matches!(editor.state(), EditorState::OpenLoaded { .. }));
}

#[test]
fn test_reopen_discards_unsaved_edits() {
    let mut editor = GroupEditor::new();
    editor.open(Some(sample_group()));
    editor.set_name("Changed");
    editor.add_manual_entry("0x333", "");

    editor.open(Some(sample_group()));

    let draft = editor.draft().unwrap();
    assert_eq!(draft.name, "Payroll");
    assert_eq!(draft.addresses.len(), 2);
}

#[test]
fn test_cancel_closes_and_next_open_reloads() {
    let mut editor = GroupEditor::new();
    editor.open(Some(sample_group()));
    editor.set_name("Draft only");
    editor.cancel();

    assert!(!editor.is_open());
    assert!(editor.draft().is_none());

    editor.open(Some(sample_group()));
    assert_eq!(editor.draft().unwrap().name, "Payroll");
}

#[test]
fn test_open_without_group_has_empty_draft() {
    let mut editor = GroupEditor::new();
    editor.open(None);

    assert!(editor.is_open());
    assert_eq!(editor.draft().unwrap().name, "");
    assert!(editor.draft().unwrap().addresses.is_empty());
}

#[test]
fn test_edits_do_not_touch_source_group() {
    let mut editor = GroupEditor::new();
    editor.open(Some(sample_group()));
    editor.remove_at(0);

    match editor.state() {
        EditorState::OpenLoaded { source, draft } => {
            assert_eq!(source.addresses.len(), 2);
            assert_eq!(draft.addresses.len(), 1);
        }
        other => panic!("unexpected state {:?}", other),
    }
}
