use super::*;
use crate::state::session::login;
use crate::store::test_helpers::memory_store;
use crate::types::Role;

fn open_for(store: &Store, user_id: &str) -> ClientDashboard {
    let session = login(store, Role::Client, user_id).unwrap();
    ClientDashboard::open(store, Some(&session)).unwrap()
}

// =============================================================
// open
// =============================================================

#[test]
fn open_without_session_is_none() {
    let (store, _, _) = memory_store();
    assert!(ClientDashboard::open(&store, None).is_none());
}

#[test]
fn open_with_therapist_session_is_none() {
    let (store, _, _) = memory_store();
    let session = login(&store, Role::Therapist, "t1").unwrap();
    assert!(ClientDashboard::open(&store, Some(&session)).is_none());
}

#[test]
fn open_loads_lists_and_default_form() {
    let (store, _, _) = memory_store();
    let dashboard = open_for(&store, "c1");
    assert_eq!(dashboard.client_id, "c1");
    assert_eq!(dashboard.user_name, "Matti Meikäläinen");
    assert_eq!(dashboard.homework.len(), 3);
    assert!(dashboard.check_ins.is_empty());
    assert!(dashboard.journal.is_empty());
    assert_eq!(dashboard.form, CheckInForm::default());
}

// =============================================================
// Check-ins
// =============================================================

#[test]
fn submit_check_in_saves_refreshes_and_resets() {
    let (store, _, _) = memory_store();
    let mut dashboard = open_for(&store, "c1");
    dashboard.form = CheckInForm { mood: 4, stress: 2, sleep: 5, notes: "ok".to_owned() };

    let saved = dashboard.submit_check_in(&store).unwrap();
    assert_eq!(dashboard.check_ins, vec![saved]);
    assert_eq!(dashboard.form, CheckInForm::default());
}

#[test]
fn invalid_check_in_is_rejected_and_form_kept() {
    let (store, _, _) = memory_store();
    let mut dashboard = open_for(&store, "c1");
    dashboard.form.mood = 6;
    dashboard.form.notes = "draft".to_owned();

    let err = dashboard.submit_check_in(&store).unwrap_err();
    assert!(matches!(err, SubmitError::CheckIn(ref e) if e.violations.len() == 1));
    assert_eq!(dashboard.form.notes, "draft");
    assert!(store.list_check_ins("c1").is_empty());
}

#[test]
fn failed_write_keeps_form() {
    let (store, storage, _) = memory_store();
    let mut dashboard = open_for(&store, "c1");
    dashboard.form.notes = "keep me".to_owned();
    storage.set_reject_writes(true);

    assert!(matches!(dashboard.submit_check_in(&store), Err(SubmitError::Store(_))));
    assert_eq!(dashboard.form.notes, "keep me");
}

#[test]
fn newest_check_in_is_listed_first() {
    let (store, _, clock) = memory_store();
    let mut dashboard = open_for(&store, "c1");
    dashboard.submit_check_in(&store).unwrap();
    clock.advance(86_400_000);
    dashboard.form.mood = 5;
    let latest = dashboard.submit_check_in(&store).unwrap();
    assert_eq!(dashboard.check_ins.len(), 2);
    assert_eq!(dashboard.check_ins[0], latest);
}

// =============================================================
// Homework
// =============================================================

#[test]
fn toggle_homework_refreshes_list() {
    let (store, _, _) = memory_store();
    let mut dashboard = open_for(&store, "c1");
    assert_eq!(dashboard.toggle_homework(&store, "h3").unwrap(), Some(true));
    assert!(dashboard.homework.iter().find(|h| h.id == "h3").unwrap().completed);
}

#[test]
fn toggle_unknown_homework_is_noop() {
    let (store, _, _) = memory_store();
    let mut dashboard = open_for(&store, "c1");
    let before = dashboard.homework.clone();
    assert_eq!(dashboard.toggle_homework(&store, "missing").unwrap(), None);
    assert_eq!(dashboard.homework, before);
}

// =============================================================
// Journal
// =============================================================

#[test]
fn submit_journal_saves_and_clears_draft() {
    let (store, _, _) = memory_store();
    let mut dashboard = open_for(&store, "c2");
    dashboard.journal_draft = "Slept eight hours.".to_owned();

    let entry = dashboard.submit_journal(&store).unwrap();
    assert_eq!(entry.content, "Slept eight hours.");
    assert_eq!(dashboard.journal, vec![entry]);
    assert!(dashboard.journal_draft.is_empty());
}

#[test]
fn blank_journal_draft_is_not_saved() {
    let (store, _, _) = memory_store();
    let mut dashboard = open_for(&store, "c2");
    dashboard.journal_draft = "   ".to_owned();

    assert!(matches!(dashboard.submit_journal(&store), Err(SubmitError::Journal(JournalFormError::Empty))));
    assert!(store.list_journal_entries("c2").is_empty());
    assert_eq!(dashboard.journal_draft, "   ");
}
