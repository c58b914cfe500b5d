use super::*;
use crate::net::types::ImageGenerationOptions;

fn image(id: &str) -> GeneratedImage {
    GeneratedImage {
        id: Some(id.to_owned()),
        url: format!("/api/images/u1/{id}.png"),
        prompt: format!("prompt for {id}"),
        timestamp: 1_714_566_896_000,
        user_id: Some("u1".to_owned()),
        filename: Some(format!("{id}.png")),
        options: ImageGenerationOptions::default(),
    }
}

fn loaded(ids: &[&str]) -> GalleryState {
    let mut state = GalleryState::default();
    let ticket = state.begin_load(Some("u1")).unwrap();
    assert!(state.finish_load(ticket, Ok(ids.iter().map(|id| image(id)).collect())));
    state
}

fn ids(state: &GalleryState) -> Vec<String> {
    state.images.iter().filter_map(|i| i.id.clone()).collect()
}

// =============================================================
// Load cycle
// =============================================================

#[test]
fn default_phase_is_loading() {
    assert_eq!(GalleryState::default().phase, GalleryPhase::Loading);
}

#[test]
fn no_user_stays_loading_without_ticket() {
    let mut state = GalleryState::default();
    assert!(state.begin_load(None).is_none());
    assert!(state.is_loading());
}

#[test]
fn success_with_images_is_loaded() {
    let state = loaded(&["b", "a"]);
    assert_eq!(state.phase, GalleryPhase::Loaded);
    assert_eq!(ids(&state), vec!["b", "a"]);
}

#[test]
fn success_with_empty_list_is_loaded_empty() {
    let state = loaded(&[]);
    assert_eq!(state.phase, GalleryPhase::LoadedEmpty);
}

#[test]
fn failure_is_silent_and_keeps_previous_list() {
    let mut state = loaded(&["a"]);
    let ticket = state.begin_load(Some("u1")).unwrap();
    assert!(state.is_loading());
    assert!(state.finish_load(ticket, Err(ApiError::Status(500))));
    assert_eq!(state.phase, GalleryPhase::ErrorSilent);
    assert_eq!(ids(&state), vec!["a"]);
}

#[test]
fn user_change_supersedes_pending_cycle() {
    let mut state = GalleryState::default();
    let first = state.begin_load(Some("u1")).unwrap();
    let second = state.begin_load(Some("u2")).unwrap();

    assert!(!state.finish_load(first, Ok(vec![image("stale")])));
    assert!(state.images.is_empty());
    assert!(state.is_loading());

    assert!(state.finish_load(second, Ok(vec![image("fresh")])));
    assert_eq!(ids(&state), vec!["fresh"]);
    assert_eq!(state.user_id.as_deref(), Some("u2"));
}

#[test]
fn user_change_clears_previous_users_images_and_detail() {
    let mut state = loaded(&["a"]);
    state.select(image("a"));
    let _ticket = state.begin_load(Some("u2")).unwrap();
    assert!(state.images.is_empty());
    assert!(state.selected.is_none());
}

#[test]
fn signing_out_cancels_pending_cycle() {
    let mut state = GalleryState::default();
    let ticket = state.begin_load(Some("u1")).unwrap();
    assert!(state.begin_load(None).is_none());
    assert!(!state.finish_load(ticket, Ok(vec![image("a")])));
    assert!(state.images.is_empty());
}

#[test]
fn cancelled_cycle_is_discarded() {
    let mut state = GalleryState::default();
    let ticket = state.begin_load(Some("u1")).unwrap();
    state.cancel_load();
    assert!(!state.finish_load(ticket, Ok(vec![image("a")])));
    assert!(state.is_loading());
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_removes_exactly_that_entry() {
    let mut state = loaded(&["c", "b", "a"]);
    assert!(state.finish_delete("b", Ok(())));
    assert_eq!(ids(&state), vec!["c", "a"]);
}

#[test]
fn delete_closes_detail_of_deleted_image() {
    let mut state = loaded(&["b", "a"]);
    state.select(image("a"));
    assert!(state.finish_delete("a", Ok(())));
    assert!(state.selected.is_none());
}

#[test]
fn delete_keeps_detail_of_other_image() {
    let mut state = loaded(&["b", "a"]);
    state.select(image("b"));
    assert!(state.finish_delete("a", Ok(())));
    assert_eq!(state.selected.as_ref().and_then(|i| i.id.as_deref()), Some("b"));
}

#[test]
fn failed_delete_leaves_list_and_detail_unchanged() {
    let mut state = loaded(&["b", "a"]);
    state.select(image("a"));
    assert!(!state.finish_delete("a", Err(ApiError::Status(404))));
    assert_eq!(ids(&state), vec!["b", "a"]);
    assert!(state.selected.is_some());
}

#[test]
fn deleting_unknown_id_changes_nothing() {
    let mut state = loaded(&["a"]);
    assert!(!state.finish_delete("missing", Ok(())));
    assert_eq!(ids(&state), vec!["a"]);
    assert_eq!(state.phase, GalleryPhase::Loaded);
}

#[test]
fn deleting_last_image_moves_to_loaded_empty() {
    let mut state = loaded(&["a"]);
    assert!(state.finish_delete("a", Ok(())));
    assert_eq!(state.phase, GalleryPhase::LoadedEmpty);
}

#[test]
fn close_detail_clears_selection() {
    let mut state = loaded(&["a"]);
    state.select(image("a"));
    state.close_detail();
    assert!(state.selected.is_none());
}
