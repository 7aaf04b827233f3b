//! State and local persistence for the fill-out renderer.

use gloo_storage::{LocalStorage, Storage};

use common::answers::AnswerMap;
use common::model::form::FormSchema;

/// Storage namespace; the full key is `civiform_answers_<formId>`.
const ANSWERS_NAMESPACE: &str = "civiform_answers";

pub struct PreviewComponent {
    /// `None` until the fetch completes (or fails).
    pub schema: Option<FormSchema>,
    pub answers: AnswerMap,
    /// Clamped to `[0, pages.len() - 1]` by the navigation messages.
    pub current_page: usize,
    /// Guard so the first-render fetch runs once.
    pub loaded: bool,
    /// Set when the fetch failed, to distinguish from still-loading.
    pub failed: bool,
}

impl PreviewComponent {
    pub fn new() -> Self {
        Self {
            schema: None,
            answers: AnswerMap::default(),
            current_page: 0,
            loaded: false,
            failed: false,
        }
    }
}

/// Restores saved progress. Anything missing or unreadable becomes an
/// empty map; stale garbage in the store must never break fill-out.
pub fn load_saved_answers(form_id: u64) -> AnswerMap {
    let key = AnswerMap::storage_key(ANSWERS_NAMESPACE, form_id);
    match LocalStorage::raw().get_item(&key) {
        Ok(Some(raw)) => AnswerMap::from_json(&raw),
        _ => AnswerMap::default(),
    }
}

/// Writes progress back. Last writer wins; a full or unavailable store
/// only costs persistence, not the session.
pub fn persist_answers(form_id: u64, answers: &AnswerMap) {
    let key = AnswerMap::storage_key(ANSWERS_NAMESPACE, form_id);
    if LocalStorage::raw().set_item(&key, &answers.to_json()).is_err() {
        gloo_console::warn!("could not persist fill-out progress");
    }
}
