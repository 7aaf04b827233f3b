//! The save/load collaborator boundary.
//!
//! The backend owns persistence; the client only ever talks to it through
//! [`SchemaStore`]. The `frontend` crate implements the trait over HTTP,
//! tests implement it in memory. Edit operations themselves never fail:
//! [`StoreError`] is the complete failure surface of the client, and every
//! failure is surfaced to the user as a message while local edits stay
//! untouched. There is no retry; the user re-triggers the save.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::form::FormSchema;
use crate::model::participant::Participant;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Rejected before or by the backend for a malformed schema.
    #[error("validation failed: {0}")]
    Validation(String),
    /// The requested form does not exist.
    #[error("form not found")]
    NotFound,
    /// Transport or backend failure.
    #[error("network error: {0}")]
    Network(String),
}

/// Everything the client needs from the backend.
///
/// `?Send` because the wasm implementation runs on a single thread and
/// `gloo` futures are not `Send`.
#[async_trait(?Send)]
pub trait SchemaStore {
    async fn fetch(&self, id: u64) -> Result<FormSchema, StoreError>;
    async fn create(&self, schema: &FormSchema) -> Result<FormSchema, StoreError>;
    async fn update(&self, id: u64, schema: &FormSchema) -> Result<FormSchema, StoreError>;

    async fn participants(&self, form_id: u64) -> Result<Vec<Participant>, StoreError>;
    async fn create_participant(
        &self,
        form_id: u64,
        name: &str,
        email: &str,
    ) -> Result<Participant, StoreError>;
    async fn regenerate_password(&self, participant_id: u64) -> Result<Participant, StoreError>;
}

/// Saves a schema, creating it on first save.
///
/// A schema without an `id` goes to `create`; the backend assigns one and
/// the returned schema carries it, so the caller must adopt the result as
/// its new in-memory state — the next save then targets that id as an
/// update. An empty title is rejected locally before any call is made.
pub async fn save_schema<S: SchemaStore + ?Sized>(
    store: &S,
    schema: &FormSchema,
) -> Result<FormSchema, StoreError> {
    if schema.title.trim().is_empty() {
        return Err(StoreError::Validation(
            "a form needs a title before it can be saved".into(),
        ));
    }
    match schema.id {
        Some(id) => store.update(id, schema).await,
        None => store.create(schema).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::collections::BTreeMap;

    /// In-memory stand-in for the backend: assigns ids on create and
    /// records which endpoint each call went through.
    #[derive(Default)]
    struct MemoryStore {
        forms: RefCell<BTreeMap<u64, FormSchema>>,
        next_id: RefCell<u64>,
        calls: RefCell<Vec<&'static str>>,
    }

    #[async_trait(?Send)]
    impl SchemaStore for MemoryStore {
        async fn fetch(&self, id: u64) -> Result<FormSchema, StoreError> {
            self.calls.borrow_mut().push("fetch");
            self.forms.borrow().get(&id).cloned().ok_or(StoreError::NotFound)
        }

        async fn create(&self, schema: &FormSchema) -> Result<FormSchema, StoreError> {
            self.calls.borrow_mut().push("create");
            let mut next_id = self.next_id.borrow_mut();
            *next_id += 1;
            let mut saved = schema.clone();
            saved.id = Some(*next_id);
            self.forms.borrow_mut().insert(*next_id, saved.clone());
            Ok(saved)
        }

        async fn update(&self, id: u64, schema: &FormSchema) -> Result<FormSchema, StoreError> {
            self.calls.borrow_mut().push("update");
            if !self.forms.borrow().contains_key(&id) {
                return Err(StoreError::NotFound);
            }
            let mut saved = schema.clone();
            saved.id = Some(id);
            self.forms.borrow_mut().insert(id, saved.clone());
            Ok(saved)
        }

        async fn participants(&self, _form_id: u64) -> Result<Vec<Participant>, StoreError> {
            unimplemented!("not exercised here")
        }

        async fn create_participant(
            &self,
            _form_id: u64,
            _name: &str,
            _email: &str,
        ) -> Result<Participant, StoreError> {
            unimplemented!("not exercised here")
        }

        async fn regenerate_password(
            &self,
            _participant_id: u64,
        ) -> Result<Participant, StoreError> {
            unimplemented!("not exercised here")
        }
    }

    fn draft(title: &str) -> FormSchema {
        FormSchema {
            title: title.into(),
            ..FormSchema::default()
        }
    }

    #[test]
    fn first_save_creates_and_later_saves_update_the_assigned_id() {
        block_on(async {
            let store = MemoryStore::default();

            let saved = save_schema(&store, &draft("Census")).await.unwrap();
            let id = saved.id.expect("create must assign an id");

            let saved_again = save_schema(&store, &saved).await.unwrap();
            assert_eq!(saved_again.id, Some(id));
            assert_eq!(*store.calls.borrow(), vec!["create", "update"]);
        });
    }

    #[test]
    fn empty_title_is_rejected_before_any_call() {
        block_on(async {
            let store = MemoryStore::default();
            let err = save_schema(&store, &draft("   ")).await.unwrap_err();
            assert!(matches!(err, StoreError::Validation(_)));
            assert!(store.calls.borrow().is_empty());
        });
    }

    #[test]
    fn updating_a_missing_form_surfaces_not_found() {
        block_on(async {
            let store = MemoryStore::default();
            let mut schema = draft("Gone");
            schema.id = Some(42);
            let err = save_schema(&store, &schema).await.unwrap_err();
            assert!(matches!(err, StoreError::NotFound));
        });
    }

    #[test]
    fn fetch_round_trips_what_was_saved() {
        block_on(async {
            let store = MemoryStore::default();
            let saved = save_schema(&store, &draft("Census").with_page_added())
                .await
                .unwrap();
            let fetched = store.fetch(saved.id.unwrap()).await.unwrap();
            assert_eq!(fetched, saved);
        });
    }
}
