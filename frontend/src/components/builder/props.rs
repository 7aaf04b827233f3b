//! Properties for the page builder.

use yew::prelude::*;

use common::model::form::FormSchema;

#[derive(Properties, PartialEq, Clone)]
pub struct BuilderProps {
    /// Loads this form from the backend on first render. `None` starts a
    /// fresh draft.
    #[prop_or_default]
    pub form_id: Option<u64>,

    /// Seeds the editor with an already-converted legacy schema instead
    /// of fetching. Takes precedence over `form_id`.
    #[prop_or_default]
    pub imported: Option<FormSchema>,

    /// Fired once, with the backend-assigned id, after the first
    /// successful save of a form that had no id yet.
    #[prop_or_default]
    pub on_saved: Callback<u64>,
}
