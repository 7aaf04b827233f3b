//! State for the page builder component.

use std::collections::HashSet;

use common::model::form::FormSchema;

use super::helpers::{compute_schema_md5, fresh_draft};

/// Runtime state of the builder.
///
/// The schema itself is only ever replaced wholesale with the result of a
/// `common::edit` operation; the component's own fields are limited to UI
/// concerns (collapse state, load guard, dirty tracking).
pub struct BuilderComponent {
    /// The form being edited. Adopted from the backend after every save
    /// so the assigned id sticks.
    pub schema: FormSchema,

    /// Pages currently collapsed in the accordion, by page index.
    pub collapsed_pages: HashSet<usize>,

    /// Sections currently collapsed, by (page index, section index).
    pub collapsed_sections: HashSet<(usize, usize)>,

    /// Guard so the first-render load runs once.
    pub loaded: bool,

    /// MD5 of the serialized schema at the clean baseline: the last
    /// load or save, or the initial blank draft. `None` (a legacy import
    /// that was never saved) always counts as dirty.
    pub original_md5: Option<String>,
}

impl BuilderComponent {
    pub fn new() -> Self {
        let schema = fresh_draft();
        let original_md5 = Some(compute_schema_md5(&schema));
        Self {
            schema,
            collapsed_pages: HashSet::new(),
            collapsed_sections: HashSet::new(),
            loaded: false,
            original_md5,
        }
    }

    /// Whether there are edits since the last load or save.
    pub fn is_dirty(&self) -> bool {
        self.original_md5
            .as_ref()
            .is_none_or(|original| original != &compute_schema_md5(&self.schema))
    }
}
