use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::question::{Question, QuestionType};

/// A named group of questions inside a page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub questions: Vec<Question>,
}

/// One page of a form, shown on its own during fill-out.
///
/// `description` carries rich-text HTML produced by the editor widget;
/// this crate treats it as an opaque string.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    pub description: String,
    pub unsectioned: Vec<Question>,
    pub sections: Vec<Section>,
}

impl Page {
    /// All questions on this page in display order: unsectioned first,
    /// then each section's questions. This flat ordering is also the
    /// context that skip-logic reference indices point into.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.unsectioned
            .iter()
            .chain(self.sections.iter().flat_map(|section| section.questions.iter()))
    }
}

/// The current, paged form representation.
///
/// Forms start as drafts (`published == false`). Publishing is one-way:
/// `publish` flips the flag and the caller persists the result; there is
/// no transition back to draft. `id` is assigned by the backend on first
/// save. Metadata field names match the backend JSON contract as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FormSchema {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub title: String,
    pub description: String,
    pub published: bool,
    pub country: String,
    pub due_date: String,
    pub created_by: String,
    pub updated_at: String,
    pub pages: Vec<Page>,
}

impl FormSchema {
    /// Returns a published copy. The only state transition a form has.
    pub fn publish(&self) -> Self {
        let mut next = self.clone();
        next.published = true;
        next
    }

    /// Every question across all pages, unsectioned and sectioned alike.
    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.pages.iter().flat_map(Page::questions)
    }
}

/// The legacy flat form shape: one title and a single question list in
/// which `Section`-typed questions act as delimiters.
///
/// New code edits [`FormSchema`] directly; the flat shape survives only
/// for the legacy editor and as an import source, converted through
/// [`FlatFormSchema::into_hierarchical`] before anything is persisted.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FlatFormSchema {
    pub title: String,
    pub description: String,
    pub questions: Vec<Question>,
}

impl FlatFormSchema {
    /// Converts the flat list into the paged representation.
    ///
    /// Questions are bucketed by their `page_number` hint (missing hints
    /// land on page 1), keeping their relative order. Within a page the
    /// same rule as [`crate::edit::grouping::group_questions_by_section`]
    /// applies: each `Section`-typed question opens a section named after
    /// its label, questions before the first marker stay unsectioned.
    pub fn into_hierarchical(self) -> FormSchema {
        let mut buckets: BTreeMap<u64, Vec<Question>> = BTreeMap::new();
        for question in self.questions {
            let page_number = question.page_number.unwrap_or(1);
            buckets.entry(page_number).or_default().push(question);
        }

        let pages = if buckets.is_empty() {
            vec![Page::default()]
        } else {
            buckets.into_values().map(page_from_flat).collect()
        };

        FormSchema {
            title: self.title,
            description: self.description,
            pages,
            ..FormSchema::default()
        }
    }
}

fn page_from_flat(questions: Vec<Question>) -> Page {
    let mut page = Page::default();
    for question in questions {
        if question.question_type == QuestionType::Section {
            page.sections.push(Section {
                title: question.label,
                questions: Vec::new(),
            });
        } else if let Some(section) = page.sections.last_mut() {
            section.questions.push(question);
        } else {
            page.unsectioned.push(question);
        }
    }
    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn labeled(label: &str) -> Question {
        Question {
            label: label.into(),
            ..Question::default()
        }
    }

    fn marker(label: &str) -> Question {
        Question {
            label: label.into(),
            question_type: QuestionType::Section,
            ..Question::default()
        }
    }

    #[test]
    fn publish_is_one_way_and_copy_on_write() {
        let draft = FormSchema::default();
        let published = draft.publish();
        assert!(!draft.published);
        assert!(published.published);
    }

    #[test]
    fn schema_json_keeps_snake_case_metadata_names() {
        let schema = FormSchema {
            title: "Census".into(),
            country: "BE".into(),
            due_date: "2026-12-01".into(),
            created_by: "admin".into(),
            ..FormSchema::default()
        };
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["due_date"], "2026-12-01");
        assert_eq!(json["created_by"], "admin");
        assert!(json.get("id").is_none());
        assert_eq!(json["pages"], serde_json::json!([]));
    }

    #[test]
    fn flat_import_groups_by_section_markers() {
        let flat = FlatFormSchema {
            title: "Legacy".into(),
            description: String::new(),
            questions: vec![
                labeled("loose"),
                marker("Household"),
                labeled("adults"),
                labeled("children"),
                marker("Income"),
                labeled("salary"),
            ],
        };
        let schema = flat.into_hierarchical();

        assert_eq!(schema.title, "Legacy");
        assert_eq!(schema.pages.len(), 1);
        let page = &schema.pages[0];
        assert_eq!(page.unsectioned.len(), 1);
        assert_eq!(page.unsectioned[0].label, "loose");
        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[0].title, "Household");
        assert_eq!(page.sections[0].questions.len(), 2);
        assert_eq!(page.sections[1].title, "Income");
        assert_eq!(page.sections[1].questions[0].label, "salary");
    }

    #[test]
    fn flat_import_honours_page_number_hints() {
        let mut second_page = labeled("on page two");
        second_page.page_number = Some(2);
        let flat = FlatFormSchema {
            title: String::new(),
            description: String::new(),
            questions: vec![labeled("on page one"), second_page],
        };
        let schema = flat.into_hierarchical();

        assert_eq!(schema.pages.len(), 2);
        assert_eq!(schema.pages[0].unsectioned[0].label, "on page one");
        assert_eq!(schema.pages[1].unsectioned[0].label, "on page two");
    }

    #[test]
    fn flat_import_of_empty_list_yields_one_blank_page() {
        let schema = FlatFormSchema::default().into_hierarchical();
        assert_eq!(schema.pages.len(), 1);
        assert!(schema.pages[0].unsectioned.is_empty());
        assert!(schema.pages[0].sections.is_empty());
    }

    #[test]
    fn page_question_order_is_unsectioned_then_sections() {
        let page = Page {
            unsectioned: vec![labeled("a")],
            sections: vec![
                Section {
                    title: "s1".into(),
                    questions: vec![labeled("b")],
                },
                Section {
                    title: "s2".into(),
                    questions: vec![labeled("c")],
                },
            ],
            ..Page::default()
        };
        let labels: Vec<&str> = page.questions().map(|q| q.label.as_str()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
    }
}
