//! Edit operations for the paged schema.
//!
//! Each level (pages, a page's unsectioned questions, a page's sections,
//! a section's questions) gets the same quartet: add, remove, move up,
//! move down. Moves are true positional moves implemented as adjacent
//! swaps, so moving the first element up or the last one down is a
//! boundary no-op. Scoped operations go through the `edited_*` helpers,
//! which silently drop edits aimed at a page or section that no longer
//! exists.

use crate::model::form::{FormSchema, Page, Section};
use crate::model::question::Question;

impl FormSchema {
    pub fn with_title(&self, title: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.title = title.into();
        next
    }

    pub fn with_description(&self, description: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.description = description.into();
        next
    }

    pub fn with_country(&self, country: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.country = country.into();
        next
    }

    pub fn with_due_date(&self, due_date: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.due_date = due_date.into();
        next
    }

    // --- pages ---

    /// Appends an empty page.
    pub fn with_page_added(&self) -> Self {
        let mut next = self.clone();
        next.pages.push(Page::default());
        next
    }

    pub fn with_page_removed(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index < next.pages.len() {
            next.pages.remove(index);
        }
        next
    }

    /// Swaps pages `index - 1` and `index`; page 0 cannot move up.
    pub fn with_page_moved_up(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index > 0 && index < next.pages.len() {
            next.pages.swap(index - 1, index);
        }
        next
    }

    /// Swaps pages `index` and `index + 1`; the last page cannot move down.
    pub fn with_page_moved_down(&self, index: usize) -> Self {
        let mut next = self.clone();
        if index + 1 < next.pages.len() {
            next.pages.swap(index, index + 1);
        }
        next
    }

    pub fn with_page_title(&self, index: usize, title: impl Into<String>) -> Self {
        let title = title.into();
        self.edited_page(index, |page| page.title = title)
    }

    pub fn with_page_description(&self, index: usize, description: impl Into<String>) -> Self {
        let description = description.into();
        self.edited_page(index, |page| page.description = description)
    }

    // --- unsectioned questions, scoped to one page ---

    /// Appends a default question to the page's unsectioned list.
    pub fn with_unsectioned_question_added(&self, page: usize) -> Self {
        self.edited_page(page, |page| page.unsectioned.push(Question::default()))
    }

    pub fn with_unsectioned_question_removed(&self, page: usize, index: usize) -> Self {
        self.edited_page(page, |page| {
            if index < page.unsectioned.len() {
                page.unsectioned.remove(index);
            }
        })
    }

    pub fn with_unsectioned_question_updated(
        &self,
        page: usize,
        index: usize,
        question: Question,
    ) -> Self {
        self.edited_page(page, |page| {
            if let Some(slot) = page.unsectioned.get_mut(index) {
                *slot = question;
            }
        })
    }

    pub fn with_unsectioned_question_moved_up(&self, page: usize, index: usize) -> Self {
        self.edited_page(page, |page| move_up(&mut page.unsectioned, index))
    }

    pub fn with_unsectioned_question_moved_down(&self, page: usize, index: usize) -> Self {
        self.edited_page(page, |page| move_down(&mut page.unsectioned, index))
    }

    // --- sections, scoped to one page ---

    /// Appends an empty section to the page.
    pub fn with_section_added(&self, page: usize) -> Self {
        self.edited_page(page, |page| page.sections.push(Section::default()))
    }

    pub fn with_section_removed(&self, page: usize, index: usize) -> Self {
        self.edited_page(page, |page| {
            if index < page.sections.len() {
                page.sections.remove(index);
            }
        })
    }

    pub fn with_section_moved_up(&self, page: usize, index: usize) -> Self {
        self.edited_page(page, |page| move_up(&mut page.sections, index))
    }

    pub fn with_section_moved_down(&self, page: usize, index: usize) -> Self {
        self.edited_page(page, |page| move_down(&mut page.sections, index))
    }

    pub fn with_section_title(
        &self,
        page: usize,
        section: usize,
        title: impl Into<String>,
    ) -> Self {
        let title = title.into();
        self.edited_section(page, section, |section| section.title = title)
    }

    // --- section questions, scoped to one page + section ---

    /// Appends a default question to the given section.
    pub fn with_section_question_added(&self, page: usize, section: usize) -> Self {
        self.edited_section(page, section, |section| {
            section.questions.push(Question::default())
        })
    }

    pub fn with_section_question_removed(&self, page: usize, section: usize, index: usize) -> Self {
        self.edited_section(page, section, |section| {
            if index < section.questions.len() {
                section.questions.remove(index);
            }
        })
    }

    pub fn with_section_question_updated(
        &self,
        page: usize,
        section: usize,
        index: usize,
        question: Question,
    ) -> Self {
        self.edited_section(page, section, |section| {
            if let Some(slot) = section.questions.get_mut(index) {
                *slot = question;
            }
        })
    }

    pub fn with_section_question_moved_up(&self, page: usize, section: usize, index: usize) -> Self {
        self.edited_section(page, section, |section| move_up(&mut section.questions, index))
    }

    pub fn with_section_question_moved_down(
        &self,
        page: usize,
        section: usize,
        index: usize,
    ) -> Self {
        self.edited_section(page, section, |section| {
            move_down(&mut section.questions, index)
        })
    }

    fn edited_page(&self, index: usize, edit: impl FnOnce(&mut Page)) -> Self {
        let mut next = self.clone();
        if let Some(page) = next.pages.get_mut(index) {
            edit(page);
        }
        next
    }

    fn edited_section(&self, page: usize, section: usize, edit: impl FnOnce(&mut Section)) -> Self {
        self.edited_page(page, |page| {
            if let Some(section) = page.sections.get_mut(section) {
                edit(section);
            }
        })
    }
}

fn move_up<T>(items: &mut [T], index: usize) {
    if index > 0 && index < items.len() {
        items.swap(index - 1, index);
    }
}

fn move_down<T>(items: &mut [T], index: usize) {
    if index + 1 < items.len() {
        items.swap(index, index + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn schema_with_pages(titles: &[&str]) -> FormSchema {
        FormSchema {
            pages: titles
                .iter()
                .map(|title| Page {
                    title: (*title).into(),
                    ..Page::default()
                })
                .collect(),
            ..FormSchema::default()
        }
    }

    fn page_titles(schema: &FormSchema) -> Vec<&str> {
        schema.pages.iter().map(|page| page.title.as_str()).collect()
    }

    #[test]
    fn add_page_appends_an_empty_page() {
        let schema = FormSchema::default().with_page_added();
        assert_eq!(schema.pages.len(), 1);
        assert_eq!(schema.pages[0], Page::default());
    }

    #[test]
    fn page_moves_are_adjacent_swaps_with_boundary_no_ops() {
        let schema = schema_with_pages(&["a", "b", "c"]);

        assert_eq!(page_titles(&schema.with_page_moved_up(0)), vec!["a", "b", "c"]);
        assert_eq!(page_titles(&schema.with_page_moved_down(2)), vec!["a", "b", "c"]);
        assert_eq!(page_titles(&schema.with_page_moved_up(2)), vec!["a", "c", "b"]);
        assert_eq!(page_titles(&schema.with_page_moved_down(0)), vec!["b", "a", "c"]);
    }

    #[test]
    fn remove_page_ignores_bad_indices() {
        let schema = schema_with_pages(&["a", "b"]);
        assert_eq!(page_titles(&schema.with_page_removed(0)), vec!["b"]);
        assert_eq!(schema.with_page_removed(9), schema);
    }

    #[test]
    fn operations_never_mutate_the_input() {
        let before = schema_with_pages(&["a", "b"]);
        let snapshot = before.clone();
        let _ = before.with_page_removed(0);
        let _ = before.with_page_moved_down(0);
        let _ = before.with_unsectioned_question_added(1);
        assert_eq!(before, snapshot);
    }

    #[test]
    fn unsectioned_question_operations_are_scoped_to_their_page() {
        let schema = schema_with_pages(&["a", "b"])
            .with_unsectioned_question_added(1)
            .with_unsectioned_question_added(1);

        assert!(schema.pages[0].unsectioned.is_empty());
        assert_eq!(schema.pages[1].unsectioned.len(), 2);

        let updated = schema.with_unsectioned_question_updated(
            1,
            0,
            Question {
                label: "first".into(),
                ..Question::default()
            },
        );
        let moved = updated.with_unsectioned_question_moved_down(1, 0);
        assert_eq!(moved.pages[1].unsectioned[1].label, "first");

        // moving back up restores the order
        let restored = moved.with_unsectioned_question_moved_up(1, 1);
        assert_eq!(restored.pages[1].unsectioned[0].label, "first");
    }

    #[test]
    fn edits_aimed_at_a_missing_page_are_dropped() {
        let schema = schema_with_pages(&["only"]);
        assert_eq!(schema.with_unsectioned_question_added(3), schema);
        assert_eq!(schema.with_section_added(3), schema);
    }

    #[test]
    fn section_quartet_behaves_like_the_page_quartet() {
        let schema = schema_with_pages(&["p"])
            .with_section_added(0)
            .with_section_added(0)
            .with_section_title(0, 0, "first")
            .with_section_title(0, 1, "second");

        let moved = schema.with_section_moved_down(0, 0);
        let titles: Vec<&str> = moved.pages[0]
            .sections
            .iter()
            .map(|section| section.title.as_str())
            .collect();
        assert_eq!(titles, vec!["second", "first"]);

        assert_eq!(schema.with_section_moved_up(0, 0), schema);
        assert_eq!(schema.with_section_moved_down(0, 1), schema);

        let removed = schema.with_section_removed(0, 0);
        assert_eq!(removed.pages[0].sections.len(), 1);
        assert_eq!(removed.pages[0].sections[0].title, "second");
    }

    #[test]
    fn section_question_operations_stay_inside_their_section() {
        let schema = schema_with_pages(&["p"])
            .with_section_added(0)
            .with_section_added(0)
            .with_section_question_added(0, 0)
            .with_section_question_added(0, 1)
            .with_section_question_updated(
                0,
                1,
                0,
                Question {
                    label: "in second".into(),
                    ..Question::default()
                },
            );

        assert_eq!(schema.pages[0].sections[0].questions[0].label, "");
        assert_eq!(schema.pages[0].sections[1].questions[0].label, "in second");

        let removed = schema.with_section_question_removed(0, 0, 0);
        assert!(removed.pages[0].sections[0].questions.is_empty());
        assert_eq!(removed.pages[0].sections[1].questions.len(), 1);

        // boundary no-ops inside a section
        assert_eq!(schema.with_section_question_moved_up(0, 1, 0), schema);
        assert_eq!(schema.with_section_question_moved_down(0, 1, 0), schema);
    }
}
