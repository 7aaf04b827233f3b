use common::model::form::FormSchema;
use common::model::question::Question;

/// Builder messages. Indices are always (page), (page, section) or
/// (page, section, question) positions in the current schema; the edit
/// model treats anything stale as a no-op.
#[derive(Clone)]
pub enum Msg {
    SetSchema(FormSchema),

    UpdateTitle(String),
    UpdateDescription(String),
    UpdateCountry(String),
    UpdateDueDate(String),

    AddPage,
    RemovePage(usize),
    MovePageUp(usize),
    MovePageDown(usize),
    UpdatePageTitle(usize, String),
    UpdatePageDescription(usize, String),
    TogglePage(usize),

    AddUnsectionedQuestion(usize),
    RemoveUnsectionedQuestion(usize, usize),
    MoveUnsectionedQuestionUp(usize, usize),
    MoveUnsectionedQuestionDown(usize, usize),
    UpdateUnsectionedQuestion(usize, usize, Question),

    AddSection(usize),
    RemoveSection(usize, usize),
    MoveSectionUp(usize, usize),
    MoveSectionDown(usize, usize),
    UpdateSectionTitle(usize, usize, String),
    ToggleSection(usize, usize),

    AddSectionQuestion(usize, usize),
    RemoveSectionQuestion(usize, usize, usize),
    MoveSectionQuestionUp(usize, usize, usize),
    MoveSectionQuestionDown(usize, usize, usize),
    UpdateSectionQuestion(usize, usize, usize, Question),

    Save,
    Publish,
    SaveSucceeded(FormSchema),
}
