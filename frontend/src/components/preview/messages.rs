use common::answers::AnswerValue;
use common::model::form::FormSchema;

#[derive(Clone)]
pub enum Msg {
    SchemaLoaded(FormSchema),
    LoadFailed,
    /// An answer for the question with this backend id changed.
    Answer(u64, AnswerValue),
    NextPage,
    PreviousPage,
}
