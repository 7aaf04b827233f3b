pub mod builder;
pub mod legacy;
pub mod participants;
pub mod preview;
pub mod question_editor;
