pub mod form;
pub mod participant;
pub mod question;
