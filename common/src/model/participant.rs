use serde::{Deserialize, Serialize};

/// A partner invited to fill out a published form.
///
/// `password` is only present in responses that just (re)generated a
/// credential; list responses omit it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: u64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub form_id: u64,
}
