//! Explicit session state.
//!
//! The session lives in the root `App` component and is handed to the
//! screens that need it through a `ContextProvider`, so there is no
//! ambient storage-backed singleton to reach for: a session exists from
//! application start until logout or unmount, nowhere else.

/// Authentication state for the current application run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    pub fn logged_out() -> Self {
        Self { token: None }
    }

    pub fn logged_in(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
