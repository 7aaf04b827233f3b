//! Shared vocabulary and edit logic for the CiviForm client.
//!
//! The `frontend` crate renders and the backend persists; everything in
//! between lives here: the schema types (`model`), the copy-on-write edit
//! operations and the section grouping utility (`edit`), the fill-out
//! answer/completion model (`answers`), and the save/load collaborator
//! boundary (`store`). Nothing in this crate touches the DOM or the
//! network, so all of it is unit tested natively.

pub mod answers;
pub mod edit;
pub mod model;
pub mod store;
