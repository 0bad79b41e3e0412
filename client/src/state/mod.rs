//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth` for the session, `ui` for language and
//! theme) so components depend on small focused models.

pub mod auth;
pub mod ui;
