//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Browser/environment concerns stay here so page logic remains testable
//! natively.

pub mod prefs;
