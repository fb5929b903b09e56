//! imp-core
//!
//! Pure domain types shared by every IMP crate: the submitted evaluation
//! record and its identifying and free-text observation fields.

pub mod error;
pub mod models;
