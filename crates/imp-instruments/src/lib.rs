//! imp-instruments
//!
//! The IMP item catalog and its scoring engine. Pure data and pure
//! functions: validation, multi-axis aggregation, and interpretation of a
//! single submission against an immutable [`catalog::Catalog`].

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod instruments;
pub mod interpret;
pub mod scoring;
pub mod validation;

use catalog::Catalog;
use error::CatalogError;

/// Trait implemented by each motor assessment instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "imp").
    fn id(&self) -> &str;

    /// Human-readable name shown on forms and reports.
    fn name(&self) -> &str;

    /// Build the instrument's item catalog. The catalog carries [`Self::name`].
    fn catalog(&self) -> Result<Catalog, CatalogError>;
}
