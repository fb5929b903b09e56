//! Concrete instrument definitions.

pub mod imp;
