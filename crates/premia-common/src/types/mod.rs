//! Core data types for Premia

pub mod coverage;
pub mod quote;
pub mod selection;
