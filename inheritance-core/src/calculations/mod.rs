//! Inheritance tax calculation.
//!
//! [`inheritance_tax`] holds the calculator itself; [`common`] holds the
//! rounding and clamping helpers its steps share.

pub mod common;
pub mod inheritance_tax;

pub use inheritance_tax::{InheritanceTaxCalculator, calculate};
