//! Domain layer - Pure computational logic
//!
//! This module contains pure functions without I/O dependencies.

pub mod numbers;
pub mod numeric;
pub mod parse;
pub mod text;
