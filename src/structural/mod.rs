//! Structural patterns: how objects are wrapped and fitted together.

pub mod adapter;
pub mod decorator;
