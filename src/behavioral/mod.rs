//! Behavioral patterns: how objects hand work and news to each other.

pub mod chain;
pub mod observer;
