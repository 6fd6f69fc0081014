//! Creational patterns: how objects come into existence.

pub mod builder;
pub mod factory;
pub mod prototype;
pub mod shared_state;
