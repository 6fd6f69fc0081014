//! # Design Patterns Playground
//!
//! Classic object-oriented design patterns, one small self-checking demo each.
//!
//! ## Patterns Covered
//!
//! 1. **Creational**
//!    - Builder: a reusable theme builder that refuses to build half a theme
//!    - Factory Method: vehicles created through a factory trait
//!    - Prototype: duplicating a document under the same owner
//!    - Singleton: one shared color store, passed in explicitly
//!
//! 2. **Structural**
//!    - Adapter: pricing an imported car through the domestic interface
//!    - Decorator: stacking equipment options on a base car
//!
//! 3. **Behavioral**
//!    - Chain of Responsibility: layered mock responders for UI tests
//!    - Observer: a news feed pushing counts to subscribed channels
//!
//! Every pattern module ends with a `demo_suite` that checks the pattern
//! against fixed expected values; [`harness::run`] runs them all.
//!
//! ## Running the Demos
//!
//! ```bash
//! cargo run --bin playground                  # every pattern
//! cargo run --bin playground -- observer chain
//! cargo run --bin playground -- --json --config playground.toml
//! ```

pub mod behavioral;
pub mod config;
pub mod creational;
pub mod error;
pub mod harness;
pub mod logging;
pub mod structural;

pub use config::{PlaygroundConfig, PricingConfig};
pub use error::{PlaygroundError, Result};
pub use harness::{Pattern, Report, Suite};
