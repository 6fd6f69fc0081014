// Decorator: add equipment to a car without subclassing it.
//
// A decorated car is an immutable base plus an ordered list of options.
// Numeric deltas are plain sums, so their order never matters; the equipment
// label is built innermost-first and each option appends its own suffix, so
// the order of `with` calls is visible in the label.

use std::fmt;

use crate::harness::{Pattern, Suite};

pub trait Car {
    fn cost(&self) -> i64;
    fn top_speed(&self) -> i64;
    fn equipment(&self) -> String;
}

impl<C: Car + ?Sized> Car for Box<C> {
    fn cost(&self) -> i64 {
        (**self).cost()
    }

    fn top_speed(&self) -> i64 {
        (**self).top_speed()
    }

    fn equipment(&self) -> String {
        (**self).equipment()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToyotaPrius;

impl Car for ToyotaPrius {
    fn cost(&self) -> i64 {
        25_000
    }

    fn top_speed(&self) -> i64 {
        210
    }

    fn equipment(&self) -> String {
        String::new()
    }
}

// ============================================================================
// Options
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarOption {
    pub name: &'static str,
    pub cost_delta: i64,
    pub speed_delta: i64,
}

pub const AIR_CONDITION: CarOption = CarOption::new("Air Condition", 2_000, 0);
pub const SPORT: CarOption = CarOption::new("Sport", 3_000, 30);
pub const BLACK_EDITION: CarOption = CarOption::new("BlackEdition", 0, 0);

impl CarOption {
    pub const fn new(name: &'static str, cost_delta: i64, speed_delta: i64) -> Self {
        Self {
            name,
            cost_delta,
            speed_delta,
        }
    }

    /// Text appended to the wrapped car's equipment label.
    pub fn suffix(&self) -> String {
        format!(" {} /", self.name)
    }
}

impl fmt::Display for CarOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (+{} cost, +{} km/h)", self.name, self.cost_delta, self.speed_delta)
    }
}

// ============================================================================
// Composition
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equipped<C> {
    base: C,
    options: Vec<CarOption>,
}

impl<C: Car> Equipped<C> {
    pub fn new(base: C) -> Self {
        Self {
            base,
            options: Vec::new(),
        }
    }

    /// Wrap one more layer around the current configuration.
    pub fn with(mut self, option: CarOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn options(&self) -> &[CarOption] {
        &self.options
    }

    pub fn base(&self) -> &C {
        &self.base
    }
}

impl<C: Car> Car for Equipped<C> {
    fn cost(&self) -> i64 {
        self.options
            .iter()
            .fold(self.base.cost(), |total, option| total + option.cost_delta)
    }

    fn top_speed(&self) -> i64 {
        self.options
            .iter()
            .fold(self.base.top_speed(), |total, option| total + option.speed_delta)
    }

    fn equipment(&self) -> String {
        let mut label = self.base.equipment();
        for option in &self.options {
            label.push_str(&option.suffix());
        }
        label
    }
}

pub fn demo_suite() -> Suite {
    let mut suite = Suite::new(Pattern::Decorator);

    let base = ToyotaPrius;
    suite.check_eq("base cost", base.cost(), 25_000);
    suite.check_eq("base top speed", base.top_speed(), 210);
    suite.check_eq("base equipment", base.equipment(), String::new());

    let full = Equipped::new(ToyotaPrius)
        .with(AIR_CONDITION)
        .with(SPORT)
        .with(BLACK_EDITION);
    suite.check_eq("full equipment cost", full.cost(), 30_000);
    suite.check_eq("full equipment top speed", full.top_speed(), 240);
    suite.check_eq(
        "full equipment label",
        full.equipment().as_str(),
        " Air Condition / Sport / BlackEdition /",
    );

    let comfort = Equipped::new(ToyotaPrius).with(AIR_CONDITION);
    suite.check_eq("comfort cost", comfort.cost(), 27_000);
    suite.check_eq("comfort top speed", comfort.top_speed(), 210);
    suite.check_eq("comfort label", comfort.equipment().as_str(), " Air Condition /");

    suite
}
