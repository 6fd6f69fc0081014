// Adapter: price an imported car through the same interface as a domestic one.

use crate::config::PricingConfig;
use crate::harness::{Pattern, Suite};

// ============================================================================
// Target interface
// ============================================================================

pub trait CarCost {
    fn calculate_car_cost(&self) -> i64;
}

pub fn calculate_cost(entity: &dyn CarCost) -> i64 {
    entity.calculate_car_cost()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomesticCar {
    pub price: i64,
}

impl CarCost for DomesticCar {
    fn calculate_car_cost(&self) -> i64 {
        self.price
    }
}

// ============================================================================
// Incompatible type: knows its raw import cost, not `CarCost`
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JapanCar {
    pub price: i64,
    pub power_horse: i64,
    pub dealer_fee: i64,
    /// Right-hand to left-hand drive headlight conversion.
    pub fix_headlights: i64,
    pub delivery_cost: i64,
}

impl JapanCar {
    /// Saturates at the `i64` bounds instead of overflowing, so any pricing
    /// read from a config file still yields a cost.
    pub fn raw_cost(&self, pricing: &PricingConfig) -> i64 {
        let customs = self.power_horse.saturating_mul(pricing.customs_per_horsepower);

        [
            self.dealer_fee,
            self.fix_headlights,
            pricing.fixed_surcharges(),
            self.price,
            self.delivery_cost,
        ]
        .into_iter()
        .fold(customs, i64::saturating_add)
    }
}

// ============================================================================
// Adapter
// ============================================================================

#[derive(Debug, Clone, Copy)]
pub struct JapanCarCostAdapter {
    car: JapanCar,
    pricing: PricingConfig,
}

impl JapanCarCostAdapter {
    pub fn new(car: JapanCar, pricing: PricingConfig) -> Self {
        Self { car, pricing }
    }

    pub fn car(&self) -> &JapanCar {
        &self.car
    }
}

impl CarCost for JapanCarCostAdapter {
    fn calculate_car_cost(&self) -> i64 {
        self.car
            .raw_cost(&self.pricing)
            .saturating_add(self.pricing.force_majeure)
    }
}

fn toyota_camry() -> JapanCar {
    JapanCar {
        price: 500_000,
        power_horse: 150,
        dealer_fee: 20_000,
        fix_headlights: 30_000,
        delivery_cost: 50_000,
    }
}

pub fn demo_suite(pricing: &PricingConfig) -> Suite {
    let mut suite = Suite::new(Pattern::Adapter);

    let lada_niva = DomesticCar { price: 1_000_000 };
    suite.check_eq("domestic car costs its price", calculate_cost(&lada_niva), 1_000_000);

    let camry = JapanCarCostAdapter::new(toyota_camry(), *pricing);
    suite.check_eq("imported car includes surcharges", calculate_cost(&camry), 1_205_000);

    suite
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domestic_price_unchanged() {
        assert_eq!(calculate_cost(&DomesticCar { price: 1_000_000 }), 1_000_000);
        assert_eq!(calculate_cost(&DomesticCar { price: 0 }), 0);
    }

    #[test]
    fn test_japan_car_through_adapter() {
        let adapter = JapanCarCostAdapter::new(toyota_camry(), PricingConfig::default());
        assert_eq!(calculate_cost(&adapter), 1_205_000);
    }

    #[test]
    fn test_raw_cost_excludes_force_majeure() {
        let pricing = PricingConfig::default();
        assert_eq!(toyota_camry().raw_cost(&pricing), 1_125_000);
    }

    #[test]
    fn test_custom_pricing() {
        let pricing = PricingConfig {
            customs_per_horsepower: 1_000,
            sos_system: 0,
            scrap_collection: 0,
            force_majeure: 10_000,
        };
        let adapter = JapanCarCostAdapter::new(toyota_camry(), pricing);

        // 150_000 + 50_000 + 550_000 + 10_000
        assert_eq!(adapter.calculate_car_cost(), 760_000);
    }

    #[test]
    fn test_huge_pricing_saturates() {
        let pricing = PricingConfig {
            customs_per_horsepower: i64::MAX,
            ..PricingConfig::default()
        };
        let adapter = JapanCarCostAdapter::new(toyota_camry(), pricing);
        assert_eq!(calculate_cost(&adapter), i64::MAX);

        let pricing = PricingConfig {
            force_majeure: i64::MIN,
            sos_system: i64::MIN,
            ..PricingConfig::default()
        };
        let adapter = JapanCarCostAdapter::new(toyota_camry(), pricing);
        assert_eq!(calculate_cost(&adapter), i64::MIN);
    }

    #[test]
    fn test_heterogeneous_cost_list() {
        let cars: Vec<Box<dyn CarCost>> = vec![
            Box::new(DomesticCar { price: 1_000_000 }),
            Box::new(JapanCarCostAdapter::new(toyota_camry(), PricingConfig::default())),
        ];

        let total: i64 = cars.iter().map(|c| calculate_cost(c.as_ref())).sum();
        assert_eq!(total, 2_205_000);
    }

    #[test]
    fn test_demo_suite_passes() {
        assert!(demo_suite(&PricingConfig::default()).is_success());
    }
}
