// Factory Method: create vehicles without naming their concrete type.

use std::fmt;
use std::str::FromStr;

use crate::error::PlaygroundError;
use crate::harness::{Pattern, Suite};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleKind {
    Car,
    Truck,
    Bus,
}

impl VehicleKind {
    pub const ALL: [VehicleKind; 3] = [VehicleKind::Car, VehicleKind::Truck, VehicleKind::Bus];

    pub fn as_str(self) -> &'static str {
        match self {
            VehicleKind::Car => "car",
            VehicleKind::Truck => "truck",
            VehicleKind::Bus => "bus",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleKind {
    type Err = PlaygroundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleKind::Car),
            "truck" => Ok(VehicleKind::Truck),
            "bus" => Ok(VehicleKind::Bus),
            _ => Err(PlaygroundError::UnknownVehicleKind(s.to_string())),
        }
    }
}

// ============================================================================
// Products
// ============================================================================

pub trait Vehicle {
    fn kind(&self) -> VehicleKind;

    fn drive(&self) -> String {
        let line = format!("drive {}", self.kind());
        tracing::debug!(vehicle = %self.kind(), "{line}");
        line
    }
}

#[derive(Debug, Default)]
pub struct Car;

impl Vehicle for Car {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Car
    }
}

#[derive(Debug, Default)]
pub struct Truck;

impl Vehicle for Truck {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Truck
    }
}

#[derive(Debug, Default)]
pub struct Bus;

impl Vehicle for Bus {
    fn kind(&self) -> VehicleKind {
        VehicleKind::Bus
    }
}

// ============================================================================
// Creators
// ============================================================================

pub trait VehicleFactory {
    fn make_vehicle(&self) -> Box<dyn Vehicle>;
}

pub struct CarFactory;

impl VehicleFactory for CarFactory {
    fn make_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Car)
    }
}

pub struct TruckFactory;

impl VehicleFactory for TruckFactory {
    fn make_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Truck)
    }
}

pub struct BusFactory;

impl VehicleFactory for BusFactory {
    fn make_vehicle(&self) -> Box<dyn Vehicle> {
        Box::new(Bus)
    }
}

/// Pick the creator at runtime.
pub fn factory_for(kind: VehicleKind) -> Box<dyn VehicleFactory> {
    match kind {
        VehicleKind::Car => Box::new(CarFactory),
        VehicleKind::Truck => Box::new(TruckFactory),
        VehicleKind::Bus => Box::new(BusFactory),
    }
}

pub fn demo_suite() -> Suite {
    let mut suite = Suite::new(Pattern::FactoryMethod);

    suite.check_eq("car factory", CarFactory.make_vehicle().drive(), "drive car".to_string());
    suite.check_eq("truck factory", TruckFactory.make_vehicle().drive(), "drive truck".to_string());
    suite.check_eq("bus factory", BusFactory.make_vehicle().drive(), "drive bus".to_string());

    for kind in VehicleKind::ALL {
        let case = format!("runtime factory for {kind}");
        suite.check_eq(&case, factory_for(kind).make_vehicle().kind(), kind);
    }

    suite
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_factory_builds_its_own_kind() {
        let factories: Vec<(Box<dyn VehicleFactory>, &str)> = vec![
            (Box::new(CarFactory), "drive car"),
            (Box::new(TruckFactory), "drive truck"),
            (Box::new(BusFactory), "drive bus"),
        ];

        for (factory, expected) in factories {
            assert_eq!(factory.make_vehicle().drive(), expected);
        }
    }

    #[test]
    fn test_factory_for_kind() {
        for kind in VehicleKind::ALL {
            assert_eq!(factory_for(kind).make_vehicle().kind(), kind);
        }
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!(" Truck ".parse::<VehicleKind>().unwrap(), VehicleKind::Truck);
        assert_eq!(
            "tram".parse::<VehicleKind>(),
            Err(PlaygroundError::UnknownVehicleKind("tram".to_string()))
        );
    }

    #[test]
    fn test_demo_suite_passes() {
        assert!(demo_suite().is_success());
    }
}
