// ==========================================
// BIIS Import - Domain Layer
// ==========================================
// Target data model (GIF valuation subset): container
// aggregate, entities, embedded groups and value types.
// ==========================================

pub mod container;
pub mod property;
pub mod types;

pub use container::{Container, MainData, Meta};
pub use property::{Address, Property, Valuation};
pub use types::{
    Amount, Area, AreaMeasurement, AreaType, ConstructionPhase, Country, Currency,
    InteriorQuality, ObjectCondition, OwnershipType, Period, RetailLocationType, Subset, UseType,
    ValuationType1, ValuationType2,
};
