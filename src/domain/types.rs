// ==========================================
// BIIS Import - Domain Value Types
// ==========================================
// Value objects and closed enumerations of the
// GIF valuation model subset produced by this importer.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Subset (declared capability)
// ==========================================
// The importer produces exactly the valuation subset 5.7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subset {
    S5_7,
}

impl fmt::Display for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subset::S5_7 => write!(f, "5.7"),
        }
    }
}

// ==========================================
// Currency (ISO 4217 alpha-3)
// ==========================================
// Closed table: codes outside the list are rejected at
// construction, never silently carried along.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency(String);

const KNOWN_CURRENCIES: &[&str] = &[
    "EUR", "USD", "GBP", "CHF", "JPY", "CNY", "SEK", "NOK", "DKK", "PLN", "CZK", "HUF", "RON",
    "BGN", "HRK", "RUB", "TRY", "AUD", "CAD", "NZD", "HKD", "SGD", "KRW", "INR", "BRL", "ZAR",
];

impl Currency {
    /// Builds a currency from an ISO 4217 alpha-3 code.
    /// Returns `None` for codes not in the known table.
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        if KNOWN_CURRENCIES.contains(&code) {
            Some(Currency(code.to_string()))
        } else {
            None
        }
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ==========================================
// Amount - monetary value
// ==========================================
// The currency is the sticky per-row unit; it is absent when
// the amount column precedes the currency column in the sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub value: f64,
    pub currency: Option<Currency>,
}

impl Amount {
    pub fn new(value: f64, currency: Option<Currency>) -> Self {
        Self { value, currency }
    }
}

// ==========================================
// Area - surface value
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub value: f64,
    pub unit: Option<AreaMeasurement>,
    pub area_type: AreaType,
}

impl Area {
    pub fn new(value: f64, unit: Option<AreaMeasurement>) -> Self {
        Self {
            value,
            unit,
            area_type: AreaType::NotSpecified,
        }
    }
}

// ==========================================
// Period - whole-year span
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub years: i32,
}

impl Period {
    pub fn years(years: i32) -> Self {
        Self { years }
    }
}

// ==========================================
// AreaMeasurement - area unit system
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AreaMeasurement {
    Sqm,
    Sqft,
    Tsubo,
    NotSpecified,
}

impl fmt::Display for AreaMeasurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AreaMeasurement::Sqm => write!(f, "SQM"),
            AreaMeasurement::Sqft => write!(f, "SQFT"),
            AreaMeasurement::Tsubo => write!(f, "TSUBO"),
            AreaMeasurement::NotSpecified => write!(f, "NOT_SPECIFIED"),
        }
    }
}

// ==========================================
// AreaType
// ==========================================
// The BIIS sheet carries no area-type information; every
// imported area is NOT_SPECIFIED.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AreaType {
    NotSpecified,
}

// ==========================================
// UseType - primary/secondary usage
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UseType {
    Office,
    Retail,
    Industry,
    Gastronomy,
    Hotel,
    Residential,
    Leisure,
    Parking,
    Other,
    NotSpecified,
}

// ==========================================
// OwnershipType
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OwnershipType {
    Freeholder,
    Leasehold,
    Other,
}

// ==========================================
// ValuationType1 - appraisal commission type
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValuationType1 {
    Fund,
    Private,
    Court,
    ThirdPerson,
}

// ==========================================
// ValuationType2 - appraisal occasion
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValuationType2 {
    Unknown,
    FirstValuation,
    Revaluation,
    MarketValuationReport,
}

// ==========================================
// RetailLocationType
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetailLocationType {
    HighStreet,
    CityCentreOther,
    MajorRoute,
    SuburbanOther,
    NonUrban,
    Unknown,
}

// ==========================================
// ObjectCondition - structural condition grade
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ObjectCondition {
    New,
    AgeAppropriate,
    InNeedOfRepair,
    NotAvailable,
}

// ==========================================
// InteriorQuality - fit-out grade
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteriorQuality {
    Luxury,
    Sophisticated,
    Normal,
    Simple,
}

// ==========================================
// ConstructionPhase - state of completion
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConstructionPhase {
    Completed,
    InCompletion,
    Planned,
    Other,
}

// ==========================================
// Country (ISO 3166-1 alpha-2 subset)
// ==========================================
// Closed table over the country codes the exchange format uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Country {
    AT, AU, BE, BG, CA, CH, CN, CZ, DE, DK, EE, ES, FI, FR, GB, GR, HR, HU, IE, IT, JP, LT, LU,
    LV, NL, NO, PL, PT, RO, RU, SE, SI, SK, TR, UA, US,
}

impl Country {
    /// Looks up a country by its ISO alpha-2 code. Unknown codes
    /// yield `None`; the caller decides whether that is an error.
    pub fn from_alpha2(code: &str) -> Option<Self> {
        use Country::*;
        let country = match code.trim() {
            "AT" => AT, "AU" => AU, "BE" => BE, "BG" => BG, "CA" => CA, "CH" => CH,
            "CN" => CN, "CZ" => CZ, "DE" => DE, "DK" => DK, "EE" => EE, "ES" => ES,
            "FI" => FI, "FR" => FR, "GB" => GB, "GR" => GR, "HR" => HR, "HU" => HU,
            "IE" => IE, "IT" => IT, "JP" => JP, "LT" => LT, "LU" => LU, "LV" => LV,
            "NL" => NL, "NO" => NO, "PL" => PL, "PT" => PT, "RO" => RO, "RU" => RU,
            "SE" => SE, "SI" => SI, "SK" => SK, "TR" => TR, "UA" => UA, "US" => US,
            _ => return None,
        };
        Some(country)
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("EUR").unwrap().code(), "EUR");
        assert_eq!(Currency::from_code(" EUR ").unwrap().code(), "EUR");
        assert!(Currency::from_code("XXZ").is_none());
        assert!(Currency::from_code("").is_none());
    }

    #[test]
    fn test_amount_without_currency() {
        let amount = Amount::new(1000.0, None);
        assert_eq!(amount.value, 1000.0);
        assert!(amount.currency.is_none());
    }

    #[test]
    fn test_area_defaults_to_not_specified_type() {
        let area = Area::new(250.5, Some(AreaMeasurement::Sqm));
        assert_eq!(area.area_type, AreaType::NotSpecified);
    }

    #[test]
    fn test_country_from_alpha2() {
        assert_eq!(Country::from_alpha2("DE"), Some(Country::DE));
        assert_eq!(Country::from_alpha2("ZZ"), None);
    }
}
