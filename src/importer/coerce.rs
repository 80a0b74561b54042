// ==========================================
// BIIS Import - Coercion Library
// ==========================================
// Pure functions from typed cell values to domain values.
// Absent input propagates as None. Closed-enumeration tables
// fail hard on codes outside the table: an unmapped code means
// a new format revision or bad data, never a default.
// ==========================================

use crate::domain::types::{
    Amount, Area, AreaMeasurement, ConstructionPhase, Country, Currency, InteriorQuality,
    ObjectCondition, OwnershipType, Period, RetailLocationType, UseType, ValuationType1,
    ValuationType2,
};
use crate::importer::cell_reader::CellValue;
use crate::importer::error::CoerceError;
use chrono::NaiveDate;

// ==========================================
// scalar coercions
// ==========================================

/// Date: accepted from a date-kind value only. No string parsing.
pub fn date(value: Option<&CellValue>) -> Option<NaiveDate> {
    match value {
        Some(CellValue::Date(d)) => Some(*d),
        _ => None,
    }
}

/// Number: accepted from a numeric-kind value only. Numeric-looking
/// text stays None.
pub fn number(value: Option<&CellValue>) -> Option<f64> {
    match value {
        Some(CellValue::Number(f)) => Some(*f),
        _ => None,
    }
}

/// Whole count (parking lots etc.), truncated from a numeric value.
pub fn count(value: Option<&CellValue>) -> Option<i32> {
    number(value).map(|f| f as i32)
}

/// Boolean: boolean-kind directly, or the strings TRUE/FALSE in any
/// case. Other text is absent data, not an error.
pub fn boolean(value: Option<&CellValue>) -> Option<bool> {
    match value {
        Some(CellValue::Bool(b)) => Some(*b),
        Some(other) => match other.as_text() {
            Some(text) if text.eq_ignore_ascii_case("TRUE") => Some(true),
            Some(text) if text.eq_ignore_ascii_case("FALSE") => Some(false),
            _ => None,
        },
        None => None,
    }
}

/// Year column: a digits/dots/dashes string whose first four
/// characters name the year, normalized to January 1. Any other
/// shape is a hard failure.
pub fn year(value: Option<&CellValue>) -> Result<Option<NaiveDate>, CoerceError> {
    let Some(text) = value.and_then(|v| v.as_text()) else {
        return Ok(None);
    };

    let malformed = || CoerceError::MalformedYear { value: text.clone() };

    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
        return Err(malformed());
    }
    if text.len() < 4 {
        return Err(malformed());
    }

    let year: i32 = text[..4].parse().map_err(|_| malformed())?;
    NaiveDate::from_ymd_opt(year, 1, 1)
        .map(Some)
        .ok_or_else(malformed)
}

/// Monetary amount: numeric value plus the sticky row currency.
/// No number, no amount - independent of whether a currency is set.
pub fn amount(value: Option<&CellValue>, currency: Option<&Currency>) -> Option<Amount> {
    number(value).map(|v| Amount::new(v, currency.cloned()))
}

/// Surface area: numeric value plus the sticky row area unit.
pub fn area(value: Option<&CellValue>, unit: Option<AreaMeasurement>) -> Option<Area> {
    number(value).map(|v| Area::new(v, unit))
}

/// Year span where the caller guarantees a numeric value; absence
/// is a hard failure.
pub fn period_years(
    value: Option<&CellValue>,
    field: &'static str,
) -> Result<Period, CoerceError> {
    number(value)
        .map(|v| Period::years(v as i32))
        .ok_or(CoerceError::MissingNumber { field })
}

/// Year span tolerating an absent value (economic-life columns).
pub fn period_years_opt(value: Option<&CellValue>) -> Option<Period> {
    number(value).map(|v| Period::years(v as i32))
}

// ==========================================
// closed enumeration tables
// ==========================================

/// ISO 4217 currency code.
pub fn currency(code: Option<&str>) -> Result<Option<Currency>, CoerceError> {
    let Some(code) = code else {
        return Ok(None);
    };
    Currency::from_code(code)
        .map(Some)
        .ok_or_else(|| CoerceError::UnknownCurrency {
            value: code.to_string(),
        })
}

/// ISO 3166-1 alpha-2 country code.
pub fn country(code: Option<&str>) -> Result<Option<Country>, CoerceError> {
    let Some(code) = code else {
        return Ok(None);
    };
    Country::from_alpha2(code)
        .map(Some)
        .ok_or_else(|| CoerceError::UnknownCode {
            field: "country",
            value: code.to_string(),
        })
}

pub fn area_measurement(code: Option<&str>) -> Result<Option<AreaMeasurement>, CoerceError> {
    let Some(code) = code else {
        return Ok(None);
    };
    let unit = match code {
        "sqft" => AreaMeasurement::Sqft,
        "qm" => AreaMeasurement::Sqm,
        "tsubo" | "pyeong" => AreaMeasurement::Tsubo,
        _ => {
            return Err(CoerceError::UnknownCode {
                field: "area measurement",
                value: code.to_string(),
            })
        }
    };
    Ok(Some(unit))
}

pub fn use_type(code: Option<&str>) -> Result<Option<UseType>, CoerceError> {
    let Some(code) = code else {
        return Ok(None);
    };
    let use_type = match code {
        "Buero" => UseType::Office,
        "Handel" => UseType::Retail,
        "Industrie(Lager,Hallen)" => UseType::Industry,
        "Keller/Archiv" => UseType::Other,
        "Gastronomie" => UseType::Gastronomy,
        "Hotel" => UseType::Hotel,
        "Wohnen" => UseType::Residential,
        "Freizeit" => UseType::Leisure,
        "Garage/TG" | "Aussenstellplaetze" => UseType::Parking,
        "unbekannt" => UseType::NotSpecified,
        _ => {
            return Err(CoerceError::UnknownCode {
                field: "use type",
                value: code.to_string(),
            })
        }
    };
    Ok(Some(use_type))
}

/// Ownership type: keyed on the leading digit of the BIIS code.
pub fn ownership_type(code: Option<&str>) -> Result<Option<OwnershipType>, CoerceError> {
    let Some(code) = code else {
        return Ok(None);
    };
    let ownership = match code.chars().next() {
        Some('0') | Some('1') | Some('3') | Some('4') | Some('6') => OwnershipType::Other,
        Some('2') => OwnershipType::Leasehold,
        Some('5') => OwnershipType::Freeholder,
        _ => {
            return Err(CoerceError::UnknownCode {
                field: "ownership type",
                value: code.to_string(),
            })
        }
    };
    Ok(Some(ownership))
}

pub fn valuation_type1(code: Option<&str>) -> Result<Option<ValuationType1>, CoerceError> {
    let Some(code) = code else {
        return Ok(None);
    };
    let kind = match code {
        "Fondsgutachten" => ValuationType1::Fund,
        "Privatgutachten" => ValuationType1::Private,
        "Gerichtsgutachten" => ValuationType1::Court,
        "Fremdgutachten" => ValuationType1::ThirdPerson,
        _ => {
            return Err(CoerceError::UnknownCode {
                field: "valuation type 1",
                value: code.to_string(),
            })
        }
    };
    Ok(Some(kind))
}

pub fn valuation_type2(code: Option<&str>) -> Result<Option<ValuationType2>, CoerceError> {
    let Some(code) = code else {
        return Ok(None);
    };
    let kind = match code {
        "U" => ValuationType2::Unknown,
        "E" => ValuationType2::FirstValuation,
        "N" => ValuationType2::Revaluation,
        "V" => ValuationType2::MarketValuationReport,
        _ => {
            return Err(CoerceError::UnknownCode {
                field: "valuation type 2",
                value: code.to_string(),
            })
        }
    };
    Ok(Some(kind))
}

pub fn retail_location(code: Option<&str>) -> Result<Option<RetailLocationType>, CoerceError> {
    let Some(code) = code else {
        return Ok(None);
    };
    let location = match code {
        "1a" => RetailLocationType::HighStreet,
        "1b" => RetailLocationType::CityCentreOther,
        "2a" => RetailLocationType::MajorRoute,
        "2b" => RetailLocationType::SuburbanOther,
        "c" => RetailLocationType::NonUrban,
        "(unbekannt)" | "unbekannt" => RetailLocationType::Unknown,
        _ => {
            return Err(CoerceError::UnknownCode {
                field: "retail location",
                value: code.to_string(),
            })
        }
    };
    Ok(Some(location))
}

pub fn condition(code: Option<&str>) -> Result<Option<ObjectCondition>, CoerceError> {
    let Some(code) = code else {
        return Ok(None);
    };
    let condition = match code {
        "sehr gut" => ObjectCondition::New,
        "gut" | "durchschnittlich" => ObjectCondition::AgeAppropriate,
        "schlecht" => ObjectCondition::InNeedOfRepair,
        "(unbekannt)" => ObjectCondition::NotAvailable,
        _ => {
            return Err(CoerceError::UnknownCode {
                field: "condition",
                value: code.to_string(),
            })
        }
    };
    Ok(Some(condition))
}

pub fn interior_quality(code: Option<&str>) -> Result<Option<InteriorQuality>, CoerceError> {
    let Some(code) = code else {
        return Ok(None);
    };
    let quality = match code {
        "stark gehoben" => InteriorQuality::Luxury,
        "gehoben" => InteriorQuality::Sophisticated,
        "mittel" => InteriorQuality::Normal,
        "einfach" | "(unbekannt)" => InteriorQuality::Simple,
        _ => {
            return Err(CoerceError::UnknownCode {
                field: "interior quality",
                value: code.to_string(),
            })
        }
    };
    Ok(Some(quality))
}

/// State of completion: F/I/P, or any code with a leading zero.
pub fn construction_phase(code: Option<&str>) -> Result<Option<ConstructionPhase>, CoerceError> {
    let Some(code) = code else {
        return Ok(None);
    };
    let phase = match code {
        "F" => ConstructionPhase::Completed,
        "I" => ConstructionPhase::InCompletion,
        "P" => ConstructionPhase::Planned,
        _ if code.starts_with('0') => ConstructionPhase::Other,
        _ => {
            return Err(CoerceError::UnknownCode {
                field: "construction phase",
                value: code.to_string(),
            })
        }
    };
    Ok(Some(phase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_from_date_kind() {
        let d = NaiveDate::from_ymd_opt(2014, 3, 1).unwrap();
        assert_eq!(date(Some(&CellValue::Date(d))), Some(d));
        assert_eq!(date(Some(&CellValue::Text("2014-03-01".to_string()))), None);
        assert_eq!(date(None), None);
    }

    #[test]
    fn test_number_rejects_numeric_looking_text() {
        assert_eq!(number(Some(&CellValue::Number(12.5))), Some(12.5));
        assert_eq!(number(Some(&CellValue::Text("12.5".to_string()))), None);
        assert_eq!(number(None), None);
    }

    #[test]
    fn test_boolean_fallback_from_text() {
        assert_eq!(boolean(Some(&CellValue::Bool(false))), Some(false));
        assert_eq!(boolean(Some(&CellValue::Text("TRUE".to_string()))), Some(true));
        assert_eq!(boolean(Some(&CellValue::Text("true".to_string()))), Some(true));
        assert_eq!(boolean(Some(&CellValue::Text("ja".to_string()))), None);
    }

    #[test]
    fn test_year_normalizes_to_january_first() {
        let result = year(Some(&CellValue::Text("1985".to_string()))).unwrap();
        assert_eq!(result, NaiveDate::from_ymd_opt(1985, 1, 1));

        // numeric year cells render as digit strings first
        let result = year(Some(&CellValue::Number(1985.0))).unwrap();
        assert_eq!(result, NaiveDate::from_ymd_opt(1985, 1, 1));
    }

    #[test]
    fn test_year_rejects_other_shapes() {
        assert!(year(Some(&CellValue::Text("ca. 1985".to_string()))).is_err());
        assert!(year(Some(&CellValue::Text("85".to_string()))).is_err());
        assert_eq!(year(None).unwrap(), None);
    }

    #[test]
    fn test_amount_null_iff_number_null() {
        let eur = Currency::from_code("EUR").unwrap();
        // currency set, number absent -> None
        assert_eq!(amount(None, Some(&eur)), None);
        // number set, currency absent -> amount without currency
        let a = amount(Some(&CellValue::Number(1000.0)), None).unwrap();
        assert_eq!(a.value, 1000.0);
        assert!(a.currency.is_none());
    }

    #[test]
    fn test_period_years_missing_number_is_hard_failure() {
        assert!(matches!(
            period_years(None, "ground lease"),
            Err(CoerceError::MissingNumber { .. })
        ));
        let p = period_years(Some(&CellValue::Number(12.9)), "ground lease")
            .unwrap();
        assert_eq!(p.years, 12);
        assert_eq!(period_years_opt(None), None);
    }

    #[test]
    fn test_area_measurement_table() {
        assert_eq!(
            area_measurement(Some("qm")).unwrap(),
            Some(AreaMeasurement::Sqm)
        );
        assert_eq!(
            area_measurement(Some("pyeong")).unwrap(),
            Some(AreaMeasurement::Tsubo)
        );
        assert_eq!(area_measurement(None).unwrap(), None);
        assert!(area_measurement(Some("acre")).is_err());
    }

    #[test]
    fn test_use_type_table() {
        assert_eq!(use_type(Some("Buero")).unwrap(), Some(UseType::Office));
        assert_eq!(
            use_type(Some("Aussenstellplaetze")).unwrap(),
            Some(UseType::Parking)
        );
        assert_eq!(
            use_type(Some("unbekannt")).unwrap(),
            Some(UseType::NotSpecified)
        );
        assert!(matches!(
            use_type(Some("Bahnhof")),
            Err(CoerceError::UnknownCode { .. })
        ));
    }

    #[test]
    fn test_ownership_type_uses_leading_digit() {
        assert_eq!(
            ownership_type(Some("5 - Volleigentum")).unwrap(),
            Some(OwnershipType::Freeholder)
        );
        assert_eq!(
            ownership_type(Some("2")).unwrap(),
            Some(OwnershipType::Leasehold)
        );
        assert!(ownership_type(Some("9")).is_err());
    }

    #[test]
    fn test_valuation_type_tables() {
        assert_eq!(
            valuation_type1(Some("Fondsgutachten")).unwrap(),
            Some(ValuationType1::Fund)
        );
        assert!(valuation_type1(Some("Hausgutachten")).is_err());
        assert_eq!(
            valuation_type2(Some("E")).unwrap(),
            Some(ValuationType2::FirstValuation)
        );
        assert!(valuation_type2(Some("X")).is_err());
    }

    #[test]
    fn test_grade_tables() {
        assert_eq!(
            retail_location(Some("1a")).unwrap(),
            Some(RetailLocationType::HighStreet)
        );
        assert_eq!(
            condition(Some("durchschnittlich")).unwrap(),
            Some(ObjectCondition::AgeAppropriate)
        );
        assert_eq!(
            interior_quality(Some("stark gehoben")).unwrap(),
            Some(InteriorQuality::Luxury)
        );
        assert_eq!(
            construction_phase(Some("0 unbekannt")).unwrap(),
            Some(ConstructionPhase::Other)
        );
        assert!(construction_phase(Some("X")).is_err());
    }

    #[test]
    fn test_currency_coercion() {
        assert_eq!(
            currency(Some("EUR")).unwrap().unwrap().code(),
            "EUR"
        );
        assert_eq!(currency(None).unwrap(), None);
        assert!(matches!(
            currency(Some("EURO")),
            Err(CoerceError::UnknownCurrency { .. })
        ));
    }
}
