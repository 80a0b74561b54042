// ==========================================
// BIIS Import - Valuation Validator Boundary
// ==========================================
// External-collaborator seam: every assembled Valuation is
// handed to a ValuationValidator; a rejection is a row-level
// failure for the orchestrator. Rejection is observational,
// already-merged data stays in the container.
// ==========================================

use crate::domain::property::Valuation;
use serde::Serialize;
use std::fmt;

// ==========================================
// ValidationViolation - one structured finding
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationViolation {
    pub field: String,
    pub message: String,
}

// ==========================================
// ValidationFailure - structured rejection
// ==========================================
#[derive(Debug, Clone)]
pub struct ValidationFailure {
    pub violations: Vec<ValidationViolation>,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} violation(s)", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "; {}: {}", violation.field, violation.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}

// ==========================================
// ValuationValidator Trait
// ==========================================
pub trait ValuationValidator {
    /// Validates one fully-assembled valuation against the
    /// format-subset rules. `Err` carries every violation found.
    fn validate(&self, valuation: &Valuation) -> Result<(), ValidationFailure>;
}

// ==========================================
// Subset57Validator - default subset 5.7 checks
// ==========================================
pub struct Subset57Validator;

impl ValuationValidator for Subset57Validator {
    fn validate(&self, valuation: &Valuation) -> Result<(), ValidationFailure> {
        let mut violations = Vec::new();

        if valuation.object_id_sender.is_none() {
            violations.push(ValidationViolation {
                field: "object_id_sender".to_string(),
                message: "valuation id missing".to_string(),
            });
        }

        if valuation.valid_from.is_none() {
            violations.push(ValidationViolation {
                field: "valid_from".to_string(),
                message: "appraisal date missing".to_string(),
            });
        }

        if valuation.expert_id.is_none() {
            violations.push(ValidationViolation {
                field: "expert_id".to_string(),
                message: "expert id missing".to_string(),
            });
        }

        for (field, share) in [
            ("use_type_primary_share", valuation.use_type_primary_share),
            (
                "use_type_secondary_share",
                valuation.use_type_secondary_share,
            ),
        ] {
            if let Some(share) = share {
                if !(0.0..=100.0).contains(&share) {
                    violations.push(ValidationViolation {
                        field: field.to_string(),
                        message: format!("usage share out of range [0, 100]: {}", share),
                    });
                }
            }
        }

        for (field, area) in [
            ("plot_area", &valuation.plot_area),
            ("total_gross_floor_space", &valuation.total_gross_floor_space),
            ("total_rentable_area", &valuation.total_rentable_area),
        ] {
            if let Some(area) = area {
                if area.value < 0.0 {
                    violations.push(ValidationViolation {
                        field: field.to_string(),
                        message: format!("negative area: {}", area.value),
                    });
                }
            }
        }

        if let Some(fair_value) = &valuation.fair_value {
            if fair_value.value < 0.0 {
                violations.push(ValidationViolation {
                    field: "fair_value".to_string(),
                    message: format!("negative market value: {}", fair_value.value),
                });
            }
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure { violations })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn assembled_valuation() -> Valuation {
        let mut valuation = Valuation::default();
        valuation.object_id_sender = Some("4711_2014-03-01".to_string());
        valuation.expert_id = Some("4711".to_string());
        valuation.valid_from = NaiveDate::from_ymd_opt(2014, 3, 1);
        valuation
    }

    #[test]
    fn test_assembled_valuation_passes() {
        assert!(Subset57Validator.validate(&assembled_valuation()).is_ok());
    }

    #[test]
    fn test_missing_identity_rejected() {
        let failure = Subset57Validator
            .validate(&Valuation::default())
            .unwrap_err();
        assert!(failure
            .violations
            .iter()
            .any(|v| v.field == "object_id_sender"));
        assert!(failure.violations.iter().any(|v| v.field == "expert_id"));
    }

    #[test]
    fn test_share_out_of_range_rejected() {
        let mut valuation = assembled_valuation();
        valuation.use_type_primary_share = Some(140.0);
        let failure = Subset57Validator.validate(&valuation).unwrap_err();
        assert!(failure
            .violations
            .iter()
            .any(|v| v.field == "use_type_primary_share"));
    }
}
