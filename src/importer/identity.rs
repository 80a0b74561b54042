// ==========================================
// BIIS Import - Identity Resolver
// ==========================================
// Two independent rules: property identity keyed on the
// business object id, valuation identity keyed on the
// composite "{expert id}_{ISO appraisal date}". The registry
// outlives every row; handles never leak across rows.
// ==========================================

use crate::domain::property::{Property, Valuation};
use crate::importer::error::{ImportError, ImportResult};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Property registry of one import run, keyed by business id.
pub type PropertyRegistry = BTreeMap<String, Property>;

// ==========================================
// PropertyHandle - the row's view on its property
// ==========================================
// Detached until the business-id column resolves it; once the
// id is known the row addresses the registry entry, and the
// detached instance is either registered (first sight) or
// discarded (repeat id).
#[derive(Debug)]
pub enum PropertyHandle {
    Detached(Property),
    Registered(String),
}

impl PropertyHandle {
    pub fn new() -> Self {
        PropertyHandle::Detached(Property::default())
    }

    /// True once the business-id column has been processed.
    pub fn is_registered(&self) -> bool {
        matches!(self, PropertyHandle::Registered(_))
    }

    /// Mutable access to the property this handle stands for.
    pub fn resolve_mut<'a>(
        &'a mut self,
        registry: &'a mut PropertyRegistry,
    ) -> ImportResult<&'a mut Property> {
        match self {
            PropertyHandle::Detached(prop) => Ok(prop),
            PropertyHandle::Registered(id) => registry.get_mut(id).ok_or_else(|| {
                ImportError::Internal(format!("registered property '{}' missing from registry", id))
            }),
        }
    }
}

impl Default for PropertyHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolves property identity for a business id.
///
/// First sight registers the row's property under the id and
/// stamps its sender/receiver ids. A repeat id substitutes the
/// registered instance; property fields set earlier in the row
/// are lost with the discarded fresh instance.
pub fn resolve_property(
    registry: &mut PropertyRegistry,
    handle: &mut PropertyHandle,
    property_id: &str,
) -> ImportResult<()> {
    if registry.contains_key(property_id) {
        *handle = PropertyHandle::Registered(property_id.to_string());
        return Ok(());
    }

    let previous = std::mem::replace(handle, PropertyHandle::Registered(property_id.to_string()));
    let mut property = match previous {
        PropertyHandle::Detached(prop) => prop,
        // A second id column in the same row re-registers the current state.
        PropertyHandle::Registered(old_id) => registry
            .get(&old_id)
            .cloned()
            .ok_or_else(|| {
                ImportError::Internal(format!("registered property '{}' missing from registry", old_id))
            })?,
    };

    property.object_id_sender = Some(property_id.to_string());
    property.object_id_receiver = Some(property_id.to_string());
    registry.insert(property_id.to_string(), property);

    Ok(())
}

/// Composite valuation key: `expertId + "_" + ISO date`.
pub fn valuation_key(expert_id: &str, valid_from: NaiveDate) -> String {
    format!("{}_{}", expert_id, valid_from.format("%Y-%m-%d"))
}

/// Single post-row valuation-identity step.
///
/// Computes the composite key once both dependent fields are
/// known, stamps it on the valuation and inserts the valuation
/// into the owning property. Inserting an existing key
/// overwrites, so the step is idempotent by construction.
/// Returns the key, or `None` when either field is missing.
pub fn attach_valuation(property: &mut Property, valuation: &mut Valuation) -> Option<String> {
    let expert_id = valuation.expert_id.as_deref()?;
    let valid_from = valuation.valid_from?;

    let key = valuation_key(expert_id, valid_from);
    valuation.object_id_sender = Some(key.clone());
    property.valuations.insert(key.clone(), valuation.clone());

    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sight_registers_property() {
        let mut registry = PropertyRegistry::new();
        let mut handle = PropertyHandle::new();

        resolve_property(&mut registry, &mut handle, "P1").unwrap();

        assert!(handle.is_registered());
        let prop = &registry["P1"];
        assert_eq!(prop.object_id_sender.as_deref(), Some("P1"));
        assert_eq!(prop.object_id_receiver.as_deref(), Some("P1"));
    }

    #[test]
    fn test_repeat_id_substitutes_existing_instance() {
        let mut registry = PropertyRegistry::new();

        // row 1 registers P1 with a label
        let mut first = PropertyHandle::new();
        first
            .resolve_mut(&mut registry)
            .unwrap()
            .label = Some("Hauptstrasse 1".to_string());
        resolve_property(&mut registry, &mut first, "P1").unwrap();

        // row 2 sets a label on its fresh property, then hits the same id
        let mut second = PropertyHandle::new();
        second
            .resolve_mut(&mut registry)
            .unwrap()
            .label = Some("lost label".to_string());
        resolve_property(&mut registry, &mut second, "P1").unwrap();

        assert_eq!(registry.len(), 1);
        // the fresh property of row 2 was discarded
        assert_eq!(registry["P1"].label.as_deref(), Some("Hauptstrasse 1"));
    }

    #[test]
    fn test_valuation_key_format() {
        let date = NaiveDate::from_ymd_opt(2014, 3, 1).unwrap();
        assert_eq!(valuation_key("4711", date), "4711_2014-03-01");
    }

    #[test]
    fn test_attach_requires_both_fields() {
        let mut property = Property::default();
        let mut valuation = Valuation::default();

        valuation.expert_id = Some("4711".to_string());
        assert_eq!(attach_valuation(&mut property, &mut valuation), None);

        valuation.valid_from = NaiveDate::from_ymd_opt(2014, 3, 1);
        let key = attach_valuation(&mut property, &mut valuation).unwrap();
        assert_eq!(key, "4711_2014-03-01");
        assert_eq!(valuation.object_id_sender.as_deref(), Some("4711_2014-03-01"));
        assert_eq!(property.valuations.len(), 1);
    }

    #[test]
    fn test_attach_is_idempotent_per_key() {
        let mut property = Property::default();
        let mut valuation = Valuation::default();
        valuation.expert_id = Some("4711".to_string());
        valuation.valid_from = NaiveDate::from_ymd_opt(2014, 3, 1);

        attach_valuation(&mut property, &mut valuation);
        valuation.owner = Some("fund B".to_string());
        attach_valuation(&mut property, &mut valuation);

        assert_eq!(property.valuations.len(), 1);
        assert_eq!(
            property.valuations["4711_2014-03-01"].owner.as_deref(),
            Some("fund B")
        );
    }
}
