// ==========================================
// BIIS Import - Property / Valuation Entities
// ==========================================
// One Property per business object id; one Valuation per
// appraisal event, keyed inside its Property by the composite
// key "{expert id}_{appraisal date}".
// ==========================================

use crate::domain::types::{
    Amount, Area, ConstructionPhase, Country, Currency, InteriorQuality, ObjectCondition,
    OwnershipType, Period, RetailLocationType, UseType, ValuationType1, ValuationType2,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// Property - real-estate object
// ==========================================
// Created on first sight of a business id, mutated in place by
// every later row carrying the same id, never deleted during an
// import.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Property {
    pub label: Option<String>,
    pub object_id_sender: Option<String>,
    pub object_id_receiver: Option<String>,

    /// Valuations keyed by composite valuation key; insertion
    /// with an existing key overwrites.
    pub valuations: BTreeMap<String, Valuation>,
}

// ==========================================
// Address - embedded location group
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: Option<String>,
    pub housenumber: Option<String>,
    pub zip: Option<String>,
    pub city: Option<String>,
    pub country: Option<Country>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub label: Option<String>,
}

// ==========================================
// Valuation - one appraisal event
// ==========================================
// One data row assembles exactly one Valuation. Every field is
// optional; the sheet decides which columns are present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Valuation {
    // ===== identity =====
    pub object_id_sender: Option<String>,
    pub expert_id: Option<String>,
    pub expert_name: Option<String>,
    pub label: Option<String>,

    // ===== location =====
    pub address: Address,

    // ===== dates =====
    pub valuation_date: Option<NaiveDate>,
    pub valid_from: Option<NaiveDate>,

    // ===== parties / remarks =====
    pub owner: Option<String>,
    pub note: Option<String>,

    // ===== currency =====
    pub currency: Option<Currency>,
    pub exchange_rate_to_eur: Option<f64>,
    pub exchange_rate_date: Option<NaiveDate>,

    // ===== usage =====
    pub use_type_primary: Option<UseType>,
    pub use_type_primary_share: Option<f64>,
    pub use_type_secondary: Option<UseType>,
    pub use_type_secondary_share: Option<f64>,

    // ===== classification =====
    pub ownership_type: Option<OwnershipType>,
    pub valuation_type1: Option<ValuationType1>,
    pub valuation_type2: Option<ValuationType2>,
    pub retail_location: Option<RetailLocationType>,
    pub condition: Option<ObjectCondition>,
    pub interior_quality: Option<InteriorQuality>,
    pub construction_phase: Option<ConstructionPhase>,
    pub single_tenant: Option<bool>,
    pub maintenance_backlog: Option<bool>,
    pub floor_description: Option<String>,

    // ===== transactions =====
    pub purchase_net_price: Option<Amount>,
    pub purchase_date: Option<NaiveDate>,
    pub sale_net_price: Option<Amount>,
    pub sale_date: Option<NaiveDate>,

    // ===== construction / economic life =====
    pub construction_date: Option<NaiveDate>,
    pub economic_construction_date: Option<NaiveDate>,
    pub normal_total_economic_life: Option<Period>,
    pub remaining_economic_life: Option<Period>,
    pub change_date_for_remaining_economic_life: Option<NaiveDate>,

    // ===== plot / building areas =====
    pub plot_area: Option<Area>,
    pub gfz: Option<f64>,
    pub grz: Option<f64>,
    pub gross_floor_space_overground: Option<Area>,
    pub gross_floor_space_below_ground: Option<Area>,
    pub total_gross_floor_space: Option<Area>,
    pub total_rentable_area: Option<Area>,

    // ===== operating costs =====
    pub running_costs: Option<Amount>,
    pub management_costs: Option<Amount>,
    pub maintenance_expenses: Option<Amount>,
    pub rent_allowance: Option<Amount>,
    pub other_operating_expenses: Option<Amount>,

    // ===== value chain =====
    pub capitalization_rate: Option<f64>,
    pub value_by_income_approach_without_premiums_discounts: Option<Amount>,
    pub discounts_premiums: Option<Amount>,
    pub deduction_for_vacancy: Option<Amount>,
    pub deduction_construction_works: Option<Amount>,
    pub others_discounts_premiums: Option<Amount>,
    pub value_by_income_approach: Option<Amount>,
    pub cost_approach: Option<Amount>,
    pub land_value: Option<Amount>,
    pub fair_value: Option<Amount>,

    // ===== ground lease =====
    pub ground_lease: Option<bool>,
    pub remaining_life_of_ground_lease: Option<Period>,
    pub ground_rent: Option<Amount>,
    pub ground_lease_remarks: Option<String>,

    // ===== rental situation: office =====
    pub rental_situation_office_let_area: Option<Area>,
    pub rental_situation_office_contractual_annual_rent: Option<Amount>,
    pub rental_situation_office_estimated_annual_rent_for_let_area: Option<Amount>,
    pub rental_situation_office_vacant_area: Option<Area>,
    pub rental_situation_office_estimated_annual_rent_for_vacant_area: Option<Amount>,

    // ===== rental situation: retail =====
    pub rental_situation_retail_let_area: Option<Area>,
    pub rental_situation_retail_contractual_annual_rent: Option<Amount>,
    pub rental_situation_retail_estimated_annual_rent_for_let_area: Option<Amount>,
    pub rental_situation_retail_vacant_area: Option<Area>,
    pub rental_situation_retail_estimated_annual_rent_for_vacant_area: Option<Amount>,

    // ===== rental situation: storage =====
    pub rental_situation_storage_let_area: Option<Area>,
    pub rental_situation_storage_contractual_annual_rent: Option<Amount>,
    pub rental_situation_storage_estimated_annual_rent_for_let_area: Option<Amount>,
    pub rental_situation_storage_vacant_area: Option<Area>,
    pub rental_situation_storage_estimated_annual_rent_for_vacant_area: Option<Amount>,

    // ===== rental situation: archive =====
    pub rental_situation_archive_let_area: Option<Area>,
    pub rental_situation_archive_contractual_annual_rent: Option<Amount>,
    pub rental_situation_archive_estimated_annual_rent_for_let_area: Option<Amount>,
    pub rental_situation_archive_vacant_area: Option<Area>,
    pub rental_situation_archive_estimated_annual_rent_for_vacant_area: Option<Amount>,

    // ===== rental situation: gastro =====
    pub rental_situation_gastro_let_area: Option<Area>,
    pub rental_situation_gastro_contractual_annual_rent: Option<Amount>,
    pub rental_situation_gastro_estimated_annual_rent_for_let_area: Option<Amount>,
    pub rental_situation_gastro_vacant_area: Option<Area>,
    pub rental_situation_gastro_estimated_annual_rent_for_vacant_area: Option<Amount>,

    // ===== rental situation: residential =====
    pub rental_situation_residential_let_area: Option<Area>,
    pub rental_situation_residential_contractual_annual_rent: Option<Amount>,
    pub rental_situation_residential_estimated_annual_rent_for_let_area: Option<Amount>,
    pub rental_situation_residential_vacant_area: Option<Area>,
    pub rental_situation_residential_estimated_annual_rent_for_vacant_area: Option<Amount>,

    // ===== rental situation: hotel =====
    pub rental_situation_hotel_let_area: Option<Area>,
    pub rental_situation_hotel_contractual_annual_rent: Option<Amount>,
    pub rental_situation_hotel_estimated_annual_rent_for_let_area: Option<Amount>,
    pub rental_situation_hotel_vacant_area: Option<Area>,
    pub rental_situation_hotel_estimated_annual_rent_for_vacant_area: Option<Amount>,

    // ===== rental situation: leisure =====
    pub rental_situation_leisure_let_area: Option<Area>,
    pub rental_situation_leisure_contractual_annual_rent: Option<Amount>,
    pub rental_situation_leisure_estimated_annual_rent_for_let_area: Option<Amount>,
    pub rental_situation_leisure_vacant_area: Option<Area>,
    pub rental_situation_leisure_estimated_annual_rent_for_vacant_area: Option<Amount>,

    // ===== rental situation: indoor parking (counts) =====
    pub rental_situation_indoorparking_let_numbers: Option<i32>,
    pub rental_situation_indoorparking_contractual_annual_rent: Option<Amount>,
    pub rental_situation_indoorparking_estimated_annual_rent_for_let_numbers: Option<Amount>,
    pub rental_situation_indoorparking_vacant_numbers: Option<i32>,
    pub rental_situation_indoorparking_estimated_annual_rent_for_vacant_numbers: Option<Amount>,

    // ===== rental situation: outside parking (counts) =====
    pub rental_situation_outsideparking_let_numbers: Option<i32>,
    pub rental_situation_outsideparking_contractual_annual_rent: Option<Amount>,
    pub rental_situation_outsideparking_estimated_annual_rent_for_let_numbers: Option<Amount>,
    pub rental_situation_outsideparking_vacant_numbers: Option<i32>,
    pub rental_situation_outsideparking_estimated_annual_rent_for_vacant_numbers: Option<Amount>,

    // ===== rental situation: misc area 1 =====
    pub rental_situation_misc_area1_let_area: Option<Area>,
    pub rental_situation_misc_area1_contractual_annual_rent: Option<Amount>,
    pub rental_situation_misc_area1_estimated_annual_rent_for_let_area: Option<Amount>,
    pub rental_situation_misc_area1_vacant_area: Option<Area>,
    pub rental_situation_misc_area1_estimated_annual_rent_for_vacant_area: Option<Amount>,

    // ===== rental situation: misc area 2 =====
    pub rental_situation_misc_area2_let_area: Option<Area>,
    pub rental_situation_misc_area2_contractual_annual_rent: Option<Amount>,
    pub rental_situation_misc_area2_estimated_annual_rent_for_let_area: Option<Amount>,
    pub rental_situation_misc_area2_vacant_area: Option<Area>,
    pub rental_situation_misc_area2_estimated_annual_rent_for_vacant_area: Option<Amount>,

    // ===== rental situation: misc numbers 1 =====
    pub rental_situation_miscnumbers1_let_numbers: Option<i32>,
    pub rental_situation_miscnumbers1_contractual_annual_rent: Option<Amount>,
    pub rental_situation_miscnumbers1_estimated_annual_rent_for_let_numbers: Option<Amount>,
    pub rental_situation_miscnumbers1_vacant_numbers: Option<i32>,
    pub rental_situation_miscnumbers1_estimated_annual_rent_for_vacant_numbers: Option<Amount>,

    // ===== rental situation: misc numbers 2 =====
    pub rental_situation_miscnumbers2_let_numbers: Option<i32>,
    pub rental_situation_miscnumbers2_contractual_annual_rent: Option<Amount>,
    pub rental_situation_miscnumbers2_estimated_annual_rent_for_let_numbers: Option<Amount>,
    pub rental_situation_miscnumbers2_vacant_numbers: Option<i32>,
    pub rental_situation_miscnumbers2_estimated_annual_rent_for_vacant_numbers: Option<Amount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_property_has_no_valuations() {
        let prop = Property::default();
        assert!(prop.valuations.is_empty());
        assert!(prop.label.is_none());
    }

    #[test]
    fn test_valuation_insert_overwrites_same_key() {
        let mut prop = Property::default();
        let mut first = Valuation::default();
        first.owner = Some("fund A".to_string());
        let mut second = Valuation::default();
        second.owner = Some("fund B".to_string());

        prop.valuations.insert("4711_2014-03-01".to_string(), first);
        prop.valuations.insert("4711_2014-03-01".to_string(), second);

        assert_eq!(prop.valuations.len(), 1);
        assert_eq!(
            prop.valuations["4711_2014-03-01"].owner.as_deref(),
            Some("fund B")
        );
    }
}
