// ==========================================
// BIIS Import - Field Mapping Table
// ==========================================
// The closed BIIS header vocabulary as a static lookup table:
// header name -> tagged handler. Headers outside the table are
// silently ignored in data rows. Handlers are grouped by the
// coercion they apply; multi-field setters carry fn pointers so
// each one is testable in isolation.
// ==========================================

use crate::domain::property::{Address, Valuation};
use crate::domain::types::{Amount, Area, Period, UseType};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use std::collections::HashMap;

// ==========================================
// FieldHandler - tagged handler variants
// ==========================================
#[derive(Debug, Clone, Copy)]
pub enum FieldHandler {
    /// Header recognized but deliberately not imported.
    Ignore,

    // ===== assign to the row's Valuation =====
    Text(fn(&mut Valuation, String)),
    Date(fn(&mut Valuation, NaiveDate)),
    Year(fn(&mut Valuation, NaiveDate)),
    Number(fn(&mut Valuation, f64)),
    Count(fn(&mut Valuation, i32)),
    Flag(fn(&mut Valuation, bool)),
    Amount(fn(&mut Valuation, Amount)),
    Area(fn(&mut Valuation, Area)),
    /// Year span whose numeric cell must be present.
    YearsStrict(fn(&mut Valuation, Period)),
    /// Year span tolerating an absent cell.
    YearsLenient(fn(&mut Valuation, Period)),
    Use(fn(&mut Valuation, UseType)),
    Ownership,
    ValuationKind1,
    ValuationKind2,
    RetailLocation,
    Condition,
    Interior,
    Phase,
    /// DataSupplier feeds both the valuation label and the expert name.
    SupplierLabel,

    // ===== assign to the valuation's Address =====
    AddressText(fn(&mut Address, String)),
    AddressNumber(fn(&mut Address, f64)),
    AddressCountry,
    /// Address free text; also backfills the property label.
    AddressFreeText,

    // ===== update the row conversion context =====
    SetCurrency,
    SetAreaMeasurement,

    // ===== identity resolution =====
    PropertyIdentity,
    AppraisalDate,
    ExpertId,
}

// ==========================================
// header -> handler table
// ==========================================
static FIELD_TABLE: Lazy<HashMap<&'static str, FieldHandler>> = Lazy::new(|| {
    use FieldHandler::*;

    let mut m: HashMap<&'static str, FieldHandler> = HashMap::new();

    // ===== ignored headers =====
    m.insert("Date", Ignore); // see DateOfAppraisal
    m.insert("TypeOfDataSupplier", Ignore);
    m.insert("QualityDateOfAppraisal", Ignore);

    // ===== supplier / identity =====
    m.insert("DataSupplier", SupplierLabel);
    m.insert("DataSupplierNumber", ExpertId);
    m.insert("ObjNoOwner", PropertyIdentity);
    m.insert("DateOfAppraisal", AppraisalDate);

    // ===== row conversion context =====
    m.insert("Currency", SetCurrency);
    m.insert("ArealUnit", SetAreaMeasurement);

    // ===== address =====
    m.insert("AddressType_Street", AddressText(|a, v| a.street = Some(v)));
    m.insert("AddressType_PostCode", AddressText(|a, v| a.zip = Some(v)));
    m.insert("AddressType_Town", AddressText(|a, v| a.city = Some(v)));
    m.insert("AddressType_ISOCountryCodeType_Country", AddressCountry);
    m.insert("AddressType_Text", AddressFreeText);
    m.insert(
        "ObjKoWGS84Longitude",
        AddressNumber(|a, v| a.longitude = Some(v)),
    );
    m.insert(
        "ObjKoWGS84Latitude",
        AddressNumber(|a, v| a.latitude = Some(v)),
    );

    // ===== appraisal header data =====
    m.insert("CompletionDate", Date(|val, v| val.valuation_date = Some(v)));
    m.insert("Owner", Text(|val, v| val.owner = Some(v)));
    m.insert(
        "RebaseObjAdditionalInformation",
        Text(|val, v| val.note = Some(v)),
    );
    m.insert("RebaseType1", ValuationKind1);
    m.insert("RebaseType2", ValuationKind2);
    m.insert(
        "ExchangeRate1EUR",
        Number(|val, v| val.exchange_rate_to_eur = Some(v)),
    );
    m.insert(
        "DateExchangeRate",
        Date(|val, v| val.exchange_rate_date = Some(v)),
    );

    // ===== usage =====
    m.insert("MainTypeOfUse", Use(|val, v| val.use_type_primary = Some(v)));
    m.insert(
        "ShareMainTypeOfUse",
        Number(|val, v| val.use_type_primary_share = Some(v)),
    );
    m.insert(
        "AncillaryTypeOfUse",
        Use(|val, v| val.use_type_secondary = Some(v)),
    );
    m.insert(
        "ShareAncillaryTypeOfUse",
        Number(|val, v| val.use_type_secondary_share = Some(v)),
    );

    // ===== classification =====
    m.insert("TypeOfOwnership", Ownership);
    m.insert("SingleTenant", Flag(|val, v| val.single_tenant = Some(v)));
    m.insert("LocationQuality", RetailLocation);
    m.insert("StructuralCondition", Condition);
    m.insert("FitOutQuality", Interior);
    m.insert("StateOfCompletion", Phase);
    m.insert(
        "MaintenanceBacklog",
        Flag(|val, v| val.maintenance_backlog = Some(v)),
    );
    m.insert("Floors", Text(|val, v| val.floor_description = Some(v)));

    // ===== transactions =====
    m.insert(
        "PurchasePrice",
        Amount(|val, v| val.purchase_net_price = Some(v)),
    );
    m.insert("DateOfPurchase", Date(|val, v| val.purchase_date = Some(v)));
    m.insert("PriceOfSale", Amount(|val, v| val.sale_net_price = Some(v)));
    m.insert("DateOfSale", Date(|val, v| val.sale_date = Some(v)));

    // ===== construction / economic life =====
    m.insert(
        "NormalTotalEconomicLife",
        YearsLenient(|val, v| val.normal_total_economic_life = Some(v)),
    );
    m.insert(
        "RemainingEconomicLife",
        YearsLenient(|val, v| val.remaining_economic_life = Some(v)),
    );
    m.insert(
        "OriginalYearOfConstruction",
        Year(|val, v| val.construction_date = Some(v)),
    );
    m.insert(
        "CalculatedYearOfConstruction",
        Year(|val, v| val.economic_construction_date = Some(v)),
    );
    m.insert(
        "DateOfChangeForRemainingEconomicLife",
        Date(|val, v| val.change_date_for_remaining_economic_life = Some(v)),
    );

    // ===== plot / building areas =====
    m.insert("LandSize", Area(|val, v| val.plot_area = Some(v)));
    m.insert("FloorToAreaRatio", Number(|val, v| val.gfz = Some(v)));
    m.insert("SiteCoverageRatio", Number(|val, v| val.grz = Some(v)));
    m.insert(
        "GrossFloorSpaceOverground",
        Area(|val, v| val.gross_floor_space_overground = Some(v)),
    );
    m.insert(
        "GrossFloorSpaceBelowGround",
        Area(|val, v| val.gross_floor_space_below_ground = Some(v)),
    );
    m.insert(
        "TotalGrossFloorSpace",
        Area(|val, v| val.total_gross_floor_space = Some(v)),
    );
    m.insert(
        "TotalRentableArea",
        Area(|val, v| val.total_rentable_area = Some(v)),
    );

    // ===== operating costs =====
    m.insert("RunningCosts", Amount(|val, v| val.running_costs = Some(v)));
    m.insert(
        "ManagementCosts",
        Amount(|val, v| val.management_costs = Some(v)),
    );
    m.insert(
        "MaintenanceExpenses",
        Amount(|val, v| val.maintenance_expenses = Some(v)),
    );
    m.insert(
        "RentAllowance",
        Amount(|val, v| val.rent_allowance = Some(v)),
    );
    m.insert(
        "OtherOperatingExpenses",
        Amount(|val, v| val.other_operating_expenses = Some(v)),
    );

    // ===== value chain =====
    m.insert(
        "CapitalizationRate",
        Number(|val, v| val.capitalization_rate = Some(v)),
    );
    m.insert(
        "ValueByIncomeApproachWithoutPremiumsDiscounts",
        Amount(|val, v| val.value_by_income_approach_without_premiums_discounts = Some(v)),
    );
    m.insert(
        "DiscountsPremiums",
        Amount(|val, v| val.discounts_premiums = Some(v)),
    );
    m.insert(
        "DeductionForVacancy",
        Amount(|val, v| val.deduction_for_vacancy = Some(v)),
    );
    m.insert(
        "DeductionConstructionWorks",
        Amount(|val, v| val.deduction_construction_works = Some(v)),
    );
    m.insert(
        "OthersDiscountsPremiums",
        Amount(|val, v| val.others_discounts_premiums = Some(v)),
    );
    m.insert(
        "ValueByIncomeApproach",
        Amount(|val, v| val.value_by_income_approach = Some(v)),
    );
    m.insert("CostApproach", Amount(|val, v| val.cost_approach = Some(v)));
    m.insert("LandValue", Amount(|val, v| val.land_value = Some(v)));
    m.insert("MarketValue", Amount(|val, v| val.fair_value = Some(v)));

    // ===== ground lease =====
    m.insert("GroundLease", Flag(|val, v| val.ground_lease = Some(v)));
    m.insert(
        "RemainingLifeOfGroundLease",
        YearsStrict(|val, v| val.remaining_life_of_ground_lease = Some(v)),
    );
    m.insert("GroundRent", Amount(|val, v| val.ground_rent = Some(v)));
    m.insert(
        "GroundLeaseRemarks",
        Text(|val, v| val.ground_lease_remarks = Some(v)),
    );

    // ===== rental situation: office =====
    m.insert(
        "RentalSituationOfficeLetArea",
        Area(|val, v| val.rental_situation_office_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationOfficeContractualAnnualRent",
        Amount(|val, v| val.rental_situation_office_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationOfficeEstimatedAnnualRentForLetArea",
        Amount(|val, v| val.rental_situation_office_estimated_annual_rent_for_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationOfficeVacantArea",
        Area(|val, v| val.rental_situation_office_vacant_area = Some(v)),
    );
    m.insert(
        "RentalSituationOfficeEstimatedAnnualRentForVacantArea",
        Amount(|val, v| {
            val.rental_situation_office_estimated_annual_rent_for_vacant_area = Some(v)
        }),
    );

    // ===== rental situation: retail =====
    m.insert(
        "RentalSituationRetailLetArea",
        Area(|val, v| val.rental_situation_retail_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationRetailContractualAnnualRent",
        Amount(|val, v| val.rental_situation_retail_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationRetailEstimatedAnnualRentForLetArea",
        Amount(|val, v| val.rental_situation_retail_estimated_annual_rent_for_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationRetailVacantArea",
        Area(|val, v| val.rental_situation_retail_vacant_area = Some(v)),
    );
    m.insert(
        "RentalSituationRetailEstimatedAnnualRentForVacantArea",
        Amount(|val, v| {
            val.rental_situation_retail_estimated_annual_rent_for_vacant_area = Some(v)
        }),
    );

    // ===== rental situation: storage =====
    m.insert(
        "RentalSituationStorageLetArea",
        Area(|val, v| val.rental_situation_storage_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationStorageContractualAnnualRent",
        Amount(|val, v| val.rental_situation_storage_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationStorageEstimatedAnnualRentForLetArea",
        Amount(|val, v| val.rental_situation_storage_estimated_annual_rent_for_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationStorageVacantArea",
        Area(|val, v| val.rental_situation_storage_vacant_area = Some(v)),
    );
    m.insert(
        "RentalSituationStorageEstimatedAnnualRentForVacantArea",
        Amount(|val, v| {
            val.rental_situation_storage_estimated_annual_rent_for_vacant_area = Some(v)
        }),
    );

    // ===== rental situation: archive =====
    m.insert(
        "RentalSituationArchiveLetArea",
        Area(|val, v| val.rental_situation_archive_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationArchiveContractualAnnualRent",
        Amount(|val, v| val.rental_situation_archive_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationArchiveEstimatedAnnualRentForLetArea",
        Amount(|val, v| val.rental_situation_archive_estimated_annual_rent_for_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationArchiveVacantArea",
        Area(|val, v| val.rental_situation_archive_vacant_area = Some(v)),
    );
    m.insert(
        "RentalSituationArchiveEstimatedAnnualRentForVacantArea",
        Amount(|val, v| {
            val.rental_situation_archive_estimated_annual_rent_for_vacant_area = Some(v)
        }),
    );

    // ===== rental situation: gastro =====
    m.insert(
        "RentalSituationGastroLetArea",
        Area(|val, v| val.rental_situation_gastro_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationGastroContractualAnnualRent",
        Amount(|val, v| val.rental_situation_gastro_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationGastroEstimatedAnnualRentForLetArea",
        Amount(|val, v| val.rental_situation_gastro_estimated_annual_rent_for_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationGastroVacantArea",
        Area(|val, v| val.rental_situation_gastro_vacant_area = Some(v)),
    );
    m.insert(
        "RentalSituationGastroEstimatedAnnualRentForVacantArea",
        Amount(|val, v| {
            val.rental_situation_gastro_estimated_annual_rent_for_vacant_area = Some(v)
        }),
    );

    // ===== rental situation: residential =====
    m.insert(
        "RentalSituationResidentialLetArea",
        Area(|val, v| val.rental_situation_residential_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationResidentialContractualAnnualRent",
        Amount(|val, v| val.rental_situation_residential_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationResidentialEstimatedAnnualRentForLetArea",
        Amount(|val, v| {
            val.rental_situation_residential_estimated_annual_rent_for_let_area = Some(v)
        }),
    );
    m.insert(
        "RentalSituationResidentialVacantArea",
        Area(|val, v| val.rental_situation_residential_vacant_area = Some(v)),
    );
    m.insert(
        "RentalSituationResidentialEstimatedAnnualRentForVacantArea",
        Amount(|val, v| {
            val.rental_situation_residential_estimated_annual_rent_for_vacant_area = Some(v)
        }),
    );

    // ===== rental situation: hotel =====
    m.insert(
        "RentalSituationHotelLetArea",
        Area(|val, v| val.rental_situation_hotel_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationHotelContractualAnnualRent",
        Amount(|val, v| val.rental_situation_hotel_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationHotelEstimatedAnnualRentForLetArea",
        Amount(|val, v| val.rental_situation_hotel_estimated_annual_rent_for_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationHotelVacantArea",
        Area(|val, v| val.rental_situation_hotel_vacant_area = Some(v)),
    );
    m.insert(
        "RentalSituationHotelEstimatedAnnualRentForVacantArea",
        Amount(|val, v| {
            val.rental_situation_hotel_estimated_annual_rent_for_vacant_area = Some(v)
        }),
    );

    // ===== rental situation: leisure =====
    m.insert(
        "RentalSituationLeisureLetArea",
        Area(|val, v| val.rental_situation_leisure_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationLeisureContractualAnnualRent",
        Amount(|val, v| val.rental_situation_leisure_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationLeisureEstimatedAnnualRentForLetArea",
        Amount(|val, v| val.rental_situation_leisure_estimated_annual_rent_for_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationLeisureVacantArea",
        Area(|val, v| val.rental_situation_leisure_vacant_area = Some(v)),
    );
    m.insert(
        "RentalSituationLeisureEstimatedAnnualRentForVacantArea",
        Amount(|val, v| {
            val.rental_situation_leisure_estimated_annual_rent_for_vacant_area = Some(v)
        }),
    );

    // ===== rental situation: indoor parking =====
    m.insert(
        "RentalSituationIndoorparkingLetNumbers",
        Count(|val, v| val.rental_situation_indoorparking_let_numbers = Some(v)),
    );
    m.insert(
        "RentalSituationIndoorparkingContractualAnnualRent",
        Amount(|val, v| val.rental_situation_indoorparking_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationIndoorparkingEstimatedAnnualRentForLetNumbers",
        Amount(|val, v| {
            val.rental_situation_indoorparking_estimated_annual_rent_for_let_numbers = Some(v)
        }),
    );
    m.insert(
        "RentalSituationIndoorparkingVacantNumbers",
        Count(|val, v| val.rental_situation_indoorparking_vacant_numbers = Some(v)),
    );
    m.insert(
        "RentalSituationIndoorparkingEstimatedAnnualRentForVacantNumbers",
        Amount(|val, v| {
            val.rental_situation_indoorparking_estimated_annual_rent_for_vacant_numbers = Some(v)
        }),
    );

    // ===== rental situation: outside parking =====
    m.insert(
        "RentalSituationOutsideparkingLetNumbers",
        Count(|val, v| val.rental_situation_outsideparking_let_numbers = Some(v)),
    );
    m.insert(
        "RentalSituationOutsideparkingContractualAnnualRent",
        Amount(|val, v| val.rental_situation_outsideparking_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationOutsideparkingEstimatedAnnualRentForLetNumbers",
        Amount(|val, v| {
            val.rental_situation_outsideparking_estimated_annual_rent_for_let_numbers = Some(v)
        }),
    );
    m.insert(
        "RentalSituationOutsideparkingVacantNumbers",
        Count(|val, v| val.rental_situation_outsideparking_vacant_numbers = Some(v)),
    );
    m.insert(
        "RentalSituationOutsideparkingEstimatedAnnualRentForVacantNumbers",
        Amount(|val, v| {
            val.rental_situation_outsideparking_estimated_annual_rent_for_vacant_numbers = Some(v)
        }),
    );

    // ===== rental situation: misc areas =====
    m.insert(
        "RentalSituationMiscArea1LetArea",
        Area(|val, v| val.rental_situation_misc_area1_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationMiscArea1ContractualAnnualRent",
        Amount(|val, v| val.rental_situation_misc_area1_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationMiscArea1EstimatedAnnualRentForLetArea",
        Amount(|val, v| {
            val.rental_situation_misc_area1_estimated_annual_rent_for_let_area = Some(v)
        }),
    );
    m.insert(
        "RentalSituationMiscArea1VacantArea",
        Area(|val, v| val.rental_situation_misc_area1_vacant_area = Some(v)),
    );
    m.insert(
        "RentalSituationMiscArea1EstimatedAnnualRentForVacantArea",
        Amount(|val, v| {
            val.rental_situation_misc_area1_estimated_annual_rent_for_vacant_area = Some(v)
        }),
    );
    m.insert(
        "RentalSituationMiscArea2LetArea",
        Area(|val, v| val.rental_situation_misc_area2_let_area = Some(v)),
    );
    m.insert(
        "RentalSituationMiscArea2ContractualAnnualRent",
        Amount(|val, v| val.rental_situation_misc_area2_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationMiscArea2EstimatedAnnualRentForLetArea",
        Amount(|val, v| {
            val.rental_situation_misc_area2_estimated_annual_rent_for_let_area = Some(v)
        }),
    );
    m.insert(
        "RentalSituationMiscArea2VacantArea",
        Area(|val, v| val.rental_situation_misc_area2_vacant_area = Some(v)),
    );
    m.insert(
        "RentalSituationMiscArea2EstimatedAnnualRentForVacantArea",
        Amount(|val, v| {
            val.rental_situation_misc_area2_estimated_annual_rent_for_vacant_area = Some(v)
        }),
    );

    // ===== rental situation: misc numbers =====
    m.insert(
        "RentalSituationMiscnumbers1LetNumbers",
        Count(|val, v| val.rental_situation_miscnumbers1_let_numbers = Some(v)),
    );
    m.insert(
        "RentalSituationMiscnumbers1ContractualAnnualRent",
        Amount(|val, v| val.rental_situation_miscnumbers1_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationMiscnumbers1EstimatedAnnualRentForLetNumbers",
        Amount(|val, v| {
            val.rental_situation_miscnumbers1_estimated_annual_rent_for_let_numbers = Some(v)
        }),
    );
    m.insert(
        "RentalSituationMiscnumbers1VacantNumbers",
        Count(|val, v| val.rental_situation_miscnumbers1_vacant_numbers = Some(v)),
    );
    m.insert(
        "RentalSituationMiscnumbers1EstimatedAnnualRentForVacantNumbers",
        Amount(|val, v| {
            val.rental_situation_miscnumbers1_estimated_annual_rent_for_vacant_numbers = Some(v)
        }),
    );
    m.insert(
        "RentalSituationMiscnumbers2LetNumbers",
        Count(|val, v| val.rental_situation_miscnumbers2_let_numbers = Some(v)),
    );
    m.insert(
        "RentalSituationMiscnumbers2ContractualAnnualRent",
        Amount(|val, v| val.rental_situation_miscnumbers2_contractual_annual_rent = Some(v)),
    );
    m.insert(
        "RentalSituationMiscnumbers2EstimatedAnnualRentForLetNumbers",
        Amount(|val, v| {
            val.rental_situation_miscnumbers2_estimated_annual_rent_for_let_numbers = Some(v)
        }),
    );
    m.insert(
        "RentalSituationMiscnumbers2VacantNumbers",
        Count(|val, v| val.rental_situation_miscnumbers2_vacant_numbers = Some(v)),
    );
    m.insert(
        "RentalSituationMiscnumbers2EstimatedAnnualRentForVacantNumbers",
        Amount(|val, v| {
            val.rental_situation_miscnumbers2_estimated_annual_rent_for_vacant_numbers = Some(v)
        }),
    );

    m
});

/// Looks up the handler for a header name. `None` means the header
/// is not part of the closed vocabulary and the cell is skipped.
pub fn handler_for(header: &str) -> Option<&'static FieldHandler> {
    FIELD_TABLE.get(header)
}

/// Number of recognized headers (exposed for sanity checks).
pub fn recognized_header_count() -> usize {
    FIELD_TABLE.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::Currency;

    #[test]
    fn test_table_covers_the_closed_vocabulary() {
        // 3 ignored + 137 mapped headers
        assert_eq!(recognized_header_count(), 140);
    }

    #[test]
    fn test_unknown_header_is_not_mapped() {
        assert!(handler_for("SomethingElse").is_none());
        // lookups are case-sensitive, as in the source format
        assert!(handler_for("marketvalue").is_none());
    }

    #[test]
    fn test_ignored_headers() {
        assert!(matches!(handler_for("Date"), Some(FieldHandler::Ignore)));
        assert!(matches!(
            handler_for("QualityDateOfAppraisal"),
            Some(FieldHandler::Ignore)
        ));
    }

    #[test]
    fn test_context_and_identity_headers() {
        assert!(matches!(
            handler_for("Currency"),
            Some(FieldHandler::SetCurrency)
        ));
        assert!(matches!(
            handler_for("ArealUnit"),
            Some(FieldHandler::SetAreaMeasurement)
        ));
        assert!(matches!(
            handler_for("ObjNoOwner"),
            Some(FieldHandler::PropertyIdentity)
        ));
        assert!(matches!(
            handler_for("DateOfAppraisal"),
            Some(FieldHandler::AppraisalDate)
        ));
        assert!(matches!(
            handler_for("DataSupplierNumber"),
            Some(FieldHandler::ExpertId)
        ));
    }

    #[test]
    fn test_amount_setter_assigns_purchase_price() {
        let Some(FieldHandler::Amount(set)) = handler_for("PurchasePrice") else {
            panic!("PurchasePrice must be an amount handler");
        };
        let mut valuation = Valuation::default();
        set(
            &mut valuation,
            Amount::new(1000.0, Currency::from_code("EUR")),
        );
        assert_eq!(valuation.purchase_net_price.as_ref().unwrap().value, 1000.0);
    }

    #[test]
    fn test_address_setter_assigns_street() {
        let Some(FieldHandler::AddressText(set)) = handler_for("AddressType_Street") else {
            panic!("AddressType_Street must be an address text handler");
        };
        let mut address = Address::default();
        set(&mut address, "Hauptstrasse".to_string());
        assert_eq!(address.street.as_deref(), Some("Hauptstrasse"));
    }

    #[test]
    fn test_rental_situation_block_is_complete() {
        // 10 area categories x 5 columns + 4 number categories x 5 columns
        let rental = FIELD_TABLE
            .keys()
            .filter(|h| h.starts_with("RentalSituation"))
            .count();
        assert_eq!(rental, 70);
    }
}
