// ==========================================
// BIIS Import - Row Processor
// ==========================================
// One sequential pass per row, cells visited in ascending
// column order. Column order is part of the contract: the
// sticky conversion context (currency, area unit) set by one
// column is only visible to columns after it.
// ==========================================
// Containment: a failing cell is logged and skipped; only the
// two context-setting columns escalate to a row failure while
// their context is unresolved. A failing row is logged and the
// sheet continues.
// ==========================================

use crate::domain::property::{Address, Valuation};
use crate::domain::types::{AreaMeasurement, Currency};
use crate::importer::cell_reader::{self, CellValue};
use crate::importer::coerce;
use crate::importer::error::{CoerceError, ImportError, ImportResult};
use crate::importer::field_map::{self, FieldHandler};
use crate::importer::identity::{self, PropertyHandle, PropertyRegistry};
use crate::validator::ValuationValidator;
use calamine::{Data, Range};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, error, warn};

// ==========================================
// RowContext - sticky per-row conversion state
// ==========================================
// Created empty at the start of each data row, discarded at its
// end; never shared across rows.
#[derive(Debug, Clone, Default)]
pub struct RowContext {
    pub currency: Option<Currency>,
    pub area_unit: Option<AreaMeasurement>,
}

// ==========================================
// RowStats - per-sheet row accounting
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RowStats {
    pub total_rows: usize,
    pub imported_rows: usize,
    pub failed_rows: usize,
    pub skipped_rows: usize,
}

// ==========================================
// SheetImporter - range-level import engine
// ==========================================
pub struct SheetImporter<V: ValuationValidator> {
    validator: V,
}

impl<V: ValuationValidator> SheetImporter<V> {
    pub fn new(validator: V) -> Self {
        Self { validator }
    }

    /// Imports one sheet given its cell range and formula range.
    ///
    /// Row 0 is the header row; every later row assembles one
    /// valuation. Row and cell failures are contained here; the
    /// returned registry holds whatever was merged successfully.
    pub fn import(
        &self,
        cells: &Range<Data>,
        formulas: &Range<String>,
    ) -> (PropertyRegistry, RowStats) {
        let mut registry = PropertyRegistry::new();
        let mut stats = RowStats::default();

        let (row_offset, col_offset) = cells.start().unwrap_or((0, 0));
        let mut headers: BTreeMap<usize, String> = BTreeMap::new();

        for (row_idx, row) in cells.rows().enumerate() {
            // rows with a blank leading cell are passed over
            if matches!(row.first(), None | Some(Data::Empty)) {
                if row_idx != 0 {
                    stats.skipped_rows += 1;
                }
                continue;
            }

            if row_idx == 0 {
                headers = build_header_index(row);
                debug!(columns = headers.len(), "header index built");
                continue;
            }

            stats.total_rows += 1;
            let abs_row = row_offset as usize + row_idx;
            match self.process_data_row(
                abs_row,
                col_offset as usize,
                row,
                &headers,
                formulas,
                &mut registry,
            ) {
                Ok(()) => stats.imported_rows += 1,
                Err(err) => {
                    error!(row = abs_row + 1, error = %err, "cannot read row");
                    stats.failed_rows += 1;
                }
            }
        }

        (registry, stats)
    }

    /// Processes a single data row: dispatch each cell, then run
    /// the post-row assembly steps.
    fn process_data_row(
        &self,
        abs_row: usize,
        col_offset: usize,
        row: &[Data],
        headers: &BTreeMap<usize, String>,
        formulas: &Range<String>,
        registry: &mut PropertyRegistry,
    ) -> ImportResult<()> {
        let display_row = abs_row + 1;

        let mut ctx = RowContext::default();
        let mut handle = PropertyHandle::new();
        let mut valuation = Valuation::default();

        for (col_idx, cell) in row.iter().enumerate() {
            let Some(header) = headers.get(&col_idx) else {
                continue;
            };

            let abs_col = col_offset + col_idx;
            let formula = formulas
                .get_value((abs_row as u32, abs_col as u32))
                .map(String::as_str);
            let Some(value) = cell_reader::extract(cell, formula) else {
                continue;
            };
            let Some(handler) = field_map::handler_for(header) else {
                continue;
            };

            let cell_ref = cell_reader::cell_ref(abs_row, abs_col);
            match apply_handler(
                handler,
                &value,
                &cell_ref,
                header,
                &mut ctx,
                &mut valuation,
                &mut handle,
                registry,
            ) {
                Ok(()) => {}
                Err(err @ ImportError::Cell { .. }) => {
                    warn!(row = display_row, error = %err, "cell conversion failed");

                    // a context column that fails while its context is
                    // unresolved poisons every later amount/area cell
                    let escalates = match handler {
                        FieldHandler::SetCurrency => ctx.currency.is_none(),
                        FieldHandler::SetAreaMeasurement => ctx.area_unit.is_none(),
                        _ => false,
                    };
                    if escalates {
                        return Err(ImportError::ContextUnresolved {
                            row: display_row,
                            column: header.clone(),
                        });
                    }
                }
                Err(err) => return Err(err),
            }
        }

        // ===== post-row assembly =====
        {
            let property = handle.resolve_mut(registry)?;

            if property.label.is_none() {
                property.label = Some(
                    synthesize_label(&valuation.address)
                        .ok_or(ImportError::LabelSynthesis { row: display_row })?,
                );
            }

            identity::attach_valuation(property, &mut valuation);

            if property.valuations.is_empty() {
                return Err(ImportError::NoValuationAttached { row: display_row });
            }
        }

        if !handle.is_registered() {
            warn!(
                row = display_row,
                "row carries no business id; its property is unreachable from the container"
            );
        }

        self.validator
            .validate(&valuation)
            .map_err(|failure| ImportError::ValidationRejected {
                row: display_row,
                source: failure,
            })?;

        Ok(())
    }
}

/// Sparse column-index -> header-name map from the header row.
fn build_header_index(row: &[Data]) -> BTreeMap<usize, String> {
    let mut headers = BTreeMap::new();
    for (col_idx, cell) in row.iter().enumerate() {
        if let Some(name) = cell_reader::extract(cell, None).and_then(|v| v.as_text()) {
            headers.insert(col_idx, name);
        }
    }
    headers
}

/// Synthesized property label: `"{street}[ {housenumber}], {zip} {city}"`.
/// The housenumber segment is omitted entirely when absent. With no
/// address parts at all there is nothing to synthesize.
fn synthesize_label(address: &Address) -> Option<String> {
    if address.street.is_none() && address.zip.is_none() && address.city.is_none() {
        return None;
    }

    let mut label = String::new();
    if let Some(street) = &address.street {
        label.push_str(street);
    }
    if let Some(housenumber) = &address.housenumber {
        label.push(' ');
        label.push_str(housenumber);
    }
    label.push_str(", ");
    if let Some(zip) = &address.zip {
        label.push_str(zip);
    }
    label.push(' ');
    if let Some(city) = &address.city {
        label.push_str(city);
    }
    Some(label)
}

/// Dispatches one cell through its handler.
#[allow(clippy::too_many_arguments)]
fn apply_handler(
    handler: &FieldHandler,
    value: &CellValue,
    cell_ref: &str,
    header: &str,
    ctx: &mut RowContext,
    valuation: &mut Valuation,
    handle: &mut PropertyHandle,
    registry: &mut PropertyRegistry,
) -> ImportResult<()> {
    let cell_err = |source: CoerceError| ImportError::Cell {
        cell_ref: cell_ref.to_string(),
        header: header.to_string(),
        value: value.display_raw(),
        source,
    };
    let some = Some(value);

    match handler {
        FieldHandler::Ignore => {}

        FieldHandler::Text(set) => {
            if let Some(text) = value.as_text() {
                set(valuation, text);
            }
        }
        FieldHandler::Date(set) => {
            if let Some(date) = coerce::date(some) {
                set(valuation, date);
            }
        }
        FieldHandler::Year(set) => {
            if let Some(year) = coerce::year(some).map_err(cell_err)? {
                set(valuation, year);
            }
        }
        FieldHandler::Number(set) => {
            if let Some(number) = coerce::number(some) {
                set(valuation, number);
            }
        }
        FieldHandler::Count(set) => {
            if let Some(count) = coerce::count(some) {
                set(valuation, count);
            }
        }
        FieldHandler::Flag(set) => {
            if let Some(flag) = coerce::boolean(some) {
                set(valuation, flag);
            }
        }
        FieldHandler::Amount(set) => {
            if let Some(amount) = coerce::amount(some, ctx.currency.as_ref()) {
                set(valuation, amount);
            }
        }
        FieldHandler::Area(set) => {
            if let Some(area) = coerce::area(some, ctx.area_unit) {
                set(valuation, area);
            }
        }
        FieldHandler::YearsStrict(set) => {
            set(valuation, coerce::period_years(some, "period").map_err(cell_err)?);
        }
        FieldHandler::YearsLenient(set) => {
            if let Some(period) = coerce::period_years_opt(some) {
                set(valuation, period);
            }
        }

        FieldHandler::Use(set) => {
            let text = value.as_text();
            if let Some(use_type) = coerce::use_type(text.as_deref()).map_err(cell_err)? {
                set(valuation, use_type);
            }
        }
        FieldHandler::Ownership => {
            let text = value.as_text();
            if let Some(ownership) = coerce::ownership_type(text.as_deref()).map_err(cell_err)? {
                valuation.ownership_type = Some(ownership);
            }
        }
        FieldHandler::ValuationKind1 => {
            let text = value.as_text();
            if let Some(kind) = coerce::valuation_type1(text.as_deref()).map_err(cell_err)? {
                valuation.valuation_type1 = Some(kind);
            }
        }
        FieldHandler::ValuationKind2 => {
            let text = value.as_text();
            if let Some(kind) = coerce::valuation_type2(text.as_deref()).map_err(cell_err)? {
                valuation.valuation_type2 = Some(kind);
            }
        }
        FieldHandler::RetailLocation => {
            let text = value.as_text();
            if let Some(location) = coerce::retail_location(text.as_deref()).map_err(cell_err)? {
                valuation.retail_location = Some(location);
            }
        }
        FieldHandler::Condition => {
            let text = value.as_text();
            if let Some(condition) = coerce::condition(text.as_deref()).map_err(cell_err)? {
                valuation.condition = Some(condition);
            }
        }
        FieldHandler::Interior => {
            let text = value.as_text();
            if let Some(quality) = coerce::interior_quality(text.as_deref()).map_err(cell_err)? {
                valuation.interior_quality = Some(quality);
            }
        }
        FieldHandler::Phase => {
            let text = value.as_text();
            if let Some(phase) = coerce::construction_phase(text.as_deref()).map_err(cell_err)? {
                valuation.construction_phase = Some(phase);
            }
        }

        FieldHandler::SupplierLabel => {
            if let Some(text) = value.as_text() {
                valuation.label = Some(text.clone());
                valuation.expert_name = Some(text);
            }
        }

        FieldHandler::AddressText(set) => {
            if let Some(text) = value.as_text() {
                set(&mut valuation.address, text);
            }
        }
        FieldHandler::AddressNumber(set) => {
            if let Some(number) = coerce::number(some) {
                set(&mut valuation.address, number);
            }
        }
        FieldHandler::AddressCountry => {
            let text = value.as_text();
            if let Some(country) = coerce::country(text.as_deref()).map_err(cell_err)? {
                valuation.address.country = Some(country);
            }
        }
        FieldHandler::AddressFreeText => {
            if let Some(text) = value.as_text() {
                let property = handle.resolve_mut(registry)?;
                if property.label.is_none() {
                    property.label = Some(text.clone());
                }
                valuation.address.label = Some(text);
            }
        }

        FieldHandler::SetCurrency => {
            let text = value.as_text();
            if let Some(currency) = coerce::currency(text.as_deref()).map_err(cell_err)? {
                ctx.currency = Some(currency.clone());
                valuation.currency = Some(currency);
            }
        }
        FieldHandler::SetAreaMeasurement => {
            let text = value.as_text();
            if let Some(unit) = coerce::area_measurement(text.as_deref()).map_err(cell_err)? {
                ctx.area_unit = Some(unit);
            }
        }

        FieldHandler::PropertyIdentity => {
            if let Some(property_id) = value.as_text() {
                identity::resolve_property(registry, handle, &property_id)?;
            }
        }
        FieldHandler::AppraisalDate => {
            if let Some(date) = coerce::date(some) {
                valuation.valid_from = Some(date);
            }
        }
        FieldHandler::ExpertId => {
            if let Some(expert_id) = value.as_text() {
                valuation.expert_id = Some(expert_id);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(street: Option<&str>, housenumber: Option<&str>, zip: Option<&str>, city: Option<&str>) -> Address {
        Address {
            street: street.map(str::to_string),
            housenumber: housenumber.map(str::to_string),
            zip: zip.map(str::to_string),
            city: city.map(str::to_string),
            ..Address::default()
        }
    }

    #[test]
    fn test_label_synthesis_with_housenumber() {
        let label =
            synthesize_label(&address(Some("Hauptstrasse"), Some("12"), Some("60311"), Some("Frankfurt")));
        assert_eq!(label.as_deref(), Some("Hauptstrasse 12, 60311 Frankfurt"));
    }

    #[test]
    fn test_label_synthesis_omits_absent_housenumber_without_extra_space() {
        let label = synthesize_label(&address(Some("Hauptstrasse"), None, Some("60311"), Some("Frankfurt")));
        assert_eq!(label.as_deref(), Some("Hauptstrasse, 60311 Frankfurt"));
    }

    #[test]
    fn test_label_synthesis_fails_on_empty_address() {
        assert_eq!(synthesize_label(&Address::default()), None);
    }

    #[test]
    fn test_amount_handler_sees_sticky_currency() {
        let mut ctx = RowContext::default();
        ctx.currency = Currency::from_code("EUR");
        let mut valuation = Valuation::default();
        let mut handle = PropertyHandle::new();
        let mut registry = PropertyRegistry::new();

        let handler = field_map::handler_for("PurchasePrice").unwrap();
        apply_handler(
            handler,
            &CellValue::Number(1000.0),
            "C2",
            "PurchasePrice",
            &mut ctx,
            &mut valuation,
            &mut handle,
            &mut registry,
        )
        .unwrap();

        let amount = valuation.purchase_net_price.unwrap();
        assert_eq!(amount.value, 1000.0);
        assert_eq!(amount.currency.unwrap().code(), "EUR");
    }

    #[test]
    fn test_amount_handler_without_context_has_no_currency() {
        let mut ctx = RowContext::default();
        let mut valuation = Valuation::default();
        let mut handle = PropertyHandle::new();
        let mut registry = PropertyRegistry::new();

        let handler = field_map::handler_for("PurchasePrice").unwrap();
        apply_handler(
            handler,
            &CellValue::Number(1000.0),
            "C2",
            "PurchasePrice",
            &mut ctx,
            &mut valuation,
            &mut handle,
            &mut registry,
        )
        .unwrap();

        assert!(valuation.purchase_net_price.unwrap().currency.is_none());
    }

    #[test]
    fn test_currency_handler_updates_context_and_valuation() {
        let mut ctx = RowContext::default();
        let mut valuation = Valuation::default();
        let mut handle = PropertyHandle::new();
        let mut registry = PropertyRegistry::new();

        let handler = field_map::handler_for("Currency").unwrap();
        apply_handler(
            handler,
            &CellValue::Text("EUR".to_string()),
            "A2",
            "Currency",
            &mut ctx,
            &mut valuation,
            &mut handle,
            &mut registry,
        )
        .unwrap();

        assert_eq!(ctx.currency.as_ref().unwrap().code(), "EUR");
        assert_eq!(valuation.currency.unwrap().code(), "EUR");
    }

    #[test]
    fn test_unknown_enum_code_is_a_cell_error() {
        let mut ctx = RowContext::default();
        let mut valuation = Valuation::default();
        let mut handle = PropertyHandle::new();
        let mut registry = PropertyRegistry::new();

        let handler = field_map::handler_for("TypeOfOwnership").unwrap();
        let err = apply_handler(
            handler,
            &CellValue::Text("9 - Sondereigentum".to_string()),
            "D2",
            "TypeOfOwnership",
            &mut ctx,
            &mut valuation,
            &mut handle,
            &mut registry,
        )
        .unwrap_err();

        assert!(matches!(err, ImportError::Cell { .. }));
        assert!(valuation.ownership_type.is_none());
    }

    #[test]
    fn test_supplier_label_feeds_two_fields() {
        let mut ctx = RowContext::default();
        let mut valuation = Valuation::default();
        let mut handle = PropertyHandle::new();
        let mut registry = PropertyRegistry::new();

        let handler = field_map::handler_for("DataSupplier").unwrap();
        apply_handler(
            handler,
            &CellValue::Text("Gutachter GmbH".to_string()),
            "B2",
            "DataSupplier",
            &mut ctx,
            &mut valuation,
            &mut handle,
            &mut registry,
        )
        .unwrap();

        assert_eq!(valuation.label.as_deref(), Some("Gutachter GmbH"));
        assert_eq!(valuation.expert_name.as_deref(), Some("Gutachter GmbH"));
    }
}
