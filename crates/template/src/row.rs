use crate::{Locale, ReportKind};
use zoo_aggregate::{AnimalHealthRow, CleaningRow, InventoryRow, TicketSalesRow};

/// A display row that knows which report it belongs to and how its cells
/// read under a given locale.
///
/// `cells` must yield exactly one string per column of `KIND`, in column order.
pub trait ReportRow {
    const KIND: ReportKind;

    fn cells(&self, locale: &Locale) -> Vec<String>;
}

impl ReportRow for InventoryRow {
    const KIND: ReportKind = ReportKind::Inventory;

    fn cells(&self, locale: &Locale) -> Vec<String> {
        vec![
            self.food_name.clone(),
            self.unit.clone(),
            locale.format_number(self.quantity),
        ]
    }
}

impl ReportRow for AnimalHealthRow {
    const KIND: ReportKind = ReportKind::AnimalHealth;

    fn cells(&self, _locale: &Locale) -> Vec<String> {
        vec![
            self.tag.clone(),
            self.name.clone(),
            self.species.clone(),
            self.area.clone(),
            self.status.clone(),
        ]
    }
}

impl ReportRow for CleaningRow {
    const KIND: ReportKind = ReportKind::Cleaning;

    fn cells(&self, locale: &Locale) -> Vec<String> {
        vec![
            self.task.clone(),
            self.area.clone(),
            self.performed_by.clone(),
            locale.format_timestamp(self.performed_at),
            self.notes.clone(),
        ]
    }
}

impl ReportRow for TicketSalesRow {
    const KIND: ReportKind = ReportKind::TicketSales;

    fn cells(&self, locale: &Locale) -> Vec<String> {
        vec![
            self.ticket_type.clone(),
            locale.format_optional_date(self.visit_date),
            locale.format_currency(self.price_paid),
            if self.promotion_applied { "Sí" } else { "No" }.to_string(),
        ]
    }
}
