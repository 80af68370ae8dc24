//! Display rows: records with every foreign key resolved to readable text.

use chrono::NaiveDate;
use serde::Serialize;
use zoo_types::Timestamp;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryRow {
    pub food_name: String,
    pub unit: String,
    pub quantity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimalHealthRow {
    pub tag: String,
    pub name: String,
    pub species: String,
    pub area: String,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CleaningRow {
    pub task: String,
    pub area: String,
    pub performed_by: String,
    /// Kept as an instant; the renderer decides how it reads.
    pub performed_at: Option<Timestamp>,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TicketSalesRow {
    pub ticket_type: String,
    pub visit_date: Option<NaiveDate>,
    pub price_paid: f64,
    pub promotion_applied: bool,
}
