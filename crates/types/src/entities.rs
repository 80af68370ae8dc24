//! Rows of the zoo tables the reports read.
//!
//! These are read-only snapshots owned by the data store. Every foreign key is
//! optional and may dangle; consumers must cope with both.

use crate::{RecordId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `food_items`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub unit: String,
}

/// `food_stock`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodStock {
    pub id: RecordId,
    #[serde(default)]
    pub food_item_id: Option<RecordId>,
    #[serde(default)]
    pub quantity: f64,
}

/// `animals`, as returned with species and area names already joined in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    pub id: RecordId,
    #[serde(default)]
    pub tag_code: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub species_name: Option<String>,
    #[serde(default)]
    pub area_name: Option<String>,
    /// Free-form in practice: `healthy`, `under-treatment`, `quarantine`, ...
    #[serde(default)]
    pub status: Option<String>,
}

/// `areas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    pub id: RecordId,
    pub name: String,
}

/// `cleaning_tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningTask {
    pub id: RecordId,
    #[serde(default)]
    pub area_id: Option<RecordId>,
    /// Some stores return the area name denormalized onto the task.
    #[serde(default)]
    pub area_name: Option<String>,
    pub description: String,
    #[serde(default)]
    pub frequency: Option<String>,
}

/// `cleaning_logs`, append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningLog {
    pub id: RecordId,
    #[serde(default)]
    pub task_id: Option<RecordId>,
    #[serde(default)]
    pub performed_by: Option<String>,
    #[serde(default)]
    pub performed_at: Option<Timestamp>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// `ticket_types`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketType {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// `tickets`, append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: RecordId,
    #[serde(default)]
    pub ticket_type_id: Option<RecordId>,
    #[serde(default)]
    pub promotion_id: Option<RecordId>,
    #[serde(default)]
    pub purchaser_profile_id: Option<RecordId>,
    #[serde(default)]
    pub purchased_at: Option<Timestamp>,
    #[serde(default)]
    pub visit_date: Option<NaiveDate>,
    #[serde(default)]
    pub price_paid: Option<f64>,
}
