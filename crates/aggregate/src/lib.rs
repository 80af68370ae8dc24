//! Report Data Aggregator.
//!
//! Each function takes a primary collection plus the lookup collections its
//! foreign keys point into, and yields exactly one display row per primary
//! record, in input order. A dangling key never drops the row; the affected
//! fields fall back to fixed placeholder text.

mod lookup;
mod rows;

pub use lookup::{INDEX_THRESHOLD, Lookup};
pub use rows::{AnimalHealthRow, CleaningRow, InventoryRow, TicketSalesRow};

use zoo_types::{Animal, Area, CleaningLog, CleaningTask, FoodItem, FoodStock, Ticket, TicketType};

/// Placeholder for an unresolved masculine noun (alimento, tipo, estado).
pub const UNKNOWN: &str = "Desconocido";
/// Placeholder for an unresolved feminine noun (tarea, especie).
pub const UNKNOWN_FEMININE: &str = "Desconocida";
pub const NOT_AVAILABLE: &str = "N/A";

fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => placeholder.to_string(),
    }
}

/// Food stock joined with food items.
pub fn inventory_rows(stock: &[FoodStock], foods: &[FoodItem]) -> Vec<InventoryRow> {
    let foods = Lookup::new(foods, |f| &f.id);
    stock
        .iter()
        .map(|entry| match foods.find(entry.food_item_id.as_ref()) {
            Some(food) => InventoryRow {
                food_name: food.name.clone(),
                unit: food.unit.clone(),
                quantity: entry.quantity,
            },
            None => {
                log::debug!(
                    "food_stock {}: no food item {:?}",
                    entry.id,
                    entry.food_item_id
                );
                InventoryRow {
                    food_name: UNKNOWN.to_string(),
                    unit: String::new(),
                    quantity: entry.quantity,
                }
            }
        })
        .collect()
}

/// Animals carry their species and area names already, so this is a straight
/// projection with placeholders for empty fields.
pub fn animal_health_rows(animals: &[Animal]) -> Vec<AnimalHealthRow> {
    animals
        .iter()
        .map(|animal| AnimalHealthRow {
            tag: or_placeholder(animal.tag_code.as_deref(), NOT_AVAILABLE),
            name: or_placeholder(animal.name.as_deref(), NOT_AVAILABLE),
            species: or_placeholder(animal.species_name.as_deref(), UNKNOWN_FEMININE),
            area: or_placeholder(animal.area_name.as_deref(), NOT_AVAILABLE),
            status: or_placeholder(animal.status.as_deref(), UNKNOWN),
        })
        .collect()
}

/// Cleaning logs joined with their task, and through it the task's area.
///
/// The area name comes from `areas` when the task's `area_id` resolves, then
/// from the task's own `area_name`, and is `N/A` otherwise.
pub fn cleaning_rows(
    logs: &[CleaningLog],
    tasks: &[CleaningTask],
    areas: &[Area],
) -> Vec<CleaningRow> {
    let tasks = Lookup::new(tasks, |t| &t.id);
    let areas = Lookup::new(areas, |a| &a.id);

    logs.iter()
        .map(|log| {
            let (task, area) = match tasks.find(log.task_id.as_ref()) {
                Some(task) => {
                    let area = areas
                        .find(task.area_id.as_ref())
                        .map(|a| a.name.as_str())
                        .or(task.area_name.as_deref());
                    (
                        task.description.clone(),
                        or_placeholder(area, NOT_AVAILABLE),
                    )
                }
                None => {
                    log::debug!("cleaning_log {}: no task {:?}", log.id, log.task_id);
                    (UNKNOWN_FEMININE.to_string(), NOT_AVAILABLE.to_string())
                }
            };
            CleaningRow {
                task,
                area,
                performed_by: or_placeholder(log.performed_by.as_deref(), NOT_AVAILABLE),
                performed_at: log.performed_at,
                notes: or_placeholder(log.notes.as_deref(), NOT_AVAILABLE),
            }
        })
        .collect()
}

/// Tickets joined with their ticket type.
///
/// `promotion_applied` only reflects that a promotion reference is present;
/// whether it points at an existing or active promotion is not checked.
pub fn ticket_sales_rows(tickets: &[Ticket], ticket_types: &[TicketType]) -> Vec<TicketSalesRow> {
    let types = Lookup::new(ticket_types, |t| &t.id);
    tickets
        .iter()
        .map(|ticket| {
            let ticket_type = match types.find(ticket.ticket_type_id.as_ref()) {
                Some(t) => t.name.clone(),
                None => {
                    log::debug!(
                        "ticket {}: no ticket type {:?}",
                        ticket.id,
                        ticket.ticket_type_id
                    );
                    UNKNOWN.to_string()
                }
            };
            TicketSalesRow {
                ticket_type,
                visit_date: ticket.visit_date,
                price_paid: ticket.price_paid.unwrap_or(0.0),
                promotion_applied: ticket.promotion_id.is_some(),
            }
        })
        .collect()
}
