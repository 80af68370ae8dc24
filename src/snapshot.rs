use crate::store::{DataStore, Direction, Query, StoreError, fetch};
use zoo_aggregate::{animal_health_rows, cleaning_rows, inventory_rows, ticket_sales_rows};
use zoo_template::{ReportData, ReportKind};
use zoo_types::{
    Animal, Area, CleaningLog, CleaningTask, FoodItem, FoodStock, Ticket, TicketType,
};

/// Every collection the four reports read, fetched once.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSnapshot {
    pub food_items: Vec<FoodItem>,
    pub food_stock: Vec<FoodStock>,
    pub animals: Vec<Animal>,
    pub areas: Vec<Area>,
    pub cleaning_tasks: Vec<CleaningTask>,
    pub cleaning_logs: Vec<CleaningLog>,
    pub tickets: Vec<Ticket>,
    pub ticket_types: Vec<TicketType>,
}

impl ReportSnapshot {
    pub fn load(store: &dyn DataStore) -> Result<Self, StoreError> {
        let all = Query::new();
        let snapshot = Self {
            food_items: fetch(store, "food_items", &all)?,
            food_stock: fetch(store, "food_stock", &all)?,
            animals: fetch(store, "animals", &all)?,
            areas: fetch(store, "areas", &all)?,
            cleaning_tasks: fetch(
                store,
                "cleaning_tasks",
                &Query::new().order_by("id", Direction::Ascending),
            )?,
            cleaning_logs: fetch(
                store,
                "cleaning_logs",
                &Query::new().order_by("performed_at", Direction::Descending),
            )?,
            tickets: fetch(
                store,
                "tickets",
                &Query::new().order_by("purchased_at", Direction::Descending),
            )?,
            ticket_types: fetch(store, "ticket_types", &all)?,
        };
        log::debug!(
            "Loaded snapshot: {} stock, {} animals, {} cleaning logs, {} tickets",
            snapshot.food_stock.len(),
            snapshot.animals.len(),
            snapshot.cleaning_logs.len(),
            snapshot.tickets.len()
        );
        Ok(snapshot)
    }

    /// Display rows for one report kind.
    pub fn rows(&self, kind: ReportKind) -> ReportData {
        match kind {
            ReportKind::Inventory => {
                ReportData::Inventory(inventory_rows(&self.food_stock, &self.food_items))
            }
            ReportKind::AnimalHealth => ReportData::AnimalHealth(animal_health_rows(&self.animals)),
            ReportKind::Cleaning => ReportData::Cleaning(cleaning_rows(
                &self.cleaning_logs,
                &self.cleaning_tasks,
                &self.areas,
            )),
            ReportKind::TicketSales => {
                ReportData::TicketSales(ticket_sales_rows(&self.tickets, &self.ticket_types))
            }
        }
    }
}
