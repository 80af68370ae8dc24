use serde_json::{Value, json};
use zoo_report::{ReportSnapshot, SnapshotStore};
use zoo_types::{FoodStock, RecordId};

/// A small but complete zoo snapshot covering every report.
pub fn zoo_tables() -> Value {
    json!({
        "food_items": [
            { "id": 10, "name": "Carne", "unit": "kg" },
            { "id": 11, "name": "Heno", "unit": "fardo" },
            { "id": 12, "name": "Pescado", "unit": "kg" }
        ],
        "food_stock": [
            { "id": 1, "food_item_id": 10, "quantity": 5 },
            { "id": 2, "food_item_id": 11, "quantity": 12.5 },
            { "id": 3, "food_item_id": 99, "quantity": 3 }
        ],
        "animals": [
            {
                "id": 1, "tag_code": "LEO-001", "name": "Simba",
                "species_name": "Leon", "area_name": "Sabana", "status": "healthy"
            },
            { "id": 2, "tag_code": "PIN-004", "name": "Pingu", "species_name": null }
        ],
        "areas": [
            { "id": 1, "name": "Sabana" },
            { "id": 2, "name": "Acuario" }
        ],
        "cleaning_tasks": [
            { "id": 2, "area_id": 2, "description": "Limpiar tanque", "frequency": "weekly" },
            { "id": 1, "area_id": 1, "description": "Retirar residuos", "frequency": "daily" }
        ],
        "cleaning_logs": [
            {
                "id": 1, "task_id": 1, "performed_by": "Ana",
                "performed_at": "2024-06-01T08:30:00Z", "notes": "Sin novedades"
            },
            { "id": 2, "task_id": 2, "performed_by": "Luis", "performed_at": "2024-06-01T10:00:00Z" },
            { "id": 3, "task_id": 7, "performed_at": "2024-05-31T09:00:00Z" }
        ],
        "tickets": [
            {
                "id": 1, "ticket_type_id": 1, "promotion_id": 3,
                "purchased_at": "2024-06-01T09:00:00Z", "visit_date": "2024-06-02", "price_paid": 15
            },
            {
                "id": 2, "ticket_type_id": 2, "promotion_id": null,
                "purchased_at": "2024-06-01T11:00:00Z", "visit_date": "2024-06-03", "price_paid": 8.5
            }
        ],
        "ticket_types": [
            { "id": 1, "name": "Adulto", "price": 20 },
            { "id": 2, "name": "Infantil", "price": 10 }
        ]
    })
}

pub fn zoo_snapshot() -> ReportSnapshot {
    let store = SnapshotStore::from_value(zoo_tables()).unwrap();
    ReportSnapshot::load(&store).unwrap()
}

/// A snapshot whose tables are all empty.
pub fn empty_snapshot() -> ReportSnapshot {
    ReportSnapshot::default()
}

/// An inventory with `count` stock rows, enough to span several pages.
pub fn large_inventory(count: usize) -> ReportSnapshot {
    let mut snapshot = zoo_snapshot();
    snapshot.food_stock = (0..count)
        .map(|i| FoodStock {
            id: RecordId::Int(i as i64 + 100),
            food_item_id: Some(RecordId::Int(10 + (i % 3) as i64)),
            quantity: i as f64,
        })
        .collect();
    snapshot
}
