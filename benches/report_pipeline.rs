//! Report pipeline benchmarks
//!
//! Measures aggregation + rendering alone, and the full export to PDF bytes.

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use zoo_report::{MemorySink, ReportConfig, ReportKind, ReportService, ReportSnapshot};
use zoo_types::{FoodItem, FoodStock, RecordId};

fn inventory_snapshot(rows: usize) -> ReportSnapshot {
    let food_items = (0..50)
        .map(|i| FoodItem {
            id: RecordId::Int(i),
            name: format!("Alimento {}", i),
            unit: "kg".to_string(),
        })
        .collect();
    let food_stock = (0..rows)
        .map(|i| FoodStock {
            id: RecordId::Int(i as i64),
            food_item_id: Some(RecordId::Int((i % 60) as i64)),
            quantity: i as f64 * 0.5,
        })
        .collect();
    ReportSnapshot {
        food_items,
        food_stock,
        ..Default::default()
    }
}

fn service() -> ReportService<MemorySink> {
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
    ReportService::from_config(&ReportConfig::default(), MemorySink::new())
        .with_generation_date(date)
}

fn benchmark_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_inventory");
    let service = service();

    for rows in [10, 100, 1000] {
        let snapshot = inventory_snapshot(rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &snapshot, |b, snapshot| {
            b.iter(|| black_box(service.render(snapshot, ReportKind::Inventory)));
        });
    }

    group.finish();
}

fn benchmark_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export_inventory");
    group.sample_size(20);

    for rows in [10, 100, 1000] {
        let snapshot = inventory_snapshot(rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &snapshot, |b, snapshot| {
            let mut service = service();
            b.iter(|| {
                service
                    .export(snapshot, ReportKind::Inventory, None)
                    .expect("Failed to export report")
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_render, benchmark_export);
criterion_main!(benches);
