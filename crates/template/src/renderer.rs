use crate::{Locale, ReportKind, ReportRow};
use chrono::{Local, NaiveDate};
use zoo_aggregate::{AnimalHealthRow, CleaningRow, InventoryRow, TicketSalesRow};
use zoo_idf::{Document, IRNode, TableNode, TextAlign};

/// Display rows of any report kind, for dispatch decided at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportData {
    Inventory(Vec<InventoryRow>),
    AnimalHealth(Vec<AnimalHealthRow>),
    Cleaning(Vec<CleaningRow>),
    TicketSales(Vec<TicketSalesRow>),
}

impl ReportData {
    pub fn kind(&self) -> ReportKind {
        match self {
            ReportData::Inventory(_) => ReportKind::Inventory,
            ReportData::AnimalHealth(_) => ReportKind::AnimalHealth,
            ReportData::Cleaning(_) => ReportKind::Cleaning,
            ReportData::TicketSales(_) => ReportKind::TicketSales,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ReportData::Inventory(rows) => rows.len(),
            ReportData::AnimalHealth(rows) => rows.len(),
            ReportData::Cleaning(rows) => rows.len(),
            ReportData::TicketSales(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds report documents from display rows.
///
/// Rendering is pure apart from reading today's date in [`render`](Self::render).
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    locale: Locale,
}

impl TemplateRenderer {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Renders with the generation date taken from the host clock.
    pub fn render<R: ReportRow>(&self, rows: &[R]) -> Document {
        self.render_on(rows, Local::now().date_naive())
    }

    pub fn render_on<R: ReportRow>(&self, rows: &[R], generated_on: NaiveDate) -> Document {
        let kind = R::KIND;
        let mut table = TableNode::new(kind.columns());
        for row in rows {
            table.push_row(row.cells(&self.locale));
        }

        let mut doc = Document::new(kind.title());
        doc.push(IRNode::Heading {
            level: 1,
            align: TextAlign::Center,
            text: kind.title().to_string(),
        });
        doc.push(IRNode::Paragraph {
            align: TextAlign::Center,
            text: format!("Fecha: {}", self.locale.format_date(generated_on)),
        });
        doc.push(IRNode::Table(table));
        doc
    }

    pub fn render_data(&self, data: &ReportData) -> Document {
        self.render_data_on(data, Local::now().date_naive())
    }

    pub fn render_data_on(&self, data: &ReportData, generated_on: NaiveDate) -> Document {
        match data {
            ReportData::Inventory(rows) => self.render_on(rows, generated_on),
            ReportData::AnimalHealth(rows) => self.render_on(rows, generated_on),
            ReportData::Cleaning(rows) => self.render_on(rows, generated_on),
            ReportData::TicketSales(rows) => self.render_on(rows, generated_on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use zoo_types::Timestamp;

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn ticket_row(promotion_applied: bool) -> TicketSalesRow {
        TicketSalesRow {
            ticket_type: "Adulto".into(),
            visit_date: Some(june_first()),
            price_paid: 15.0,
            promotion_applied,
        }
    }

    #[test]
    fn empty_input_renders_header_only_for_every_kind() {
        let renderer = TemplateRenderer::default();
        let empty = [
            ReportData::Inventory(vec![]),
            ReportData::AnimalHealth(vec![]),
            ReportData::Cleaning(vec![]),
            ReportData::TicketSales(vec![]),
        ];
        for data in &empty {
            let doc = renderer.render_data_on(data, june_first());
            assert_eq!(doc.header_labels(), data.kind().columns());
            assert!(doc.body_rows().is_empty());
        }
    }

    #[test]
    fn inventory_layout_and_cells() {
        let rows = vec![InventoryRow {
            food_name: "Carne".into(),
            unit: "kg".into(),
            quantity: 5.0,
        }];
        let doc = TemplateRenderer::default().render_on(&rows, june_first());
        assert_eq!(doc.header_labels(), vec!["Alimento", "Unidad", "Cantidad"]);
        assert_eq!(doc.body_rows(), vec![vec!["Carne", "kg", "5"]]);
        assert_eq!(
            doc.text_blocks(),
            vec!["Inventario de Alimentos", "Fecha: 01/06/2024"]
        );
    }

    #[test]
    fn promotion_cell_reads_si_or_no() {
        let doc = TemplateRenderer::default()
            .render_on(&[ticket_row(true), ticket_row(false)], june_first());
        assert_eq!(
            doc.header_labels(),
            vec!["Tipo", "Fecha de Visita", "Precio Pagado", "Promoción"]
        );
        assert_eq!(
            doc.body_rows(),
            vec![
                vec!["Adulto", "01/06/2024", "$15", "Sí"],
                vec!["Adulto", "01/06/2024", "$15", "No"],
            ]
        );
    }

    #[test]
    fn cleaning_cells_format_instants_with_locale() {
        let renderer = TemplateRenderer::new(Locale {
            utc_offset_minutes: Some(0),
            ..Locale::default()
        });
        let rows = vec![CleaningRow {
            task: "Barrer".into(),
            area: "Felinos".into(),
            performed_by: "luis".into(),
            performed_at: Some(Timestamp(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap())),
            notes: "N/A".into(),
        }];
        let doc = renderer.render_on(&rows, june_first());
        assert_eq!(
            doc.header_labels(),
            vec!["Tarea", "Área", "Realizado por", "Fecha", "Notas"]
        );
        assert_eq!(
            doc.body_rows(),
            vec![vec!["Barrer", "Felinos", "luis", "01/05/2024, 09:00:00", "N/A"]]
        );
    }

    #[test]
    fn animal_health_columns() {
        let rows = vec![AnimalHealthRow {
            tag: "L-01".into(),
            name: "Simba".into(),
            species: "León".into(),
            area: "Felinos".into(),
            status: "healthy".into(),
        }];
        let doc = TemplateRenderer::default().render(&rows);
        assert_eq!(
            doc.header_labels(),
            vec!["Tag", "Nombre", "Especie", "Área", "Estado"]
        );
        assert_eq!(doc.body_rows()[0].len(), 5);
    }

    #[test]
    fn repeated_renders_produce_identical_tables() {
        let renderer = TemplateRenderer::default();
        let rows = vec![ticket_row(true)];
        let first = renderer.render(&rows);
        let second = renderer.render(&rows);
        assert_eq!(first.table(), second.table());
    }
}
