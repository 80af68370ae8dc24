use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The four report layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    Inventory,
    AnimalHealth,
    Cleaning,
    TicketSales,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("Unknown report kind: '{0}' (expected inventory, animal-health, cleaning or ticket-sales)")]
pub struct UnknownReportKind(pub String);

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Inventory,
        ReportKind::AnimalHealth,
        ReportKind::Cleaning,
        ReportKind::TicketSales,
    ];

    /// Header labels, in column order.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ReportKind::Inventory => &["Alimento", "Unidad", "Cantidad"],
            ReportKind::AnimalHealth => &["Tag", "Nombre", "Especie", "Área", "Estado"],
            ReportKind::Cleaning => &["Tarea", "Área", "Realizado por", "Fecha", "Notas"],
            ReportKind::TicketSales => &["Tipo", "Fecha de Visita", "Precio Pagado", "Promoción"],
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ReportKind::Inventory => "Inventario de Alimentos",
            ReportKind::AnimalHealth => "Estado de Salud de Animales",
            ReportKind::Cleaning => "Registro de Limpieza del Día",
            ReportKind::TicketSales => "Resumen de Ventas de Entradas",
        }
    }

    /// Identifier of the content holder a report is mounted under for export.
    pub fn content_id(self) -> &'static str {
        match self {
            ReportKind::Inventory => "food-inventory-report-content",
            ReportKind::AnimalHealth => "animal-health-report-content",
            ReportKind::Cleaning => "cleaning-report-content",
            ReportKind::TicketSales => "ticket-sales-report-content",
        }
    }

    pub fn default_file_name(self) -> &'static str {
        match self {
            ReportKind::Inventory => "inventario_alimentos.pdf",
            ReportKind::AnimalHealth => "estado_salud_animales.pdf",
            ReportKind::Cleaning => "registro_limpieza_dia.pdf",
            ReportKind::TicketSales => "ventas_entradas.pdf",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ReportKind::Inventory => "inventory",
            ReportKind::AnimalHealth => "animal-health",
            ReportKind::Cleaning => "cleaning",
            ReportKind::TicketSales => "ticket-sales",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportKind {
    type Err = UnknownReportKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        ReportKind::ALL
            .into_iter()
            .find(|k| k.as_str() == normalized)
            .ok_or_else(|| UnknownReportKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cli_spellings() {
        assert_eq!("ticket_sales".parse::<ReportKind>(), Ok(ReportKind::TicketSales));
        assert_eq!("Animal-Health".parse::<ReportKind>(), Ok(ReportKind::AnimalHealth));
        assert!("payroll".parse::<ReportKind>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in ReportKind::ALL {
            assert_eq!(kind.to_string().parse::<ReportKind>(), Ok(kind));
        }
    }
}
