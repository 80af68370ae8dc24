//! Document Template Renderer.
//!
//! Converts display rows into a [`zoo_idf::Document`]: a centered title, a
//! generation-date line and one table whose columns are fixed per
//! [`ReportKind`]. Dates and numbers are formatted with a [`Locale`] on every
//! call.

mod kind;
mod locale;
mod renderer;
mod row;

pub use kind::{ReportKind, UnknownReportKind};
pub use locale::{Locale, MISSING};
pub use renderer::{ReportData, TemplateRenderer};
pub use row::ReportRow;
