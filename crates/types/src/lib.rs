pub mod color;
pub mod entities;
pub mod geometry;
pub mod ids;
pub mod page;
pub mod timestamp;

pub use color::Color;
pub use entities::{
    Animal, Area, CleaningLog, CleaningTask, FoodItem, FoodStock, Ticket, TicketType,
};
pub use geometry::{Rect, Size};
pub use ids::RecordId;
pub use page::PageSize;
pub use timestamp::Timestamp;
