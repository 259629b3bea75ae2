//! Types shared by the codec, the client and the outbound adapters

pub mod api;
mod cell_value;
mod property_type;
mod table;

#[cfg(test)]
mod tests;

pub use cell_value::{CellValue, PropertyValue, parse_date};
pub use property_type::{DatabaseSchema, PropertyDefinition, PropertyType};
pub use table::{Row, Table};
