pub mod reader;
pub mod schema;

pub use reader::{MarkupDocument, RowFragment, TableFragment, element_text};
pub use schema::{RosterSchema, SchemaDefinition, SchemaVersion, UsageReportSchema};
