//! Locates roster tables in a fetched document and walks their rows.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use super::schema::RosterSchema;
use crate::error::AppError;

/// Parsed roster or report page.
pub struct MarkupDocument {
    html: Html,
}

impl MarkupDocument {
    pub fn parse(text: &str) -> Self {
        Self {
            html: Html::parse_document(text),
        }
    }

    /// Finds every roster table fragment in document order.
    ///
    /// The first fragment holds the pitchers; the rest hold position players.
    ///
    /// # Errors
    /// * `AppError::SchemaNotFound` - No element matches the schema's table marker
    pub fn locate_tables<'a>(
        &'a self,
        schema: &'a RosterSchema,
    ) -> Result<Vec<TableFragment<'a>>, AppError> {
        let tables: Vec<TableFragment<'a>> = self
            .html
            .select(&schema.table)
            .map(|element| TableFragment { element, schema })
            .collect();

        if tables.is_empty() {
            return Err(AppError::schema_not_found(schema.table_marker()));
        }

        debug!(
            "Located {} roster table(s) with marker '{}'",
            tables.len(),
            schema.table_marker()
        );
        Ok(tables)
    }

    /// All elements matching `selector`, in document order
    pub fn select<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html.select(selector)
    }
}

/// One roster table (or table section) of a [`MarkupDocument`].
#[derive(Clone, Copy)]
pub struct TableFragment<'a> {
    element: ElementRef<'a>,
    schema: &'a RosterSchema,
}

impl<'a> TableFragment<'a> {
    /// Data rows of the table. Header rows (no data cells) are skipped.
    pub fn rows(&self) -> impl Iterator<Item = RowFragment<'a>> + 'a {
        let schema = self.schema;
        self.element
            .select(&schema.row)
            .filter(move |row| row.select(&schema.data_cell).next().is_some())
            .map(move |element| RowFragment { element, schema })
    }
}

/// One data row of a roster table.
#[derive(Clone, Copy)]
pub struct RowFragment<'a> {
    element: ElementRef<'a>,
    schema: &'a RosterSchema,
}

impl<'a> RowFragment<'a> {
    /// First descendant of the row matching `selector`
    pub fn find(&self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.element.select(selector).next()
    }

    /// Whitespace-normalized text of the whole row
    pub fn text(&self) -> String {
        element_text(&self.element)
    }

    pub fn schema(&self) -> &'a RosterSchema {
        self.schema
    }
}

/// Text content of an element with runs of whitespace collapsed to one space
pub fn element_text(element: &ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}
