//! Markup locations for each known roster page layout.
//!
//! The roster pages have changed their table and cell markers several times.
//! Every location the extractor depends on is listed here, so a layout change
//! means adding a [`SchemaDefinition`] rather than touching extraction code.

use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AppError;

/// Known roster page layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Single roster table per position group, `td.info` / `td.bat-throw` cells
    #[default]
    Current,
    /// One `team_table_results` table with one `tbody` per position group
    Legacy,
}

impl SchemaVersion {
    pub fn definition(self) -> &'static SchemaDefinition {
        match self {
            SchemaVersion::Current => &CURRENT,
            SchemaVersion::Legacy => &LEGACY,
        }
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaVersion::Current => f.write_str("current"),
            SchemaVersion::Legacy => f.write_str("legacy"),
        }
    }
}

/// CSS locations of the roster fields. Row-level selectors are matched
/// against the descendants of one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDefinition {
    /// Marks a roster table fragment. The first match holds the pitchers.
    pub table: &'static str,
    pub row: &'static str,
    /// Rows without a data cell are header rows
    pub data_cell: &'static str,
    /// Cell holding the jersey number
    pub number_cell: &'static str,
    /// Narrows the number cell to the element carrying the number text
    pub number: Option<&'static str>,
    /// Player link; its text is the name, its target ends with the identifier
    pub name_link: &'static str,
    /// Cell holding `<bats><delimiter><throws>`
    pub bat_throw_cell: &'static str,
    pub handedness_delimiter: char,
    /// Rows whose text contains this marker are annotations, not players
    pub skip_marker: Option<&'static str>,
}

pub static CURRENT: SchemaDefinition = SchemaDefinition {
    table: "table.roster__table",
    row: "tr",
    data_cell: "td",
    number_cell: "td.info",
    number: Some("span.jersey"),
    name_link: "td.info a",
    bat_throw_cell: "td.bat-throw",
    handedness_delimiter: '/',
    skip_marker: None,
};

pub static LEGACY: SchemaDefinition = SchemaDefinition {
    table: "table.team_table_results > tbody",
    row: "tr",
    data_cell: "td",
    number_cell: "td:nth-child(1)",
    number: None,
    name_link: "td:nth-child(2) a",
    bat_throw_cell: "td:nth-child(3)",
    handedness_delimiter: '-',
    skip_marker: Some("*"),
};

/// A [`SchemaDefinition`] with its selectors compiled.
#[derive(Debug, Clone)]
pub struct RosterSchema {
    pub version: SchemaVersion,
    pub(crate) table_marker: &'static str,
    pub(crate) table: Selector,
    pub(crate) row: Selector,
    pub(crate) data_cell: Selector,
    pub(crate) number_cell: Selector,
    pub(crate) number: Option<Selector>,
    pub(crate) name_link: Selector,
    pub(crate) bat_throw_cell: Selector,
    pub(crate) handedness_delimiter: char,
    pub(crate) skip_marker: Option<&'static str>,
}

impl RosterSchema {
    /// Compiles the schema for a known layout
    pub fn for_version(version: SchemaVersion) -> Result<Self, AppError> {
        Self::compile(version, version.definition())
    }

    pub fn compile(version: SchemaVersion, def: &SchemaDefinition) -> Result<Self, AppError> {
        Ok(Self {
            version,
            table_marker: def.table,
            table: compile_selector(def.table)?,
            row: compile_selector(def.row)?,
            data_cell: compile_selector(def.data_cell)?,
            number_cell: compile_selector(def.number_cell)?,
            number: def.number.map(compile_selector).transpose()?,
            name_link: compile_selector(def.name_link)?,
            bat_throw_cell: compile_selector(def.bat_throw_cell)?,
            handedness_delimiter: def.handedness_delimiter,
            skip_marker: def.skip_marker,
        })
    }

    /// The selector that identifies roster tables, used in schema errors
    pub fn table_marker(&self) -> &str {
        self.table_marker
    }
}

/// Markup locations of the bullpen usage report
#[derive(Debug, Clone)]
pub struct UsageReportSchema {
    pub(crate) link: Selector,
}

impl UsageReportSchema {
    pub const DEFAULT_LINK: &'static str = "a.usage-link";

    pub fn new(link_selector: &str) -> Result<Self, AppError> {
        Ok(Self {
            link: compile_selector(link_selector)?,
        })
    }

    pub fn default_report() -> Result<Self, AppError> {
        Self::new(Self::DEFAULT_LINK)
    }
}

pub(crate) fn compile_selector(css: &str) -> Result<Selector, AppError> {
    Selector::parse(css).map_err(|e| AppError::invalid_selector(css, format!("{e:?}")))
}
