//! Component-to-text rendering

use std::fmt::Write as _;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::widget::{CellValue, Component, RowData};

/// Failure raised while rendering a component to text
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("field '{field}' does not hold a date value, cannot apply pattern '{pattern}'")]
    NotTemporal { field: String, pattern: String },

    #[error("invalid date format pattern '{pattern}'")]
    BadPattern { pattern: String },
}

/// Renders widget components to their plain-text representation.
///
/// `row` carries the current row for field bindings; facet components
/// render without one.
pub trait ComponentRenderer {
    fn render(&self, components: &[Component], row: Option<&RowData>) -> Result<String>;
}

/// Default renderer: literal text, field lookups, date format patterns.
///
/// Absent rows and unknown fields render as empty text, the way the host
/// framework renders missing values.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainRenderer;

impl PlainRenderer {
    pub fn new() -> Self {
        Self
    }

    fn render_component(
        &self,
        component: &Component,
        row: Option<&RowData>,
        out: &mut String,
    ) -> Result<()> {
        match component {
            Component::Text(value) => out.push_str(value),
            Component::Field { name } => {
                if let Some(value) = row.and_then(|r| r.get(name)) {
                    out.push_str(&value.display());
                }
            }
            Component::Formatted { name, pattern } => {
                if let Some(value) = row.and_then(|r| r.get(name)) {
                    out.push_str(&format_value(name, value, pattern)?);
                }
            }
            Component::Group(children) => {
                for child in children {
                    self.render_component(child, row, out)?;
                }
            }
        }
        Ok(())
    }
}

impl ComponentRenderer for PlainRenderer {
    fn render(&self, components: &[Component], row: Option<&RowData>) -> Result<String> {
        let mut out = String::new();
        for component in components {
            self.render_component(component, row, &mut out)?;
        }
        Ok(out)
    }
}

/// Apply a chrono format pattern to a temporal value. String values are
/// parsed as ISO dates first; anything else is a [`RenderError`].
fn format_value(field: &str, value: &CellValue, pattern: &str) -> Result<String, RenderError> {
    let format_date = |d: &NaiveDate| format_temporal(d.format(pattern), pattern);
    let format_datetime = |dt: &NaiveDateTime| format_temporal(dt.format(pattern), pattern);

    match value {
        CellValue::Null => Ok(String::new()),
        CellValue::Date(d) => format_date(d),
        CellValue::DateTime(dt) => format_datetime(dt),
        CellValue::String(s) => {
            if let Ok(dt) = s.parse::<NaiveDateTime>() {
                format_datetime(&dt)
            } else if let Ok(d) = s.parse::<NaiveDate>() {
                format_date(&d)
            } else {
                Err(RenderError::NotTemporal {
                    field: field.to_string(),
                    pattern: pattern.to_string(),
                })
            }
        }
        _ => Err(RenderError::NotTemporal {
            field: field.to_string(),
            pattern: pattern.to_string(),
        }),
    }
}

fn format_temporal(
    formatted: impl std::fmt::Display,
    pattern: &str,
) -> Result<String, RenderError> {
    let mut out = String::new();
    write!(out, "{}", formatted).map_err(|_| RenderError::BadPattern {
        pattern: pattern.to_string(),
    })?;
    Ok(out)
}
