//! Turning board records into table rows.
//!
//! Every optional cell goes through the same placeholder rule as the page
//! script: absent, `null`, empty text and zero all render as [`PLACEHOLDER`].

use crate::models::{Cargo, Rate, Vessel};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const PLACEHOLDER: &str = "-";

/// Class applied to every `<td>` the board emits.
pub const CELL_CLASS: &str = "px-6 py-4";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Html,
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "text" | "txt" => Ok(OutputFormat::Text),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// One rendered table row: cell texts in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn to_text(&self) -> String {
        self.cells.join(" | ")
    }

    pub fn to_html(&self) -> String {
        let mut html = String::from("<tr>");
        for cell in &self.cells {
            html.push_str(&format!(
                "<td class=\"{}\">{}</td>",
                CELL_CLASS,
                escape_html(cell)
            ));
        }
        html.push_str("</tr>");
        html
    }
}

/// Records that know how to lay themselves out as a board row.
pub trait ToRow {
    /// Column headings, one per cell of [`ToRow::to_row`].
    const HEADERS: &'static [&'static str];

    fn to_row(&self) -> Row;
}

impl ToRow for Vessel {
    const HEADERS: &'static [&'static str] = &["Name", "Type", "Position", "DWT"];

    fn to_row(&self) -> Row {
        Row::new(vec![
            text_or_placeholder(Some(&self.name)),
            text_or_placeholder(self.vessel_type.as_deref()),
            text_or_placeholder(self.position.as_deref()),
            number_or_placeholder(self.dwt),
        ])
    }
}

impl ToRow for Cargo {
    const HEADERS: &'static [&'static str] = &["Cargo", "Quantity", "Route", "Rate"];

    fn to_row(&self) -> Row {
        Row::new(vec![
            text_or_placeholder(Some(&self.cargo_type)),
            number_or_placeholder(self.quantity),
            route(self.load_port.as_deref(), self.discharge_port.as_deref()),
            rate_or_placeholder(self.rate.as_ref()),
        ])
    }
}

pub fn text_or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn number_or_placeholder(value: Option<f64>) -> String {
    match value {
        Some(n) if n != 0.0 && !n.is_nan() => format_number(n),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn rate_or_placeholder(value: Option<&Rate>) -> String {
    match value {
        Some(Rate::Number(n)) => number_or_placeholder(Some(*n)),
        Some(Rate::Text(text)) => text_or_placeholder(Some(text)),
        None => PLACEHOLDER.to_string(),
    }
}

/// "load to discharge", each side falling back to the placeholder on its own.
pub fn route(load_port: Option<&str>, discharge_port: Option<&str>) -> String {
    format!(
        "{} to {}",
        text_or_placeholder(load_port),
        text_or_placeholder(discharge_port)
    )
}

/// Shortest decimal form: whole numbers drop the fraction (`50000`, not `50000.0`).
/// Magnitudes of 1e21 and up, or below 1e-6, switch to exponent form (`1e+21`, `1.5e-7`)
/// the way the browser prints them.
pub fn format_number(n: f64) -> String {
    let magnitude = n.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        let exponent_form = format!("{:e}", n);
        return match exponent_form.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => exponent_form,
        };
    }
    format!("{}", n)
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
