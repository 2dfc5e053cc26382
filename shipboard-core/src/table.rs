//! Table surfaces the loaders write into, and the pages that hold them.

use crate::error;
use crate::models::{Cargo, Vessel};
use crate::render::{escape_html, OutputFormat, Row, ToRow};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const VESSELS_TABLE_ID: &str = "vessels-table";
pub const CARGOES_TABLE_ID: &str = "cargoes-table";

/// Anything a loader can append rows to.
pub trait TableSink {
    /// An `Err` means the row did not land.
    fn append_row(&mut self, row: Row) -> error::Result<()>;
}

/// Append one row per record, in order, stopping at the first row the sink refuses.
/// Returns the number of rows added.
pub fn append_records<R: ToRow, S: TableSink + ?Sized>(
    records: &[R],
    sink: &mut S,
) -> error::Result<usize> {
    for record in records {
        sink.append_row(record.to_row())?;
    }
    Ok(records.len())
}

/// In-memory table body with a header line.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    id: String,
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl Table {
    pub fn new(id: &str, headers: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn for_vessels(id: &str) -> Self {
        Self::new(id, Vessel::HEADERS)
    }

    pub fn for_cargoes(id: &str) -> Self {
        Self::new(id, Cargo::HEADERS)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render_html(&self) -> String {
        let mut html = format!("<table id=\"{}\">\n  <thead><tr>", escape_html(&self.id));
        for header in &self.headers {
            html.push_str(&format!("<th>{}</th>", escape_html(header)));
        }
        html.push_str("</tr></thead>\n  <tbody>\n");
        for row in &self.rows {
            html.push_str("    ");
            html.push_str(&row.to_html());
            html.push('\n');
        }
        html.push_str("  </tbody>\n</table>\n");
        html
    }

    pub fn render_text(&self) -> String {
        let mut text = format!("# {}\n{}\n", self.id, self.headers.join(" | "));
        for row in &self.rows {
            text.push_str(&row.to_text());
            text.push('\n');
        }
        text
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Html => self.render_html(),
            OutputFormat::Text => self.render_text(),
        }
    }
}

impl TableSink for Table {
    fn append_row(&mut self, row: Row) -> error::Result<()> {
        self.rows.push(row);
        Ok(())
    }
}

/// Which of the server's pages to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    /// Both boards.
    #[default]
    Index,
    Vessels,
    Cargoes,
}

impl FromStr for PageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "index" | "home" => Ok(PageKind::Index),
            "vessels" => Ok(PageKind::Vessels),
            "cargoes" => Ok(PageKind::Cargoes),
            other => Err(format!("unknown page '{}'", other)),
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageKind::Index => write!(f, "index"),
            PageKind::Vessels => write!(f, "vessels"),
            PageKind::Cargoes => write!(f, "cargoes"),
        }
    }
}

/// The tables present on a page. A board whose table is missing is simply not loaded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Page {
    pub vessels: Option<Table>,
    pub cargoes: Option<Table>,
}

impl Page {
    pub fn layout(kind: PageKind, vessels_table_id: &str, cargoes_table_id: &str) -> Self {
        let vessels = Some(Table::for_vessels(vessels_table_id));
        let cargoes = Some(Table::for_cargoes(cargoes_table_id));
        match kind {
            PageKind::Index => Self { vessels, cargoes },
            PageKind::Vessels => Self { vessels, cargoes: None },
            PageKind::Cargoes => Self { vessels: None, cargoes },
        }
    }

    pub fn table(&self, id: &str) -> Option<&Table> {
        self.tables().find(|t| t.id() == id)
    }

    pub fn table_mut(&mut self, id: &str) -> Option<&mut Table> {
        self.vessels
            .iter_mut()
            .chain(self.cargoes.iter_mut())
            .find(|t| t.id() == id)
    }

    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.vessels.iter().chain(self.cargoes.iter())
    }

    pub fn render(&self, format: OutputFormat) -> String {
        let parts: Vec<String> = self.tables().map(|t| t.render(format)).collect();
        parts.join("\n")
    }

    pub fn render_html(&self) -> String {
        self.render(OutputFormat::Html)
    }

    pub fn render_text(&self) -> String {
        self.render(OutputFormat::Text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_records_keeps_order() {
        let mut table = Table::for_vessels(VESSELS_TABLE_ID);
        let vessels = vec![Vessel::new("A"), Vessel::new("B"), Vessel::new("C")];

        let added = append_records(&vessels, &mut table).unwrap();

        assert_eq!(added, 3);
        let names: Vec<&str> = table.rows().iter().map(|r| r.cells()[0].as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_append_keeps_existing_rows() {
        let mut table = Table::for_cargoes(CARGOES_TABLE_ID);
        table.append_row(Row::new(vec!["static".to_string()])).unwrap();

        append_records(&[Cargo::new("Grain")], &mut table).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].to_text(), "static");
    }

    /// Accepts a fixed number of rows, then refuses.
    struct FullAfter {
        capacity: usize,
        rows: Vec<Row>,
    }

    impl TableSink for FullAfter {
        fn append_row(&mut self, row: Row) -> error::Result<()> {
            if self.rows.len() == self.capacity {
                return Err(error::ShipBrokerError::Table("table is full".to_string()));
            }
            self.rows.push(row);
            Ok(())
        }
    }

    #[test]
    fn test_append_records_stops_at_refused_row() {
        let mut sink = FullAfter { capacity: 2, rows: Vec::new() };
        let vessels = vec![Vessel::new("A"), Vessel::new("B"), Vessel::new("C")];

        let result = append_records(&vessels, &mut sink);

        assert!(result.is_err());
        assert_eq!(sink.rows.len(), 2);
    }

    #[test]
    fn test_page_layouts() {
        let index = Page::layout(PageKind::Index, VESSELS_TABLE_ID, CARGOES_TABLE_ID);
        assert!(index.table(VESSELS_TABLE_ID).is_some());
        assert!(index.table(CARGOES_TABLE_ID).is_some());

        let vessels = Page::layout(PageKind::Vessels, VESSELS_TABLE_ID, CARGOES_TABLE_ID);
        assert!(vessels.table(CARGOES_TABLE_ID).is_none());

        let cargoes = Page::layout(PageKind::Cargoes, VESSELS_TABLE_ID, CARGOES_TABLE_ID);
        assert!(cargoes.table(VESSELS_TABLE_ID).is_none());
        assert_eq!(cargoes.tables().count(), 1);
    }

    #[test]
    fn test_table_mut_by_id() {
        let mut page = Page::layout(PageKind::Index, "v", "c");
        page.table_mut("c")
            .unwrap()
            .append_row(Row::new(vec!["x".to_string()]))
            .unwrap();
        assert_eq!(page.table("c").unwrap().len(), 1);
        assert!(page.table_mut("missing").is_none());
    }

    #[test]
    fn test_render_text() {
        let mut table = Table::for_vessels("vessels-table");
        let mut vessel = Vessel::new("MV Atlas");
        vessel.dwt = Some(50000.0);
        append_records(&[vessel], &mut table).unwrap();

        assert_eq!(
            table.render_text(),
            "# vessels-table\nName | Type | Position | DWT\nMV Atlas | - | - | 50000\n"
        );
    }

    #[test]
    fn test_render_html_contains_rows() {
        let mut table = Table::for_cargoes("cargoes-table");
        append_records(&[Cargo::new("Grain")], &mut table).unwrap();

        let html = table.render_html();
        assert!(html.starts_with("<table id=\"cargoes-table\">"));
        assert!(html.contains("<th>Route</th>"));
        assert!(html.contains("<td class=\"px-6 py-4\">- to -</td>"));
    }

    #[test]
    fn test_page_kind_parsing() {
        assert_eq!("Vessels".parse::<PageKind>(), Ok(PageKind::Vessels));
        assert_eq!("home".parse::<PageKind>(), Ok(PageKind::Index));
        assert!("auctions".parse::<PageKind>().is_err());
    }
}
