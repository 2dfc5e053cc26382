use shipboard_core::render::CELL_CLASS;
use shipboard_core::{Row, ShipBrokerError, TableSink};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// A `<table>` (or `<tbody>`) element on the live page.
pub struct DomTable {
    document: Document,
    element: Element,
}

impl DomTable {
    pub fn new(document: Document, element: Element) -> Self {
        Self { document, element }
    }

    fn try_append(&self, row: &Row) -> Result<(), JsValue> {
        let tr = self.document.create_element("tr")?;
        for cell in row.cells() {
            let td = self.document.create_element("td")?;
            td.set_class_name(CELL_CLASS);
            // Text, not markup: record fields never reach the HTML parser.
            td.set_text_content(Some(cell.as_str()));
            tr.append_child(&td)?;
        }
        self.element.append_child(&tr)?;
        Ok(())
    }
}

impl TableSink for DomTable {
    fn append_row(&mut self, row: Row) -> shipboard_core::Result<()> {
        self.try_append(&row)
            .map_err(|e| ShipBrokerError::Table(format!("could not append row: {:?}", e)))
    }
}
