use std::fmt;

use crate::models::ITEM_FIELDS;

pub const EMPTY_MESSAGE: &str = "No items added yet!";
pub const REMOVE_MESSAGE: &str = "To remove an item, double-click the associated row.";

/// Identifier given to a rendered table row: `row-<n>`, assigned in render
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowId(pub usize);

impl RowId {
    /// The part of a row id after its first `-`, which is what gets sent as
    /// the `row` field. Ids without a dash are sent whole.
    pub fn index_part(id: &str) -> &str {
        id.split_once('-').map_or(id, |(_, rest)| rest)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// Rendering surface for the inventory page.
///
/// The page logic only talks to this trait, so it runs the same against a
/// browser DOM binding or the in-memory [`TableView`].
pub trait View {
    fn append_row(&mut self, id: &str, cells: &[&str]);
    fn clear_rows(&mut self);
    fn row_count(&self) -> usize;
    fn set_table_visible(&mut self, visible: bool);
    fn set_message(&mut self, message: &str);
    fn set_heading(&mut self, heading: &str);
    /// Replace whatever error is currently shown.
    fn show_error(&mut self, message: &str);

    /// Current `(name, value)` pairs of the add-item form.
    fn item_form(&self) -> Vec<(String, String)>;
    fn clear_item_form(&mut self);
    fn name_input(&self) -> String;
    fn clear_name_form(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub cells: Vec<String>,
}

/// Headless [`View`] that records what a page would display.
#[derive(Debug, Clone)]
pub struct TableView {
    pub rows: Vec<TableRow>,
    pub table_visible: bool,
    pub message: String,
    pub heading: String,
    pub error: Option<String>,
    pub item_inputs: Vec<(String, String)>,
    pub name_input: String,
}

impl TableView {
    /// A view whose add-item form has one input per item field.
    pub fn new() -> Self {
        Self::with_item_inputs(&ITEM_FIELDS)
    }

    /// A view whose add-item form has exactly the given inputs.
    pub fn with_item_inputs(names: &[&str]) -> Self {
        Self {
            rows: Vec::new(),
            table_visible: false,
            message: String::new(),
            heading: String::new(),
            error: None,
            item_inputs: names
                .iter()
                .map(|name| (name.to_string(), String::new()))
                .collect(),
            name_input: String::new(),
        }
    }

    /// Type `value` into the add-item input called `name`. Returns `false`
    /// when the form has no such input.
    pub fn fill(&mut self, name: &str, value: &str) -> bool {
        match self.item_inputs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => {
                *v = value.to_string();
                true
            }
            None => false,
        }
    }

    pub fn row_ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id.as_str()).collect()
    }

    pub fn first_column(&self) -> Vec<&str> {
        self.rows
            .iter()
            .filter_map(|r| r.cells.first().map(String::as_str))
            .collect()
    }
}

impl Default for TableView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for TableView {
    fn append_row(&mut self, id: &str, cells: &[&str]) {
        self.rows.push(TableRow {
            id: id.to_string(),
            cells: cells.iter().map(|c| c.to_string()).collect(),
        });
    }

    fn clear_rows(&mut self) {
        self.rows.clear();
    }

    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn set_table_visible(&mut self, visible: bool) {
        self.table_visible = visible;
    }

    fn set_message(&mut self, message: &str) {
        self.message = message.to_string();
    }

    fn set_heading(&mut self, heading: &str) {
        self.heading = heading.to_string();
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
    }

    fn item_form(&self) -> Vec<(String, String)> {
        self.item_inputs.clone()
    }

    fn clear_item_form(&mut self) {
        for (_, value) in &mut self.item_inputs {
            value.clear();
        }
    }

    fn name_input(&self) -> String {
        self.name_input.clone()
    }

    fn clear_name_form(&mut self) {
        self.name_input.clear();
    }
}
