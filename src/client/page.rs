use crate::models::Item;

use super::view::{RowId, View, EMPTY_MESSAGE, REMOVE_MESSAGE};

/// Visibility of the inventory table. It flips only when the number of
/// rendered items crosses between zero and non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableState {
    #[default]
    Hidden,
    Visible,
}

/// Page logic: turns inventory snapshots from the service into view updates.
/// Knows nothing about how those snapshots were fetched.
#[derive(Debug)]
pub struct InventoryPage<V> {
    view: V,
    table: TableState,
}

impl<V: View> InventoryPage<V> {
    pub fn new(mut view: V) -> Self {
        view.set_table_visible(false);
        view.set_message(EMPTY_MESSAGE);
        Self {
            view,
            table: TableState::Hidden,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }

    pub fn table_state(&self) -> TableState {
        self.table
    }

    /// Append one row per item, revealing the table if anything was added.
    pub fn load(&mut self, items: &[Item]) {
        for item in items {
            self.append(item);
        }
        if !items.is_empty() {
            self.set_table(TableState::Visible);
        }
    }

    /// Render the newly added item, which is the last of `items`.
    pub fn show_added(&mut self, items: &[Item]) {
        if let Some(item) = items.last() {
            self.append(item);
            self.set_table(TableState::Visible);
        }
    }

    /// Throw away every row and render `items` from scratch.
    pub fn rebuild(&mut self, items: &[Item]) {
        self.view.clear_rows();
        self.load(items);
        if self.view.row_count() == 0 {
            self.set_table(TableState::Hidden);
        }
    }

    pub fn set_heading(&mut self, heading: &str) {
        self.view.set_heading(heading);
    }

    pub fn show_error(&mut self, message: &str) {
        self.view.show_error(message);
    }

    fn append(&mut self, item: &Item) {
        let id = RowId(self.view.row_count()).to_string();
        self.view.append_row(&id, &item.cells());
    }

    fn set_table(&mut self, state: TableState) {
        if self.table == state {
            return;
        }
        self.table = state;
        match state {
            TableState::Visible => {
                self.view.set_table_visible(true);
                self.view.set_message(REMOVE_MESSAGE);
            }
            TableState::Hidden => {
                self.view.set_table_visible(false);
                self.view.set_message(EMPTY_MESSAGE);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::view::TableView;

    fn make(name: &str) -> Item {
        Item::new(name, "Test", "1", "2024-01-01", "2024-01-10")
    }

    fn page() -> InventoryPage<TableView> {
        InventoryPage::new(TableView::new())
    }

    #[test]
    fn starts_hidden_with_empty_message() {
        let page = page();
        assert_eq!(page.table_state(), TableState::Hidden);
        assert!(!page.view().table_visible);
        assert_eq!(page.view().message, EMPTY_MESSAGE);
    }

    #[test]
    fn loading_empty_inventory_stays_hidden() {
        let mut page = page();
        page.load(&[]);
        assert_eq!(page.table_state(), TableState::Hidden);
        assert_eq!(page.view().message, EMPTY_MESSAGE);
        assert!(page.view().rows.is_empty());
    }

    #[test]
    fn loading_items_renders_rows_in_order_and_reveals_table() {
        let mut page = page();
        page.load(&[make("Milk"), make("Eggs")]);

        let view = page.view();
        assert!(view.table_visible);
        assert_eq!(view.message, REMOVE_MESSAGE);
        assert_eq!(view.row_ids(), ["row-0", "row-1"]);
        assert_eq!(
            view.rows[0].cells,
            ["Milk", "Test", "1", "2024-01-01", "2024-01-10"]
        );
    }

    #[test]
    fn show_added_appends_only_the_last_item() {
        let mut page = page();
        page.show_added(&[make("Milk")]);
        page.show_added(&[make("Milk"), make("Eggs")]);

        assert_eq!(page.view().first_column(), ["Milk", "Eggs"]);
        assert_eq!(page.view().row_ids(), ["row-0", "row-1"]);
        assert_eq!(page.table_state(), TableState::Visible);
    }

    #[test]
    fn rebuild_renumbers_rows() {
        let mut page = page();
        page.load(&[make("A"), make("B"), make("C")]);
        page.rebuild(&[make("A"), make("C")]);

        assert_eq!(page.view().row_ids(), ["row-0", "row-1"]);
        assert_eq!(page.view().first_column(), ["A", "C"]);
        assert_eq!(page.table_state(), TableState::Visible);
    }

    #[test]
    fn rebuild_to_empty_hides_table_again() {
        let mut page = page();
        page.load(&[make("Milk")]);
        page.rebuild(&[]);

        let view = page.view();
        assert!(view.rows.is_empty());
        assert!(!view.table_visible);
        assert_eq!(view.message, EMPTY_MESSAGE);
        assert_eq!(page.table_state(), TableState::Hidden);
    }

    #[test]
    fn errors_leave_table_untouched() {
        let mut page = page();
        page.load(&[make("Milk")]);
        page.show_error("invalid row number");

        assert_eq!(page.view().error.as_deref(), Some("invalid row number"));
        assert_eq!(page.view().first_column(), ["Milk"]);
        assert_eq!(page.table_state(), TableState::Visible);
    }
}
