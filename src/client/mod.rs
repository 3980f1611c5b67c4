//! Client side of the inventory: an HTTP transport, a transport-agnostic
//! page model, and the controller that wires user gestures to both.

mod api;
mod page;
mod view;

use tracing::{debug, warn};

pub use api::{ClientError, ClientResult, InventoryApi};
pub use page::{InventoryPage, TableState};
pub use view::{RowId, TableRow, TableView, View, EMPTY_MESSAGE, REMOVE_MESSAGE};

/// Drives an [`InventoryPage`] from user gestures.
///
/// Each gesture is one request. On success the page is updated from the
/// service's response; on failure the service's error text is shown. Nothing
/// is retried, and overlapping gestures are not coordinated.
pub struct InventoryClient<V> {
    api: InventoryApi,
    page: InventoryPage<V>,
}

impl<V: View> InventoryClient<V> {
    pub fn new(api: InventoryApi, view: V) -> Self {
        Self {
            api,
            page: InventoryPage::new(view),
        }
    }

    pub fn page(&self) -> &InventoryPage<V> {
        &self.page
    }

    pub fn view(&self) -> &V {
        self.page.view()
    }

    pub fn view_mut(&mut self) -> &mut V {
        self.page.view_mut()
    }

    /// Page load: render whatever the service currently holds.
    pub async fn load(&mut self) {
        match self.api.list().await {
            Ok(items) => {
                debug!(count = items.len(), "Loaded inventory");
                self.page.load(&items);
            }
            Err(err) => self.fail(err),
        }
    }

    /// Add-item form submitted.
    pub async fn submit_item(&mut self) {
        let fields = self.page.view().item_form();
        self.page.view_mut().clear_item_form();

        match self.api.add(&fields).await {
            Ok(items) => self.page.show_added(&items),
            Err(err) => self.fail(err),
        }
    }

    /// Row with id `row_id` double-clicked.
    pub async fn double_click(&mut self, row_id: &str) {
        let row = RowId::index_part(row_id);

        match self.api.remove(row).await {
            Ok(items) => self.page.rebuild(&items),
            Err(err) => self.fail(err),
        }
    }

    /// Heading name form submitted.
    pub async fn submit_name(&mut self) {
        let name = self.page.view().name_input();
        self.page.view_mut().clear_name_form();

        match self.api.heading(&name).await {
            Ok(heading) => self.page.set_heading(&heading),
            Err(err) => self.fail(err),
        }
    }

    fn fail(&mut self, err: ClientError) {
        warn!(error = %err, "Inventory request failed");
        self.page.show_error(&err.to_string());
    }
}
