mod item;
mod row;

pub use item::{Item, ITEM_FIELDS};
pub use row::parse_row;
