use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Field names every item must carry, in display order.
pub const ITEM_FIELDS: [&str; 5] = ["item", "category", "quantity", "purchase-date", "exp-date"];

/// One inventory record. Values are kept as opaque strings; quantity and
/// dates are never parsed.
///
/// Field declaration order matches [`ITEM_FIELDS`], so the JSON object keys
/// come out in display order as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item: String,
    pub category: String,
    pub quantity: String,
    #[serde(rename = "purchase-date")]
    pub purchase_date: String,
    #[serde(rename = "exp-date")]
    pub exp_date: String,
}

impl Item {
    pub fn new(
        item: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        purchase_date: impl Into<String>,
        exp_date: impl Into<String>,
    ) -> Self {
        Self {
            item: item.into(),
            category: category.into(),
            quantity: quantity.into(),
            purchase_date: purchase_date.into(),
            exp_date: exp_date.into(),
        }
    }

    /// Build an item from submitted form fields. Only presence is checked:
    /// empty strings are accepted, unknown keys are ignored.
    pub fn from_fields(fields: &HashMap<String, String>) -> AppResult<Self> {
        let take = |name: &str| fields.get(name).cloned().ok_or(AppError::InvalidItem);

        Ok(Self {
            item: take("item")?,
            category: take("category")?,
            quantity: take("quantity")?,
            purchase_date: take("purchase-date")?,
            exp_date: take("exp-date")?,
        })
    }

    /// Cell values in display order.
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.item,
            &self.category,
            &self.quantity,
            &self.purchase_date,
            &self.exp_date,
        ]
    }

    /// `(field, value)` pairs suitable for a form-encoded body.
    pub fn to_fields(&self) -> Vec<(String, String)> {
        ITEM_FIELDS
            .iter()
            .zip(self.cells())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk_fields() -> HashMap<String, String> {
        Item::new("Milk", "Dairy", "1", "2024-01-01", "2024-01-10")
            .to_fields()
            .into_iter()
            .collect()
    }

    #[test]
    fn from_fields_accepts_complete_submission() {
        let item = Item::from_fields(&milk_fields()).unwrap();
        assert_eq!(item, Item::new("Milk", "Dairy", "1", "2024-01-01", "2024-01-10"));
    }

    #[test]
    fn from_fields_rejects_each_missing_field() {
        for missing in ITEM_FIELDS {
            let mut fields = milk_fields();
            fields.remove(missing);
            assert_eq!(
                Item::from_fields(&fields),
                Err(AppError::InvalidItem),
                "missing {missing} must be rejected"
            );
        }
    }

    #[test]
    fn from_fields_accepts_empty_values_and_ignores_extras() {
        let mut fields: HashMap<String, String> = ITEM_FIELDS
            .iter()
            .map(|name| (name.to_string(), String::new()))
            .collect();
        fields.insert("notes".to_string(), "ignored".to_string());

        let item = Item::from_fields(&fields).unwrap();
        assert_eq!(item.cells(), ["", "", "", "", ""]);
    }

    #[test]
    fn json_keys_follow_display_order() {
        let item = Item::new("Eggs", "Dairy", "12", "2024-02-01", "2024-02-20");
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(
            json,
            r#"{"item":"Eggs","category":"Dairy","quantity":"12","purchase-date":"2024-02-01","exp-date":"2024-02-20"}"#
        );
    }
}
