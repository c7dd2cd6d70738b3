//! Menu catalog: the static set of items the restaurant serves.
//!
//! The catalog is loaded once at startup and never mutated. Item names are
//! treated as case-insensitive natural keys.

mod matcher;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single item on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub dietary_info: Vec<String>,
}

impl MenuItem {
    /// Renders the item as the text card fed to the retrieval index.
    pub fn card(&self) -> String {
        format!(
            "Name: {}\nCategory: {}\nDescription: {}\nPrice: ₹{}\nIngredients: {}\nDietary Info: {}",
            self.name,
            self.category,
            self.description,
            self.price,
            self.ingredients.join(", "),
            self.dietary_info.join(", "),
        )
    }
}

/// The restaurant's menu, in serving order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up an item by case-insensitive exact name match.
    pub fn get(&self, name: &str) -> Option<&MenuItem> {
        self.items
            .iter()
            .find(|item| item.name.eq_ignore_ascii_case(name))
    }

    /// Distinct categories, in first-appearance order.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for item in &self.items {
            if !seen
                .iter()
                .any(|c: &&str| c.eq_ignore_ascii_case(&item.category))
            {
                seen.push(item.category.as_str());
            }
        }
        seen
    }
}

/// Semantic search over catalog-derived text, treated as an opaque
/// capability. Built once at startup by the infrastructure crate.
#[async_trait]
pub trait MenuRetriever: Send + Sync {
    /// Returns up to `k` text snippets relevant to `query`.
    async fn search(&self, query: &str, k: usize) -> Result<Vec<String>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MenuCatalog {
        MenuCatalog::new(vec![
            MenuItem {
                name: "Margherita Pizza".to_string(),
                category: "pizza".to_string(),
                description: "Classic pizza with tomato and mozzarella".to_string(),
                price: Decimal::from(250),
                ingredients: vec!["tomato".to_string(), "mozzarella".to_string()],
                dietary_info: vec!["vegetarian".to_string()],
            },
            MenuItem {
                name: "Chicken Burger".to_string(),
                category: "burger".to_string(),
                description: "Grilled chicken patty with lettuce".to_string(),
                price: Decimal::from(180),
                ingredients: vec!["chicken".to_string(), "lettuce".to_string()],
                dietary_info: vec![],
            },
        ])
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = catalog();
        assert!(catalog.get("margherita pizza").is_some());
        assert!(catalog.get("MARGHERITA PIZZA").is_some());
        assert!(catalog.get("Pepperoni Pizza").is_none());
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let catalog = catalog();
        assert_eq!(catalog.categories(), vec!["pizza", "burger"]);
    }

    #[test]
    fn test_card_contains_item_fields() {
        let catalog = catalog();
        let card = catalog.items()[0].card();
        assert!(card.contains("Margherita Pizza"));
        assert!(card.contains("Category: pizza"));
        assert!(card.contains("₹250"));
    }
}
