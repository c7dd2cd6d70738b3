//! Deterministic keyword matcher over the catalog.
//!
//! This is the model-free half of menu inquiries: a substring-containment
//! scan that tolerates partial phrasing ("I want something with chicken") at
//! the cost of false positives on short keywords. The fuzziness is a
//! deliberate precision/recall trade-off and the containment rules below
//! must not be tightened to tokenized equality.

use std::collections::{HashMap, HashSet};

use super::{MenuCatalog, MenuItem};

impl MenuCatalog {
    /// Finds menu items that match a free-text query.
    ///
    /// Pure function of the catalog plus the query. Matching rules, all on
    /// lowercase text:
    ///
    /// 1. Every category owns a keyword set: its own name plus every word of
    ///    its items' names and descriptions.
    /// 2. A category is active when the query contains the category name or
    ///    any of its keywords as a substring.
    /// 3. An item matches when its name is contained in the query, its
    ///    category is active, or any keyword present in the query is
    ///    contained in the item's name.
    ///
    /// Matches are returned in catalog order.
    pub fn find_matches(&self, query: &str) -> Vec<&MenuItem> {
        let query = query.to_lowercase();
        let keywords_by_category = self.category_keywords();

        let active_categories: HashSet<&str> = keywords_by_category
            .iter()
            .filter(|(category, keywords)| {
                query.contains(category.as_str())
                    || keywords.iter().any(|kw| query.contains(kw.as_str()))
            })
            .map(|(category, _)| category.as_str())
            .collect();

        // Keywords the user actually mentioned, from any category.
        let query_keywords: Vec<&str> = keywords_by_category
            .values()
            .flat_map(|set| set.iter().map(String::as_str))
            .filter(|kw| query.contains(*kw))
            .collect();

        self.items()
            .iter()
            .filter(|item| {
                let name = item.name.to_lowercase();
                let category = item.category.to_lowercase();
                query.contains(name.as_str())
                    || active_categories.contains(category.as_str())
                    || query_keywords.iter().any(|kw| name.contains(kw))
            })
            .collect()
    }

    /// Builds the category → keyword-set map from the catalog.
    fn category_keywords(&self) -> HashMap<String, HashSet<String>> {
        let mut map: HashMap<String, HashSet<String>> = HashMap::new();
        for item in self.items() {
            let category = item.category.to_lowercase();
            let keywords = map.entry(category.clone()).or_default();
            keywords.insert(category);
            keywords.extend(
                item.name
                    .to_lowercase()
                    .split_whitespace()
                    .map(str::to_string),
            );
            keywords.extend(
                item.description
                    .to_lowercase()
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::super::{MenuCatalog, MenuItem};

    fn item(name: &str, category: &str, description: &str, price: i64) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            category: category.to_string(),
            description: description.to_string(),
            price: Decimal::from(price),
            ingredients: vec![],
            dietary_info: vec![],
        }
    }

    #[test]
    fn test_category_substring_matches_single_item() {
        let catalog = MenuCatalog::new(vec![item(
            "Margherita Pizza",
            "pizza",
            "Classic tomato and mozzarella",
            250,
        )]);
        let matches = catalog.find_matches("I want a pizza");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].name, "Margherita Pizza");
    }

    #[test]
    fn test_description_word_activates_category() {
        let catalog = MenuCatalog::new(vec![item(
            "Grilled Chicken Salad",
            "salad",
            "Fresh greens with grilled chicken",
            220,
        )]);
        let matches = catalog.find_matches("something with chicken please");
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_unrelated_query_matches_nothing() {
        let catalog = MenuCatalog::new(vec![item(
            "Margherita Pizza",
            "pizza",
            "Classic tomato and mozzarella",
            250,
        )]);
        assert!(catalog.find_matches("qwerty").is_empty());
    }

    #[test]
    fn test_matches_are_deterministic_and_in_catalog_order() {
        let catalog = MenuCatalog::new(vec![
            item("Margherita Pizza", "pizza", "Tomato and mozzarella", 250),
            item("Farmhouse Pizza", "pizza", "Loaded with vegetables", 320),
        ]);
        let first = catalog.find_matches("show me your pizzas");
        let second = catalog.find_matches("show me your pizzas");
        let names: Vec<_> = first.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Margherita Pizza", "Farmhouse Pizza"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_query_matches_nothing_on_disjoint_catalog() {
        // An empty query contains no category names or keywords; only the
        // name-in-query clause could fire and it cannot for non-empty names.
        let catalog = MenuCatalog::new(vec![item("Margherita Pizza", "pizza", "", 250)]);
        assert!(catalog.find_matches("").is_empty());
    }
}
