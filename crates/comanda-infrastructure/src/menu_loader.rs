//! Menu catalog loading.
//!
//! The catalog is a static JSON document, one record per menu item, read
//! once at process start.

use std::fs;
use std::path::Path;

use comanda_core::error::{ComandaError, Result};
use comanda_core::menu::{MenuCatalog, MenuItem};
use serde::Deserialize;

#[derive(Deserialize)]
struct MenuDocument {
    items: Vec<MenuItem>,
}

/// Loads the menu catalog from a JSON file of shape `{"items": [...]}`.
pub fn load_menu(path: impl AsRef<Path>) -> Result<MenuCatalog> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|err| {
        ComandaError::config(format!("failed to read menu file {}: {err}", path.display()))
    })?;
    let document: MenuDocument = serde_json::from_str(&content)?;
    if document.items.is_empty() {
        return Err(ComandaError::config(format!(
            "menu file {} contains no items",
            path.display()
        )));
    }
    tracing::info!(items = document.items.len(), path = %path.display(), "menu catalog loaded");
    Ok(MenuCatalog::new(document.items))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_menu(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_menu_parses_items() {
        let file = write_menu(
            r#"{"items": [{
                "name": "Margherita Pizza",
                "category": "pizza",
                "description": "Classic",
                "price": 250,
                "ingredients": ["tomato"],
                "dietary_info": ["vegetarian"]
            }]}"#,
        );
        let catalog = load_menu(file.path()).unwrap();
        assert_eq!(catalog.items().len(), 1);
        assert_eq!(catalog.items()[0].name, "Margherita Pizza");
    }

    #[test]
    fn test_load_menu_rejects_empty_catalog() {
        let file = write_menu(r#"{"items": []}"#);
        let err = load_menu(file.path()).unwrap_err();
        assert!(matches!(err, ComandaError::Config(_)));
    }

    #[test]
    fn test_load_menu_missing_file_is_config_error() {
        let err = load_menu("/nonexistent/menu.json").unwrap_err();
        assert!(matches!(err, ComandaError::Config(_)));
    }
}
