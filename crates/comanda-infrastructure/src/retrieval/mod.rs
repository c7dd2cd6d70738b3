//! Semantic retrieval over catalog-derived text.
//!
//! Built once at startup: every menu item is rendered to a text card, the
//! cards are split into overlapping chunks, and each chunk is embedded with
//! a deterministic local embedder. Search embeds the query and ranks chunks
//! by cosine similarity. No state is mutated after construction, so
//! identical queries over the same catalog always return identical results.

mod chunker;
mod embedder;

pub use chunker::chunk_text;
pub use embedder::{Embedder, cosine_similarity};

use async_trait::async_trait;
use comanda_core::error::Result;
use comanda_core::menu::{MenuCatalog, MenuRetriever};

/// Character window for chunking item cards, with overlap so sentences
/// straddling a boundary stay searchable.
const CHUNK_SIZE: usize = 200;
const CHUNK_OVERLAP: usize = 50;

/// In-memory vector index over menu text chunks.
pub struct EmbeddingIndex {
    embedder: Embedder,
    chunks: Vec<Chunk>,
}

struct Chunk {
    text: String,
    embedding: Vec<f32>,
}

impl EmbeddingIndex {
    /// Builds the index from the catalog.
    pub fn from_catalog(catalog: &MenuCatalog) -> Self {
        let embedder = Embedder::default();
        let chunks = catalog
            .items()
            .iter()
            .flat_map(|item| chunk_text(&item.card(), CHUNK_SIZE, CHUNK_OVERLAP))
            .map(|text| {
                let embedding = embedder.embed(&text);
                Chunk { text, embedding }
            })
            .collect::<Vec<_>>();
        tracing::debug!(chunks = chunks.len(), "embedding index built");
        Self { embedder, chunks }
    }

    /// Ranks all chunks against the query, best first. Ties keep index
    /// order so results stay stable.
    fn ranked(&self, query: &str) -> Vec<(f32, &str)> {
        let query_embedding = self.embedder.embed(query);
        let mut scored: Vec<(f32, &str)> = self
            .chunks
            .iter()
            .map(|chunk| {
                (
                    cosine_similarity(&query_embedding, &chunk.embedding),
                    chunk.text.as_str(),
                )
            })
            .collect();
        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored
    }
}

#[async_trait]
impl MenuRetriever for EmbeddingIndex {
    async fn search(&self, query: &str, k: usize) -> Result<Vec<String>> {
        Ok(self
            .ranked(query)
            .into_iter()
            .take(k)
            .map(|(_, text)| text.to_string())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use comanda_core::menu::MenuItem;
    use rust_decimal::Decimal;

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
                name: "Chocolate Lava Cake".to_string(),
                category: "dessert".to_string(),
                description: "Warm chocolate cake with molten center".to_string(),
                price: Decimal::from(120),
                ingredients: vec!["chocolate".to_string(), "butter".to_string()],
                dietary_info: vec![],
            },
        ])
    }

    #[tokio::test]
    async fn test_search_prefers_relevant_chunks() {
        let index = EmbeddingIndex::from_catalog(&catalog());
        let results = index.search("chocolate cake", 1).await.unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].to_lowercase().contains("chocolate"));
    }

    #[tokio::test]
    async fn test_search_is_deterministic() {
        let index = EmbeddingIndex::from_catalog(&catalog());
        let first = index.search("pizza with mozzarella", 3).await.unwrap();
        let second = index.search("pizza with mozzarella", 3).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_search_caps_results_at_k() {
        let index = EmbeddingIndex::from_catalog(&catalog());
        let results = index.search("food", 1).await.unwrap();
        assert!(results.len() <= 1);
    }
}
