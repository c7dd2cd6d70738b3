//! Infrastructure adapters for Comanda.
//!
//! Implementations of the core's port traits against the outside world:
//! the JSON menu document, the embedding-based retrieval index, the SQLite
//! order store, and configuration loading.

pub mod menu_loader;
pub mod retrieval;
pub mod settings;
pub mod storage;

pub use menu_loader::load_menu;
pub use retrieval::EmbeddingIndex;
pub use settings::Settings;
pub use storage::SqliteOrderRepository;
