pub mod config;
pub mod memory;
pub mod repository;

pub use config::{BACKENDS, StoreConfig};
pub use memory::MemoryRepository;
pub use repository::{DeclarationRepository, RepositoryError};
