pub mod memory_provider;
pub mod provider;

pub use memory_provider::MemoryStorageProvider;
pub use provider::GenerationStoreProvider;
