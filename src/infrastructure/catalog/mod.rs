//! Monster catalog adapters

mod in_memory;
mod srd_monsters;

pub use in_memory::InMemoryMonsterCatalog;
