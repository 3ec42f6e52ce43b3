//! Outbound ports - Interfaces that the generators require from their host

mod monster_catalog_port;
mod random_port;
mod reference_table_port;

pub use monster_catalog_port::{CatalogError, MonsterCatalogPort};
#[cfg(test)]
pub use random_port::FixedRandomPort;
pub use random_port::RandomPort;
pub use reference_table_port::ReferenceTablePort;
