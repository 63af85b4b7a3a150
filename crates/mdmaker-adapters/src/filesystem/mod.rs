//! Vault storage adapters.

mod local;
mod memory;

pub use local::LocalVault;
pub use memory::MemoryVault;
