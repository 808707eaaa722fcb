//! Infrastructure layer - store implementations

pub mod memory;

pub use memory::InMemorySettingsStore;
