//! Command implementations

pub mod list;
pub mod sync;

pub use list::list_packages;
pub use sync::sync_readmes;
