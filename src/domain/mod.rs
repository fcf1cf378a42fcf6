//! Domain logic - version ordering and release records, independent of any
//! manifest format or transport

pub mod release;
pub mod version;

pub use release::Release;
pub use version::{compare, Version};
