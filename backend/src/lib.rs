//! Server-side course search: store abstraction and scan-and-filter service.

pub mod api;
pub mod store;
