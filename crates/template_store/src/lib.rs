//! Template Store - Persistence for saved template configurations
//!
//! This crate handles the saved template aggregate, the flattened record
//! shape written to disk (tolerant of partial records on read, always
//! complete on write), and a directory-backed store with async and sync
//! CRUD, listing, search, category filtering, and default-per-type
//! management.

mod category;
mod saved;
mod record;
mod store;
mod error;


pub use category::*;
pub use saved::*;
pub use record::*;
pub use store::*;
pub use error::*;
