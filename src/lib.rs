//! Form data binding for Rust
//!
//! This crate provides a minimal form-data binding store:
//! - A fixed-schema store of named inputs and their current string values
//! - Membership predicates against submitted request parameters
//! - Bulk import/export against `HashMap<String, String>` parameter maps
//! - Two-way binding to typed models through an explicit field-enumeration
//!   trait, with optional prefix/suffix name mapping
//! - Pure, escaped `name="..." value="..."` attribute rendering
//!
//! Each form type owns its schema by implementing [`FormSchema`]; a store
//! built with [`FormStore::from_schema`] recognizes exactly the inputs that
//! schema declares and nothing else.

pub mod model;
pub mod render;
pub mod schema;
pub mod store;

pub use model::{BindError, BindResult, FormModel};
pub use render::escape_attribute;
pub use schema::FormSchema;
pub use store::FormStore;
