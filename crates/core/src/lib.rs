//! # Modelsmith Core
//!
//! Shared foundations for the modelsmith workspace:
//!
//! - **Errors**: unified error handling with `ScaffoldError` and
//!   `ScaffoldResult`
//! - **Reserved columns**: the bookkeeping column set consumed by both the
//!   model assembler and the schema renderer
//!

pub mod columns;
pub mod error;

// Re-export commonly used items at crate root
pub use columns::{RESERVED_COLUMNS, is_reserved_column};
pub use error::{ScaffoldError, ScaffoldResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
