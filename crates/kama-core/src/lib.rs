pub mod audit;
pub mod error;
pub mod maybe;
pub mod query;

pub use audit::{AuditEvent, AuditLog, AuditTag};
pub use error::{Error, Result};
pub use maybe::Maybe;
pub use query::DocumentQuery;
