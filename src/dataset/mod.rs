//! Static vehicle and restriction catalog.
//!
//! # Data Flow
//! ```text
//! data/restrictions.json
//!     → loader.rs (read & deserialize)
//!     → validation.rs (type-specific field checks)
//!     → Dataset (immutable, shared via Arc)
//! ```
//!
//! # Design Decisions
//! - Loaded once at startup; a load failure is fatal
//! - Never mutated for the lifetime of the process

pub mod loader;
pub mod types;
pub mod validation;

pub use loader::{load_dataset, parse_dataset, DatasetError};
pub use types::{
    weekday_code, Dataset, HourRange, HourRangeError, Restriction, RestrictionKind, Severity,
    Vehicle, WEEKDAY_CODES,
};
