//! colfmt Plugin System
//!
//! Provides the extension points for report column formats:
//! - `Formatter`: a pure `value -> display string` function with metadata
//! - `FormatEntry`: a registered formatter
//! - `FormatRegistry`: the ordered, name-unique list the host iterates
//! - `FormatConfig`: load-time options

mod traits;
mod entry;
mod registry;
mod config;

pub use traits::{Formatter, FormatMeta, FormatCategory};
pub use entry::FormatEntry;
pub use registry::FormatRegistry;
pub use config::{FormatConfig, EXCLUDE_ENV};

/// Re-export core types for format authors
pub mod prelude {
    pub use crate::{
        Formatter, FormatMeta, FormatCategory,
        FormatEntry, FormatRegistry, FormatConfig,
    };
    pub use colfmt_core::prelude::*;
}
