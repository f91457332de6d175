#[cfg(feature = "cli")]
pub mod cli;
pub mod pattern;
pub mod payload;
pub mod sanitize;

pub use payload::DiagramPayload;
pub use sanitize::{sanitize_diagram_source, sanitize_page, Mappings};

#[cfg(feature = "cli")]
pub use cli::run;
