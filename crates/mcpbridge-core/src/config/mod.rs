//! Config-file fallback: reads the on-disk server registries directly when the
//! CLI cannot answer.

mod entry;
mod resolver;
mod source;

pub use entry::ConfigServerEntry;
pub use resolver::ConfigFileResolver;
pub use source::{default_sources, ConfigSource, SourceKind};
