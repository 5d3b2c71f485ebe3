//! Entry-point type discovery.

use std::sync::Arc;

use crate::provider::EntryPointType;
use crate::registry::ModuleRegistry;

/// Find the single entry-point type with the given fully-qualified name.
///
/// Returns `None` when the name is absent, and also when more than one
/// loaded module exports it: an ambiguous install is a host configuration
/// error and must not be silently resolved to either candidate.
pub fn locate_entry_point(
    modules: &ModuleRegistry,
    full_name: &str,
) -> Option<Arc<dyn EntryPointType>> {
    let mut matches = modules
        .modules()
        .flat_map(|m| m.exported_types())
        .filter(|t| t.full_name() == full_name);

    let first = matches.next()?;
    if matches.next().is_some() {
        tracing::warn!(
            "entry-point type '{}' is exported by more than one loaded module",
            full_name
        );
        return None;
    }
    Some(first)
}
