//! CLI subcommand implementations.

pub mod delete;
pub mod get;
pub mod list;

use anyhow::{anyhow, Result};
use panel_lib::ResourceSpec;

/// Resolves a resource name given on the command line.
pub(crate) fn resolve_resource(name: &str) -> Result<&'static ResourceSpec> {
    ResourceSpec::by_name(name).ok_or_else(|| {
        let known = panel_lib::resources::ALL
            .iter()
            .map(|spec| spec.name)
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!("unknown resource '{}'. Valid resources: {}", name, known)
    })
}
