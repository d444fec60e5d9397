use anyhow::{bail, Result};
use clap::Args;
use panel_lib::types::RecordId;
use panel_lib::{validation, Notifier, PanelClient};

use crate::commands::resolve_resource;
use crate::output::{print_json, OutputFormat};

#[derive(Args)]
pub struct DeleteArgs {
    /// Resource name
    pub resource: String,

    /// One or more entry ids
    #[arg(required = true)]
    pub ids: Vec<RecordId>,
}

pub async fn run<N: Notifier>(
    args: &DeleteArgs,
    client: &PanelClient<N>,
    format: &OutputFormat,
) -> Result<()> {
    let spec = resolve_resource(&args.resource)?;
    let ids = args
        .ids
        .iter()
        .map(|id| validation::validate_id(*id))
        .collect::<Result<Vec<_>, _>>()?;

    let results = client.delete_many(spec, ids.clone()).await;

    if let OutputFormat::Json = format {
        print_json(&results);
    }

    let failed: Vec<String> = ids
        .iter()
        .zip(results.iter())
        .filter(|(_, env)| !env.is_success())
        .map(|(id, env)| format!("{} ({})", id, env.meta_data.message))
        .collect();
    if !failed.is_empty() {
        bail!("failed to delete {}: {}", spec.name, failed.join(", "));
    }
    eprintln!("Deleted {} {}", ids.len(), spec.name);
    Ok(())
}
