use anyhow::Result;
use clap::Args;
use panel_lib::types::{Record, RecordId};
use panel_lib::{validation, Notifier, PanelClient};

use crate::commands::resolve_resource;
use crate::output::{print_envelope_status, print_records, OutputFormat};

#[derive(Args)]
pub struct GetArgs {
    /// Resource name
    pub resource: String,

    /// Entry id
    pub id: RecordId,
}

pub async fn run<N: Notifier>(
    args: &GetArgs,
    client: &PanelClient<N>,
    format: &OutputFormat,
) -> Result<()> {
    let spec = resolve_resource(&args.resource)?;
    let id = validation::validate_id(args.id)?;

    let envelope = client.details::<Record>(spec, id).await;
    print_envelope_status(&envelope.meta_data)?;

    let rows: Vec<Record> = envelope.data.iter().cloned().collect();
    print_records(&rows, &envelope, format)
}
