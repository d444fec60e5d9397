use anyhow::Result;
use clap::Args;
use panel_lib::types::Record;
use panel_lib::{validation, Filter, Notifier, PanelClient};

use crate::commands::resolve_resource;
use crate::output::{print_envelope_status, print_records, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Resource: media, admins, roles, agencies, agents, properties, blogs, portfolios, tickets
    pub resource: String,

    /// Page number (defaults to 1)
    #[arg(long)]
    pub page: Option<i64>,

    /// Results per page (must be one of the resource's page sizes, otherwise its default is used)
    #[arg(long)]
    pub size: Option<i64>,

    /// Search text
    #[arg(long)]
    pub search: Option<String>,

    /// Field filter as key=value; repeat a key to match several values
    #[arg(long = "filter")]
    pub filters: Vec<String>,
}

pub async fn run<N: Notifier>(
    args: &ListArgs,
    client: &PanelClient<N>,
    format: &OutputFormat,
) -> Result<()> {
    let spec = resolve_resource(&args.resource)?;
    let filter = build_filter(args)?;

    let envelope = client.list::<Record>(spec, &filter).await;
    print_envelope_status(&envelope.meta_data)?;

    if let Some(p) = &envelope.pagination {
        eprintln!(
            "Page {}/{} ({} total {})",
            p.current_page, p.total_pages, p.count, spec.name
        );
    }

    print_records(&envelope.data, &envelope, format)
}

/// `--page`/`--size` win over `--filter page=`/`size=` only when given.
fn build_filter(args: &ListArgs) -> Result<Filter> {
    let mut filter = validation::parse_filters(&args.filters)?;
    if let Some(page) = args.page {
        filter = filter.with_page(page);
    }
    if let Some(size) = args.size {
        filter = filter.with_size(size);
    }
    if let Some(search) = &args.search {
        let validated = validation::validate_search(search)?;
        filter = filter.with_search(&validated);
    }
    Ok(filter)
}
