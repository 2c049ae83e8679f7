//! Show command implementation

use anyhow::{Context, Result};
use clap::Args;
use flow_config::settings::Settings;
use flow_config::{ConfigManager, FlowRequest};

use super::utils::split_namespaces;

#[derive(Args)]
pub struct ShowArgs {
    /// Required namespaces, loaded and stacked in name order
    #[arg(value_name = "NAMESPACE")]
    pub namespaces: Vec<String>,

    /// Additional namespaces (comma-separated)
    #[arg(short = 'n', long = "namespaces", value_name = "LIST")]
    pub namespace_list: Option<String>,

    /// Layer the configuration of this flow ID on top
    #[arg(short = 'f', long, value_name = "FLOW_ID", conflicts_with = "filename")]
    pub flow: Option<String>,

    /// Derive the flow ID from this filename
    #[arg(long, value_name = "FILENAME")]
    pub filename: Option<String>,

    /// Output format: text or json
    #[arg(long, default_value = "text", value_name = "FORMAT")]
    pub format: String,
}

pub fn run(args: ShowArgs, settings: &Settings) -> Result<()> {
    let format = args.format.to_lowercase();
    if !matches!(format.as_str(), "text" | "json") {
        anyhow::bail!("Invalid output format: {}. Use 'text' or 'json'.", args.format);
    }

    let mut namespaces = args.namespaces;
    let extra = split_namespaces(args.namespace_list.as_deref(), &namespaces);
    namespaces.extend(extra);

    let request = match (args.flow, args.filename) {
        (Some(flow), _) => Some(FlowRequest::Id(flow)),
        (None, Some(filename)) => Some(FlowRequest::Filename(filename)),
        (None, None) => None,
    };

    let cm = ConfigManager::builder(settings.store())
        .namespaces(namespaces)
        .flow_request(request)
        .load()
        .context("Failed to load configuration")?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&cm.to_json())?);
        return Ok(());
    }

    if let Some(flow) = cm.flow_id() {
        println!("Flow: {}", flow);
    }
    println!("Files:");
    for file in cm.files() {
        println!("  {}", file.display());
    }
    println!();
    print!("{}", cm.render());

    Ok(())
}
