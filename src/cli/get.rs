//! Get command implementation

use anyhow::{Context, Result};
use clap::Args;
use flow_config::resolve_key;
use flow_config::settings::Settings;

#[derive(Args)]
pub struct GetArgs {
    /// Shortcut key, e.g. cm:flow:<flow>:<section>:<key>
    #[arg(value_name = "KEY")]
    pub key: String,
}

pub fn run(args: GetArgs, settings: &Settings) -> Result<()> {
    let value = resolve_key(settings.store(), &args.key)
        .with_context(|| format!("Failed to resolve key '{}'", args.key))?;
    println!("{}", value);
    Ok(())
}
