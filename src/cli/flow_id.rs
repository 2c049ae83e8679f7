//! Flow-id command implementation

use anyhow::Result;
use clap::Args;

#[derive(Args)]
pub struct FlowIdArgs {
    /// Input filename, with or without a directory
    #[arg(value_name = "FILENAME")]
    pub filename: String,
}

pub fn run(args: FlowIdArgs) -> Result<()> {
    println!("{}", flow_config::flow_id(&args.filename)?);
    Ok(())
}
