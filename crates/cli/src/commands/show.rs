use anyhow::Result;
use buildver_core::{Config, store};
use buildver_utils::{compose_version, display_record, version_file_path};
use clap::Args;
use serde_json::json;

use crate::options::FormatOptions;

#[derive(Args, Debug)]
#[command(about = "Show the stored version without mutating it")]
pub struct ShowArgs {
    /// Module whose version file is read (defaults to the root project)
    #[arg(short, long)]
    pub module: Option<String>,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Print the stored record for a module.
///
/// Reads through [`store::peek`]: a missing version file shows as the
/// all-zero record and is never created by a display command.
pub async fn handle_show(args: &ShowArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    // validates the config even though show does not classify tasks
    Config::load(&current_dir).await?;
    let path = version_file_path(&current_dir, args.module.as_deref())?;
    let record = store::peek(&path).await?;

    match args.format {
        FormatOptions::Stdout => {
            println!("{}", display_record(args.module.as_deref(), &record));
        }
        FormatOptions::Json => {
            let report = json!({
                "module": args.module,
                "version": compose_version(&record),
                "record": record,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
