use tokio::fs::{create_dir_all, write};

use anyhow::Result;
use buildver_core::Config;
use buildver_core::config::{CONFIG_DIR, CONFIG_FILE};
use clap::Args;

#[derive(Args, Debug)]
#[command(about = "Initialize a buildver project")]
pub struct InitArgs {
    /// If true, do not make any filesystem changes.
    #[arg(short, long, default_value = "false")]
    pub dry_run: bool,
}

/// Initialize a buildver project with a default config
pub async fn handle_init(args: &InitArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config_dir = current_dir.join(CONFIG_DIR);
    if !args.dry_run {
        create_dir_all(&config_dir).await?;
    }
    let config_file = config_dir.join(CONFIG_FILE);
    if config_file.exists() {
        Err(anyhow::anyhow!("buildver project already initialized"))
    } else {
        if !args.dry_run {
            let config = serde_json::to_string_pretty(&Config::default())?;
            write(config_file, config).await?;
        }

        println!("buildver project initialized in {}", config_dir.display());

        Ok(())
    }
}
