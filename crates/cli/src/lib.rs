use anyhow::Result;

use clap::{Parser, Subcommand};

use crate::{
    commands::{
        BumpArgs, InitArgs, PublishArgs, ShowArgs, handle_bump, handle_init, handle_publish,
        handle_show,
    },
    options::FormatOptions,
    prompter::InquirePrompter,
};
pub mod commands;
pub mod options;
pub mod prompter;

pub use prompter::UserCancelled;

#[derive(Parser, Debug)]
#[command(
    name = "buildver",
    author,
    version,
    about = "Semantic version bookkeeping for build invocations",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Task names for the default bump invocation
    tasks: Vec<String>,

    #[arg(short, long)]
    module: Option<String>,

    #[arg(short, long, default_value = "false")]
    dry_run: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Init(InitArgs),
    Bump(BumpArgs),
    Show(ShowArgs),
    Publish(PublishArgs),
}

pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    if let Some(command) = cli.command {
        match command {
            Commands::Init(args) => handle_init(&args).await?,
            Commands::Bump(args) => handle_bump(&args).await?,
            Commands::Show(args) => handle_show(&args).await?,
            Commands::Publish(args) => handle_publish(&args, &InquirePrompter).await?,
        }
    } else {
        handle_bump(&BumpArgs {
            tasks: cli.tasks,
            module: cli.module,
            dry_run: cli.dry_run,
            format: FormatOptions::Stdout,
        })
        .await?;
    }
    Ok(())
}
