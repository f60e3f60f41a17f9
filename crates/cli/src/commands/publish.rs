use anyhow::{Context, Result};
use buildver_core::Config;
use buildver_core::publish::{resolve_publish_command, run_publish_command};
use buildver_utils::{compose_version, display_record};
use clap::Args;
use colored::Colorize;

use crate::commands::bump::run_bump_cycle;
use crate::prompter::Prompter;

#[derive(Args, Debug)]
#[command(about = "Run a version bump, then publish artifacts with the result")]
pub struct PublishArgs {
    /// Task names requested for this invocation
    pub tasks: Vec<String>,

    /// Module whose artifacts are published (defaults to the root project)
    #[arg(short, long)]
    pub module: Option<String>,

    #[arg(short, long)]
    pub dry_run: bool,

    #[arg(short, long)]
    pub yes: bool,
}

/// Run the bump cycle, then hand the computed version to the configured
/// publish command.
///
/// The command owns signing, credentials and upload transport; its outcome
/// never feeds back into the version store. A clean invocation skips the save
/// and the publish both.
pub async fn handle_publish(args: &PublishArgs, prompter: &dyn Prompter) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config = Config::load(&current_dir).await?;

    // resolve the command up front so a config mistake aborts the invocation
    // before anything is persisted
    let command = resolve_publish_command(args.module.as_deref(), &config)
        .context("No publish command configured (set publish.default in .buildver/config.json)")?
        .to_string();

    let outcome = run_bump_cycle(
        &current_dir,
        &config,
        &args.tasks,
        args.module.as_deref(),
        args.dry_run,
    )
    .await?;

    let Some(outcome) = outcome else {
        println!("Clean invocation, nothing to publish");
        return Ok(());
    };

    let version = compose_version(&outcome.next);
    println!(
        "Publishing {} with `{}`",
        display_record(args.module.as_deref(), &outcome.next),
        command
    );

    if args.dry_run {
        println!("Dry run, nothing will be published");
        return Ok(());
    }

    let confirm = if args.yes {
        true
    } else {
        prompter.confirm("Are you sure you want to publish?")?
    };
    if !confirm {
        println!("Publish cancelled");
        return Ok(());
    }

    let working_dir = match args.module.as_deref() {
        Some(module) => current_dir.join(module),
        None => current_dir,
    };
    run_publish_command(&command, &working_dir, &version, outcome.next.code).await?;
    println!("Successfully published {}", format!("v{version}").bright_green());
    Ok(())
}
