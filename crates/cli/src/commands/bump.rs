use std::path::{Path, PathBuf};

use anyhow::Result;
use buildver_core::{Config, Intent, VersionRecord, intent::decide_intent, store};
use buildver_utils::{compose_version, display_record, version_file_path};
use clap::Args;
use serde_json::json;

use crate::options::FormatOptions;

#[derive(Args, Debug)]
#[command(about = "Run one version bump for the requested tasks")]
pub struct BumpArgs {
    /// Task names requested for this invocation
    pub tasks: Vec<String>,

    /// Module whose version file is updated (defaults to the root project)
    #[arg(short, long)]
    pub module: Option<String>,

    /// If true, decide and report but do not write the version file.
    #[arg(short, long)]
    pub dry_run: bool,

    #[arg(long, default_value = "stdout")]
    pub format: FormatOptions,
}

/// Result of one non-clean invocation cycle.
pub(crate) struct BumpOutcome {
    pub intent: Intent,
    pub record: VersionRecord,
    pub next: VersionRecord,
    pub was_created: bool,
    pub path: PathBuf,
}

/// Run the load -> decide -> apply -> save cycle for one invocation.
///
/// Returns `None` for a clean invocation, which must not touch the filesystem
/// at all: it returns before load gets a chance to create a missing version
/// file. A dry run reads through [`store::peek`] and skips the save, so it
/// creates nothing either.
pub(crate) async fn run_bump_cycle(
    current_dir: &Path,
    config: &Config,
    tasks: &[String],
    module: Option<&str>,
    dry_run: bool,
) -> Result<Option<BumpOutcome>> {
    let intent = decide_intent(tasks, config);
    if intent == Intent::Clean {
        return Ok(None);
    }

    let path = version_file_path(current_dir, module)?;
    let (record, was_created) = if dry_run {
        (store::peek(&path).await?, false)
    } else {
        store::load(&path).await?
    };

    let declared = match &config.version {
        Some(version) => record.with_declared(version.major, version.minor, &version.pre_release),
        None => record.clone(),
    };
    let next = store::apply(&declared, intent);

    if !dry_run {
        store::save(&path, &next).await?;
    }

    Ok(Some(BumpOutcome {
        intent,
        record,
        next,
        was_created,
        path,
    }))
}

/// Run the full invocation cycle and report the result.
pub async fn handle_bump(args: &BumpArgs) -> Result<()> {
    let current_dir = std::env::current_dir()?;
    let config = Config::load(&current_dir).await?;

    let outcome = run_bump_cycle(
        &current_dir,
        &config,
        &args.tasks,
        args.module.as_deref(),
        args.dry_run,
    )
    .await?;

    let Some(outcome) = outcome else {
        match args.format {
            FormatOptions::Stdout => {
                println!("{} invocation, version store untouched", Intent::Clean);
            }
            FormatOptions::Json => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(
                        &json!({ "intent": Intent::Clean, "saved": false })
                    )?
                );
            }
        }
        return Ok(());
    };

    match args.format {
        FormatOptions::Stdout => {
            if outcome.was_created {
                println!("Created {}", outcome.path.display());
            }
            println!(
                "{}: {} -> {}",
                outcome.intent,
                display_record(args.module.as_deref(), &outcome.record),
                display_record(args.module.as_deref(), &outcome.next)
            );
            if args.dry_run {
                println!("Dry run, version file not written");
            }
        }
        FormatOptions::Json => {
            let report = json!({
                "intent": outcome.intent,
                "module": args.module,
                "wasCreated": outcome.was_created,
                "version": compose_version(&outcome.next),
                "versionCode": outcome.next.code,
                "build": outcome.next.build,
                "saved": !args.dry_run,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }
    Ok(())
}
