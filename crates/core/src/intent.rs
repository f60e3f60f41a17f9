use std::fmt::Display;

use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Classification of one build invocation.
///
/// Decides which fields of the version record mutate: Clean mutates nothing,
/// Release bumps `build` and `code`, Normal bumps `build` only.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Cleanup invocation: the record is left untouched and never saved
    Clean,
    /// Release invocation: increments the build and the release code
    Release,
    /// Any other invocation: increments the build only
    Normal,
}

impl Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Clean => "Clean".bold().cyan(),
                Self::Release => "Release".bold().red(),
                Self::Normal => "Normal".bold().green(),
            }
        )
    }
}

/// Classify the requested task names into an [`Intent`].
///
/// The configured skip task wins over everything else, even when release
/// trigger tasks are requested in the same invocation.
pub fn decide_intent(task_names: &[String], config: &Config) -> Intent {
    if task_names.iter().any(|task| *task == config.skip_on_task) {
        return Intent::Clean;
    }
    if task_names
        .iter()
        .any(|task| config.release_trigger_tasks.contains(task))
    {
        return Intent::Release;
    }
    Intent::Normal
}
