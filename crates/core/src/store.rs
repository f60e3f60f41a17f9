use std::path::Path;

use tokio::fs::{read_to_string, write};

use crate::{error::Error, intent::Intent, record::VersionRecord};

/// Conventional file name of the backing store inside a module directory.
pub const VERSION_FILE: &str = "version.properties";

const KEY_MAJOR: &str = "MAJOR";
const KEY_MINOR: &str = "MINOR";
const KEY_PATCH: &str = "PATCH";
const KEY_PRE_RELEASE: &str = "PRE_RELEASE";
const KEY_BUILD: &str = "BUILD";
const KEY_CODE: &str = "CODE";

/// Load the version record from `path`.
///
/// A missing file is not an error: an empty placeholder is created and the
/// all-default record is returned, with the second tuple field reporting that
/// the file was created. Missing keys in an existing file default to
/// zero/empty.
///
/// # Errors
/// Returns [`Error::Load`] if the file exists but cannot be read,
/// [`Error::Parse`] if a line is malformed, and [`Error::Save`] if the
/// placeholder for a missing file cannot be written.
pub async fn load(path: &Path) -> Result<(VersionRecord, bool), Error> {
    match read_to_string(path).await {
        Ok(text) => Ok((parse(path, &text)?, false)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            write(path, "").await.map_err(|e| Error::Save {
                path: path.to_path_buf(),
                source: e,
            })?;
            Ok((VersionRecord::default(), true))
        }
        Err(e) => Err(Error::Load {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Read the version record from `path` without touching the filesystem.
///
/// Unlike [`load`], a missing file yields the all-default record and no
/// placeholder is created. Display commands and dry runs use this so they
/// never write.
///
/// # Errors
/// Returns [`Error::Load`] if the file exists but cannot be read and
/// [`Error::Parse`] if a line is malformed.
pub async fn peek(path: &Path) -> Result<VersionRecord, Error> {
    match read_to_string(path).await {
        Ok(text) => parse(path, &text),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(VersionRecord::default()),
        Err(e) => Err(Error::Load {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

fn parse(path: &Path, text: &str) -> Result<VersionRecord, Error> {
    let mut record = VersionRecord::default();
    for (index, raw_line) in text.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(Error::Parse {
                path: path.to_path_buf(),
                line: index + 1,
            });
        };
        let parse_counter = |value: &str| {
            value.trim().parse::<u64>().map_err(|_| Error::Parse {
                path: path.to_path_buf(),
                line: index + 1,
            })
        };
        match key.trim() {
            KEY_MAJOR => record.major = parse_counter(value)?,
            KEY_MINOR => record.minor = parse_counter(value)?,
            KEY_PATCH => record.patch = parse_counter(value)?,
            KEY_PRE_RELEASE => record.pre_release = value.trim().to_string(),
            KEY_BUILD => record.build = parse_counter(value)?,
            KEY_CODE => record.code = parse_counter(value)?,
            // foreign keys are tolerated so external tooling can share the file
            _ => {}
        }
    }
    Ok(record)
}

/// Persist `record` to `path`, overwriting any previous contents.
///
/// Keys are written in a fixed order so the file diffs cleanly under version
/// control.
///
/// # Errors
/// Returns [`Error::Save`] if the target path is not writable.
pub async fn save(path: &Path, record: &VersionRecord) -> Result<(), Error> {
    let contents = format!(
        "{KEY_MAJOR}={}\n{KEY_MINOR}={}\n{KEY_PATCH}={}\n{KEY_PRE_RELEASE}={}\n{KEY_BUILD}={}\n{KEY_CODE}={}\n",
        record.major, record.minor, record.patch, record.pre_release, record.build, record.code,
    );
    write(path, contents).await.map_err(|e| Error::Save {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Produce the record for this invocation without touching the original.
///
/// Clean returns an identical copy; the caller must also skip [`save`] for a
/// Clean invocation.
#[must_use]
pub fn apply(record: &VersionRecord, intent: Intent) -> VersionRecord {
    let mut next = record.clone();
    match intent {
        Intent::Clean => {}
        Intent::Release => {
            next.build += 1;
            next.code += 1;
        }
        Intent::Normal => {
            next.build += 1;
        }
    }
    next
}
