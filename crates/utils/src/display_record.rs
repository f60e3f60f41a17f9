use buildver_core::VersionRecord;
use colored::*;

use crate::compose_version;

/// Format a record for terminal output, module name first when present.
pub fn display_record(module: Option<&str>, record: &VersionRecord) -> String {
    format!(
        "{} {} {} {}",
        format!("[{}]", module.unwrap_or("root")).bright_blue().bold(),
        format!("v{}", compose_version(record)).bright_green(),
        format!("(build {})", record.build).bright_white(),
        format!("(code {})", record.code).bright_black(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_record_named_module() {
        let record = VersionRecord {
            major: 1,
            minor: 2,
            patch: 3,
            pre_release: "beta".to_string(),
            build: 11,
            code: 4,
        };
        let display = display_record(Some("app"), &record);
        assert!(display.contains("app"));
        assert!(display.contains("v1.2.3-beta"));
        assert!(display.contains("build 11"));
        assert!(display.contains("code 4"));
    }

    #[test]
    fn test_display_record_root_module() {
        let display = display_record(None, &VersionRecord::default());
        assert!(display.contains("root"));
        assert!(display.contains("v0.0.0"));
    }
}
