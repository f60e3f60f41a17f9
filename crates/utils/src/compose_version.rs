use buildver_core::VersionRecord;

/// Compose the display version string: `<major>.<minor>.<patch>[-<preRelease>]`.
///
/// The release code is not part of the string; platforms consume it as a
/// separate monotonic field.
pub fn compose_version(record: &VersionRecord) -> String {
    if record.pre_release.is_empty() {
        format!("{}.{}.{}", record.major, record.minor, record.patch)
    } else {
        format!(
            "{}.{}.{}-{}",
            record.major, record.minor, record.patch, record.pre_release
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(1, 2, 3, "", "1.2.3")]
    #[case(1, 2, 3, "beta", "1.2.3-beta")]
    #[case(0, 0, 0, "", "0.0.0")]
    #[case(10, 0, 7, "rc.1", "10.0.7-rc.1")]
    fn test_compose_version(
        #[case] major: u64,
        #[case] minor: u64,
        #[case] patch: u64,
        #[case] pre_release: &str,
        #[case] expected: &str,
    ) {
        let record = VersionRecord {
            major,
            minor,
            patch,
            pre_release: pre_release.to_string(),
            build: 99,
            code: 42,
        };
        assert_eq!(compose_version(&record), expected);
    }
}
