use clap::ValueEnum;

/// Output format for command results.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOptions {
    /// Human-readable colored output
    Stdout,
    /// Machine-readable JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("stdout", FormatOptions::Stdout)]
    #[case("json", FormatOptions::Json)]
    fn test_format_options_from_str(#[case] input: &str, #[case] expected: FormatOptions) {
        let parsed = FormatOptions::from_str(input, true).unwrap();
        assert_eq!(parsed, expected);
    }
}
