use clap::Parser;
use std::path::PathBuf;

use crate::paginate::{DEFAULT_MARKER, DEFAULT_PAGE_LEN};

/// Paginate stdin into printable pages with headers and sheet labels.
///
/// Every argument may be the header, so clap's help and version flags are
/// off and anything that fails to parse as options is taken as positionals.
#[derive(Debug, Parser)]
#[command(name = "pr", disable_help_flag = true, disable_version_flag = true)]
pub struct PrCli {
    /// Number of body lines on every page.
    #[arg(long, default_value_t = DEFAULT_PAGE_LEN)]
    pub page_length: usize,

    /// Inline marker; it and the rest of its line are dropped.
    #[arg(long, default_value = DEFAULT_MARKER)]
    pub marker: String,

    /// The last argument is used as the page header.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl PrCli {
    /// Parses `args` (program name first). When the options do not parse
    /// or are out of range, every argument after the program name is a
    /// positional and the options keep their defaults.
    pub fn from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        Self::try_parse_from(args.iter())
            .ok()
            .filter(|cli| cli.page_length > 0 && !cli.marker.is_empty())
            .unwrap_or_else(|| Self {
                page_length: DEFAULT_PAGE_LEN,
                marker: DEFAULT_MARKER.into(),
                args: args.into_iter().skip(1).collect(),
            })
    }

    pub fn header(&self) -> Option<&str> {
        self.args.last().map(String::as_str)
    }
}

/// Stamp a file in place as a 512-byte boot sector.
#[derive(Debug, Parser)]
#[command(name = "sign", version)]
pub struct SignCli {
    pub file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn it_takes_the_last_argument_as_header() {
        let cli = PrCli::from_args(["pr", "ignored", "kernel.c"]);
        assert_eq!(cli.header(), Some("kernel.c"));
        assert_eq!(cli.page_length, 50);
        assert_eq!(cli.marker, "//DOC");

        let cli = PrCli::from_args(["pr", "--page-length", "10", "a", "-b"]);
        assert_eq!(cli.header(), Some("-b"));
        assert_eq!(cli.page_length, 10);
    }

    #[test]
    fn it_has_no_header_without_arguments() {
        let cli = PrCli::from_args(["pr"]);
        assert_eq!(cli.header(), None);
    }

    #[test]
    fn it_treats_flag_like_arguments_as_headers() {
        for flag in ["--help", "-h", "--version", "-V", "--page-length", "--marker"] {
            let cli = PrCli::from_args(["pr", flag]);
            assert_eq!(cli.header(), Some(flag));
            assert_eq!(cli.page_length, DEFAULT_PAGE_LEN);
            assert_eq!(cli.marker, DEFAULT_MARKER);
        }

        let cli = PrCli::from_args(["pr", "--page-length", "zero", "title"]);
        assert_eq!(cli.header(), Some("title"));
        assert_eq!(cli.page_length, DEFAULT_PAGE_LEN);

        let cli = PrCli::from_args(["pr", "--page-length", "0", "title"]);
        assert_eq!(cli.args, vec!["--page-length", "0", "title"]);
        assert_eq!(cli.page_length, DEFAULT_PAGE_LEN);
    }

    #[test]
    fn it_parses_optional_sign_path() {
        let cli = SignCli::parse_from(["sign", "boot.bin"]);
        assert_eq!(cli.file, Some(PathBuf::from("boot.bin")));

        let cli = SignCli::parse_from(["sign"]);
        assert_eq!(cli.file, None);
    }
}
