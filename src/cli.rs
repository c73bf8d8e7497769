use clap::Parser;
use std::path::PathBuf;

/// Walk a directory and print a nested JSON tree of file sizes, ready for
/// treemap tools. Directories carry `children`, everything else a byte
/// `value`.
#[derive(Parser, Debug, Clone)]
#[command(name = "dumap", version, about)]
pub struct Cli {
    /// Directory (or file) to scan. Echoed verbatim as the root node's name.
    pub path: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_path_is_kept_verbatim() {
        let cli = Cli::try_parse_from(["dumap", "./data/"]).unwrap();
        assert_eq!(cli.path.as_os_str(), "./data/");
    }

    #[test]
    fn test_path_is_required() {
        assert!(Cli::try_parse_from(["dumap"]).is_err());
    }

    #[test]
    fn test_single_positional_only() {
        assert!(Cli::try_parse_from(["dumap", "a", "b"]).is_err());
    }
}
