use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reshelve")]
#[command(about = "Audit album tags and move a music library into a canonical folder layout")]
#[command(version)]
pub struct Cli {
    /// More diagnostics on stderr (-v info, -vv debug). RUST_LOG wins if set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rename album folders and track files to the canonical layout
    Reorganize(RunArgs),

    /// Fix inconsistent album, album artist and year tags
    Audit(RunArgs),

    /// Prepend a prefix to every file name in one folder, asking per file
    Prefix(PrefixArgs),
}

impl Command {
    pub fn args(&self) -> &RunArgs {
        match self {
            Self::Reorganize(args) | Self::Audit(args) => args,
            Self::Prefix(args) => &args.run,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Root of the music library (for `prefix`, the folder to rename in)
    pub library: PathBuf,

    /// Where to write the issue log (default from config)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Plan and confirm as usual but change nothing on disk
    #[arg(long)]
    pub dry_run: bool,

    /// Keep current values and confirm every album without asking
    #[arg(short, long)]
    pub yes: bool,

    /// Allowed album artist values (default from config)
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub categories: Option<Vec<String>>,
}

#[derive(Args, Debug, Clone)]
pub struct PrefixArgs {
    #[command(flatten)]
    pub run: RunArgs,

    /// Text put in front of each file name
    #[arg(long, default_value = "1 - ")]
    pub prefix: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reorganize_with_flags() {
        let cli = Cli::try_parse_from([
            "reshelve",
            "-vv",
            "reorganize",
            "/music",
            "--dry-run",
            "--log-file",
            "out.json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Reorganize(_)));
        let args = cli.command.args();
        assert_eq!(args.library, PathBuf::from("/music"));
        assert!(args.dry_run);
        assert!(!args.yes);
        assert_eq!(args.log_file, Some(PathBuf::from("out.json")));
        assert_eq!(args.categories, None);
    }

    #[test]
    fn parses_audit_categories() {
        let cli = Cli::try_parse_from([
            "reshelve",
            "audit",
            "/music",
            "--yes",
            "--categories",
            "Film,Video Game",
            "Other",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Audit(_)));
        let args = cli.command.args();
        assert!(args.yes);
        assert_eq!(
            args.categories,
            Some(vec!["Film".to_string(), "Video Game".to_string(), "Other".to_string()])
        );
    }

    #[test]
    fn parses_prefix_with_default_and_custom_prefix() {
        let cli = Cli::try_parse_from(["reshelve", "prefix", "/music/Album"]).unwrap();
        let Command::Prefix(args) = &cli.command else {
            panic!("expected prefix, got {:?}", cli.command);
        };
        assert_eq!(args.prefix, "1 - ");
        assert_eq!(cli.command.args().library, PathBuf::from("/music/Album"));

        let cli = Cli::try_parse_from([
            "reshelve",
            "prefix",
            "/music/Album",
            "--prefix",
            "2 - ",
            "--dry-run",
        ])
        .unwrap();
        let Command::Prefix(args) = &cli.command else {
            panic!("expected prefix, got {:?}", cli.command);
        };
        assert_eq!(args.prefix, "2 - ");
        assert!(args.run.dry_run);
    }

    #[test]
    fn library_is_required() {
        assert!(Cli::try_parse_from(["reshelve", "reorganize"]).is_err());
    }
}
