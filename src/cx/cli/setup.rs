use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cx", bin_name = "cx", version)]
#[command(
    about = "A command line tool for cut and paste operations on files and directories",
    long_about = None
)]
pub struct Cli {
    /// File or directory to cut
    pub path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the clipboard file
    #[arg(long, global = true, value_name = "FILE")]
    pub clipboard: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Paste the most recent clipboard entry
    Paste {
        /// Keep entry in clipboard after paste (copy instead of move)
        #[arg(short, long)]
        persist: bool,
    },

    /// List clipboard contents
    #[command(aliases = ["ls", "l"])]
    List,

    /// Clear clipboard contents
    #[command(alias = "c")]
    Clear,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cx").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn bare_path_is_a_cut() {
        let cli = parse(&["notes.txt"]);
        assert_eq!(cli.path, Some(PathBuf::from("notes.txt")));
        assert!(cli.command.is_none());
    }

    #[test]
    fn paste_defaults_to_move() {
        assert_eq!(parse(&["paste"]).command, Some(Commands::Paste { persist: false }));
        assert_eq!(parse(&["paste", "-p"]).command, Some(Commands::Paste { persist: true }));
        assert_eq!(
            parse(&["paste", "--persist"]).command,
            Some(Commands::Paste { persist: true })
        );
    }

    #[test]
    fn aliases_resolve() {
        for alias in ["list", "ls", "l"] {
            assert_eq!(parse(&[alias]).command, Some(Commands::List));
        }
        for alias in ["clear", "c"] {
            assert_eq!(parse(&[alias]).command, Some(Commands::Clear));
        }
    }

    #[test]
    fn clipboard_override_is_global() {
        let cli = parse(&["list", "--clipboard", "/tmp/clip.json"]);
        assert_eq!(cli.clipboard, Some(PathBuf::from("/tmp/clip.json")));

        let cli = parse(&["--clipboard", "/tmp/clip.json", "a.txt"]);
        assert_eq!(cli.clipboard, Some(PathBuf::from("/tmp/clip.json")));
        assert_eq!(cli.path, Some(PathBuf::from("a.txt")));
    }

    #[test]
    fn no_arguments_parses() {
        let cli = parse(&[]);
        assert!(cli.path.is_none() && cli.command.is_none());
    }
}
