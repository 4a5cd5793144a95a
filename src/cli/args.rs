//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Convert an image to ASCII art
#[derive(Parser, Debug)]
#[command(name = "img-ascii")]
#[command(version, about = "Convert an image to ASCII art", long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Image to convert
    #[arg(required = true)]
    pub image: Option<PathBuf>,

    /// Print an HTML fragment to stdout instead of writing a text file
    #[arg(long)]
    pub html: bool,

    /// Output file name (".txt" is appended if missing)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Directory to write the text file into
    #[arg(short = 'd', long)]
    pub out_dir: Option<PathBuf>,

    /// Glyphs from lightest to darkest (count is also the sampling stride)
    #[arg(long)]
    pub ramp: Option<String>,

    /// Scale images wider than this down before sampling
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_width: Option<u32>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["img-ascii", "cat.png"]);
        assert_eq!(args.image, Some(PathBuf::from("cat.png")));
        assert!(!args.html);
        assert!(args.output.is_none());
        assert!(args.out_dir.is_none());
        assert!(args.ramp.is_none());
        assert!(args.max_width.is_none());
        assert!(args.config.is_none());
        assert!(!args.verbose);
        assert!(args.command.is_none());
    }

    #[test]
    fn test_args_html_flag() {
        let args = Args::parse_from(["img-ascii", "--html", "cat.png"]);
        assert!(args.html);
    }

    #[test]
    fn test_args_output_and_dir() {
        let args = Args::parse_from(["img-ascii", "cat.png", "-o", "cat", "-d", "/tmp/out"]);
        assert_eq!(args.output.as_deref(), Some("cat"));
        assert_eq!(args.out_dir, Some(PathBuf::from("/tmp/out")));
    }

    #[test]
    fn test_args_ramp_and_width() {
        let args = Args::parse_from(["img-ascii", "cat.png", "--ramp", " .:#", "--max-width", "640"]);
        assert_eq!(args.ramp.as_deref(), Some(" .:#"));
        assert_eq!(args.max_width, Some(640));
    }

    #[test]
    fn test_args_zero_max_width_rejected() {
        let result = Args::try_parse_from(["img-ascii", "cat.png", "--max-width", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_image_required() {
        let result = Args::try_parse_from(["img-ascii"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_config_subcommand() {
        let args = Args::parse_from(["img-ascii", "config", "show"]);
        assert!(args.image.is_none());
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));

        let args = Args::parse_from(["img-ascii", "config", "init"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Init
            })
        ));
    }

    #[test]
    fn test_args_config_path() {
        let args = Args::parse_from(["img-ascii", "cat.png", "-c", "/tmp/config.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/config.toml")));
    }
}
