use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "jsoncmp",
    about = "Structural comparison of JSON documents",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compare two JSON files
    Diff(DiffArgs),
    /// Start the HTTP comparison server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    #[command(flatten)]
    pub depth: DepthArgs,
}

#[derive(Args)]
pub struct ServeArgs {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    #[arg(long)]
    pub left: Option<PathBuf>,
    #[arg(long)]
    pub right: Option<PathBuf>,
    #[command(flatten)]
    pub depth: DepthArgs,
}

#[derive(Args)]
pub struct DepthArgs {
    /// Give up when documents nest deeper than this
    #[arg(long, conflicts_with = "no_depth_limit")]
    pub max_depth: Option<usize>,
    #[arg(long)]
    pub no_depth_limit: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_diff() {
        let cli = Cli::try_parse_from(["jsoncmp", "diff", "a.json", "b.json"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.left, PathBuf::from("a.json"));
            assert_eq!(args.right, PathBuf::from("b.json"));
            assert_eq!(args.depth.max_depth, None);
            assert!(!args.depth.no_depth_limit);
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_diff_requires_both_files() {
        assert!(Cli::try_parse_from(["jsoncmp", "diff", "a.json"]).is_err());
    }

    #[test]
    fn parse_diff_max_depth() {
        let cli = Cli::try_parse_from(["jsoncmp", "diff", "a", "b", "--max-depth", "12"]).unwrap();
        if let Command::Diff(args) = cli.command {
            assert_eq!(args.depth.max_depth, Some(12));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn depth_flags_conflict() {
        let res = Cli::try_parse_from([
            "jsoncmp", "diff", "a", "b", "--max-depth", "3", "--no-depth-limit",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn parse_serve() {
        let cli = Cli::try_parse_from(["jsoncmp", "serve", "--bind", "0.0.0.0:8080"]).unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.bind, Some("0.0.0.0:8080".parse().unwrap()));
            assert!(args.config.is_none());
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_serve_with_config() {
        let cli = Cli::try_parse_from([
            "jsoncmp", "serve", "-c", "jsoncmp.toml", "--left", "l.json", "--right", "r.json",
        ])
        .unwrap();
        if let Command::Serve(args) = cli.command {
            assert_eq!(args.config, Some(PathBuf::from("jsoncmp.toml")));
            assert_eq!(args.left, Some(PathBuf::from("l.json")));
            assert_eq!(args.right, Some(PathBuf::from("r.json")));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["jsoncmp", "--verbose", "diff", "a", "b"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["jsoncmp", "diff", "a", "b", "--format", "json"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
