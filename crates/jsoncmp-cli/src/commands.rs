use anyhow::Context;
use colored::Colorize;

use jsoncmp_diff::{load_document, DiffOptions, DiffReport, Differ, DifferenceKind};
use jsoncmp_server::{CompareResponse, JsonCmpServer, ServerConfig};

use crate::cli::*;

/// Exit statuses, following diff(1).
pub const EXIT_IDENTICAL: u8 = 0;
pub const EXIT_DIFFERENT: u8 = 1;
pub const EXIT_FAILURE: u8 = 2;

pub fn run_command(cli: Cli) -> anyhow::Result<u8> {
    match cli.command {
        Command::Diff(args) => {
            let identical = cmd_diff(args, &cli.format)?;
            Ok(if identical { EXIT_IDENTICAL } else { EXIT_DIFFERENT })
        }
        Command::Serve(args) => {
            cmd_serve(args)?;
            Ok(EXIT_IDENTICAL)
        }
    }
}

/// Map a command result to a process exit status, reporting errors on stderr.
pub fn exit_status(result: anyhow::Result<u8>) -> u8 {
    match result {
        Ok(status) => status,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            EXIT_FAILURE
        }
    }
}

/// Returns `true` when the documents are identical.
fn cmd_diff(args: DiffArgs, format: &OutputFormat) -> anyhow::Result<bool> {
    let left = load_document(&args.left)
        .with_context(|| format!("loading {}", args.left.display()))?;
    let right = load_document(&args.right)
        .with_context(|| format!("loading {}", args.right.display()))?;

    let differ = Differ::new(args.depth.resolve(DiffOptions::default()));
    let report = differ.compare(&left, &right)?;
    let identical = report.is_empty();

    match format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => {
            let body = serde_json::to_string_pretty(&CompareResponse::from(report))?;
            println!("{body}");
        }
    }
    Ok(identical)
}

fn print_text(report: &DiffReport) {
    if report.is_empty() {
        println!("{} No differences.", "✓".green().bold());
        return;
    }
    for difference in report {
        let line = difference.to_string();
        let line = match difference.kind {
            DifferenceKind::MissingLeft | DifferenceKind::MissingRight => line.yellow(),
            DifferenceKind::ArrayDiffers { .. } | DifferenceKind::ArrayLength { .. } => line.cyan(),
            DifferenceKind::ValueDiffers { .. } => line.red(),
        };
        println!("  {line}");
    }
    println!(
        "\n{} differences: {} absent in left, {} absent in right, {} array, {} value",
        report.len().to_string().bold(),
        report.missing_left(),
        report.missing_right(),
        report.array_changes(),
        report.value_changes(),
    );
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = serve_config(args)?;
    println!(
        "jsoncmp server on {} ({} vs {})",
        config.bind_addr.to_string().bold(),
        config.left_document.display(),
        config.right_document.display()
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(JsonCmpServer::new(config).serve())?;
    Ok(())
}

fn serve_config(args: ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(left) = args.left {
        config.left_document = left;
    }
    if let Some(right) = args.right {
        config.right_document = right;
    }
    config.diff = args.depth.resolve(config.diff);
    Ok(config)
}

impl DepthArgs {
    /// Apply the command-line depth flags on top of `base`.
    fn resolve(&self, base: DiffOptions) -> DiffOptions {
        if self.no_depth_limit {
            DiffOptions::unbounded()
        } else if let Some(max_depth) = self.max_depth {
            DiffOptions::with_max_depth(max_depth)
        } else {
            base
        }
    }
}
