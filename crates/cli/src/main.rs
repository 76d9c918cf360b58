use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use modgraph_core::{format_output, generate_diagram, OutputFormat, ScanConfig};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "modgraph")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Render a Go module's internal package import graph")]
#[command(long_about = "Scans a Go module and prints a directed graph of which of its packages \
    import which, as a Graphviz DOT document by default. Externally-visible packages receive \
    cycling high-contrast colors, internal packages are dimmed and reached by dashed edges, and \
    labels reflect the package hierarchy.\n\n\
    Internal packages are suppressed unless --show-internal-packages is given, and individual \
    packages or whole subtrees can be hidden by module-relative path.")]
pub struct Args {
    /// Module root directory to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormatArg::Dot)]
    pub format: OutputFormatArg,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show internal packages imported by a visible package
    #[arg(long)]
    pub show_internal_packages: bool,

    /// Hide one package by module-relative path
    #[arg(long, value_name = "PATH", action = clap::ArgAction::Append)]
    pub hide: Vec<String>,

    /// Hide a package and everything below it
    #[arg(long, value_name = "PATH", action = clap::ArgAction::Append)]
    pub hide_tree: Vec<String>,

    /// Show verbose progress
    #[arg(short, long)]
    pub verbose: bool,

    /// Parallel threads (0 = auto)
    #[arg(long, default_value_t = 0)]
    pub threads: usize,
}

#[derive(ValueEnum, Clone, Debug)]
pub enum OutputFormatArg {
    Dot,
    Json,
    Yaml,
    Summary,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Dot => OutputFormat::Dot,
            OutputFormatArg::Json => OutputFormat::Json,
            OutputFormatArg::Yaml => OutputFormat::Yaml,
            OutputFormatArg::Summary => OutputFormat::Summary,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Build config
    let config = ScanConfig::new(args.path.clone())
        .with_show_internal(args.show_internal_packages)
        .with_hide_exact(args.hide.clone())
        .with_hide_subtree(args.hide_tree.clone())
        .with_threads(args.threads);

    // Show progress if verbose
    let spinner = if args.verbose {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message("Scanning module...");
        Some(pb)
    } else {
        None
    };

    // Scan and assemble the full diagram before writing anything, so a
    // failure never leaves partial output behind.
    let diagram = generate_diagram(&config)?;

    if let Some(ref pb) = spinner {
        pb.finish_with_message(format!(
            "Scanned {} packages in {}ms",
            diagram.stats.total_packages, diagram.metadata.scan_duration_ms
        ));
    }

    let output = format_output(&diagram, args.format.into())?;

    // Write output
    if let Some(path) = args.output {
        fs::write(&path, &output)?;
        if args.verbose {
            eprintln!("Output written to: {}", path.display());
        }
    } else if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }

    Ok(())
}
