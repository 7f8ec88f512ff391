//! CLI entry point for the `sgraph` command-line tool.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use log::LevelFilter;

use social_graph::cli::{repl, run_script, ReplState};
use social_graph::{EdgeListReader, GraphError, OutputFormat, SocialGraphConfig};

#[derive(Parser)]
#[command(
    name = "sgraph",
    version,
    about = "In-memory social graph: connections, traversals and shortest paths"
)]
struct Cli {
    /// Output format: "text" or "json" (overrides the config file)
    #[arg(long)]
    format: Option<String>,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Config file (default: <config dir>/social-graph/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Edge-list file to load before running
    #[arg(long)]
    edges: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run REPL commands from a file ("-" for stdin)
    Run {
        /// Path to the command script
        script: PathBuf,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate for
        shell: Shell,
    },
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn exit_code(e: &GraphError) -> i32 {
    match e {
        GraphError::Io(_) => 1,
        GraphError::Parse { .. } | GraphError::Config(_) => 2,
        GraphError::UserNotFound(_) => 4,
    }
}

fn fail(e: GraphError) -> ! {
    eprintln!("Error: {}", e);
    process::exit(exit_code(&e));
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(*shell, &mut cmd, "sgraph", &mut io::stdout());
        return;
    }

    let mut config = match &cli.config {
        Some(path) => SocialGraphConfig::load(path).unwrap_or_else(|e| fail(e)),
        None => SocialGraphConfig::load_or_default(),
    };
    if let Some(name) = &cli.format {
        match OutputFormat::from_name(name) {
            Some(format) => config.output.format = format,
            None => {
                eprintln!("Invalid format: {}", name);
                process::exit(2);
            }
        }
    }

    let mut state = ReplState::from_config(&config);
    if let Some(path) = &cli.edges {
        if let Err(e) = EdgeListReader::read_from_file(path, &mut state.graph) {
            fail(e);
        }
    }

    match cli.command {
        // No subcommand → launch interactive REPL
        None => {
            if let Err(e) = repl::run(&config, &mut state) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Some(Commands::Run { script }) => {
            let mut stdout = io::stdout();
            let result = if script.as_os_str() == "-" {
                run_script(io::stdin().lock(), &mut state, &mut stdout)
            } else {
                File::open(&script)
                    .map_err(GraphError::from)
                    .and_then(|f| run_script(BufReader::new(f), &mut state, &mut stdout))
            };
            match result {
                Ok(report) if report.failed > 0 => process::exit(5),
                Ok(_) => {}
                Err(e) => fail(e),
            }
        }
        Some(Commands::Completions { .. }) => {}
    }
}
