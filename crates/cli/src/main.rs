mod commands;
mod exit_code;

use clap::Parser;
use colored::Colorize;
use exit_code::ExitCode;
use std::path::PathBuf;

/// Banner shown in the help prompt.
const BANNER: &str = r"
█████▀███████████████████████████████████████████
█─▄▄▄▄█─▄▄▄─█▄─▄███▄─▄▄─██▀▄─██▄─▄▄▀█─▄▄▄▄█▄─▄▄─█
█─██▄─█─██▀─██─██▀██─▄▄▄██─▀─███─▄─▄█▄▄▄▄─██─▄█▀█
▀▄▄▄▄▄▀───▄▄▀▄▄▄▄▄▀▄▄▄▀▀▀▄▄▀▄▄▀▄▄▀▄▄▀▄▄▄▄▄▀▄▄▄▄▄▀
";

#[derive(Parser)]
#[command(name = "gqlparse")]
#[command(about = "Generate smoke-test operations from a GraphQL introspection result", long_about = None)]
#[command(version)]
#[command(before_help = BANNER)]
struct Cli {
    /// JSON file with the GraphQL introspection response
    #[arg(short, long, value_name = "FILE", required_unless_present = "intro")]
    input: Option<PathBuf>,

    /// Also generate operations for the mutation root type
    #[arg(short, long)]
    mutations: bool,

    /// Print the introspection query in request-ready encodings and exit
    #[arg(long)]
    intro: bool,

    /// GraphQL endpoint URL shown in the --intro curl example
    #[arg(long, value_name = "URL", default_value = "https://example.com/graphql")]
    url: String,
}

fn main() {
    init_tracing();

    let cli = Cli::parse();

    // --intro short-circuits before any file I/O.
    if cli.intro {
        commands::intro::run(&cli.url);
        ExitCode::Success.exit();
    }

    let Some(input) = cli.input else {
        // clap's required_unless_present rejects this combination already.
        eprintln!(
            "{} an introspection file is required; see --help",
            "error:".red().bold()
        );
        ExitCode::UsageError.exit();
    };

    if let Err(error) = commands::generate::run(&input, cli.mutations) {
        eprintln!("{} {error:#}", "error:".red().bold());
        ExitCode::for_error(&error).exit();
    }
}

/// Initialize basic tracing based on the RUST_LOG env var
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}
