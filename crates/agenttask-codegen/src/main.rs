//! OpenAPI client generator CLI.

mod generator;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use generator::ApiClientGenerator;

/// Generate a Rust client module from an OpenAPI document.
#[derive(Parser, Debug)]
#[command(
    name = "agenttask-codegen",
    about = "OpenAPI client generator for the agent task protocol"
)]
struct Args {
    /// Input OpenAPI JSON document
    #[arg(short, long)]
    input: PathBuf,

    /// Output directory for the generated client
    #[arg(short, long, default_value = "./generated")]
    output: PathBuf,

    /// Module name for the generated client
    #[arg(short = 'n', long, default_value = "generated_api_client")]
    namespace: String,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // clap renders its own help/usage text; only the exit code is ours.
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                // --help / --version are not failures.
                ExitCode::SUCCESS
            };
        }
    };

    info!("Starting OpenAPI client generator");

    let generator = ApiClientGenerator::new();
    if generator.generate(&args.input, &args.output, &args.namespace) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
