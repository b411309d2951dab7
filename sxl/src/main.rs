use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use clap::error::ErrorKind;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use sxl::cli::{self, Cli};
use sxl::{Style, Sxl, SxlConfig, SxlError, banner, render};
use sxl_spacex::SpacexConnector;

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Cli::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::from(cli::EXIT_OK),
                _ => ExitCode::from(cli::EXIT_LAUNCH),
            };
        }
    };

    if args.version {
        print!("{}", cli::version_text());
        return ExitCode::from(cli::EXIT_OK);
    }

    // RUST_LOG=debug shows every request; the default only surfaces data gaps
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();

    let outcome = match args.config(|name| std::env::var(name).ok()) {
        Ok(cfg) => run(cfg).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(()) => ExitCode::from(cli::EXIT_OK),
        Err(e) => {
            eprint!("{}", cli::diagnostic(&e));
            ExitCode::from(cli::exit_code(&e))
        }
    }
}

async fn run(cfg: SxlConfig) -> Result<(), SxlError> {
    let connector = SpacexConnector::builder()
        .timeout(cfg.request_timeout)
        .build()?;
    let resources = cfg.selection.resources();
    let sxl = Sxl::builder()
        .with_connector(Arc::new(connector))
        .config(cfg)
        .build()?;
    let style = Style::detect();

    print!("{}", banner());
    for &resource in resources {
        let launch = sxl.launch(resource).await?;
        print!("\n{}", render(&launch, resource, style));
    }
    Ok(())
}
