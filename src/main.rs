use anyhow::{Result, anyhow};
use clap::Parser;
use kconfig_dt::cli::Cli;
use kconfig_dt::{DtContext, FUNCTIONS, ResolveError, Settings, registry};
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the evaluated value
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            let usage = e
                .downcast_ref::<ResolveError>()
                .is_some_and(ResolveError::is_usage);
            ExitCode::from(if usage { 2 } else { 1 })
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.list {
        for f in FUNCTIONS {
            println!("{} {} {}", f.name, f.min_args, f.max_args);
        }
        return Ok(());
    }

    let mut settings = Settings::from_env();
    if let Some(dir) = cli.bin_dir {
        settings.bin_dir = Some(dir);
    }
    settings.doc_mode |= cli.doc_mode;

    let function = cli
        .function
        .ok_or_else(|| anyhow!("no function given"))?;
    let ctx = DtContext::load(&settings)?;
    let args: Vec<&str> = cli.args.iter().map(String::as_str).collect();
    println!("{}", registry::call(&ctx, &function, &args)?);
    Ok(())
}
