use clap::Parser;
use graphcheck_rs_lib::cli::{self, Cli};
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    cli::init_tracing();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let code = runtime.block_on(cli::run(&cli));

    Ok(ExitCode::from(code))
}
