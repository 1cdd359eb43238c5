use clap::Parser;
use llpplot_cli::{Opts, Subcommand};
use std::process::ExitCode;

fn main() -> ExitCode {
    let opts = Opts::parse();

    env_logger::Builder::new()
        .filter_level(opts.configuration.log_level())
        .parse_default_env()
        .init();

    match opts.subcommand.run(&opts.configuration) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::FAILURE
        }
    }
}
