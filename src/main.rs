use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use dotenv::dotenv;
use env_logger::Env;

use hotel_availability::{render, run, Cli, Config};

fn print_usage() {
    println!("{}", Cli::command().render_usage());
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("warn"));

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let rendered = e.to_string();
            print!("{rendered}");
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                return ExitCode::SUCCESS;
            }
            // value parser errors are rendered without the usage line
            if !rendered.contains("Usage:") {
                print_usage();
            }
            return ExitCode::FAILURE;
        }
    };

    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let output = run(&config).and_then(|report| render(&report, config.format));
    match output {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
