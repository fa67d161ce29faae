use bootsheet::{sign, Error, SignCli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    bootsheet::init_logging();

    let cli = match SignCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let result = cli.file.ok_or(Error::Usage).and_then(sign::sign_file);
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
