// src/bin/poker_hands_cli.rs
//
// Пример:
//   poker_hands_cli --white "8H 8C 8D QS KD" --black "8H 3D 8D KS KD"
//   white wins: three_of_a_kind

use std::process::ExitCode;

use clap::Parser;
use poker_hands::api::cli::{log, run, CliArgs};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    log(args.verbose);

    match run(&args) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("[CLI] ОШИБКА: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
