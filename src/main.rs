#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::{
    io::{Write, stderr},
    process::ExitCode,
};

fn main() -> ExitCode {
    match chess_rules::repl::repl() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let _ = writeln!(stderr().lock(), "Error: {err}");
            ExitCode::FAILURE
        }
    }
}
