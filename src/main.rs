// clox-warmup: prints the greeting and exits successfully

use std::io;
use std::process::ExitCode;

use clox_warmup::{greeting, logging};

fn main() -> ExitCode {
    logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = greeting::write_greeting(&mut out) {
        // Output failures (closed pipe etc.) do not change the exit status
        tracing::debug!("failed to write greeting: {}", e);
    }

    ExitCode::SUCCESS
}
