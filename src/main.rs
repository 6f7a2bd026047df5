//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use hefzip::tools::cli::{hefopts_init, process, report_opts};
use std::process::ExitCode;

use log::{error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

fn main() -> ExitCode {
    let options = hefopts_init();

    // Available log levels are Error, Warn, Info, Debug, Trace.
    // Log to stderr so -c output stays clean.
    if let Err(e) = TermLogger::init(
        options.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Unable to start the logger: {}", e);
    }
    report_opts(&options);

    //----- Figure how what we need to do and go do it
    match process(&options) {
        Ok(()) => {
            info!("Done.\n");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
