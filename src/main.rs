//!
//! registry-access CLI
//! -------------------
//! Operator tool for inspecting the registry's access tiers: print the
//! permission matrix, describe a (role, level) pair, or check one permission.
//! Exit status: 0 success/granted, 1 denied, 2 usage or configuration error.

use std::env;
use std::io::{self, IsTerminal};
use std::process::ExitCode;

use registry_access::cli::{run, CliStatus, Io};
use registry_access::config::CliConfig;

fn main() -> ExitCode {
    let cfg = CliConfig::from_env();
    if let Err(e) = cfg.init_logging() {
        eprintln!("error: {}", e);
        return ExitCode::from(CliStatus::UsageError.code());
    }

    let args: Vec<String> = env::args().collect();
    let stdout = io::stdout();
    let color = stdout.is_terminal();
    let (mut out, mut err) = (stdout.lock(), io::stderr().lock());
    match run(&args, &cfg, Io { out: &mut out, err: &mut err, color }) {
        Ok(status) => ExitCode::from(status.code()),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(CliStatus::UsageError.code())
        }
    }
}
