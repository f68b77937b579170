//! Command dispatch and rendering for the `registry-access` operator CLI.
//! `main` only loads configuration and maps the returned status to an exit code.

pub mod outputformatter;

use std::io::Write;

use serde_json::json;
use tracing::{debug, info};

use crate::config::{CliConfig, OutputFormat};
use crate::error::AppResult;
use crate::identity::{AccessPolicy, AccessSummary, Permission, RoleClaim};
use outputformatter::{summary_table, write_json, write_table};

/// Outcome of one CLI invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliStatus {
    Success,
    Denied,
    UsageError,
}

impl CliStatus {
    pub fn code(&self) -> u8 {
        match self {
            CliStatus::Success => 0,
            CliStatus::Denied => 1,
            CliStatus::UsageError => 2,
        }
    }
}

/// Where output goes and whether the table header may use ANSI color.
pub struct Io<'a, O: Write, E: Write> {
    pub out: &'a mut O,
    pub err: &'a mut E,
    pub color: bool,
}

pub fn usage(program: &str) -> String {
    format!(
        "Usage:\n  {program} matrix\n  {program} describe <ROLE> <LEVEL>\n  {program} check <ROLE> <LEVEL> [<PERMISSION>]\n\nPermissions:\n  {}\n\nEnvironment:\n  REGISTRY_ACCESS_OUTPUT   table | json (default: table)\n  REGISTRY_ACCESS_LOG      log filter when RUST_LOG is unset (default: warn)",
        Permission::ALL.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", ")
    )
}

fn usage_error<E: Write>(err: &mut E, program: &str, msg: &str) -> anyhow::Result<CliStatus> {
    writeln!(err, "error: {}", msg)?;
    writeln!(err, "{}", usage(program))?;
    Ok(CliStatus::UsageError)
}

fn write_summaries<O: Write>(out: &mut O, cfg: &CliConfig, summaries: &[AccessSummary], color: bool) -> anyhow::Result<()> {
    match cfg.output {
        OutputFormat::Json => write_json(out, &serde_json::to_value(summaries)?),
        OutputFormat::Table => {
            let (cols, rows) = summary_table(summaries);
            write_table(out, &cols, &rows, color)
        }
    }
}

/// Run one command. `args[0]` is the program name.
pub fn run<O: Write, E: Write>(args: &[String], cfg: &CliConfig, io: Io<'_, O, E>) -> AppResult<CliStatus> {
    Ok(dispatch(args, cfg, io)?)
}

fn dispatch<O: Write, E: Write>(args: &[String], cfg: &CliConfig, io: Io<'_, O, E>) -> anyhow::Result<CliStatus> {
    let Io { out, err, color } = io;
    let program = args.first().map(|s| s.as_str()).unwrap_or("registry-access");
    debug!(target: "registry_access::cli", output = ?cfg.output, "args={:?}", args.get(1..).unwrap_or_default());

    let policy = AccessPolicy::standard();
    let command = args.get(1).map(|s| s.as_str());
    match command {
        Some("matrix") => {
            write_summaries(out, cfg, &policy.matrix(), color)?;
            return Ok(CliStatus::Success);
        }
        Some("describe") | Some("check") => {}
        Some("-h") | Some("--help") => {
            writeln!(err, "{}", usage(program))?;
            return Ok(CliStatus::Success);
        }
        Some(other) => return usage_error(err, program, &format!("unknown command '{}'", other)),
        None => return usage_error(err, program, "missing command"),
    }

    let (Some(role), Some(level)) = (args.get(2), args.get(3)) else {
        return usage_error(err, program, &format!("{} needs <ROLE> <LEVEL>", command.unwrap_or_default()));
    };
    let Ok(level) = level.parse::<i64>() else {
        return usage_error(err, program, &format!("level '{}' is not an integer", level));
    };
    let claim = RoleClaim::parse(role);

    if command == Some("describe") {
        let label = policy.describe(claim, level);
        match cfg.output {
            OutputFormat::Json => write_json(out, &json!({ "role": role, "level": level, "label": label }))?,
            OutputFormat::Table => writeln!(out, "{}", label)?,
        }
        return Ok(CliStatus::Success);
    }

    let Some(perm) = args.get(4) else {
        let summary = policy.summarize(claim, level);
        write_summaries(out, cfg, std::slice::from_ref(&summary), color)?;
        return Ok(CliStatus::Success);
    };
    let permission = match perm.parse::<Permission>() {
        Ok(p) => p,
        Err(e) => return usage_error(err, program, &e.to_string()),
    };
    let granted = policy.allows(claim, level, permission);
    info!(target: "registry_access::cli", role = ?role, level, %permission, granted, "permission check");
    match cfg.output {
        OutputFormat::Json => write_json(out, &json!({
            "role": role, "level": level, "permission": permission, "granted": granted
        }))?,
        OutputFormat::Table => writeln!(out, "{}", if granted { "granted" } else { "denied" })?,
    }
    Ok(if granted { CliStatus::Success } else { CliStatus::Denied })
}
