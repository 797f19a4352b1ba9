//! Generate marshal/unmarshal/free routines from a TOML schema description.
//!
//! Usage:
//!   mcdgen [OPTIONS] SCHEMA.toml
//!
//! Options:
//!   --out FILE, -o FILE    Write the generated module to FILE (default: stdout)
//!   --lint, -l             Print schema lint findings to stderr before generating
//!   --crate-visibility     Emit `pub(crate)` items instead of `pub`
//!
//! Set `RUST_LOG=debug` for per-struct diagnostics. Exit code 1 if the schema cannot be
//! loaded or compiled.

use anyhow::Context;
use mcdgen::lint::{lint, LintMessage, Severity};
use mcdgen::{compile, config, emit_rust, write_module, EmitOptions, Visibility};
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_finding(path: &str, m: &LintMessage) {
    let severity = match m.severity {
        Severity::Warning => "warning",
        Severity::Info => "info",
    };
    eprintln!(
        "{}: {}.{}: {}: {} [{}]",
        path,
        m.structure,
        m.member,
        severity,
        m.message,
        m.rule.id()
    );
}

fn usage() -> ! {
    eprintln!("usage: mcdgen [--out FILE] [--lint] [--crate-visibility] SCHEMA.toml");
    std::process::exit(1);
}

fn run(mut args: Vec<String>) -> anyhow::Result<()> {
    let out = if let Some(pos) = args.iter().position(|a| a == "--out" || a == "-o") {
        args.remove(pos);
        if pos >= args.len() {
            usage();
        }
        Some(args.remove(pos))
    } else {
        None
    };
    let do_lint = if let Some(pos) = args.iter().position(|a| a == "--lint" || a == "-l") {
        args.remove(pos);
        true
    } else {
        false
    };
    let visibility = if let Some(pos) = args.iter().position(|a| a == "--crate-visibility") {
        args.remove(pos);
        Visibility::Crate
    } else {
        Visibility::Public
    };
    if args.len() != 1 || args[0].starts_with('-') {
        usage();
    }
    let path = &args[0];

    let (schema, registry) = config::load(path).with_context(|| format!("loading {}", path))?;
    let compiled = compile(&schema, &registry).with_context(|| format!("compiling {}", path))?;

    if do_lint {
        let findings = lint(&compiled);
        for m in &findings {
            print_finding(path, m);
        }
        let warnings = findings.iter().filter(|m| m.severity == Severity::Warning).count();
        if !findings.is_empty() {
            eprintln!("lint: {} warning(s), {} note(s)", warnings, findings.len() - warnings);
        }
    }

    let options = EmitOptions { visibility };
    match out {
        Some(out) => {
            write_module(&out, &compiled, &options).with_context(|| format!("writing {}", out))?;
        }
        None => {
            io::stdout().write_all(emit_rust(&compiled, &options).as_bytes())?;
        }
    }
    info!(structs = compiled.structs().len(), "done");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(args) {
        eprintln!("mcdgen: {:#}", e);
        std::process::exit(1);
    }
}
