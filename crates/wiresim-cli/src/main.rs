//! wiresim command-line interface.
//!
//! Provides the `wiresim` binary with subcommands for working with rule
//! files: `check` lints a circuit for undefined references and
//! combinational loops, `resolve` computes wire signals, including the
//! override workflows (`--set`, `--feedback`).
//!
//! Uses the same `wiresim_eval::Solver` as library consumers, so the CLI
//! and the in-process API always agree on results.

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use wiresim_core::{analysis, Circuit, GateDef, WireId};
use wiresim_eval::Solver;

mod parse;

/// Named-wire circuit evaluator.
#[derive(Parser)]
#[command(name = "wiresim", about = "Named-wire circuit evaluator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Check a rule file for undefined references and combinational loops.
    Check {
        /// Path to the rule file.
        #[arg(short, long)]
        input: PathBuf,
    },
    /// Resolve wire signals from a rule file.
    Resolve {
        /// Path to the rule file.
        #[arg(short, long)]
        input: PathBuf,

        /// Wire to resolve (repeatable; default: every defined wire).
        #[arg(short, long = "wire")]
        wires: Vec<String>,

        /// Override a wire with a constant before resolving, e.g. `b=956`.
        #[arg(long = "set", value_name = "WIRE=VALUE")]
        sets: Vec<String>,

        /// Resolve FROM, redefine INTO as that constant, then resolve
        /// the requested wires against the updated circuit.
        #[arg(long, value_name = "FROM:INTO")]
        feedback: Option<String>,

        /// Emit results as JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match cli.command {
        Commands::Check { input } => run_check(&input),
        Commands::Resolve {
            input,
            wires,
            sets,
            feedback,
            json,
        } => run_resolve(&input, &wires, &sets, feedback.as_deref(), json),
    };
    process::exit(exit_code);
}

// Exit codes: 0 = success, 1 = evaluation error, 2 = parse error or
// check findings, 3 = I/O error.

/// Reads and parses a rule file, reporting failures on stderr.
fn load_circuit(path: &Path) -> Result<Circuit, i32> {
    let src = fs::read_to_string(path).map_err(|e| {
        eprintln!("error: failed to read '{}': {}", path.display(), e);
        3
    })?;
    parse::parse_circuit(&src).map_err(|e| {
        eprintln!("error: {}", e);
        2
    })
}

/// Execute the check subcommand.
fn run_check(input: &Path) -> i32 {
    let circuit = match load_circuit(input) {
        Ok(circuit) => circuit,
        Err(code) => return code,
    };

    let report = analysis::analyze(&circuit);
    if report.is_clean() {
        println!("{} wires, no findings", circuit.len());
        return 0;
    }

    for (target, missing) in &report.undefined {
        eprintln!("undefined wire '{}' referenced by '{}'", missing, target);
    }
    for members in &report.loops {
        let wires = members
            .iter()
            .map(WireId::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        eprintln!("combinational loop through {}", wires);
    }
    2
}

/// Execute the resolve subcommand.
fn run_resolve(
    input: &Path,
    wires: &[String],
    sets: &[String],
    feedback: Option<&str>,
    json: bool,
) -> i32 {
    let mut circuit = match load_circuit(input) {
        Ok(circuit) => circuit,
        Err(code) => return code,
    };

    for set in sets {
        let Some((wire, value)) = parse_set(set) else {
            eprintln!("error: --set expects WIRE=VALUE, got '{}'", set);
            return 2;
        };
        circuit.define(GateDef::constant(wire, value));
    }

    if let Some(arg) = feedback {
        let Some((from, into)) = parse_feedback(arg) else {
            eprintln!("error: --feedback expects FROM:INTO, got '{}'", arg);
            return 2;
        };
        // Feedback is an override: the reseeded wire must already exist.
        if let Err(e) = circuit.require(&into) {
            eprintln!("error: {}", e);
            return 1;
        }
        // First pass: seed value. The pass is dropped before the
        // override so no stale cache can survive it.
        let seed = {
            let mut pass = Solver::new(&circuit);
            match pass.resolve(&from) {
                Ok(value) => value,
                Err(e) => {
                    eprintln!("error: {}", e);
                    return 1;
                }
            }
        };
        circuit.define(GateDef::constant(into, seed));
    }

    let mut solver = Solver::new(&circuit);
    let mut results: Vec<(WireId, u16)> = Vec::new();
    if wires.is_empty() {
        match solver.resolve_all() {
            Ok(all) => results.extend(all),
            Err(e) => {
                eprintln!("error: {}", e);
                return 1;
            }
        }
    } else {
        for name in wires {
            let wire = WireId::from(name.as_str());
            match solver.resolve(&wire) {
                Ok(value) => results.push((wire, value)),
                Err(e) => {
                    eprintln!("error: {}", e);
                    return 1;
                }
            }
        }
    }

    if json {
        let map: serde_json::Map<String, serde_json::Value> = results
            .iter()
            .map(|(wire, value)| (wire.to_string(), serde_json::Value::from(*value)))
            .collect();
        match serde_json::to_string_pretty(&map) {
            Ok(out) => println!("{}", out),
            Err(e) => {
                eprintln!("error: {}", e);
                return 1;
            }
        }
    } else {
        for (wire, value) in &results {
            println!("{} = {}", wire, value);
        }
    }
    0
}

/// Parses a `--set` argument of the form `wire=value`.
fn parse_set(arg: &str) -> Option<(WireId, u16)> {
    let (wire, value) = arg.split_once('=')?;
    let wire = wire.trim();
    if wire.is_empty() {
        return None;
    }
    Some((wire.into(), value.trim().parse().ok()?))
}

/// Parses a `--feedback` argument of the form `from:into`.
fn parse_feedback(arg: &str) -> Option<(WireId, WireId)> {
    let (from, into) = arg.split_once(':')?;
    let (from, into) = (from.trim(), into.trim());
    if from.is_empty() || into.is_empty() {
        return None;
    }
    Some((from.into(), into.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_set_accepts_wire_value_pairs() {
        assert_eq!(parse_set("b=956"), Some(("b".into(), 956)));
        assert_eq!(parse_set(" b = 956 "), Some(("b".into(), 956)));
        assert_eq!(parse_set("b=70000"), None);
        assert_eq!(parse_set("=956"), None);
        assert_eq!(parse_set("b956"), None);
    }

    #[test]
    fn parse_feedback_accepts_from_into_pairs() {
        assert_eq!(parse_feedback("a:b"), Some(("a".into(), "b".into())));
        assert_eq!(parse_feedback("a:"), None);
        assert_eq!(parse_feedback("ab"), None);
    }
}
