//! Line parser for the rule-text syntax.
//!
//! Each non-blank line is one rule in the observed grammar:
//!
//! ```text
//! 123 -> x          constant
//! y -> x            pass-through
//! NOT y -> x        complement
//! a AND b -> c      also OR, LSHIFT, RSHIFT
//! ```
//!
//! Either input of a binary gate may be a literal (`1 AND x -> z`). Rules
//! may arrive in any order relative to their dependencies; the circuit
//! accepts forward references and the solver sorts them out later.

use thiserror::Error;

use wiresim_core::{Circuit, GateDef, GateOp, Operand};

/// Errors from the rule-text parser, each carrying the 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line does not match any rule form.
    #[error("line {line}: unrecognized rule '{text}'")]
    Unrecognized { line: usize, text: String },

    /// A numeric token does not fit the 16-bit signal domain.
    #[error("line {line}: literal '{token}' does not fit in 16 bits")]
    BadLiteral { line: usize, token: String },

    /// The target of the arrow is not a wire name.
    #[error("line {line}: '{token}' is not a wire name")]
    BadTarget { line: usize, token: String },
}

/// Parses a whole rule file into a circuit. Blank lines are skipped;
/// later rules for the same wire override earlier ones.
pub fn parse_circuit(src: &str) -> Result<Circuit, ParseError> {
    let mut circuit = Circuit::new();
    for (idx, raw) in src.lines().enumerate() {
        if let Some(def) = parse_line(raw, idx + 1)? {
            circuit.define(def);
        }
    }
    Ok(circuit)
}

/// Parses one line into a definition. Returns `Ok(None)` for blank lines.
pub fn parse_line(raw: &str, line: usize) -> Result<Option<GateDef>, ParseError> {
    let text = raw.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let unrecognized = || ParseError::Unrecognized {
        line,
        text: text.to_owned(),
    };

    let (lhs, target) = text.split_once("->").ok_or_else(unrecognized)?;
    let target = target.trim();
    if target.is_empty() || is_literal(target) {
        return Err(ParseError::BadTarget {
            line,
            token: target.to_owned(),
        });
    }

    let tokens: Vec<&str> = lhs.split_whitespace().collect();
    let def = match tokens.as_slice() {
        [value] if is_literal(value) => GateDef::constant(target, parse_literal(value, line)?),
        [source] => GateDef::direct(target, operand(source, line)?),
        ["NOT", input] => GateDef::not(target, operand(input, line)?),
        [lhs_tok, op_tok, rhs_tok] => {
            let op = match *op_tok {
                "AND" => GateOp::And,
                "OR" => GateOp::Or,
                "LSHIFT" => GateOp::LShift,
                "RSHIFT" => GateOp::RShift,
                _ => return Err(unrecognized()),
            };
            GateDef::binary(
                target,
                op,
                operand(lhs_tok, line)?,
                operand(rhs_tok, line)?,
            )
            .map_err(|_| unrecognized())?
        }
        _ => return Err(unrecognized()),
    };
    Ok(Some(def))
}

fn operand(token: &str, line: usize) -> Result<Operand, ParseError> {
    if is_literal(token) {
        Ok(Operand::Literal(parse_literal(token, line)?))
    } else {
        Ok(Operand::Wire(token.into()))
    }
}

fn is_literal(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn parse_literal(token: &str, line: usize) -> Result<u16, ParseError> {
    token.parse().map_err(|_| ParseError::BadLiteral {
        line,
        token: token.to_owned(),
    })
}
