use std::io::Write;

use bitvec::prelude::*;
use termcolor::{Color, ColorSpec, WriteColor};

use super::church::{self, AND, FALSE, NOT, OR, TRUE};
use super::combinators::{I, K, S};
use super::errors::SkiError;
use super::interpreter::Interpreter;
use super::laws::Verdict;
use super::values::Val;

type Res = Result<(), SkiError>;

pub fn named_values() -> Vec<(&'static str, &'static Val)> {
    vec![
        ("I", &I),
        ("K", &K),
        ("S", &S),
        ("TRUE", &TRUE),
        ("FALSE", &FALSE),
        ("NOT", &NOT),
        ("OR", &OR),
        ("AND", &AND),
    ]
}

fn row(table: &BitVec, rows: usize, index: usize) -> Result<bool, SkiError> {
    table
        .get(index)
        .map(|bit| *bit)
        .ok_or_else(|| SkiError::ShortTable(rows, table.len()))
}

fn write_bit<W: WriteColor>(out: &mut W, bit: bool) -> Res {
    let color = if bit { Color::Green } else { Color::Red };
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{}", if bit { "T" } else { "F" })?;
    out.reset()?;
    Ok(())
}

pub fn unary_table<W: WriteColor>(out: &mut W, name: &str, table: &BitVec) -> Res {
    writeln!(out, "{:<4} p | {}", "", name)?;
    for (index, p) in [true, false].iter().enumerate() {
        write!(out, "{:<4} ", "")?;
        write_bit(out, *p)?;
        write!(out, " | ")?;
        write_bit(out, row(table, 2, index)?)?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn binary_table<W: WriteColor>(out: &mut W, name: &str, table: &BitVec) -> Res {
    writeln!(out, "{:<4} p q | {}", "", name)?;
    let mut index = 0;
    for p in &[true, false] {
        for q in &[true, false] {
            write!(out, "{:<4} ", "")?;
            write_bit(out, *p)?;
            write!(out, " ")?;
            write_bit(out, *q)?;
            write!(out, " | ")?;
            write_bit(out, row(table, 4, index)?)?;
            writeln!(out)?;
            index += 1;
        }
    }
    Ok(())
}

pub fn tables<W: WriteColor>(out: &mut W, interp: &mut Interpreter) -> Res {
    unary_table(out, "NOT p", &church::unary_table(interp, church::not)?)?;
    writeln!(out)?;
    binary_table(out, "p OR q", &church::truth_table(interp, church::or)?)?;
    writeln!(out)?;
    binary_table(out, "p q AND", &church::truth_table(interp, church::and)?)?;
    Ok(())
}

pub fn values<W: WriteColor>(out: &mut W) -> Res {
    for (name, val) in named_values() {
        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{:>5}", name)?;
        out.reset()?;
        writeln!(out, " = {}", val)?;
    }
    Ok(())
}

/// Writes one line per verdict, returning how many failed.
pub fn verdicts<W: WriteColor>(out: &mut W, verdicts: &[Verdict]) -> Result<usize, SkiError> {
    let mut failures = 0;
    for verdict in verdicts {
        let (label, color) = match &verdict.outcome {
            Ok(true) => ("ok", Color::Green),
            Ok(false) => ("FAILED", Color::Red),
            Err(_) => ("ERROR", Color::Yellow),
        };
        if !verdict.holds() {
            failures += 1;
        }
        out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
        write!(out, "{:>6}", label)?;
        out.reset()?;
        write!(out, " {}", verdict.name)?;
        if let Err(err) = &verdict.outcome {
            write!(out, ": {}", err)?;
        }
        writeln!(out)?;
    }
    Ok(failures)
}
