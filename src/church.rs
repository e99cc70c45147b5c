//! Church booleans built from `S` and `K`.
//!
//! A boolean is a selector: applied to two alternatives it returns the first
//! when true and the second when false. Pass thunks as the alternatives (see
//! [`select`]) to keep the unchosen branch unevaluated.
use bitvec::prelude::*;

use crate::app;
use crate::combinators::{I, K};
use crate::errors::{Res, SkiError};
use crate::interpreter::Interpreter;
use crate::values::{Term, Val};

/// `TRUE = K`
pub static TRUE: Val = Val::Kestrel;

/// `FALSE = SK`
pub static FALSE: Val = Val::StarlingOf(Term::Static(&K));

static K_FALSE: Val = Val::KestrelOf(Term::Static(&FALSE));
static SI_K_FALSE: Val = Val::StarlingOf2(Term::Static(&I), Term::Static(&K_FALSE));
static KK: Val = Val::KestrelOf(Term::Static(&K));

/// `NOT b = b(SK)(K)`, written without the variable as `S(SI(K(SK)))(KK)`.
pub static NOT: Val = Val::StarlingOf2(Term::Static(&SI_K_FALSE), Term::Static(&KK));

/// Used as `p(OR)(q)`.
pub static OR: Val = Val::Kestrel;

/// Used as `p(q)(AND)`.
pub static AND: Val = Val::StarlingOf(Term::Static(&K));

pub fn not(interp: &mut Interpreter, b: &Val) -> Res {
    interp.apply(&NOT, b.clone())
}

pub fn or(interp: &mut Interpreter, p: &Val, q: &Val) -> Res {
    app!(interp; p, &OR, q)
}

pub fn and(interp: &mut Interpreter, p: &Val, q: &Val) -> Res {
    app!(interp; p, q, &AND)
}

pub fn church(b: bool) -> Val {
    if b {
        TRUE.clone()
    } else {
        FALSE.clone()
    }
}

pub fn to_bool(interp: &mut Interpreter, b: &Val) -> Result<bool, SkiError> {
    match app!(interp; b, true, false)? {
        Val::Bool(value) => Ok(value),
        _ => Err(SkiError::NotABoolean(b.to_string())),
    }
}

/// `b(on_true)(on_false)()`
pub fn select(interp: &mut Interpreter, b: &Val, on_true: &Val, on_false: &Val) -> Res {
    let chosen = app!(interp; b, on_true, on_false)?;
    interp.force(chosen)
}

/// Results of `op` on `(T,T) (T,F) (F,T) (F,F)`, in that order.
pub fn truth_table<F>(interp: &mut Interpreter, op: F) -> Result<BitVec, SkiError>
where
    F: Fn(&mut Interpreter, &Val, &Val) -> Res,
{
    let mut table = BitVec::new();
    for p in &[true, false] {
        for q in &[true, false] {
            let out = op(&mut *interp, &church(*p), &church(*q))?;
            table.push(to_bool(interp, &out)?);
        }
    }
    Ok(table)
}

/// Results of `op` on `(T) (F)`.
pub fn unary_table<F>(interp: &mut Interpreter, op: F) -> Result<BitVec, SkiError>
where
    F: Fn(&mut Interpreter, &Val) -> Res,
{
    let mut table = BitVec::new();
    for p in &[true, false] {
        let out = op(&mut *interp, &church(*p))?;
        table.push(to_bool(interp, &out)?);
    }
    Ok(table)
}
