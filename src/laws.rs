use crate::app;
use crate::church::{and, not, or, select, truth_table, unary_table, AND, FALSE, NOT, OR, TRUE};
use crate::combinators::{I, K, S};
use crate::errors::SkiError;
use crate::interpreter::Interpreter;
use crate::values::Val;

use bitvec::prelude::*;

pub type Check = fn(&mut Interpreter) -> Result<bool, SkiError>;

#[derive(Clone, Copy)]
pub struct Law {
    pub name: &'static str,
    pub check: Check,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub name: &'static str,
    pub outcome: Result<bool, SkiError>,
}

impl Verdict {
    pub fn holds(&self) -> bool {
        self.outcome == Ok(true)
    }
}

impl Law {
    pub fn check(&self, interp: &mut Interpreter) -> Result<bool, SkiError> {
        (self.check)(interp)
    }
}

fn t() -> Val {
    Val::constant("t", Val::Bool(true))
}

fn f() -> Val {
    Val::constant("f", Val::Bool(false))
}

fn picks(interp: &mut Interpreter, b: &Val, expected: bool) -> Result<bool, SkiError> {
    Ok(select(interp, b, &t(), &f())? == Val::Bool(expected))
}

fn is_idiot(interp: &mut Interpreter, term: Val) -> Result<bool, SkiError> {
    let lhs = interp.apply(&term, Val::from("x"))?;
    let rhs = interp.apply(&I, Val::from("x"))?;
    Ok(lhs == rhs)
}

fn table_is(table: Result<BitVec, SkiError>, expected: BitVec) -> Result<bool, SkiError> {
    Ok(table? == expected)
}

pub fn all() -> Vec<Law> {
    vec![
        Law {
            name: "Kxy = x",
            check: |interp| Ok(app!(interp; &K, "x", "y")? == Val::from("x")),
        },
        Law {
            name: "Ix = x",
            check: |interp| Ok(interp.apply(&I, Val::from("x"))? == Val::from("x")),
        },
        Law {
            name: "SKKx = Ix",
            check: |interp| {
                let skk = app!(interp; &S, &K, &K)?;
                is_idiot(interp, skk)
            },
        },
        Law {
            name: "SSKKx = Ix",
            check: |interp| {
                let sskk = app!(interp; &S, &S, &K, &K)?;
                is_idiot(interp, sskk)
            },
        },
        Law {
            name: "SK(KK)x = Ix",
            check: |interp| {
                let kk = interp.apply(&K, K.clone())?;
                let sk_kk = app!(interp; &S, &K, kk)?;
                is_idiot(interp, sk_kk)
            },
        },
        Law {
            name: "TRUE t f = t",
            check: |interp| picks(interp, &TRUE, true),
        },
        Law {
            name: "FALSE t f = f",
            check: |interp| picks(interp, &FALSE, false),
        },
        Law {
            name: "NOT TRUE t f = f",
            check: |interp| {
                let negated = interp.apply(&NOT, TRUE.clone())?;
                picks(interp, &negated, false)
            },
        },
        Law {
            name: "NOT FALSE t f = t",
            check: |interp| {
                let negated = interp.apply(&NOT, FALSE.clone())?;
                picks(interp, &negated, true)
            },
        },
        Law {
            name: "NOT",
            check: |interp| table_is(unary_table(interp, not), bitvec![0, 1]),
        },
        Law {
            name: "p OR q",
            check: |interp| {
                let table = truth_table(interp, |interp, p, q| app!(interp; p, &OR, q));
                table_is(table, bitvec![1, 1, 1, 0])
            },
        },
        Law {
            name: "p q AND",
            check: |interp| {
                let table = truth_table(interp, |interp, p, q| app!(interp; p, q, &AND));
                table_is(table, bitvec![1, 0, 0, 0])
            },
        },
        Law {
            name: "¬(a ∨ b) ⇔ (¬a) ∧ (¬b)",
            check: |interp| {
                let lhs = truth_table(interp, |interp, a, b| {
                    let a_or_b = or(interp, a, b)?;
                    not(interp, &a_or_b)
                })?;
                let rhs = truth_table(interp, |interp, a, b| {
                    let (not_a, not_b) = (not(interp, a)?, not(interp, b)?);
                    and(interp, &not_a, &not_b)
                })?;
                Ok(lhs == rhs)
            },
        },
        Law {
            name: "¬(a ∧ b) ⇔ (¬a) ∨ (¬b)",
            check: |interp| {
                let lhs = truth_table(interp, |interp, a, b| {
                    let a_and_b = and(interp, a, b)?;
                    not(interp, &a_and_b)
                })?;
                let rhs = truth_table(interp, |interp, a, b| {
                    let (not_a, not_b) = (not(interp, a)?, not(interp, b)?);
                    or(interp, &not_a, &not_b)
                })?;
                Ok(lhs == rhs)
            },
        },
    ]
}

pub fn check_all(interp: &mut Interpreter) -> Vec<Verdict> {
    let mut verdicts = vec![];
    for law in all() {
        let outcome = law.check(interp);
        if interp.options.debug > 0 {
            eprintln!("{}: {:?} after {} steps", law.name, outcome, interp.steps);
        }
        verdicts.push(Verdict {
            name: law.name,
            outcome,
        });
    }
    verdicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli_options::Options;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_law_holds() {
        for verdict in check_all(&mut Interpreter::default()) {
            eprintln!("{}: {:?}", verdict.name, verdict.outcome);
            assert!(verdict.holds(), "{} failed: {:?}", verdict.name, verdict.outcome);
        }
    }

    #[test]
    fn law_names_are_unique() {
        let mut names: Vec<_> = all().iter().map(|law| law.name).collect();
        let count = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), count);
    }

    #[test]
    fn broken_law_is_reported() {
        let law = Law {
            name: "Kxy = y",
            check: |interp| Ok(app!(interp; &K, "x", "y")? == Val::from("y")),
        };
        assert_eq!(law.check(&mut Interpreter::default()), Ok(false));
        let verdict = Verdict {
            name: law.name,
            outcome: Err(SkiError::DepthExceeded(1)),
        };
        assert!(!verdict.holds());
    }

    #[test]
    fn shallow_interpreter_fails_combinator_laws() {
        let mut interp = Interpreter::new(Options::default().with_max_depth(1));
        let verdicts = check_all(&mut interp);
        let kestrel = verdicts.iter().find(|v| v.name == "Kxy = x");
        assert_eq!(kestrel.map(|v| v.holds()), Some(true));
        let skk = verdicts.iter().find(|v| v.name == "SKKx = Ix");
        assert_eq!(
            skk.map(|v| v.outcome.clone()),
            Some(Err(SkiError::DepthExceeded(1)))
        );
    }
}
