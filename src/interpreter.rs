use super::cli_options::Options;
use super::errors::{Res, SkiError};
use super::values::{Term, Val};

// Applies combinators to their arguments, one reduction at a time.
pub struct Interpreter {
    pub options: Options,
    pub steps: usize,
    depth: usize,
}

impl Default for Interpreter {
    fn default() -> Interpreter {
        Interpreter::new(Options::default())
    }
}

impl Interpreter {
    pub fn new(options: Options) -> Interpreter {
        Interpreter {
            options,
            steps: 0,
            depth: 0,
        }
    }

    fn enter(&mut self) -> Result<(), SkiError> {
        if self.depth >= self.options.max_depth {
            return Err(SkiError::DepthExceeded(self.options.max_depth));
        }
        self.depth += 1;
        self.steps += 1;
        Ok(())
    }

    /// Applies `func` to `arg`, returning a value in weak head normal form.
    pub fn apply(&mut self, func: &Val, arg: Val) -> Res {
        self.enter()?;
        let res = self.reduce(func, arg);
        self.depth -= 1;
        res
    }

    fn reduce(&mut self, func: &Val, arg: Val) -> Res {
        if self.options.debug > 0 {
            eprintln!("apply {} to {}", func, arg);
        }
        use Val::*;
        match func {
            Idiot => self.whnf(arg),
            Kestrel => Ok(KestrelOf(Term::new(arg))),
            KestrelOf(kept) => self.whnf((**kept).clone()),
            Starling => Ok(StarlingOf(Term::new(arg))),
            StarlingOf(a) => Ok(StarlingOf2(a.clone(), Term::new(arg))),
            StarlingOf2(a, b) => {
                // a c (b c), with b c left for whoever needs it.
                let arg = Term::new(arg);
                let ac = self.apply(a, (*arg).clone())?;
                let bc = Pending(b.clone(), arg);
                self.apply(&ac, bc)
            }
            Pending(..) => {
                let func = self.whnf(func.clone())?;
                self.apply(&func, arg)
            }
            Func(_, body) => {
                let out = body(self, arg)?;
                self.whnf(out)
            }
            Bool(_) | I32(_) | Str(_) | Thunk(..) => Err(SkiError::invalid_application(func, &arg)),
        }
    }

    /// Evaluates suspended applications until the head is a value.
    pub fn whnf(&mut self, val: Val) -> Res {
        match val {
            Val::Pending(func, arg) => {
                if self.options.debug > 1 {
                    eprintln!("resuming {}{}", *func, *arg);
                }
                self.apply(&func, (*arg).clone())
            }
            val => Ok(val),
        }
    }

    /// Calls a thunk with no arguments.
    pub fn force(&mut self, val: Val) -> Res {
        match self.whnf(val)? {
            Val::Thunk(name, body) => {
                if self.options.debug > 0 {
                    eprintln!("forcing {}", name);
                }
                let out = body(self)?;
                self.whnf(out)
            }
            other => Err(SkiError::InvalidApplication(
                other.to_string(),
                "()".to_string(),
            )),
        }
    }
}
