//! Combinator values.
//!
//! A `Val` is anything a combinator can be applied to or return: the
//! combinators themselves, their partial applications, suspended
//! applications, and host data or closures supplied by the caller.
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use derivative::Derivative;

use crate::errors::Res;
use crate::interpreter::Interpreter;

// Host bodies evaluate through the interpreter that called them, so they
// share its depth limit and debug level.
pub type FuncImpl = Arc<dyn Fn(&mut Interpreter, Val) -> Res + Send + Sync>;
pub type ThunkImpl = Arc<dyn Fn(&mut Interpreter) -> Res + Send + Sync>;

/// A shared sub-term.
///
/// Named combinators are `static`s that point at each other through
/// `Term::Static`; anything built while evaluating lives behind an `Arc`.
#[derive(Clone, Debug)]
pub enum Term {
    Static(&'static Val),
    Shared(Arc<Val>),
}

impl Term {
    pub fn new(val: Val) -> Term {
        Term::Shared(Arc::new(val))
    }
}

impl Deref for Term {
    type Target = Val;

    fn deref(&self) -> &Val {
        match self {
            Term::Static(val) => val,
            Term::Shared(val) => val,
        }
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Term) -> bool {
        **self == **other
    }
}

#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub enum Val {
    /// `I`
    Idiot,
    /// `K`
    Kestrel,
    /// `S`
    Starling,
    /// `K a`, waiting for the argument it will discard.
    KestrelOf(Term),
    /// `S a`
    StarlingOf(Term),
    /// `S a b`
    StarlingOf2(Term, Term),
    /// `f x`, recorded but not yet evaluated.
    Pending(Term, Term),
    Bool(bool),
    I32(i32),
    Str(String),
    Func(String, #[derivative(Debug = "ignore")] FuncImpl),
    Thunk(String, #[derivative(Debug = "ignore")] ThunkImpl),
}

impl Val {
    pub fn func<F>(name: &str, body: F) -> Val
    where
        F: Fn(&mut Interpreter, Val) -> Res + Send + Sync + 'static,
    {
        Val::Func(name.to_string(), Arc::new(body))
    }

    pub fn thunk<F>(name: &str, body: F) -> Val
    where
        F: Fn(&mut Interpreter) -> Res + Send + Sync + 'static,
    {
        Val::Thunk(name.to_string(), Arc::new(body))
    }

    /// A thunk that always produces `val`.
    pub fn constant(name: &str, val: Val) -> Val {
        Val::thunk(name, move |_| Ok(val.clone()))
    }

    /// Applies with default `Options`; use [`Interpreter::apply`] to pick a
    /// depth limit or debug level.
    pub fn apply<A: Into<Val>>(&self, arg: A) -> Res {
        Interpreter::default().apply(self, arg.into())
    }

    pub fn force(&self) -> Res {
        Interpreter::default().force(self.clone())
    }

    pub fn whnf(&self) -> Res {
        Interpreter::default().whnf(self.clone())
    }

    pub fn is_callable(&self) -> bool {
        !matches!(self, Val::Bool(_) | Val::I32(_) | Val::Str(_) | Val::Thunk(..))
    }

    fn is_atomic(&self) -> bool {
        !matches!(
            self,
            Val::KestrelOf(_) | Val::StarlingOf(_) | Val::StarlingOf2(..) | Val::Pending(..)
        )
    }
}

impl PartialEq for Val {
    fn eq(&self, other: &Val) -> bool {
        use Val::*;
        match (self, other) {
            (Idiot, Idiot) | (Kestrel, Kestrel) | (Starling, Starling) => true,
            (KestrelOf(a), KestrelOf(b)) | (StarlingOf(a), StarlingOf(b)) => a == b,
            (StarlingOf2(a, b), StarlingOf2(c, d)) | (Pending(a, b), Pending(c, d)) => {
                a == c && b == d
            }
            (Bool(a), Bool(b)) => a == b,
            (I32(a), I32(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Func(_, a), Func(_, b)) => Arc::ptr_eq(a, b),
            (Thunk(_, a), Thunk(_, b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

struct Arg<'a>(&'a Val);

impl<'a> fmt::Display for Arg<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_atomic() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "({})", self.0)
        }
    }
}

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Val::*;
        match self {
            Idiot => write!(f, "I"),
            Kestrel => write!(f, "K"),
            Starling => write!(f, "S"),
            KestrelOf(a) => write!(f, "K{}", Arg(a)),
            StarlingOf(a) => write!(f, "S{}", Arg(a)),
            StarlingOf2(a, b) => write!(f, "S{}{}", Arg(a), Arg(b)),
            // Application is left associative so the head never needs parens.
            Pending(func, arg) => write!(f, "{}{}", func.deref(), Arg(arg)),
            Bool(b) => write!(f, "{}", b),
            I32(n) => write!(f, "{}", n),
            Str(s) => write!(f, "{:?}", s),
            Func(name, _) => write!(f, "<{}>", name),
            Thunk(name, _) => write!(f, "<{}()>", name),
        }
    }
}

impl From<&Val> for Val {
    fn from(val: &Val) -> Val {
        val.clone()
    }
}

impl From<bool> for Val {
    fn from(b: bool) -> Val {
        Val::Bool(b)
    }
}

impl From<i32> for Val {
    fn from(n: i32) -> Val {
        Val::I32(n)
    }
}

impl From<&str> for Val {
    fn from(s: &str) -> Val {
        Val::Str(s.to_string())
    }
}

impl From<String> for Val {
    fn from(s: String) -> Val {
        Val::Str(s)
    }
}

/// Curried application: `app!(f, x, y)` is `f(x)(y)`.
///
/// `app!(interp; f, x, y)` does the same through a given `&mut Interpreter`.
#[macro_export]
macro_rules! app {
    ($interp: expr; $func: expr $(, $arg: expr)+ $(,)?) => {{
        let interp: &mut $crate::interpreter::Interpreter = $interp;
        Ok::<$crate::values::Val, $crate::errors::SkiError>($crate::values::Val::from($func))
            $(.and_then(|f| interp.apply(&f, $crate::values::Val::from($arg))))+
    }};
    ($func: expr $(, $arg: expr)+ $(,)?) => {
        Ok::<$crate::values::Val, $crate::errors::SkiError>($crate::values::Val::from($func))
            $(.and_then(|f| f.apply($arg)))+
    };
}
