//! SKI combinators and the church booleans derived from them.
//!
//! ```
//! use skilib::app;
//! use skilib::church::{or, select, FALSE, NOT, TRUE};
//! use skilib::interpreter::Interpreter;
//! use skilib::values::Val;
//!
//! let mut interp = Interpreter::default();
//! let t = Val::constant("t", Val::Bool(true));
//! let f = Val::constant("f", Val::Bool(false));
//!
//! assert_eq!(select(&mut interp, &TRUE, &t, &f), Ok(Val::Bool(true)));
//! let not_true = NOT.apply(&TRUE).unwrap();
//! assert_eq!(select(&mut interp, &not_true, &t, &f), Ok(Val::Bool(false)));
//! let false_or_true = or(&mut interp, &FALSE, &TRUE).unwrap();
//! assert_eq!(select(&mut interp, &false_or_true, &t, &f), Ok(Val::Bool(true)));
//! assert_eq!(app!(&skilib::combinators::K, "x", "y"), Ok(Val::from("x")));
//! ```

pub mod church;
pub mod cli_options;
pub mod combinators;
pub mod errors;
pub mod interpreter;
pub mod laws;
pub mod pretty_print;
pub mod values;

use cli_options::{Command, Options, USAGE};
use errors::SkiError;
use interpreter::Interpreter;
use termcolor::{ColorChoice, StandardStream};

/// Runs the command selected in `options`, returning the process exit code.
pub fn work(options: &Options) -> Result<i32, SkiError> {
    if options.debug > 0 {
        eprintln!("options: {:?}", options);
    }
    let choice = if options.color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);
    let mut interp = Interpreter::new(options.clone());
    match options.command {
        Command::Table => pretty_print::tables(&mut stdout, &mut interp)?,
        Command::Show => pretty_print::values(&mut stdout)?,
        Command::Laws => {
            let verdicts = laws::check_all(&mut interp);
            let failures = pretty_print::verdicts(&mut stdout, &verdicts)?;
            if failures > 0 {
                eprintln!("{} of {} laws failed", failures, verdicts.len());
                return Ok(1);
            }
        }
        Command::Help => print!("{}", USAGE),
    }
    if options.debug > 0 {
        eprintln!("{} steps", interp.steps);
    }
    Ok(0)
}
