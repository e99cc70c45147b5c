use crate::errors::SkiError;

pub const DEFAULT_MAX_DEPTH: usize = 1024;

pub const USAGE: &str = "An exploration of SKI combinators and church booleans.

USAGE:
    ski [OPTIONS] <COMMAND>

COMMANDS:
    table   Print the truth tables of NOT, OR and AND
    laws    Check every combinator law, failing if one does not hold
    show    Print every named combinator in SKI notation
    help    Print this message

OPTIONS:
    -d, --debug          Increase the debug level (repeatable)
        --max-depth <N>  Limit the evaluation depth (default 1024)
        --no-color       Disable coloured output
";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Table,
    Laws,
    Show,
    Help,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub debug: i32,
    pub max_depth: usize,
    pub color: bool,
    pub command: Command,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            debug: 0,
            max_depth: DEFAULT_MAX_DEPTH,
            color: true,
            command: Command::Help,
        }
    }
}

impl Options {
    pub fn new<S: Into<String>, I: IntoIterator<Item = S>>(args: I) -> Result<Options, SkiError> {
        let mut opts = Options::default();
        let mut command = None;
        let mut args = args.into_iter().map(|arg| -> String { arg.into() });
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-d" | "--debug" => opts.debug += 1,
                "--no-color" => opts.color = false,
                "--max-depth" => {
                    let value = args.next().ok_or_else(|| {
                        SkiError::BadOption("--max-depth needs a value".to_string())
                    })?;
                    let depth = value.parse::<usize>().map_err(|_| {
                        SkiError::BadOption(format!("--max-depth expects a number, got {:?}", value))
                    })?;
                    opts = opts.with_max_depth(depth);
                }
                flag if flag.starts_with('-') => {
                    return Err(SkiError::BadOption(flag.to_string()));
                }
                cmd if command.is_none() => {
                    command = Some(match cmd {
                        "table" => Command::Table,
                        "laws" => Command::Laws,
                        "show" => Command::Show,
                        "help" => Command::Help,
                        _ => return Err(SkiError::UnknownCommand(cmd.to_string())),
                    });
                }
                extra => {
                    return Err(SkiError::BadOption(format!("unexpected argument {}", extra)));
                }
            }
        }
        if let Some(command) = command {
            opts.command = command;
        }
        Ok(opts)
    }

    pub fn with_debug(mut self, debug: i32) -> Options {
        self.debug = debug;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Options {
        self.max_depth = max_depth;
        self
    }

    pub fn with_color(mut self, color: bool) -> Options {
        self.color = color;
        self
    }

    pub fn with_command(mut self, command: Command) -> Options {
        self.command = command;
        self
    }
}
