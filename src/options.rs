use std::{
    ffi::OsString,
    io::{self, IsTerminal, Write},
    process,
};

use crate::{
    rt,
    slot::{Binding, Slot},
    Error, Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    String,
    Integer,
    Boolean,
}

/// A declared option: its names, help text and the slot it is bound to.
#[derive(Debug)]
pub struct Descriptor {
    short: String,
    long: String,
    help: String,
    required: bool,
    width: usize,
    binding: Binding,
}

impl Descriptor {
    fn new(short: &str, long: &str, help: &str, required: bool, binding: Binding) -> Descriptor {
        let (short_len, long_len) = (short.chars().count(), long.chars().count());
        // Value-taking options reserve room for the `<LONG>` placeholder,
        // which is as long as the upper-cased name (`ß` becomes `SS`).
        let width = match binding {
            Binding::Bool(_) => short_len + long_len,
            Binding::Str(_) | Binding::Int(_) => {
                short_len + long_len + long.to_uppercase().chars().count()
            }
        };
        Descriptor {
            short: short.to_string(),
            long: long.to_string(),
            help: help.to_string(),
            required,
            width,
            binding,
        }
    }

    pub fn kind(&self) -> Kind {
        match self.binding {
            Binding::Str(_) => Kind::String,
            Binding::Int(_) => Kind::Integer,
            Binding::Bool(_) => Kind::Boolean,
        }
    }
    pub fn short(&self) -> &str {
        &self.short
    }
    pub fn long(&self) -> &str {
        &self.long
    }
    pub fn help(&self) -> &str {
        &self.help
    }
    pub fn is_required(&self) -> bool {
        self.required
    }
    /// Column budget used to align help text.
    pub fn width(&self) -> usize {
        self.width
    }

    /// `<LONG>` placeholder shown after value-taking options.
    pub fn value_name(&self) -> String {
        self.long.to_uppercase()
    }

    pub(crate) fn binding(&self) -> &Binding {
        &self.binding
    }
}

/// Ordered set of declared options for one program.
#[derive(Debug)]
pub struct Options {
    program: String,
    terminal: bool,
    descriptors: Vec<Descriptor>,
}

impl Options {
    /// Styling is enabled iff stdout is a terminal at this point.
    pub fn new(program: impl Into<String>) -> Options {
        Options {
            program: program.into(),
            terminal: io::stdout().is_terminal(),
            descriptors: Vec::new(),
        }
    }

    /// Like [`Options::new`], naming the program after `argv[0]`.
    pub fn from_env() -> Options {
        let program = std::env::args_os()
            .next()
            .map(|it| it.to_string_lossy().into_owned())
            .unwrap_or_default();
        Options::new(program)
    }

    /// Overrides terminal detection.
    pub fn terminal(mut self, yes: bool) -> Options {
        self.terminal = yes;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }

    pub fn string(
        &mut self,
        short: &str,
        long: &str,
        default: impl Into<String>,
        help: &str,
        required: bool,
    ) -> Slot<String> {
        let slot = Slot::new(default.into());
        self.push(Descriptor::new(short, long, help, required, Binding::Str(slot.clone())));
        slot
    }

    pub fn int(
        &mut self,
        short: &str,
        long: &str,
        default: i64,
        help: &str,
        required: bool,
    ) -> Slot<i64> {
        let slot = Slot::new(default);
        self.push(Descriptor::new(short, long, help, required, Binding::Int(slot.clone())));
        slot
    }

    pub fn bool(
        &mut self,
        short: &str,
        long: &str,
        default: bool,
        help: &str,
        required: bool,
    ) -> Slot<bool> {
        let slot = Slot::new(default);
        self.push(Descriptor::new(short, long, help, required, Binding::Bool(slot.clone())));
        slot
    }

    fn push(&mut self, descriptor: Descriptor) {
        tracing::trace!(
            short = descriptor.short(),
            long = descriptor.long(),
            kind = ?descriptor.kind(),
            required = descriptor.is_required(),
            "declared option"
        );
        self.descriptors.push(descriptor);
    }

    /// Largest [`Descriptor::width`], zero when nothing is declared.
    pub fn max_width(&self) -> usize {
        self.descriptors.iter().map(Descriptor::width).max().unwrap_or(0)
    }

    /// Parses `args` (without the program name) into the declared slots and
    /// checks required options. Returns the positional arguments that follow
    /// the flags.
    pub fn parse_from<I>(&self, args: I) -> Result<Vec<OsString>>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let p = rt::Parser::new(args.into_iter().map(Into::into).collect());
        let rest = rt::parse(p, &self.descriptors)?;
        self.validate()?;
        Ok(rest)
    }

    /// [`Options::parse_from`] over the process arguments.
    pub fn parse(&self) -> Result<Vec<OsString>> {
        self.parse_from(std::env::args_os().skip(1))
    }

    /// Parses the process arguments, printing help or an error and exiting
    /// when parsing does not succeed.
    pub fn parse_or_exit(&self) -> Vec<OsString> {
        match self.parse() {
            Ok(rest) => rest,
            Err(err) => self.exit(err),
        }
    }

    fn exit(&self, err: Error) -> ! {
        match &err {
            Error::Help => print!("{}", self.render_help()),
            Error::MissingRequired { .. } => print!("{}", self.render_missing(&self.missing())),
            _ => eprint!("{}", self.render_error(&err)),
        }
        let _ = io::stdout().flush();
        process::exit(err.exit_code())
    }
}
