use std::ffi::OsString;

use crate::{options::Descriptor, slot::Binding, Error, Result};

pub(crate) struct Parser {
    after_double_dash: bool,
    rargs: Vec<OsString>,
}

pub(crate) enum Arg {
    Flag(String),
    Positional(OsString),
}

impl Parser {
    pub(crate) fn new(mut args: Vec<OsString>) -> Self {
        args.reverse();
        Self { after_double_dash: false, rargs: args }
    }

    /// Flags must be valid UTF-8; positional arguments may be anything.
    pub(crate) fn pop_flag(&mut self) -> Option<Result<Arg>> {
        if self.after_double_dash {
            return self.next().map(|it| Ok(Arg::Positional(it)));
        }
        let arg = self.next()?;
        let bytes = arg.as_encoded_bytes();
        if !bytes.starts_with(b"-") || bytes == b"-" {
            return Some(Ok(Arg::Positional(arg)));
        }
        if bytes == b"--" {
            self.after_double_dash = true;
            return self.next().map(|it| Ok(Arg::Positional(it)));
        }
        let flag = match arg.into_string() {
            Ok(flag) => flag,
            Err(arg) => {
                let name = arg.as_encoded_bytes().split(|&b| b == b'=').next().unwrap_or_default();
                let flag = String::from_utf8_lossy(name).into_owned();
                return Some(Err(Error::InvalidUtf8 { flag, value: format!("{arg:?}") }));
            }
        };
        Some(Ok(Arg::Flag(flag)))
    }

    fn next(&mut self) -> Option<OsString> {
        self.rargs.pop()
    }

    pub(crate) fn next_value(&mut self, flag: &str) -> Result<OsString> {
        self.next().ok_or_else(|| Error::MissingValue { flag: flag.to_string() })
    }

    /// Everything that was not consumed, in command line order.
    pub(crate) fn rest(mut self) -> Vec<OsString> {
        self.rargs.reverse();
        self.rargs
    }
}

/// Walks the flags at the front of the argument list, writing each value
/// into the slot of the matching descriptor. Stops at the first positional
/// argument or after `--` and returns what is left.
pub(crate) fn parse(mut p: Parser, descriptors: &[Descriptor]) -> Result<Vec<OsString>> {
    let mut rest = Vec::new();
    while let Some(arg) = p.pop_flag() {
        match arg? {
            Arg::Flag(flag) => bind(&mut p, descriptors, &flag)?,
            Arg::Positional(arg) => {
                rest.push(arg);
                break;
            }
        }
    }
    rest.extend(p.rest());
    tracing::debug!(positional = rest.len(), "parsed command line");
    Ok(rest)
}

fn bind(p: &mut Parser, descriptors: &[Descriptor], token: &str) -> Result<()> {
    let (flag, inline) = match token.split_once('=') {
        Some((flag, value)) => (flag, Some(value)),
        None => (token, None),
    };
    let descriptor = match flag.strip_prefix("--") {
        Some(long) => descriptors.iter().find(|it| it.long() == long),
        None => descriptors.iter().find(|it| it.short() == &flag[1..]),
    };
    let descriptor = match descriptor {
        Some(it) => it,
        None if flag == "-h" || flag == "--help" => return Err(Error::Help),
        None => return Err(Error::UnknownFlag { flag: flag.to_string() }),
    };

    match descriptor.binding() {
        Binding::Bool(slot) => {
            let value = match inline {
                Some(value) => parse_bool(value).ok_or_else(|| Error::InvalidValue {
                    flag: flag.to_string(),
                    value: value.to_string(),
                    reason: "invalid boolean".to_string(),
                })?,
                None => true,
            };
            slot.set(value);
        }
        Binding::Str(slot) => {
            let value = value_string(p, flag, inline)?;
            slot.set(value);
        }
        Binding::Int(slot) => {
            let value = value_string(p, flag, inline)?;
            let int = parse_int(&value).map_err(|reason| Error::InvalidValue {
                flag: flag.to_string(),
                value: value.clone(),
                reason,
            })?;
            slot.set(int);
        }
    }
    tracing::debug!(flag, long = descriptor.long(), "bound option");
    Ok(())
}

fn value_string(p: &mut Parser, flag: &str, inline: Option<&str>) -> Result<String> {
    if let Some(value) = inline {
        return Ok(value.to_string());
    }
    let value = p.next_value(flag)?;
    value
        .into_string()
        .map_err(|it| Error::InvalidUtf8 { flag: flag.to_string(), value: format!("{it:?}") })
}

/// Integer literal syntax of Go's `strconv.ParseInt` with base 0: an
/// optional sign, then a `0x`, `0o` or `0b` prefix, a bare leading `0` for
/// octal, or decimal digits. Single underscores may separate digits.
pub(crate) fn parse_int(text: &str) -> Result<i64, String> {
    let (negative, body) = match text.strip_prefix('-') {
        Some(body) => (true, body),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let (radix, digits, prefixed) = match body.get(..2) {
        Some("0x" | "0X") => (16, &body[2..], true),
        Some("0o" | "0O") => (8, &body[2..], true),
        Some("0b" | "0B") => (2, &body[2..], true),
        _ if body.len() > 1 && body.starts_with('0') => (8, &body[1..], true),
        _ => (10, body, false),
    };
    let misplaced_underscore = digits.ends_with('_')
        || digits.contains("__")
        || (!prefixed && digits.starts_with('_'));
    if misplaced_underscore || digits.starts_with(['+', '-']) {
        return Err("invalid digit found in string".to_string());
    }
    let digits = digits.replace('_', "");
    let digits = if negative { format!("-{digits}") } else { digits };
    i64::from_str_radix(&digits, radix).map_err(|err| err.to_string())
}

pub(crate) fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
