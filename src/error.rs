use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown flag: `{flag}`")]
    UnknownFlag { flag: String },

    #[error("expected a value for `{flag}`")]
    MissingValue { flag: String },

    #[error("can't parse `{flag}`, invalid value `{value}`: {reason}")]
    InvalidValue { flag: String, value: String, reason: String },

    #[error("can't parse `{flag}`, invalid utf8: {value}")]
    InvalidUtf8 { flag: String, value: String },

    /// `-h` or `--help` was passed and no declared option claims it.
    #[error("help requested")]
    Help,

    /// Rendered as `--LONG <LONG>`, in declaration order.
    #[error("the following arguments are not provided: {}", options.join(", "))]
    MissingRequired { options: Vec<String> },
}

impl Error {
    pub fn is_help(&self) -> bool {
        matches!(self, Error::Help)
    }

    /// Status the process exits with when this error reaches
    /// [`Options::parse_or_exit`](crate::Options::parse_or_exit).
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Help => 0,
            Error::MissingRequired { .. } => -1,
            Error::UnknownFlag { .. }
            | Error::MissingValue { .. }
            | Error::InvalidValue { .. }
            | Error::InvalidUtf8 { .. } => 2,
        }
    }
}
