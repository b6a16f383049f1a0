//! Declare command line options, parse the process arguments into them and
//! render help, usage and error text.
//!
//! ```no_run
//! let mut opts = xopts::Options::from_env();
//! let name = opts.string("n", "name", "", "user name", true);
//! let verbose = opts.bool("v", "verbose", false, "verbose output", false);
//! opts.parse_or_exit();
//!
//! if verbose.get() {
//!     eprintln!("greeting {}", name.get());
//! }
//! println!("Hello, {}!", name.get());
//! ```
//!
//! Each declared option is reachable as `-S <VALUE>` and `--LONG <VALUE>`
//! (booleans take no value). `-h`/`--help` prints the help text, and
//! required options left empty abort the process with status -1.
//!
//! Output is styled with ANSI escapes when stdout is a terminal.

mod error;
mod help;
mod options;
mod rt;
mod slot;
mod validate;

pub use crate::{
    error::Error,
    options::{Descriptor, Kind, Options},
    slot::Slot,
};

pub type Result<T, E = Error> = std::result::Result<T, E>;
