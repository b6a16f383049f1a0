use std::io::Write;

use termcolor::{Buffer, Color, ColorSpec, WriteColor};

use crate::{
    options::{Descriptor, Kind},
    Error, Options,
};

macro_rules! w {
    ($($tt:tt)*) => {
        drop(write!($($tt)*))
    };
}

/// Writes into an in-memory buffer that either keeps or discards styling,
/// so both modes produce the same text.
struct Painter {
    buf: Buffer,
}

impl Painter {
    fn new(terminal: bool) -> Painter {
        let buf = if terminal { Buffer::ansi() } else { Buffer::no_color() };
        Painter { buf }
    }

    fn text(&mut self, text: &str) {
        w!(self.buf, "{text}");
    }

    fn paint(&mut self, spec: &ColorSpec, text: &str) {
        drop(self.buf.set_color(spec));
        w!(self.buf, "{text}");
        drop(self.buf.reset());
    }

    fn finish(self) -> String {
        String::from_utf8_lossy(self.buf.as_slice()).into_owned()
    }
}

fn heading() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_bold(true).set_underline(true);
    spec
}

fn literal() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_bold(true);
    spec
}

fn muted() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_dimmed(true).set_fg(Some(Color::Green));
    spec
}

fn error_label() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_bold(true).set_fg(Some(Color::Red));
    spec
}

impl Options {
    /// Usage line followed by every option, in declaration order.
    pub fn render_help(&self) -> String {
        let max_width = self.max_width();
        let mut buf = self.render_usage_header();
        buf.push('\n');
        for descriptor in self.descriptors() {
            buf.push_str(&self.render_option_line(descriptor, max_width));
        }
        buf
    }

    /// `Usage: PROG [OPTIONS] --REQUIRED <REQUIRED>...`, a blank line and the
    /// `Options:` heading, without a trailing newline.
    pub fn render_usage_header(&self) -> String {
        let mut p = Painter::new(self.is_terminal());
        self.usage(&mut p, true);
        p.text("\n\n");
        p.paint(&heading(), "Options:");
        p.finish()
    }

    /// One help line. Help text starts at column `max_width + 14` whatever
    /// the option's kind.
    pub fn render_option_line(&self, descriptor: &Descriptor, max_width: usize) -> String {
        let mut p = Painter::new(self.is_terminal());
        p.text("  ");
        p.paint(&literal(), &format!("-{}, --{}", descriptor.short(), descriptor.long()));
        let pad = match descriptor.kind() {
            Kind::Boolean => max_width.saturating_sub(descriptor.width()) + 7,
            Kind::String | Kind::Integer => {
                p.text(&format!(" <{}>", descriptor.value_name()));
                max_width.saturating_sub(descriptor.width()) + 4
            }
        };
        p.text(&" ".repeat(pad));
        p.text(descriptor.help());
        p.text("\n");
        p.finish()
    }

    pub fn render_missing(&self, missing: &[&Descriptor]) -> String {
        let mut p = Painter::new(self.is_terminal());
        p.paint(&error_label(), "error:");
        p.text(" the following arguments are not provided:\n");
        for descriptor in missing {
            p.text("  ");
            p.paint(&muted(), &format!("--{} <{}>", descriptor.long(), descriptor.value_name()));
            p.text("\n");
        }
        p.text("\n");
        self.usage(&mut p, false);
        p.text("\n\n");
        help_tip(&mut p);
        p.finish()
    }

    /// Message for a command line the token parser rejected, followed by
    /// the full help.
    pub fn render_error(&self, error: &Error) -> String {
        let mut p = Painter::new(self.is_terminal());
        p.paint(&error_label(), "error:");
        p.text(&format!(" {error}\n\n"));
        let mut buf = p.finish();
        buf.push_str(&self.render_help());
        buf
    }

    fn usage(&self, p: &mut Painter, with_options: bool) {
        p.paint(&heading(), "Usage:");
        p.text(" ");
        p.paint(&literal(), self.program());
        if with_options {
            p.text(" [OPTIONS]");
        }
        for descriptor in self.descriptors().iter().filter(|it| it.is_required()) {
            p.text(" ");
            p.paint(&literal(), &format!("--{}", descriptor.long()));
            if descriptor.kind() != Kind::Boolean {
                p.text(&format!(" <{}>", descriptor.value_name()));
            }
        }
    }
}

fn help_tip(p: &mut Painter) {
    p.text("For more information, try '");
    p.paint(&literal(), "--help");
    p.text("'.\n");
}
