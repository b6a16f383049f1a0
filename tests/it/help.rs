use expect_test::expect;
use regex::Regex;
use xopts::{Kind, Options};

use crate::greet;

fn strip_ansi(text: &str) -> String {
    let re = Regex::new("\x1b\\[[0-9;]*m").unwrap();
    re.replace_all(text, "").into_owned()
}

#[test]
fn help() {
    let (opts, _flags) = greet();
    expect![[r#"
        Usage: greet [OPTIONS] --name <NAME>

        Options:
          -n, --name <NAME>        user name
          -c, --count <COUNT>      number of greetings
          -v, --verbose            verbose output
          -o, --output <OUTPUT>    output path
    "#]]
    .assert_eq(&opts.render_help());
}

#[test]
fn usage_header_lists_required_options() {
    let mut opts = Options::new("prog").terminal(false);
    opts.string("i", "input", "", "input path", true);
    opts.bool("f", "force", false, "overwrite", true);
    opts.int("j", "jobs", 4, "parallelism", true);
    expect![[r#"
        Usage: prog [OPTIONS] --input <INPUT> --force --jobs <JOBS>

        Options:"#]]
    .assert_eq(&opts.render_usage_header());
}

#[test]
fn empty_registry() {
    let opts = Options::new("prog").terminal(false);
    assert_eq!(opts.max_width(), 0);
    assert_eq!(opts.render_help(), "Usage: prog [OPTIONS]\n\nOptions:\n");
}

#[test]
fn widths() {
    let mut opts = Options::new("prog").terminal(false);
    opts.string("s", "source", "", "", false);
    opts.int("jj", "jobs", 0, "", false);
    opts.bool("q", "quietly", false, "", false);

    let widths = opts.descriptors().iter().map(|it| it.width()).collect::<Vec<_>>();
    assert_eq!(widths, vec![1 + 2 * 6, 2 + 2 * 4, 1 + 7]);
    assert_eq!(opts.max_width(), 13);

    let mut opts = Options::new("prog").terminal(false);
    opts.string("s", "straße", "", "", false);
    assert_eq!(opts.descriptors()[0].width(), 1 + 6 + "STRASSE".len());
}

#[test]
fn help_text_is_aligned() {
    let mut opts = Options::new("prog").terminal(false);
    opts.string("s", "source-directory", "", "HELP-A", false);
    opts.int("j", "j", 0, "HELP-B", false);
    opts.bool("q", "q", false, "HELP-C", false);
    opts.bool("l", "a-rather-long-switch", false, "HELP-D", false);

    let max_width = opts.max_width();
    let columns = opts
        .descriptors()
        .iter()
        .map(|it| opts.render_option_line(it, max_width).find("HELP-").unwrap())
        .collect::<Vec<_>>();
    assert!(columns.iter().all(|&it| it == max_width + 14), "{columns:?}");
}

#[test]
fn placeholders() {
    let mut opts = Options::new("prog").terminal(false);
    opts.string("o", "out-dir", "", "where", false);
    opts.int("n", "num", 0, "how many", false);
    opts.bool("v", "verbose", false, "chatty", false);

    let max_width = opts.max_width();
    for descriptor in opts.descriptors() {
        let line = opts.render_option_line(descriptor, max_width);
        match descriptor.kind() {
            Kind::Boolean => assert!(!line.contains('<'), "{line}"),
            Kind::String | Kind::Integer => {
                let placeholder = format!("<{}>", descriptor.long().to_uppercase());
                assert!(line.contains(&placeholder), "{line}")
            }
        }
    }
}

#[test]
fn terminal_mode_only_adds_escapes() {
    let build = |terminal: bool| {
        let mut opts = Options::new("greet").terminal(terminal);
        opts.string("n", "name", "", "user name", true);
        opts.int("c", "count", 1, "number of greetings", true);
        opts.bool("v", "verbose", false, "verbose output", false);
        opts
    };
    let (styled, plain) = (build(true), build(false));

    let styled_help = styled.render_help();
    assert!(styled_help.contains('\x1b'));
    assert_eq!(strip_ansi(&styled_help), plain.render_help());

    let styled_missing = styled.render_missing(&styled.missing());
    let plain_missing = plain.render_missing(&plain.missing());
    assert!(styled_missing.contains('\x1b'));
    assert_eq!(strip_ansi(&styled_missing), plain_missing);

    let err = styled.parse_from(["--nope"]).unwrap_err();
    assert_eq!(strip_ansi(&styled.render_error(&err)), plain.render_error(&err));
}

#[test]
fn malformed_token_error() {
    let (opts, _flags) = greet();
    let err = opts.parse_from(["--werbose"]).unwrap_err();
    assert_eq!(err.exit_code(), 2);
    expect![[r#"
        error: unknown flag: `--werbose`

        Usage: greet [OPTIONS] --name <NAME>

        Options:
          -n, --name <NAME>        user name
          -c, --count <COUNT>      number of greetings
          -v, --verbose            verbose output
          -o, --output <OUTPUT>    output path
    "#]]
    .assert_eq(&opts.render_error(&err));
}

#[test]
fn non_ascii_names_stay_aligned() {
    let mut opts = Options::new("prog").terminal(false);
    opts.string("s", "straße", "", "HELP-A", false);
    opts.string("o", "output", "", "HELP-B", false);
    opts.int("f", "ﬁle-count", 0, "HELP-C", false);
    opts.bool("v", "verbose", false, "HELP-D", false);

    let max_width = opts.max_width();
    let lines = opts
        .descriptors()
        .iter()
        .map(|it| opts.render_option_line(it, max_width))
        .collect::<Vec<_>>();
    assert!(lines[0].contains("--straße <STRASSE>"), "{}", lines[0]);

    let columns = lines
        .iter()
        .map(|line| {
            let byte = line.find("HELP-").unwrap();
            line[..byte].chars().count()
        })
        .collect::<Vec<_>>();
    assert!(columns.iter().all(|&it| it == max_width + 14), "{columns:?}");
}
