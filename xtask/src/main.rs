use std::time::Instant;

use xshell::{cmd, Shell};

fn main() -> xshell::Result<()> {
    let sh = Shell::new()?;

    cmd!(sh, "rustup toolchain install stable --no-self-update").run()?;
    let _e = sh.push_env("RUSTUP_TOOLCHAIN", "stable");
    cmd!(sh, "rustc --version").run()?;

    {
        let _s = Section::start("BUILD");
        cmd!(sh, "cargo test --workspace --no-run").run()?;
    }

    {
        let _s = Section::start("TEST");
        cmd!(sh, "cargo test --workspace -- --nocapture").run()?;
    }

    {
        let _s = Section::start("DEMO");
        cmd!(sh, "cargo run -q -p xopts-demo -- --help").run()?;
        cmd!(sh, "cargo run -q -p xopts-demo -- --name xtask --emoji").run()?;
        cmd!(sh, "cargo doc --no-deps -p xopts").run()?;
    }

    {
        let _s = Section::start("PUBLISH");
        publish(&sh)?;
    }

    Ok(())
}

/// Tags and publishes `xopts` from `master` when its version has no tag yet.
fn publish(sh: &Shell) -> xshell::Result<()> {
    let pkgid = cmd!(sh, "cargo pkgid -p xopts").read()?;
    let tag = format!("v{}", pkgid_version(&pkgid));

    let current_branch = cmd!(sh, "git branch --show-current").read()?;
    if current_branch != "master" {
        return Ok(());
    }
    let tags = cmd!(sh, "git tag --list").read()?;
    if tags.split_ascii_whitespace().any(|it| it == tag) {
        return Ok(());
    }

    cmd!(sh, "git tag {tag}").run()?;
    cmd!(sh, "cargo publish -p xopts").run()?;
    cmd!(sh, "git push --tags").run()?;
    Ok(())
}

/// `path+file:///...#0.1.0` or `path+file:///...#xopts@0.1.0`
fn pkgid_version(pkgid: &str) -> &str {
    pkgid.trim().rsplit(['#', '@']).next().unwrap_or_default()
}

/// GitHub Actions log group, closed with its elapsed time when dropped.
struct Section {
    name: &'static str,
    start: Instant,
}

impl Section {
    fn start(name: &'static str) -> Section {
        println!("::group::{name}");
        Section { name, start: Instant::now() }
    }
}

impl Drop for Section {
    fn drop(&mut self) {
        eprintln!("{}: {:.2?}", self.name, self.start.elapsed());
        println!("::endgroup::");
    }
}
