use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut opts = xopts::Options::from_env();
    let name = opts.string("n", "name", "", "user name", true);
    let count = opts.int("c", "count", 1, "number of greetings", false);
    let emoji = opts.bool("e", "emoji", false, "end with a heart", false);
    let rest = opts.parse_or_exit();

    let bang = if emoji.get() { "❣️" } else { "!" };
    for _ in 0..count.get() {
        println!("Hello {}{}", name.get(), bang);
    }
    for arg in rest {
        println!("extra: {}", arg.to_string_lossy());
    }
}
