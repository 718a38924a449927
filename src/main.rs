use clap::Parser;
use modcheck::cli::Cli;

fn main() {
    let args = Cli::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = modcheck::run(args) {
        eprintln!("{}", console::style(e).red());
        std::process::exit(1);
    }
}
