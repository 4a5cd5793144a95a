use clap::Parser;
use img_ascii::cli::{handle_config_action, run_convert, Args, Command};

fn main() {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match (&args.command, &args.image) {
        (Some(Command::Config { action }), _) => {
            handle_config_action(action.clone(), args.config.as_deref())
        }
        (None, Some(image)) => run_convert(image, &args).map(|output| println!("{}", output)),
        // clap requires an image when no subcommand is given
        (None, None) => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
