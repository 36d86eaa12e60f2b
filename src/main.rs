use contact_book::config::{print_usage, Config, Invocation};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match Config::from_args(std::env::args().skip(1)) {
        Ok(Invocation::Run(config)) => {
            log::info!("Using contacts file {}", config.file_path.display());
            contact_book::cli::run(&config);
        }
        Ok(Invocation::Help) => print_usage(),
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!("Use --help for usage information.");
            std::process::exit(1);
        }
    }
}
