use std::process;
use log::{error, LevelFilter};

use coordkit::commands::{build_cli, CommandFactory, CoordkitCommandFactory};
use coordkit::config::Settings;
use coordkit::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let settings = match matches.get_one::<String>("config") {
        Some(path) => Settings::load(path),
        None => Ok(Settings::defaults()),
    };
    let settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading settings: {}", e);
            process::exit(1);
        }
    };

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        settings.log_level
    };

    let log_file = matches
        .get_one::<String>("log-file")
        .cloned()
        .or_else(|| settings.log_file.clone());

    match log_file {
        Some(path) => {
            if let Err(e) = Logger::init_global_logger(&path, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
        }
    }

    let factory = CoordkitCommandFactory::new();

    let command_result = factory.create_command(&matches, &settings);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
