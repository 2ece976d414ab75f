use excalibur_config::Config;
use excalibur_opener::{FolderOpener, SystemViewer};
use std::{env, path::PathBuf, process};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Determine the documents root from CLI args or config file
    let args: Vec<String> = env::args().collect();

    let documents_root = if args.len() == 2 {
        // CLI argument provided - use it
        PathBuf::from(&args[1])
    } else if args.len() == 1 {
        // No CLI argument - try config file, fall back to platform default
        match Config::load() {
            Ok(Some(config)) => config.documents_root,
            Ok(None) => Config::default_documents_root(),
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} [documents-root]", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [documents-root]", args[0]);
        process::exit(1);
    };

    log::info!("opening app folder under {}", documents_root.display());

    let opener = FolderOpener::new(documents_root, SystemViewer::new());
    match opener.open_documents_folder() {
        Ok(outcome) => println!("opened: {}", outcome.opened),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
