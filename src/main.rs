use clap::Parser;
use log::{error, info};

use wider2coco::{process_split, Args, HeaderProbe};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if !args.data_dir.exists() {
        error!(
            "The specified data_dir does not exist: {}",
            args.data_dir.display()
        );
        std::process::exit(1);
    }

    info!("Starting WIDER to COCO conversion process...");

    let probe = HeaderProbe;
    for split in args.split.names() {
        info!("Processing {}....", split);
        if let Err(e) = process_split(&args, split, &probe) {
            error!("Failed to convert {} split: {}", split, e);
            std::process::exit(1);
        }
    }

    info!("Conversion process completed successfully.");
}
