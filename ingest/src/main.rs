use clap::{Arg, Command};
use std::process;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let matches = Command::new("Weather Ingest Manager")
        .version("1.0")
        .about("Fetches city weather and appends it to the warehouse")
        .subcommand(
            Command::new("serve")
                .about("Run the ingest HTTP service")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("FILE")
                        .help("Sets a custom config file"),
                ),
        )
        .subcommand(
            Command::new("ingest")
                .about("Run the pipeline once for a single city")
                .arg(
                    Arg::new("config")
                        .short('c')
                        .long("config")
                        .value_name("FILE")
                        .help("Sets a custom config file"),
                )
                .arg(
                    Arg::new("city")
                        .long("city")
                        .value_name("NAME")
                        .required(true)
                        .help("City to fetch weather for"),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("serve", serve_matches)) => {
            let config_path = serve_matches
                .get_one::<String>("config")
                .map(|s| s.as_str())
                .unwrap_or("config/ingest.toml");
            println!("Starting ingest service with config: {}", config_path);

            if let Err(e) = ingest::run_ingest_service(config_path).await {
                eprintln!("Ingest service error: {}", e);
                process::exit(1);
            }
        }

        Some(("ingest", ingest_matches)) => {
            let config_path = ingest_matches
                .get_one::<String>("config")
                .map(|s| s.as_str())
                .unwrap_or("config/ingest.toml");
            let city = ingest_matches
                .get_one::<String>("city")
                .map(|s| s.as_str())
                .unwrap_or_default();
            println!("Running one-shot ingest for city: {}", city);

            if let Err(e) = ingest::run_ingest_once(config_path, city).await {
                eprintln!("Ingest error: {}", e);
                process::exit(1);
            }
        }

        _ => {
            eprintln!("Please specify a valid subcommand");
            process::exit(1);
        }
    }
}
