use ctmarket_generator::config::OutputConfig;
use ctmarket_generator::{MarketConfig, MarketGenerator, render_summary, write_output};

fn print_help() {
    eprintln!(
        r#"ctmarket-generator - Coiled Tubing Market dataset generator

USAGE:
    ctmarket-generator [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --seed <N>          Override the PRNG seed (default: 42)
    --out-dir <PATH>    Write value.json/volume.json under this directory
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)

EXAMPLES:
    # Generate public/data/value.json and public/data/volume.json
    ctmarket-generator

    # Regenerate with a different seed into a scratch directory
    ctmarket-generator --seed 7 --out-dir /tmp/ctmarket
"#
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut seed_override: Option<u64> = None;
    let mut out_dir: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--seed" | "-s" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --seed requires a number argument");
                    std::process::exit(1);
                }
                match args[i].parse() {
                    Ok(seed) => seed_override = Some(seed),
                    Err(_) => {
                        eprintln!("Error: invalid seed '{}'", args[i]);
                        std::process::exit(1);
                    }
                }
            }
            "--out-dir" | "-o" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --out-dir requires a path argument");
                    std::process::exit(1);
                }
                out_dir = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = if let Some(path) = config_path {
        log::info!("Loading configuration from: {}", path);
        MarketConfig::from_file(&path)?
    } else {
        MarketConfig::default()
    };

    if let Some(seed) = seed_override {
        config.seed = seed;
    }
    if let Some(dir) = out_dir {
        config.output = OutputConfig::under_dir(dir);
    }

    log::info!("Dataset: {}", config.name);
    log::info!("Seed: {}", config.seed);
    log::info!(
        "Geographies: {} ({} regions)",
        config.geography_count(),
        config.regions.len()
    );

    let mut generator = MarketGenerator::new(config);
    let output = generator.generate();

    write_output(&output, generator.config())?;
    print!("{}", render_summary(&output, generator.config()));

    Ok(())
}
