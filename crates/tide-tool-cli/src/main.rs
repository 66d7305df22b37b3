use anyhow::{Context, Result};
use std::{env, io::Write, path::PathBuf, process};
use tide_tool_config::Config;
use tide_tool_engine::{Zdf, ZdfOptions, io};

struct Args {
    zones_path: PathBuf,
    stations_path: PathBuf,
    output_path: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Option<Args> {
    match args {
        [_, zones, stations] => Some(Args {
            zones_path: PathBuf::from(zones),
            stations_path: PathBuf::from(stations),
            output_path: None,
        }),
        [_, zones, stations, output] => Some(Args {
            zones_path: PathBuf::from(zones),
            stations_path: PathBuf::from(stations),
            output_path: Some(PathBuf::from(output)),
        }),
        _ => None,
    }
}

fn build_zdf(args: &Args, options: ZdfOptions) -> Result<Zdf> {
    let zones = io::read_feature_collection(&args.zones_path)
        .with_context(|| format!("Failed to read zones from '{}'", args.zones_path.display()))?;
    let stations = io::read_feature_collection(&args.stations_path).with_context(|| {
        format!(
            "Failed to read tide stations from '{}'",
            args.stations_path.display()
        )
    })?;

    let mut zdf = Zdf::with_options(options);
    zdf.populate_zones(&zones)
        .with_context(|| format!("Invalid zones in '{}'", args.zones_path.display()))?;
    zdf.populate_stations(&stations).with_context(|| {
        format!(
            "Invalid tide stations in '{}'",
            args.stations_path.display()
        )
    })?;
    let tide_zones = zdf.derive_tide_zones()?;

    log::info!(
        "{} zones, {} tide stations, {} tide zones",
        zdf.zones().len(),
        zdf.stations().len(),
        tide_zones
    );
    Ok(zdf)
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let Some(parsed) = parse_args(&args) else {
        eprintln!(
            "Usage: {} <zones.geojson> <stations.geojson> [output.zdf]",
            args.first().map(String::as_str).unwrap_or("tide-tool-cli")
        );
        process::exit(1);
    };

    // Config file is optional; without one the file format defaults apply
    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    let options = ZdfOptions::new(config.options.outage, config.options.interval);

    let zdf = match build_zdf(&parsed, options) {
        Ok(zdf) => zdf,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    match parsed.output_path.or(config.output_path) {
        Some(output_path) => {
            io::write_zdf(&output_path, &zdf).with_context(|| {
                format!("Failed to write '{}'", output_path.display())
            })?;
            log::info!("wrote {}", output_path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(zdf.to_text().as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
