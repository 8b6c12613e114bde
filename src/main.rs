use beacon_locate::{
    BeaconIdentity, BeaconLocateError, GeolocationPosition, Position, decode, encode,
};
use clap::{Parser, Subcommand};
use std::process;
use tracing_subscriber::EnvFilter;

/// Convert positions to iBeacon identities and back
#[derive(Parser, Debug)]
#[command(name = "beacon-locate")]
#[command(about = "Encode lat/lng/story as iBeacon UUID, major and minor")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode a single position, prints the beacon as JSON
    Encode {
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
        /// Story 0-3, larger values are clamped
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        story: i64,
    },
    /// Decode a single beacon, prints a geolocation position as JSON
    Decode {
        identifier: String,
        major: u16,
        minor: u16,
    },
}

fn run(command: Command) -> Result<(), BeaconLocateError> {
    match command {
        Command::Encode { lat, lng, story } => {
            let beacon = encode(&Position::new(lat, lng).with_story(story))?;
            println!("{}", beacon.to_json()?);
        }
        Command::Decode {
            identifier,
            major,
            minor,
        } => {
            let position = decode(&BeaconIdentity::new(identifier, major, minor))?;
            println!("{}", GeolocationPosition::from(position).to_json()?);
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
