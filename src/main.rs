use std::process::ExitCode;

use clap::Parser;
use log::{error, info, warn};
use time::OffsetDateTime;

use inkbird_ith11::decoder::{decode_manufacturer_data, INKBIRD_MANUFACTURER_ID};
use inkbird_ith11::utils::{format_datetime, parse_hex_payload};

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Hex-encoded manufacturer data payload ("0x02 0x28 ...", "02:28:..." or plain hex)
    payload: String,
    /// Company/manufacturer identifier the payload was keyed by
    #[arg(short, long, default_value_t = INKBIRD_MANUFACTURER_ID)]
    company_id: u16,
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_secs()
        .init();

    let args = Args::parse();

    let payload = match parse_hex_payload(&args.payload) {
        Ok(payload) => payload,
        Err(e) => {
            error!("Invalid hex payload: {}", e);
            return ExitCode::from(2);
        }
    };

    match decode_manufacturer_data(args.company_id, &payload) {
        Some(reading) => {
            info!(
                "Decoded at {}: {}",
                format_datetime(&OffsetDateTime::now_utc()),
                reading
            );
            println!("{}", reading);
            ExitCode::SUCCESS
        }
        None => {
            warn!(
                "No reading from {} byte payload under company id {}",
                payload.len(),
                args.company_id
            );
            ExitCode::from(1)
        }
    }
}
