//! Static travel-time estimation
//!
//! Converts an origin airport and a destination into a rough total travel
//! time: a flight band from a coarse region-pair table, plus a known ground
//! transfer for destinations not directly served by a major airport. The
//! estimate is deliberately coarse; it feeds a convenience score, not an
//! itinerary.

use crate::models::Destination;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

/// Coarse world region used for flight-time banding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    NorthAmerica,
    SouthAmerica,
    Europe,
    Africa,
    MiddleEast,
    Asia,
    Oceania,
}

/// How the ground leg to a hub-served destination is covered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferMode {
    Drive,
    Train,
    Ferry,
    ConnectingFlight,
}

/// Static transfer data for a destination without a direct major airport
///
/// Keyed by destination id; absence is normal and means the destination's
/// own airport is the arrival point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferInfo {
    /// Hub airport IATA code the traveler actually flies into
    pub hub_airport: String,
    /// City of the hub airport
    pub hub_city: String,
    /// Onward ground travel time in minutes
    pub ground_transfer_minutes: u32,
    /// Mode of the onward leg
    pub mode: TransferMode,
    /// Presentation note (e.g. "Scenic rail via Bern")
    pub note: Option<String>,
}

/// A travel-time estimate in hours
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeEstimate {
    /// Flight band plus ground transfer
    pub total_hours: f64,
    /// Regional flight band only
    pub flight_hours: f64,
    /// Ground transfer, 0 for directly served destinations
    pub ground_hours: f64,
}

static TRANSFERS: LazyLock<HashMap<&'static str, TransferInfo>> = LazyLock::new(|| {
    HashMap::from([
        (
            "santorini",
            TransferInfo {
                hub_airport: "ATH".to_string(),
                hub_city: "Athens".to_string(),
                ground_transfer_minutes: 300,
                mode: TransferMode::Ferry,
                note: Some("High-speed ferry from Piraeus".to_string()),
            },
        ),
        (
            "kyoto",
            TransferInfo {
                hub_airport: "KIX".to_string(),
                hub_city: "Osaka".to_string(),
                ground_transfer_minutes: 75,
                mode: TransferMode::Train,
                note: Some("Haruka express from Kansai".to_string()),
            },
        ),
        (
            "interlaken",
            TransferInfo {
                hub_airport: "ZRH".to_string(),
                hub_city: "Zurich".to_string(),
                ground_transfer_minutes: 120,
                mode: TransferMode::Train,
                note: Some("Direct rail via Bern".to_string()),
            },
        ),
        (
            "queenstown",
            TransferInfo {
                hub_airport: "AKL".to_string(),
                hub_city: "Auckland".to_string(),
                ground_transfer_minutes: 110,
                mode: TransferMode::ConnectingFlight,
                note: Some("Domestic hop from Auckland".to_string()),
            },
        ),
        (
            "ubud",
            TransferInfo {
                hub_airport: "DPS".to_string(),
                hub_city: "Denpasar".to_string(),
                ground_transfer_minutes: 90,
                mode: TransferMode::Drive,
                note: None,
            },
        ),
    ])
});

/// Look up static transfer data for a destination id
#[must_use]
pub fn transfer_info(destination_id: &str) -> Option<&'static TransferInfo> {
    TRANSFERS.get(destination_id)
}

/// Map a major airport code to its coarse region
///
/// Only hub airports are listed; regional airports resolve through their
/// destination's `TransferInfo` hub instead.
#[must_use]
pub fn airport_region(code: &str) -> Option<Region> {
    let code = code.to_ascii_uppercase();
    let region = match code.as_str() {
        "JFK" | "EWR" | "BOS" | "ORD" | "ATL" | "MIA" | "DFW" | "DEN" | "LAX" | "SFO" | "SEA"
        | "YYZ" | "YVR" | "MEX" => Region::NorthAmerica,
        "GRU" | "EZE" | "SCL" | "BOG" | "LIM" => Region::SouthAmerica,
        "LHR" | "CDG" | "AMS" | "FRA" | "MAD" | "BCN" | "LIS" | "FCO" | "ATH" | "ZRH" | "VIE"
        | "MUC" | "CPH" | "ARN" | "DUB" | "KEF" => Region::Europe,
        "RAK" | "CMN" | "CAI" | "CPT" | "JNB" | "NBO" => Region::Africa,
        "DXB" | "DOH" | "AUH" | "TLV" | "IST" => Region::MiddleEast,
        "NRT" | "HND" | "KIX" | "ICN" | "PEK" | "PVG" | "HKG" | "TPE" | "BKK" | "SIN" | "KUL"
        | "DPS" | "HAN" | "SGN" | "DEL" | "BOM" => Region::Asia,
        "SYD" | "MEL" | "BNE" | "AKL" | "CHC" => Region::Oceania,
        _ => return None,
    };
    Some(region)
}

/// Typical nonstop flight hours between two regions
#[must_use]
pub fn flight_band_hours(from: Region, to: Region) -> f64 {
    use Region::*;

    if from == to {
        return match from {
            NorthAmerica | SouthAmerica => 3.5,
            Europe | MiddleEast => 2.5,
            Africa => 4.0,
            Asia => 5.0,
            Oceania => 3.0,
        };
    }

    // Symmetric pair table; order the pair before matching
    let pair = if rank(from) <= rank(to) {
        (from, to)
    } else {
        (to, from)
    };
    match pair {
        (NorthAmerica, SouthAmerica) => 8.0,
        (NorthAmerica, Europe) => 7.5,
        (NorthAmerica, Africa) => 11.0,
        (NorthAmerica, MiddleEast) => 12.0,
        (NorthAmerica, Asia) => 13.0,
        (NorthAmerica, Oceania) => 14.5,
        (SouthAmerica, Europe) => 11.0,
        (SouthAmerica, Africa) => 9.0,
        (SouthAmerica, MiddleEast) => 14.0,
        (SouthAmerica, Asia) => 18.0,
        (SouthAmerica, Oceania) => 13.0,
        (Europe, Africa) => 5.5,
        (Europe, MiddleEast) => 4.5,
        (Europe, Asia) => 10.0,
        (Europe, Oceania) => 21.0,
        (Africa, MiddleEast) => 4.0,
        (Africa, Asia) => 9.0,
        (Africa, Oceania) => 12.0,
        (MiddleEast, Asia) => 7.0,
        (MiddleEast, Oceania) => 14.0,
        (Asia, Oceania) => 8.5,
        _ => unreachable!("pair is ordered and same-region is handled above"),
    }
}

fn rank(region: Region) -> u8 {
    match region {
        Region::NorthAmerica => 0,
        Region::SouthAmerica => 1,
        Region::Europe => 2,
        Region::Africa => 3,
        Region::MiddleEast => 4,
        Region::Asia => 5,
        Region::Oceania => 6,
    }
}

/// Estimate total travel time from an origin airport to a destination
///
/// Returns `None` when the origin airport is unknown or no regional band can
/// be determined. Callers must treat `None` as "unknown", never as zero.
#[must_use]
pub fn estimate_travel_time(
    origin_airport: &str,
    destination: &Destination,
) -> Option<TravelTimeEstimate> {
    let origin_region = airport_region(origin_airport)?;

    let (arrival_airport, ground_minutes) = match transfer_info(&destination.id) {
        Some(transfer) => (
            transfer.hub_airport.as_str(),
            transfer.ground_transfer_minutes,
        ),
        None => (destination.airport_code.as_str(), 0),
    };

    let arrival_region = airport_region(arrival_airport)?;
    let flight_hours = flight_band_hours(origin_region, arrival_region);
    let ground_hours = f64::from(ground_minutes) / 60.0;

    Some(TravelTimeEstimate {
        total_hours: flight_hours + ground_hours,
        flight_hours,
        ground_hours,
    })
}
