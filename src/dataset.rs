//! The built-in Australian regional airline table.

use crate::table::AirlineRecord;

/// Placeholder delay figures (minutes), assigned positionally to the first rows.
pub const SAMPLE_DELAYS: [f64; 3] = [10.0, 5.0, 15.0];

// Airline, IATA, ICAO, Hub, Airport, Notes
const AIRLINES: &[[&str; 6]] = &[
    [
        "Air Link",
        "LZ",
        "-",
        "-",
        "Dubbo City Regional Airport",
        "Ceased passenger services January 2018. Recommenced in November 2019.",
    ],
    [
        "Airnorth",
        "TL",
        "ANO",
        "TOPEND",
        "Darwin International Airport",
        "Operates scheduled services to regional airports in Queensland, Western Australia, and the Northern Territory. Also has an international service to Timor Leste.",
    ],
    [
        "Alliance Airlines",
        "QQ",
        "UTY",
        "UNITY",
        "Brisbane Airport",
        "Owns and operates a fleet of Fokker aircraft including Fokker 70 and Fokker 100 jet aircraft. Operates Virgin Australia branded flights, as well as closed charter and FIFO for mining operations around Australia. They have also wet-leased several Embraer 190s to Qantas since June 2021.",
    ],
    [
        "Aviair",
        "GD",
        "-",
        "-",
        "East Kimberley Regional Airport",
        "Previously known as Slingair Heliworks.",
    ],
    [
        "Bonza",
        "AB",
        "BNZ",
        "BONZA",
        "Sunshine Coast Airport",
        "",
    ],
    [
        "Chartair",
        "-",
        "-",
        "-",
        "Darwin International Airport",
        "",
    ],
    [
        "Eastern Air Services",
        "-",
        "-",
        "-",
        "Port Macquarie Airport",
        "Based in Port Macquarie with RPT between Lord Howe Island and Port Macquarie, Newcastle, and Gold Coast.",
    ],
    [
        "Eastern Australia Airlines",
        "QF",
        "QLK",
        "Q-LINK",
        "Sydney Airport",
        "Operates Bombardier Q200 and Q300 aircraft under the QantasLink brand.",
    ],
    [
        "FlyPelican",
        "FP",
        "FRE",
        "PELICAN",
        "Newcastle Airport",
        "Regional airline operating in NSW, ACT, and Queensland with a fleet of 5 Jetstream 32 aircraft.",
    ],
    [
        "Fly Tiwi",
        "FT",
        "-",
        "-",
        "Darwin International Airport",
        "Owned by Hardy Aviation.",
    ],
];

/// Builds fresh records from the literal table. `AverageDelay` starts out missing.
pub fn builtin_records() -> Vec<AirlineRecord> {
    AIRLINES
        .iter()
        .map(|[airline, iata, icao, hub, airport, notes]| AirlineRecord {
            airline: airline.to_string(),
            iata: iata.to_string(),
            icao: icao.to_string(),
            hub: hub.to_string(),
            airport: airport.to_string(),
            notes: notes.to_string(),
            average_delay: None,
        })
        .collect()
}
