//! GBFS feed DTOs.
//!
//! These types map directly to the `station_information.json` and
//! `station_status.json` documents. Fields the locator does not use
//! (capacity, rental URIs, installation flags) are ignored on parse.

use serde::Deserialize;

/// Envelope shared by every GBFS document.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedDocument<T> {
    /// POSIX timestamp of when the feed last changed.
    #[serde(default)]
    pub last_updated: Option<i64>,

    /// Seconds the publisher asks clients to cache the document for.
    #[serde(default)]
    pub ttl: Option<u32>,

    pub data: StationList<T>,
}

/// The `data` object of a station document.
#[derive(Debug, Clone, Deserialize)]
pub struct StationList<T> {
    pub stations: Vec<T>,
}

/// One record from `station_information.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationInformationDto {
    pub station_id: String,

    pub name: String,

    /// Street address. Optional in GBFS, so an absent address is empty.
    #[serde(default)]
    pub address: String,

    pub lat: f64,

    pub lon: f64,
}

/// One record from `station_status.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct StationStatusDto {
    pub station_id: String,

    pub num_bikes_available: u32,

    pub num_docks_available: u32,
}
