//! Domain error types.

/// Errors from validating a user-supplied position.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// Latitude outside -90..=90
    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),

    /// Longitude outside -180..=180
    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),

    /// NaN or infinite component
    #[error("coordinates must be finite")]
    NotFinite,

    /// The 0,0 placeholder sent before a position is known
    #[error("0,0 is the placeholder for an unknown position")]
    Unset,
}
