//! Beach model: a named surf spot with fixed coordinates

use serde::{Deserialize, Serialize};

/// A beach to be scored
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Beach {
    /// Display name, unique across the configured beaches
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Beach {
    /// Create a new beach
    #[must_use]
    pub fn new<S: Into<String>>(name: S, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            latitude,
            longitude,
        }
    }

    /// Whether both coordinates are inside their valid ranges
    #[must_use]
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Beaches of the Ceará coast scored when no list is configured
#[must_use]
pub fn default_beaches() -> Vec<Beach> {
    vec![
        Beach::new("Praia do Futuro", -3.7208, -38.4807),
        Beach::new("Iguape", -4.0791, -38.4503),
        Beach::new("Paracuru", -3.4146, -39.0300),
        Beach::new("Taíba", -3.5480, -38.8929),
    ]
}
