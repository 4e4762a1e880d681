//! Geographic location value object

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// Validated geographic location
///
/// Country and city are required; finer-grained parts and coordinates are
/// optional. Field violations are collected and reported together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    country: String,
    city: String,
    region: Option<String>,
    district: Option<String>,
    address: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl Location {
    pub const MAX_NAME_LENGTH: usize = 100;
    pub const MAX_ADDRESS_LENGTH: usize = 200;

    /// Create a validated location
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        country: &str,
        city: &str,
        region: Option<&str>,
        district: Option<&str>,
        address: Option<&str>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> DomainResult<Self> {
        let mut violations = Vec::new();

        let country = country.trim();
        if country.is_empty() {
            violations.push(DomainError::validation(
                "Location.CountryRequired",
                "Country is required",
            ));
        } else if country.chars().count() > Self::MAX_NAME_LENGTH {
            violations.push(DomainError::validation(
                "Location.CountryTooLong",
                format!("Country cannot exceed {} characters", Self::MAX_NAME_LENGTH),
            ));
        }

        let city = city.trim();
        if city.is_empty() {
            violations.push(DomainError::validation(
                "Location.CityRequired",
                "City is required",
            ));
        } else if city.chars().count() > Self::MAX_NAME_LENGTH {
            violations.push(DomainError::validation(
                "Location.CityTooLong",
                format!("City cannot exceed {} characters", Self::MAX_NAME_LENGTH),
            ));
        }

        for (field, value) in [("Region", region), ("District", district)] {
            if let Some(v) = value {
                if v.trim().chars().count() > Self::MAX_NAME_LENGTH {
                    violations.push(DomainError::validation(
                        format!("Location.{}TooLong", field),
                        format!("{} cannot exceed {} characters", field, Self::MAX_NAME_LENGTH),
                    ));
                }
            }
        }
        if let Some(a) = address {
            if a.trim().chars().count() > Self::MAX_ADDRESS_LENGTH {
                violations.push(DomainError::validation(
                    "Location.AddressTooLong",
                    format!(
                        "Address cannot exceed {} characters",
                        Self::MAX_ADDRESS_LENGTH
                    ),
                ));
            }
        }

        match (latitude, longitude) {
            (Some(lat), Some(lng)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    violations.push(DomainError::validation(
                        "Location.InvalidLatitude",
                        "Latitude must be between -90 and 90",
                    ));
                }
                if !(-180.0..=180.0).contains(&lng) {
                    violations.push(DomainError::validation(
                        "Location.InvalidLongitude",
                        "Longitude must be between -180 and 180",
                    ));
                }
            }
            (None, None) => {}
            _ => {
                violations.push(DomainError::validation(
                    "Location.IncompleteCoordinates",
                    "Latitude and longitude must be provided together",
                ));
            }
        }

        if violations.len() == 1 {
            return Err(violations.remove(0));
        }
        if !violations.is_empty() {
            return Err(DomainError::validation_set("Location.Invalid", violations));
        }

        Ok(Self {
            country: country.to_string(),
            city: city.to_string(),
            region: region.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            district: district.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            address: address.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            latitude,
            longitude,
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn district(&self) -> Option<&str> {
        self.district.as_deref()
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn latitude(&self) -> Option<f64> {
        self.latitude
    }

    pub fn longitude(&self) -> Option<f64> {
        self.longitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_minimal_location() {
        let loc = Location::create("Ukraine", "Kyiv", None, None, None, None, None).unwrap();
        assert_eq!(loc.country(), "Ukraine");
        assert_eq!(loc.city(), "Kyiv");
        assert_eq!(loc.latitude(), None);
    }

    #[test]
    fn test_full_location_with_coordinates() {
        let loc = Location::create(
            "Ukraine",
            "Kyiv",
            Some("Kyiv Oblast"),
            Some("Pechersk"),
            Some("1 Khreshchatyk St"),
            Some(50.4501),
            Some(30.5234),
        )
        .unwrap();
        assert_eq!(loc.latitude(), Some(50.4501));
        assert_eq!(loc.district(), Some("Pechersk"));
    }

    #[test]
    fn test_latitude_out_of_range_rejected() {
        let err =
            Location::create("Ukraine", "Kyiv", None, None, None, Some(90.5), Some(0.0))
                .unwrap_err();
        assert_eq!(err.code(), "Location.InvalidLatitude");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_longitude_out_of_range_rejected() {
        let err =
            Location::create("Ukraine", "Kyiv", None, None, None, Some(0.0), Some(-180.1))
                .unwrap_err();
        assert_eq!(err.code(), "Location.InvalidLongitude");
    }

    #[test]
    fn test_lone_coordinate_rejected() {
        let err =
            Location::create("Ukraine", "Kyiv", None, None, None, Some(50.0), None).unwrap_err();
        assert_eq!(err.code(), "Location.IncompleteCoordinates");
    }

    #[test]
    fn test_multiple_violations_aggregated() {
        let err = Location::create("", "", None, None, None, None, None).unwrap_err();
        assert_eq!(err.code(), "Location.Invalid");
        assert_eq!(err.violations().len(), 2);
    }
}
