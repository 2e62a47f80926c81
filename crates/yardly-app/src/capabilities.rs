use thiserror::Error;
use tracing::warn;
use yardly_types::Coordinates;

/// Geolocation failures. Denial is a normal outcome: callers fall back to
/// the default location rather than failing the operation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("location permission denied")]
    PermissionDenied,

    #[error("location unavailable: {0}")]
    Unavailable(String),
}

/// Image capture/selection failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    #[error("camera permission denied")]
    PermissionDenied,

    #[error("image source unavailable: {0}")]
    Unavailable(String),
}

/// Device geolocation, permission-gated by the platform.
pub trait Geolocator {
    fn current_location(&self) -> Result<Coordinates, LocationError>;
}

/// Camera and photo-library access. Returned strings are opaque local URIs;
/// nothing in this core owns or cleans up the referenced files.
pub trait ImageSource {
    /// Take a new photo. `Ok(None)` means the user cancelled.
    fn capture(&self) -> Result<Option<String>, ImageError>;

    /// Pick an existing photo from the library. `Ok(None)` means the user
    /// cancelled.
    fn pick(&self) -> Result<Option<String>, ImageError>;
}

/// Resolve the device location for tagging a post. A denied permission or an
/// unavailable provider reads as "no location" so the caller falls back
/// instead of failing.
pub fn tag_location(geolocator: &dyn Geolocator) -> Option<Coordinates> {
    match geolocator.current_location() {
        Ok(coords) => Some(coords),
        Err(LocationError::PermissionDenied) => {
            warn!("Location permission denied; post will use the fallback location");
            None
        }
        Err(e) => {
            warn!("Error reading location: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Granted;

    impl Geolocator for Granted {
        fn current_location(&self) -> Result<Coordinates, LocationError> {
            Ok(Coordinates::new(40.0, -111.9))
        }
    }

    struct Denied;

    impl Geolocator for Denied {
        fn current_location(&self) -> Result<Coordinates, LocationError> {
            Err(LocationError::PermissionDenied)
        }
    }

    #[test]
    fn granted_location_is_tagged() {
        assert_eq!(tag_location(&Granted), Some(Coordinates::new(40.0, -111.9)));
    }

    #[test]
    fn denied_location_reads_as_none() {
        assert_eq!(tag_location(&Denied), None);
    }
}
