use serde::Deserialize;
use yardly_types::{Coordinates, MAP_FALLBACK_LOCATION, Post};

/// Route parameters for the map screen, delivered as optional strings by the
/// navigation layer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MapQuery {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub text: Option<String>,
}

/// A labelled point on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub coordinate: Coordinates,
    pub title: String,
    pub description: Option<String>,
}

/// Initial viewport: a center plus latitude/longitude spans.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub center: Coordinates,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// Everything the map screen needs to render: the viewport, the post marker,
/// and optionally the viewer's own position.
#[derive(Debug, Clone, PartialEq)]
pub struct MapScene {
    pub region: Region,
    pub marker: Marker,
    pub user_marker: Option<Marker>,
}

const REGION_DELTA: f64 = 0.05;
const DEFAULT_TITLE: &str = "Yard Sale";
const MARKER_DESCRIPTION: &str = "Post location";
const USER_MARKER_TITLE: &str = "You are here";

impl MapScene {
    /// Build a scene from route parameters. Missing or unparseable
    /// components fall back per component to the default map center.
    pub fn from_query(query: &MapQuery) -> Self {
        let lat = parse_coord(query.lat.as_deref()).unwrap_or(MAP_FALLBACK_LOCATION.lat);
        let lng = parse_coord(query.lng.as_deref()).unwrap_or(MAP_FALLBACK_LOCATION.lng);
        let title = match query.text.as_deref() {
            Some(text) if !text.is_empty() => text.to_string(),
            _ => DEFAULT_TITLE.to_string(),
        };
        Self::centered_on(Coordinates::new(lat, lng), title)
    }

    /// Scene for a stored post (the "View on Map" action on a card).
    pub fn for_post(post: &Post) -> Self {
        Self::centered_on(Coordinates::new(post.lat, post.lng), post.text.clone())
    }

    fn centered_on(coordinate: Coordinates, title: String) -> Self {
        Self {
            region: Region {
                center: coordinate,
                latitude_delta: REGION_DELTA,
                longitude_delta: REGION_DELTA,
            },
            marker: Marker {
                coordinate,
                title,
                description: Some(MARKER_DESCRIPTION.to_string()),
            },
            user_marker: None,
        }
    }

    /// Add the viewer's own position once geolocation has been granted.
    pub fn with_user_location(mut self, location: Coordinates) -> Self {
        self.user_marker = Some(Marker {
            coordinate: location,
            title: USER_MARKER_TITLE.to_string(),
            description: None,
        });
        self
    }
}

fn parse_coord(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
