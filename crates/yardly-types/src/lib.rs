pub mod geo;
pub mod models;
pub mod time;

pub use geo::{Coordinates, FALLBACK_LOCATION, MAP_FALLBACK_LOCATION};
pub use models::{Comment, Post};
pub use time::now_millis;
