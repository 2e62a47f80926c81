pub mod capabilities;
pub mod error;
pub mod feed;
pub mod map;
pub mod seed;
pub mod service;
pub mod session;

pub use error::FeedError;
pub use feed::{Feed, PostDraft};
pub use map::{MapQuery, MapScene, Marker, Region};
pub use service::FeedService;
pub use session::{Role, Session, Theme};
