use serde::{Deserialize, Serialize};

/// A single yard-sale listing.
///
/// Field names are pinned to the persisted JSON layout (`createdAt`,
/// `imageUri`) so documents written by earlier versions of the app round-trip
/// unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Immutable once assigned. Derived from the creation timestamp.
    pub id: String,
    pub text: String,
    pub lat: f64,
    pub lng: f64,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Local image URI captured with the post. The store never owns or
    /// cleans up the referenced file.
    #[serde(default)]
    pub image_uri: Option<String>,
}

/// A text annotation on a post.
///
/// `post_id` is an unenforced reference: a comment may outlive, or never
/// match, the post it names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub post_id: String,
    pub text: String,
    pub created_at: i64,
}
