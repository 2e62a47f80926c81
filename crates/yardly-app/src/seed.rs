use yardly_types::{Post, now_millis};

/// Starter listings shown on a fresh install before anyone has posted.
pub fn seed_posts() -> Vec<Post> {
    let now = now_millis();
    vec![
        Post {
            id: "1".into(),
            text: "Yard sale! Tons of clothes, toys, and books.".into(),
            lat: 37.0965,
            lng: -113.5684,
            created_at: now,
            image_uri: None,
        },
        Post {
            id: "2".into(),
            text: "Moving out sale! Furniture and electronics.".into(),
            lat: 37.1,
            lng: -113.57,
            created_at: now,
            image_uri: None,
        },
        Post {
            id: "3".into(),
            text: "Baby clothes and toys, everything must go!".into(),
            lat: 37.095,
            lng: -113.565,
            created_at: now,
            image_uri: None,
        },
    ]
}
