use comfy_table::Color;

pub const MAX_RATING: u8 = 5;

/// Ratings the feed can filter on, with their display labels.
pub const RATING_OPTIONS: [(u8, &str); 5] = [
    (1, "⭐"),
    (2, "⭐⭐"),
    (3, "⭐⭐⭐"),
    (4, "⭐⭐⭐⭐"),
    (5, "⭐⭐⭐⭐⭐"),
];

/// The display rating for an employee, derived from the id alone so it never
/// changes between views.
pub fn stable_rating(id: u64) -> u8 {
    (id % u64::from(MAX_RATING)) as u8 + 1
}

/// Rating behind the analytics department averages. Differs from
/// [`stable_rating`] for most ids.
pub fn analytics_rating(id: u64) -> u8 {
    (id.wrapping_mul(7).wrapping_add(13) % u64::from(MAX_RATING)) as u8 + 1
}

/// Filled stars followed by empty ones, always five symbols wide.
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "⭐".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}

pub fn rating_label(rating: u8) -> &'static str {
    RATING_OPTIONS
        .iter()
        .find(|(value, _)| *value == rating)
        .map(|(_, label)| *label)
        .unwrap_or("-")
}

pub fn badge_color(rating: u8) -> Color {
    match rating {
        5 => Color::Green,
        4 => Color::Blue,
        3 => Color::Yellow,
        2 => Color::DarkYellow,
        1 => Color::Red,
        _ => Color::Grey,
    }
}
