//! Mock profile content shown on the employee detail page.
//!
//! The bio is a deterministic pick by id. Performance history is regenerated
//! on every view: its length and ratings depend on the id, while quarters and
//! wording are random.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::rating::stable_rating;

const BIOS: [&str; 5] = [
    "A dedicated and highly motivated team player with a strong passion for innovation and continuous improvement. Always seeking new challenges to contribute to team success.",
    "Experienced professional known for excellent problem-solving skills and a methodical approach to complex tasks. Consistently delivers high-quality results under pressure.",
    "Enthusiastic and creative individual with a keen eye for detail. Thrives in collaborative environments and is committed to fostering positive working relationships.",
    "Strategic thinker with a proven track record of optimizing workflows and enhancing efficiency. Possesses strong analytical capabilities and leadership potential.",
    "A versatile and adaptable individual, eager to learn new technologies and methodologies. Believes in open communication and proactive engagement in all projects.",
];

const FOCUS_AREAS: [&str; 5] = [
    "Achieved targets",
    "Improved efficiency",
    "Collaborated well",
    "Developed new skills",
    "Exceeded expectations",
];

const REVIEW_COMMENTS: [&str; 7] = [
    "Consistently met and exceeded quarterly goals.",
    "Showed initiative in resolving critical issues.",
    "Effective communication and teamwork.",
    "Identified and implemented process improvements.",
    "Areas for development include public speaking.",
    "Strong contribution to team projects.",
    "Demonstrated exceptional problem-solving abilities.",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceEntry {
    pub period: String,
    pub summary: String,
    pub rating: u8,
}

pub fn bio(id: u64) -> &'static str {
    BIOS[(id.wrapping_mul(17) % BIOS.len() as u64) as usize]
}

/// Number of review entries for an employee, between 2 and 5.
pub fn history_len(id: u64) -> usize {
    (id.wrapping_mul(3).wrapping_add(5) % 4) as usize + 2
}

/// One entry per year counting back from `latest_year`, newest first.
pub fn performance_history<R: Rng>(
    id: u64,
    latest_year: i32,
    rng: &mut R,
) -> Vec<PerformanceEntry> {
    (0..history_len(id))
        .map(|i| {
            let quarter = rng.gen_range(1..=4);
            let area = FOCUS_AREAS.choose(rng).copied().unwrap_or(FOCUS_AREAS[0]);
            let comment = REVIEW_COMMENTS
                .choose(rng)
                .copied()
                .unwrap_or(REVIEW_COMMENTS[0]);
            PerformanceEntry {
                period: format!("Q{quarter} {}", latest_year - i as i32),
                summary: format!("{area}. {comment}"),
                rating: stable_rating(id.wrapping_add(i as u64 * 10)),
            }
        })
        .collect()
}
