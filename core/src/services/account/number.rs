//! Account number generation.
//!
//! Numbers are built without a central sequence: a leading random digit
//! (never zero), two digits from the owner id, five from the clock and two
//! random. The result is plausibly unique, not guaranteed unique; the
//! account service checks storage for collisions and retries.

use chrono::Utc;
use rand::Rng;

/// Generates 10-digit account numbers
#[derive(Debug, Clone, Default)]
pub struct AccountNumberGenerator;

impl AccountNumberGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Draw a fresh candidate number for the given owner
    pub fn generate(&self, user_id: i64) -> String {
        let mut rng = rand::thread_rng();
        let lead: u32 = rng.gen_range(1..=9);
        let suffix: u32 = rng.gen_range(0..100);
        let millis = Utc::now().timestamp_millis();

        format_account_number(user_id, millis, lead, suffix)
    }
}

/// Pure formatter behind [`AccountNumberGenerator::generate`]: the same
/// inputs always produce the same 10-character string starting 1-9.
fn format_account_number(user_id: i64, millis: i64, lead: u32, suffix: u32) -> String {
    format!(
        "{}{:02}{:05}{:02}",
        lead,
        user_id.rem_euclid(100),
        millis.rem_euclid(100_000),
        suffix % 100
    )
}
