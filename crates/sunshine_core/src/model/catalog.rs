//! Compliment catalog.
//!
//! # Responsibility
//! - Hold the fixed, build-time list of displayable encouragement strings.
//!
//! # Invariants
//! - The catalog is non-empty and immutable at runtime.
//! - Entries are addressed by positional index only.

/// Fixed catalog of compliments served by the picker.
pub const COMPLIMENTS: &[&str] = &[
    "You're absolutely radiant today! ✨",
    "Your smile could light up the whole world! 🌟",
    "You're doing an amazing job! Keep it up! 💪",
    "The world is better with you in it! 🌈",
    "You're incredibly thoughtful and kind! 💝",
    "Your creativity knows no bounds! 🎨",
    "You make everyone around you happier! 😊",
    "You're stronger than you think! 🦋",
    "Your positive energy is contagious! ⚡",
    "You deserve all the happiness in the world! 🌸",
];

#[cfg(test)]
mod tests {
    use super::COMPLIMENTS;

    #[test]
    fn catalog_is_non_empty() {
        assert!(!COMPLIMENTS.is_empty());
    }

    #[test]
    fn catalog_entries_are_non_blank() {
        for entry in COMPLIMENTS {
            assert!(!entry.trim().is_empty());
        }
    }
}
