//! Formatting utilities for terminal output

use crate::core::{MAX_ATTEMPTS, Segment};

/// Letters per row of the on-screen keyboard
pub const KEYBOARD_ROW_WIDTH: usize = 11;

/// Draw the gallows with the segments earned by `attempts_used` wrong guesses
///
/// Returns one string per line, all of equal width.
#[must_use]
pub fn gallows_art(attempts_used: u8) -> Vec<String> {
    let visible = Segment::visible(attempts_used);
    let part = |segment: Segment, glyph: char| {
        if visible.contains(&segment) {
            glyph
        } else {
            ' '
        }
    };

    vec![
        "  +---+  ".to_string(),
        "  |   |  ".to_string(),
        format!("  {}   |  ", part(Segment::Head, 'O')),
        format!(
            " {}{}{}  |  ",
            part(Segment::LeftArm, '/'),
            part(Segment::Torso, '|'),
            part(Segment::RightArm, '\\')
        ),
        format!(
            " {} {}  |  ",
            part(Segment::LeftLeg, '/'),
            part(Segment::RightLeg, '\\')
        ),
        "      |  ".to_string(),
        "=========".to_string(),
    ]
}

/// Remaining attempts as a row of hearts
#[must_use]
pub fn attempts_bar(remaining: u8) -> String {
    let remaining = remaining.min(MAX_ATTEMPTS);
    format!(
        "{}{}",
        "♥".repeat(usize::from(remaining)),
        "♡".repeat(usize::from(MAX_ATTEMPTS - remaining))
    )
}

/// Names of the drawn body parts, e.g. "head, torso"
#[must_use]
pub fn drawn_segments(attempts_used: u8) -> String {
    Segment::visible(attempts_used)
        .iter()
        .map(|segment| segment.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Split keyboard letters into display rows
#[must_use]
pub fn keyboard_rows(keys: &[char]) -> Vec<&[char]> {
    keys.chunks(KEYBOARD_ROW_WIDTH).collect()
}

/// Join characters with single spaces, uppercased, for display
#[must_use]
pub fn spaced_upper(chars: &[char]) -> String {
    chars
        .iter()
        .flat_map(|c| c.to_uppercase())
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
