//! Gallows figure segments
//!
//! Each wrong guess adds one body part. The order is fixed and maps directly
//! to the number of attempts used.

use super::round::MAX_ATTEMPTS;

/// One body part of the hanged figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

impl Segment {
    /// All segments in drawing order
    pub const ALL: [Self; MAX_ATTEMPTS as usize] = [
        Self::Head,
        Self::Torso,
        Self::LeftArm,
        Self::RightArm,
        Self::LeftLeg,
        Self::RightLeg,
    ];

    /// Segments to draw after `attempts_used` wrong guesses
    ///
    /// # Examples
    /// ```
    /// use gallows::core::Segment;
    ///
    /// assert_eq!(Segment::visible(2), &[Segment::Head, Segment::Torso]);
    /// assert!(Segment::visible(0).is_empty());
    /// ```
    #[must_use]
    pub fn visible(attempts_used: u8) -> &'static [Self] {
        let count = usize::from(attempts_used).min(Self::ALL.len());
        &Self::ALL[..count]
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Torso => "torso",
            Self::LeftArm => "left arm",
            Self::RightArm => "right arm",
            Self::LeftLeg => "left leg",
            Self::RightLeg => "right leg",
        }
    }
}
