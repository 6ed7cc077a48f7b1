//! Hand pose to shape label.
//!
//! Classification is two steps: [`HandPose::read`] reduces a landmark frame to
//! a pinch flag and an extended-finger count, then a [`GestureTable`] maps that
//! pair onto a [`ShapeLabel`]. The table is total: every pose yields exactly
//! one label, and the finger-heart pinch always wins over the finger count.
//! There is no debouncing; a hand hovering between two poses may flip labels
//! on consecutive frames.

use super::landmarks::*;
use super::shape::ShapeLabel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct HandPose {
    /// Thumb and index tips pinched while the middle finger is curled.
    pub love_sign: bool,
    /// Extended fingers among index, middle, ring and pinky (0..=4).
    pub extended: u8,
}

impl HandPose {
    pub fn read(frame: &HandFrame, pinch_threshold: f32) -> Self {
        let pinch = frame.planar_distance(THUMB_TIP, INDEX_TIP);
        let middle_curled = frame.point(MIDDLE_TIP).y > frame.point(MIDDLE_PIP).y;
        let extended = FINGERTIPS
            .iter()
            .filter(|&&tip| frame.is_extended(tip))
            .count() as u8;
        Self {
            love_sign: pinch < pinch_threshold && middle_curled,
            extended,
        }
    }
}

/// Gesture-to-shape priority table, fixed per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GestureTable {
    /// pinch → love_sign, 0 → heart, 3 → saturn, 4 → flower, otherwise sphere.
    #[default]
    Basic,
    /// As `Basic`, plus 1 → text_i and 2 → text_you.
    Glyphs,
    /// As `Glyphs`, but the pinch spells text_love.
    Words,
}

impl GestureTable {
    pub fn resolve(self, pose: HandPose) -> ShapeLabel {
        if pose.love_sign {
            return match self {
                Self::Words => ShapeLabel::TextLove,
                Self::Basic | Self::Glyphs => ShapeLabel::LoveSign,
            };
        }
        match (self, pose.extended) {
            (_, 0) => ShapeLabel::Heart,
            (Self::Glyphs | Self::Words, 1) => ShapeLabel::TextI,
            (Self::Glyphs | Self::Words, 2) => ShapeLabel::TextYou,
            (_, 3) => ShapeLabel::Saturn,
            (_, n) if n >= 4 => ShapeLabel::Flower,
            _ => ShapeLabel::Sphere,
        }
    }

    pub fn classify(self, frame: &HandFrame, pinch_threshold: f32) -> ShapeLabel {
        self.resolve(HandPose::read(frame, pinch_threshold))
    }
}
