/// Slide animation for the meme card
///
/// A navigation starts a slide: the new card enters from the right when
/// moving forward and from the left when moving back, while fading in.
/// The card it replaces leaves the opposite way, fading out.

use std::time::{Duration, Instant};

use super::carousel::Direction;

/// Horizontal distance (logical pixels) the card enters from
pub const ENTER_DISTANCE: f32 = 480.0;

pub const SLIDE_DURATION: Duration = Duration::from_millis(300);
pub const FADE_DURATION: Duration = Duration::from_millis(200);

/// Card geometry at one instant of a slide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    /// Signed horizontal offset of the entering card: positive = right of center
    pub enter_offset: f32,
    pub enter_opacity: f32,
    /// Signed horizontal offset of the leaving card
    pub exit_offset: f32,
    pub exit_opacity: f32,
}

impl Frame {
    /// No slide running: the current card is centered and opaque
    pub const SETTLED: Frame = Frame {
        enter_offset: 0.0,
        enter_opacity: 1.0,
        exit_offset: 0.0,
        exit_opacity: 0.0,
    };
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    /// Signed starting offset of the entering card
    from: f32,
    /// Index of the meme being replaced
    outgoing: usize,
    started: Instant,
}

impl Slide {
    /// `Direction::None` has no entry geometry, so no slide
    pub fn start(direction: Direction, outgoing: usize, now: Instant) -> Option<Self> {
        let from = match direction {
            Direction::Forward => ENTER_DISTANCE,
            Direction::Backward => -ENTER_DISTANCE,
            Direction::None => return None,
        };

        Some(Self {
            from,
            outgoing,
            started: now,
        })
    }

    pub fn outgoing(&self) -> usize {
        self.outgoing
    }

    pub fn frame(&self, now: Instant) -> Frame {
        let t = progress(self.started, now, SLIDE_DURATION);
        let eased = 1.0 - (1.0 - t).powi(3);
        let fade = progress(self.started, now, FADE_DURATION);

        Frame {
            enter_offset: self.from * (1.0 - eased),
            enter_opacity: fade,
            exit_offset: -self.from * eased,
            exit_opacity: 1.0 - fade,
        }
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= SLIDE_DURATION.max(FADE_DURATION)
    }
}

fn progress(started: Instant, now: Instant, duration: Duration) -> f32 {
    let elapsed = now.saturating_duration_since(started).as_secs_f32();
    (elapsed / duration.as_secs_f32()).clamp(0.0, 1.0)
}
