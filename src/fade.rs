//! Fade-In Transition Effect
//!
//! Provides the cross-fade-from-black played when the shell switches
//! pages. Each fade is an opaque black overlay covering the whole screen
//! whose alpha animates linearly from 1.0 (fully black) to 0.0 (fully
//! transparent) over its duration. The page switch underneath happens
//! before the fade starts, so the new page is already rendered behind the
//! opaque overlay on the first frame and the user never sees the seam.
//!
//! Fades are transient effects: the shell keeps a `Vec<FadeIn>` and drops
//! finished ones each frame. There is no cancellation; a second fade
//! started while one is in flight is simply an independent overlay and
//! both race to transparency.
//!
//! # Example
//!
//! ```rust
//! use crate::fade::FadeIn;
//!
//! // On page switch
//! fades.push(FadeIn::new());
//!
//! // In the main loop
//! fades.retain(|fade| !fade.is_finished());
//! for fade in &fades {
//!     fade.render(&mut canvas)?;
//! }
//! ```

use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::time::{Duration, Instant};

/// Default fade duration in milliseconds
pub const DEFAULT_FADE_MS: u64 = 800;

/// A single in-flight fade-from-black overlay
///
/// Covers the full logical screen, fully opaque at creation, and fades
/// linearly to transparent. Alpha is always within [0.0, 1.0] and is
/// non-increasing over the fade's lifetime. A zero duration completes
/// immediately.
pub struct FadeIn {
    started: Instant,
    duration: Duration,
}

impl FadeIn {
    /// Starts a fade with the default 800ms duration
    pub fn new() -> Self {
        Self::with_duration(Duration::from_millis(DEFAULT_FADE_MS))
    }

    /// Starts a fade with a custom duration
    pub fn with_duration(duration: Duration) -> Self {
        FadeIn {
            started: Instant::now(),
            duration,
        }
    }

    /// Overlay alpha for a given elapsed time since the fade started
    ///
    /// 1.0 = fully opaque black, 0.0 = fully transparent. Linear in
    /// elapsed time, clamped to [0.0, 1.0]. A zero-duration fade is
    /// already transparent.
    pub fn alpha_at(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 0.0;
        }

        let progress = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        (1.0 - progress).clamp(0.0, 1.0)
    }

    /// Current overlay alpha based on wall-clock time
    pub fn alpha(&self) -> f32 {
        self.alpha_at(self.started.elapsed())
    }

    /// Returns true once the overlay has reached full transparency
    ///
    /// The shell drops finished fades, releasing the overlay.
    pub fn is_finished(&self) -> bool {
        self.started.elapsed() >= self.duration
    }

    /// Renders the overlay above all page content
    ///
    /// Call this last in the frame so the overlay stacks on top of the
    /// current page for its entire lifetime.
    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let alpha = self.alpha();
        if alpha <= 0.0 {
            return Ok(());
        }

        canvas.set_blend_mode(sdl2::render::BlendMode::Blend);
        canvas.set_draw_color(Color::RGBA(0, 0, 0, (alpha * 255.0).round() as u8));
        canvas.fill_rect(None)?;
        canvas.set_blend_mode(sdl2::render::BlendMode::None);

        Ok(())
    }
}

impl Default for FadeIn {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_fully_opaque() {
        let fade = FadeIn::with_duration(Duration::from_millis(800));
        assert_eq!(fade.alpha_at(Duration::ZERO), 1.0);
    }

    #[test]
    fn test_reaches_transparent_at_duration() {
        let fade = FadeIn::with_duration(Duration::from_millis(800));
        assert_eq!(fade.alpha_at(Duration::from_millis(800)), 0.0);
    }

    #[test]
    fn test_linear_midpoint() {
        let fade = FadeIn::with_duration(Duration::from_millis(800));
        let alpha = fade.alpha_at(Duration::from_millis(400));
        assert!((alpha - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_alpha_stays_in_range() {
        let fade = FadeIn::with_duration(Duration::from_millis(100));
        // Well past the end: clamped at 0, never negative
        assert_eq!(fade.alpha_at(Duration::from_secs(10)), 0.0);
        // Start: clamped at 1, never above
        assert_eq!(fade.alpha_at(Duration::ZERO), 1.0);
    }

    #[test]
    fn test_monotonically_non_increasing() {
        let fade = FadeIn::with_duration(Duration::from_millis(800));
        let mut previous = f32::MAX;
        for ms in (0..=1000).step_by(50) {
            let alpha = fade.alpha_at(Duration::from_millis(ms));
            assert!(alpha <= previous, "alpha increased at {}ms", ms);
            previous = alpha;
        }
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let fade = FadeIn::with_duration(Duration::ZERO);
        assert_eq!(fade.alpha_at(Duration::ZERO), 0.0);
        assert!(fade.is_finished());
    }

    #[test]
    fn test_default_duration() {
        let fade = FadeIn::new();
        // Halfway through 800ms should be at 0.5
        let alpha = fade.alpha_at(Duration::from_millis(DEFAULT_FADE_MS / 2));
        assert!((alpha - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_in_flight_fade_not_finished() {
        let fade = FadeIn::with_duration(Duration::from_secs(60));
        assert!(!fade.is_finished());
        assert!(fade.alpha() > 0.0);
    }
}
