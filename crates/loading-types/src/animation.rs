//! Framework-free animation state.
//!
//! Each animation is a pure function of the time elapsed since mount: the
//! UI layer owns a clock and asks for a frame, nothing here keeps timers.

use std::time::Duration;

/// Entrance fade/slide duration.
pub const ENTRANCE_DURATION: Duration = Duration::from_millis(300);
/// Starting vertical offset of the entrance slide.
pub const ENTRANCE_OFFSET: f32 = 10.0;
/// Duration of one half of the pulse loop (up or down).
pub const PULSE_HALF_CYCLE: Duration = Duration::from_millis(900);
/// Visible opacity range of a pulsing skeleton.
pub const PULSE_OPACITY: (f32, f32) = (0.3, 0.7);

/// Timing curve applied to normalized progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// Symmetric ease-in-out built from the `(0.42, 0, 1, 1)` ease curve,
    /// the default curve for timed animations on mobile.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    EASE.solve(t * 2.0) / 2.0
                } else {
                    1.0 - EASE.solve((1.0 - t) * 2.0) / 2.0
                }
            }
        }
    }
}

const EASE: CubicBezier = CubicBezier {
    x1: 0.42,
    y1: 0.0,
    x2: 1.0,
    y2: 1.0,
};

/// Unit cubic bezier from (0, 0) to (1, 1).
#[derive(Debug, Clone, Copy)]
struct CubicBezier {
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
}

impl CubicBezier {
    fn component(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t
    }

    fn slope(t: f32, p1: f32, p2: f32) -> f32 {
        let u = 1.0 - t;
        3.0 * u * u * p1 + 6.0 * u * t * (p2 - p1) + 3.0 * t * t * (1.0 - p2)
    }

    /// y for a given x.
    fn solve(&self, x: f32) -> f32 {
        if x <= 0.0 {
            return 0.0;
        }
        if x >= 1.0 {
            return 1.0;
        }

        // Newton first, bisection when the slope is too flat to trust.
        let mut t = x;
        for _ in 0..8 {
            let err = Self::component(t, self.x1, self.x2) - x;
            if err.abs() < 1e-6 {
                return Self::component(t, self.y1, self.y2).clamp(0.0, 1.0);
            }
            let d = Self::slope(t, self.x1, self.x2);
            if d.abs() < 1e-6 {
                break;
            }
            t -= err / d;
        }

        let (mut lo, mut hi) = (0.0f32, 1.0f32);
        t = x;
        for _ in 0..32 {
            let value = Self::component(t, self.x1, self.x2);
            if (value - x).abs() < 1e-6 {
                break;
            }
            if value < x {
                lo = t;
            } else {
                hi = t;
            }
            t = (lo + hi) / 2.0;
        }
        Self::component(t, self.y1, self.y2).clamp(0.0, 1.0)
    }
}

/// Linear map from `input` to `output`, with `value` clamped to `input`.
pub fn interpolate(value: f32, input: (f32, f32), output: (f32, f32)) -> f32 {
    let (in_lo, in_hi) = input;
    if in_hi == in_lo {
        return output.0;
    }
    let lo = in_lo.min(in_hi);
    let hi = in_lo.max(in_hi);
    let ratio = (value.clamp(lo, hi) - in_lo) / (in_hi - in_lo);
    let mapped = output.0 * (1.0 - ratio) + output.1 * ratio;
    mapped.clamp(output.0.min(output.1), output.0.max(output.1))
}

/// A single timed transition between two values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Timing {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::default(),
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Normalized progress in `[0, 1]`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() || elapsed >= self.duration {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()) as f32
    }

    pub fn sample(&self, elapsed: Duration) -> f32 {
        let progress = self.progress(elapsed);
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * self.easing.apply(progress)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Something a frame driver can sample over time.
pub trait Animation {
    type Frame: Copy + PartialEq + std::fmt::Debug;

    fn sample(&self, elapsed: Duration) -> Self::Frame;

    fn is_finished(&self, elapsed: Duration) -> bool;

    /// Frame to show when nothing drives the animation (server rendering,
    /// no timer available).
    fn settled(&self) -> Self::Frame;
}

/// Entrance frame: opacity plus vertical offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceFrame {
    pub opacity: f32,
    pub translate_y: f32,
}

/// One-shot fade in with a short upward slide.
///
/// Both channels read the same elapsed clock, so they always start together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntranceAnimation {
    opacity: Timing,
    offset: Timing,
}

impl EntranceAnimation {
    pub fn new() -> Self {
        Self {
            opacity: Timing::new(0.0, 1.0, ENTRANCE_DURATION),
            offset: Timing::new(ENTRANCE_OFFSET, 0.0, ENTRANCE_DURATION),
        }
    }

    pub fn duration(&self) -> Duration {
        self.opacity.duration.max(self.offset.duration)
    }
}

impl Default for EntranceAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for EntranceAnimation {
    type Frame = EntranceFrame;

    fn sample(&self, elapsed: Duration) -> EntranceFrame {
        EntranceFrame {
            opacity: self.opacity.sample(elapsed),
            translate_y: self.offset.sample(elapsed),
        }
    }

    fn is_finished(&self, elapsed: Duration) -> bool {
        self.opacity.is_finished(elapsed) && self.offset.is_finished(elapsed)
    }

    fn settled(&self) -> EntranceFrame {
        EntranceFrame {
            opacity: self.opacity.to,
            translate_y: self.offset.to,
        }
    }
}

/// Endless 0 -> 1 -> 0 loop mapped onto a visible opacity range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PulseAnimation {
    rise: Timing,
    fall: Timing,
    output: (f32, f32),
}

impl PulseAnimation {
    pub fn new() -> Self {
        Self {
            rise: Timing::new(0.0, 1.0, PULSE_HALF_CYCLE),
            fall: Timing::new(1.0, 0.0, PULSE_HALF_CYCLE),
            output: PULSE_OPACITY,
        }
    }

    /// Length of one full up-and-down cycle.
    pub fn cycle(&self) -> Duration {
        self.rise.duration + self.fall.duration
    }

    /// Raw loop value in `[0, 1]`.
    pub fn raw(&self, elapsed: Duration) -> f32 {
        let cycle = self.cycle().as_nanos();
        if cycle == 0 {
            return self.rise.from;
        }
        let offset = Duration::from_nanos((elapsed.as_nanos() % cycle) as u64);
        if offset < self.rise.duration {
            self.rise.sample(offset)
        } else {
            self.fall.sample(offset - self.rise.duration)
        }
    }

    pub fn opacity(&self, elapsed: Duration) -> f32 {
        interpolate(self.raw(elapsed), (0.0, 1.0), self.output)
    }
}

impl Default for PulseAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl Animation for PulseAnimation {
    type Frame = f32;

    fn sample(&self, elapsed: Duration) -> f32 {
        self.opacity(elapsed)
    }

    fn is_finished(&self, _elapsed: Duration) -> bool {
        false
    }

    fn settled(&self) -> f32 {
        self.output.0
    }
}
