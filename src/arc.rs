//! Quarter-circle sampling for corner arcs.
//!
//! The iterator produces `segments + 1` unit-circle samples across a quarter
//! turn using rotation composition: one `sin`/`cos` pair is computed at
//! construction and every step is a 2x2 rotation of the previous sample, so
//! there are no per-step trig calls. Accumulated float drift is cancelled by
//! snapping the terminal sample to the exact axis value.

use std::f32::consts::FRAC_PI_2;

/// Segment count for a corner of the given radius: one segment per ~3px of
/// arc length, clamped to [3, 18].
pub fn segments_for_radius(radius: f32) -> u32 {
    let arc_length = radius.max(0.0) * FRAC_PI_2;
    ((arc_length / 3.0).ceil() as u32).clamp(3, 18)
}

/// Stepper over the samples of a quarter-circle arc.
///
/// A non-inverted iterator starts at `(cos, sin) = (1, 0)` and ends at
/// `(0, 1)`; an inverted one walks the same samples in the opposite order.
/// After exactly `segments` increments the sample is the exact axis value,
/// bit-for-bit, not an accumulated approximation.
///
/// # Examples
///
/// ```
/// use kadro::ArcIterator;
///
/// let mut arc = ArcIterator::new(4, false);
/// let mut samples = vec![(arc.cos(), arc.sin())];
/// while !arc.is_done() {
///     arc.increment();
///     samples.push((arc.cos(), arc.sin()));
/// }
/// assert_eq!(samples.len(), 5);
/// assert_eq!(samples[0], (1.0, 0.0));
/// assert_eq!(samples[4], (0.0, 1.0));
/// ```
#[derive(Debug, Clone)]
pub struct ArcIterator {
    segments: u32,
    step: u32,
    inverted: bool,
    cos: f32,
    sin: f32,
    step_cos: f32,
    step_sin: f32,
}

impl ArcIterator {
    pub fn new(segments: u32, inverted: bool) -> Self {
        let segments = segments.max(1);
        let delta = FRAC_PI_2 / segments as f32;
        let (start_cos, start_sin) = Self::start_sample(inverted);
        Self {
            segments,
            step: 0,
            inverted,
            cos: start_cos,
            sin: start_sin,
            step_cos: delta.cos(),
            step_sin: delta.sin(),
        }
    }

    #[inline]
    fn start_sample(inverted: bool) -> (f32, f32) {
        if inverted {
            (0.0, 1.0)
        } else {
            (1.0, 0.0)
        }
    }

    #[inline]
    fn end_sample(inverted: bool) -> (f32, f32) {
        Self::start_sample(!inverted)
    }

    #[inline]
    pub fn cos(&self) -> f32 {
        self.cos
    }

    #[inline]
    pub fn sin(&self) -> f32 {
        self.sin
    }

    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }

    #[inline]
    pub fn segments(&self) -> u32 {
        self.segments
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.step >= self.segments
    }

    /// Advances one segment. Past the terminal step this is a no-op.
    pub fn increment(&mut self) {
        if self.is_done() {
            return;
        }
        self.step += 1;
        if self.step == self.segments {
            let (cos, sin) = Self::end_sample(self.inverted);
            self.cos = cos;
            self.sin = sin;
        } else {
            self.rotate(!self.inverted);
        }
    }

    /// Walks one segment backward. At the start step this is a no-op.
    pub fn decrement(&mut self) {
        if self.step == 0 {
            return;
        }
        self.step -= 1;
        if self.step == 0 {
            let (cos, sin) = Self::start_sample(self.inverted);
            self.cos = cos;
            self.sin = sin;
        } else {
            self.rotate(self.inverted);
        }
    }

    /// Restores the iterator to its constructed state.
    pub fn revert(&mut self) {
        let (cos, sin) = Self::start_sample(self.inverted);
        self.step = 0;
        self.cos = cos;
        self.sin = sin;
    }

    /// Rotates the current sample by one segment angle; `forward` rotates
    /// toward (0, 1), backward toward (1, 0).
    #[inline]
    fn rotate(&mut self, forward: bool) {
        let (c, s) = (self.step_cos, self.step_sin);
        let (cos, sin) = if forward {
            (self.cos * c - self.sin * s, self.sin * c + self.cos * s)
        } else {
            (self.cos * c + self.sin * s, self.sin * c - self.cos * s)
        };
        self.cos = cos;
        self.sin = sin;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(segments: u32, inverted: bool) -> Vec<(f32, f32)> {
        let mut arc = ArcIterator::new(segments, inverted);
        let mut samples = vec![(arc.cos(), arc.sin())];
        while !arc.is_done() {
            arc.increment();
            samples.push((arc.cos(), arc.sin()));
        }
        samples
    }

    #[test]
    fn visits_exactly_n_plus_one_samples() {
        for segments in 3..=18 {
            assert_eq!(collect(segments, false).len() as u32, segments + 1);
            assert_eq!(collect(segments, true).len() as u32, segments + 1);
        }
    }

    #[test]
    fn endpoints_are_exact() {
        for segments in 3..=18 {
            let samples = collect(segments, false);
            assert_eq!(samples[0], (1.0, 0.0));
            assert_eq!(*samples.last().unwrap(), (0.0, 1.0));

            let samples = collect(segments, true);
            assert_eq!(samples[0], (0.0, 1.0));
            assert_eq!(*samples.last().unwrap(), (1.0, 0.0));
        }
    }

    #[test]
    fn samples_track_true_trig_within_tolerance() {
        let segments = 12;
        let samples = collect(segments, false);
        for (i, (cos, sin)) in samples.iter().enumerate() {
            let angle = FRAC_PI_2 * i as f32 / segments as f32;
            assert!((cos - angle.cos()).abs() < 1e-4, "cos drift at step {i}");
            assert!((sin - angle.sin()).abs() < 1e-4, "sin drift at step {i}");
        }
    }

    #[test]
    fn samples_stay_on_the_unit_circle() {
        for (cos, sin) in collect(18, false) {
            assert!((cos * cos + sin * sin - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn decrement_returns_to_the_exact_start() {
        let mut arc = ArcIterator::new(7, false);
        while !arc.is_done() {
            arc.increment();
        }
        while arc.step() > 0 {
            arc.decrement();
        }
        assert_eq!((arc.cos(), arc.sin()), (1.0, 0.0));
    }

    #[test]
    fn revert_restores_the_constructed_state() {
        let mut arc = ArcIterator::new(5, true);
        arc.increment();
        arc.increment();
        arc.revert();
        assert_eq!(arc.step(), 0);
        assert_eq!((arc.cos(), arc.sin()), (0.0, 1.0));
        assert!(!arc.is_done());
    }

    #[test]
    fn increment_past_the_end_is_a_no_op() {
        let mut arc = ArcIterator::new(3, false);
        for _ in 0..10 {
            arc.increment();
        }
        assert_eq!(arc.step(), 3);
        assert_eq!((arc.cos(), arc.sin()), (0.0, 1.0));
    }

    #[test]
    fn inverted_walk_mirrors_the_forward_walk() {
        let forward = collect(9, false);
        let mut backward = collect(9, true);
        backward.reverse();
        for (f, b) in forward.iter().zip(backward.iter()) {
            assert!((f.0 - b.0).abs() < 1e-4);
            assert!((f.1 - b.1).abs() < 1e-4);
        }
    }

    #[test]
    fn segment_count_formula() {
        assert_eq!(segments_for_radius(0.0), 3);
        assert_eq!(segments_for_radius(2.0), 3);
        // 10px radius: quarter arc is ~15.7px, one segment per 3px
        assert_eq!(segments_for_radius(10.0), 6);
        // Large radii clamp at 18
        assert_eq!(segments_for_radius(500.0), 18);
    }
}
