//! Linear ramp envelope.
//!
//! The envelope shapes a buffer so that it starts and ends at silence. It is a
//! pure function of the sample index and the buffer length: a linear ramp-in
//! over the first `attack` fraction of the buffer, a linear ramp-out over the
//! last `release` fraction, and the minimum of the two (clamped to `[0, 1]`).

/// Ramp-in / ramp-out envelope expressed as fractions of the buffer length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampEnvelope {
    /// Fraction of the buffer spent ramping in.
    pub attack: f64,
    /// Fraction of the buffer spent ramping out.
    pub release: f64,
}

impl RampEnvelope {
    /// Creates a new ramp envelope. Negative fractions are treated as zero.
    pub fn new(attack: f64, release: f64) -> Self {
        Self {
            attack: attack.max(0.0),
            release: release.max(0.0),
        }
    }

    /// Symmetric 1% fades used by frequency sweeps.
    pub fn sweep() -> Self {
        Self::new(0.01, 0.01)
    }

    /// Fast 0.5% attack, slower 2% release used by noise bursts.
    pub fn percussive() -> Self {
        Self::new(0.005, 0.02)
    }

    /// Returns the gain at `index` for a buffer of `num_samples` samples.
    ///
    /// The first and the last sample of any buffer get a gain of exactly 0
    /// whenever the matching fraction is non-zero.
    pub fn gain_at(&self, index: usize, num_samples: usize) -> f64 {
        if num_samples == 0 {
            return 0.0;
        }
        let last = (num_samples - 1) as f64;
        let total = num_samples as f64;

        let ramp_in = ramp(index as f64, self.attack * total);
        let ramp_out = ramp(last - index as f64, self.release * total);

        ramp_in.min(ramp_out).clamp(0.0, 1.0)
    }

    /// Renders the envelope for a whole buffer.
    pub fn render(&self, num_samples: usize) -> Vec<f64> {
        (0..num_samples)
            .map(|i| self.gain_at(i, num_samples))
            .collect()
    }
}

fn ramp(position: f64, length: f64) -> f64 {
    if length <= 0.0 {
        1.0
    } else {
        position / length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_silent() {
        let env = RampEnvelope::sweep();
        assert_eq!(env.gain_at(0, 13230), 0.0);
        assert_eq!(env.gain_at(13229, 13230), 0.0);
    }

    #[test]
    fn test_middle_is_full_scale() {
        let env = RampEnvelope::sweep();
        assert_eq!(env.gain_at(6615, 13230), 1.0);
    }

    #[test]
    fn test_ramp_in_is_linear() {
        // 1% of 10000 samples = 100 sample ramp
        let env = RampEnvelope::sweep();
        assert!((env.gain_at(50, 10_000) - 0.5).abs() < 1e-12);
        assert!((env.gain_at(25, 10_000) - 0.25).abs() < 1e-12);
        assert_eq!(env.gain_at(100, 10_000), 1.0);
    }

    #[test]
    fn test_percussive_release_is_slower_than_attack() {
        let env = RampEnvelope::percussive();
        let n = 10_000;
        // 0.5% attack = 50 samples, 2% release = 200 samples
        assert_eq!(env.gain_at(50, n), 1.0);
        assert!(env.gain_at(n - 1 - 50, n) < 0.5);
        assert_eq!(env.gain_at(n - 1 - 200, n), 1.0);
    }

    #[test]
    fn test_gain_stays_in_unit_range() {
        let env = RampEnvelope::new(0.3, 0.4);
        for g in env.render(997) {
            assert!((0.0..=1.0).contains(&g));
        }
    }

    #[test]
    fn test_zero_fractions_are_flat() {
        let env = RampEnvelope::new(0.0, 0.0);
        assert!(env.render(64).iter().all(|&g| g == 1.0));
    }

    #[test]
    fn test_degenerate_lengths() {
        let env = RampEnvelope::sweep();
        assert_eq!(env.gain_at(0, 0), 0.0);
        assert_eq!(env.gain_at(0, 1), 0.0);
        assert!(env.render(0).is_empty());
    }
}
