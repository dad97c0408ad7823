//! Clamped continuous scales mapping a value domain onto a pixel range.
//!
//! A scale is the bidirectional transform behind every slider: `forward`
//! turns a domain value into a pixel offset along the track and `invert`
//! turns a pointer offset back into a value. Both directions clamp, so
//! `invert` never leaves `[lo, hi]` however far the pointer travels.
//!
//! # Example
//!
//! ```
//! use slidekit_core::scale::{LinearScale, Scale};
//!
//! let mut scale = LinearScale::new((0.0, 100.0), (0.0, 170.0)).unwrap();
//! assert_eq!(scale.forward(50.0), 85.0);
//! assert_eq!(scale.invert(-40.0), 0.0);
//! assert_eq!(scale.ticks(3), vec![0.0, 50.0, 100.0]);
//!
//! scale.set_range((0.0, 270.0)).unwrap();
//! assert_eq!(scale.forward(50.0), 135.0);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Thresholds for picking a 1/2/5/10 tick step.
const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Largest tick count [`linear_ticks`] honours; larger requests are capped.
pub const MAX_TICK_COUNT: usize = 1000;

/// Error constructing or re-ranging a scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleError {
    /// Domain bounds are not finite
    NonFiniteDomain,
    /// Domain does not satisfy `lo < hi`
    EmptyDomain {
        /// Lower bound
        lo: f64,
        /// Upper bound
        hi: f64,
    },
    /// Range is not finite or has negative width
    InvalidRange {
        /// Range start
        start: f64,
        /// Range end
        end: f64,
    },
    /// Power exponent is not finite and positive, or overflows the domain
    InvalidExponent(f64),
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteDomain => write!(f, "domain bounds must be finite"),
            Self::EmptyDomain { lo, hi } => {
                write!(f, "domain [{lo}, {hi}] is empty (expected lo < hi)")
            }
            Self::InvalidRange { start, end } => {
                write!(f, "range [{start}, {end}] must be finite with non-negative width")
            }
            Self::InvalidExponent(k) => write!(f, "exponent {k} must be finite, positive and keep the domain finite"),
        }
    }
}

impl std::error::Error for ScaleError {}

/// Bidirectional, clamped mapping between a value domain and a pixel range.
pub trait Scale: fmt::Debug + Send + Sync {
    /// Domain bounds `(lo, hi)`.
    fn domain(&self) -> (f64, f64);

    /// Range bounds `(start, end)` in pixels.
    fn range(&self) -> (f64, f64);

    /// Replace the range, leaving the domain untouched.
    fn set_range(&mut self, range: (f64, f64)) -> Result<(), ScaleError>;

    /// Map a domain value to a pixel position (clamped to the range).
    fn forward(&self, value: f64) -> f64;

    /// Map a pixel position to a domain value (clamped to the domain).
    fn invert(&self, position: f64) -> f64;

    /// Up to roughly `count + 1` evenly spaced, human-friendly domain values.
    fn ticks(&self, count: usize) -> Vec<f64>;

    /// Width of the range in pixels.
    fn range_width(&self) -> f64 {
        let (start, end) = self.range();
        end - start
    }
}

fn check_domain(domain: (f64, f64)) -> Result<(), ScaleError> {
    let (lo, hi) = domain;
    if !lo.is_finite() || !hi.is_finite() {
        return Err(ScaleError::NonFiniteDomain);
    }
    if lo >= hi {
        return Err(ScaleError::EmptyDomain { lo, hi });
    }
    Ok(())
}

fn check_range(range: (f64, f64)) -> Result<(), ScaleError> {
    let (start, end) = range;
    if !start.is_finite() || !end.is_finite() || end < start {
        return Err(ScaleError::InvalidRange { start, end });
    }
    Ok(())
}

/// Interpolate `t` in `[0, 1]` between `a` and `b`.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    t.mul_add(b - a, a)
}

/// Clamp `x` into `[lo, hi]`, sending NaN to `lo`.
fn clamp_to(x: f64, (lo, hi): (f64, f64)) -> f64 {
    if x.is_nan() {
        lo
    } else {
        x.clamp(lo, hi)
    }
}

/// Fraction of the way `x` sits from `a` to `b`, clamped to `[0, 1]`.
///
/// Degenerate spans and NaN inputs map to 0.
fn unlerp_clamped(a: f64, b: f64, x: f64) -> f64 {
    let span = b - a;
    if span == 0.0 {
        return 0.0;
    }
    let t = (x - a) / span;
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Linear scale: `forward(v) = start + (v - lo) / (hi - lo) * width`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Create a clamped linear scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Result<Self, ScaleError> {
        check_domain(domain)?;
        check_range(range)?;
        Ok(Self { domain, range })
    }
}

impl Scale for LinearScale {
    fn domain(&self) -> (f64, f64) {
        self.domain
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn set_range(&mut self, range: (f64, f64)) -> Result<(), ScaleError> {
        check_range(range)?;
        self.range = range;
        Ok(())
    }

    fn forward(&self, value: f64) -> f64 {
        let t = unlerp_clamped(self.domain.0, self.domain.1, value);
        // lerp at t = 1 may round past the far end
        clamp_to(lerp(self.range.0, self.range.1, t), self.range)
    }

    fn invert(&self, position: f64) -> f64 {
        let t = unlerp_clamped(self.range.0, self.range.1, position);
        clamp_to(lerp(self.domain.0, self.domain.1, t), self.domain)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Power scale: values pass through `sign(v) * |v|^exponent` before the
/// linear mapping. Ticks are those of the untransformed domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowScale {
    exponent: f64,
    domain: (f64, f64),
    range: (f64, f64),
}

impl PowScale {
    /// Create a clamped power scale.
    ///
    /// The exponent must be positive: a negative one sends 0 to infinity.
    /// Domains whose raised bounds overflow or collapse are rejected too.
    pub fn new(exponent: f64, domain: (f64, f64), range: (f64, f64)) -> Result<Self, ScaleError> {
        if !exponent.is_finite() || exponent <= 0.0 {
            return Err(ScaleError::InvalidExponent(exponent));
        }
        check_domain(domain)?;
        check_range(range)?;
        let scale = Self {
            exponent,
            domain,
            range,
        };
        let (t0, t1) = scale.raised_domain();
        if !t0.is_finite() || !t1.is_finite() || t0 >= t1 {
            return Err(ScaleError::InvalidExponent(exponent));
        }
        Ok(scale)
    }

    /// Square-root scale (`exponent = 0.5`).
    pub fn sqrt(domain: (f64, f64), range: (f64, f64)) -> Result<Self, ScaleError> {
        Self::new(0.5, domain, range)
    }

    /// The exponent applied to domain values.
    #[must_use]
    pub const fn exponent(&self) -> f64 {
        self.exponent
    }

    fn raise(&self, x: f64) -> f64 {
        x.signum() * x.abs().powf(self.exponent)
    }

    fn lower(&self, x: f64) -> f64 {
        x.signum() * x.abs().powf(self.exponent.recip())
    }

    fn raised_domain(&self) -> (f64, f64) {
        (self.raise(self.domain.0), self.raise(self.domain.1))
    }
}

impl Scale for PowScale {
    fn domain(&self) -> (f64, f64) {
        self.domain
    }

    fn range(&self) -> (f64, f64) {
        self.range
    }

    fn set_range(&mut self, range: (f64, f64)) -> Result<(), ScaleError> {
        check_range(range)?;
        self.range = range;
        Ok(())
    }

    fn forward(&self, value: f64) -> f64 {
        let (t0, t1) = self.raised_domain();
        let t = unlerp_clamped(t0, t1, self.raise(value));
        clamp_to(lerp(self.range.0, self.range.1, t), self.range)
    }

    fn invert(&self, position: f64) -> f64 {
        let (t0, t1) = self.raised_domain();
        let t = unlerp_clamped(self.range.0, self.range.1, position);
        clamp_to(self.lower(lerp(t0, t1, t)), self.domain)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        linear_ticks(self.domain.0, self.domain.1, count)
    }
}

/// Which scale a slider maps through; the configurable scale factory.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScaleKind {
    /// Linear mapping
    #[default]
    Linear,
    /// Power mapping with the given exponent
    Pow {
        /// Exponent applied to domain values
        exponent: f64,
    },
    /// Square-root mapping
    Sqrt,
}

impl ScaleKind {
    /// Build a scale of this kind.
    pub fn build(&self, domain: (f64, f64), range: (f64, f64)) -> Result<Box<dyn Scale>, ScaleError> {
        Ok(match *self {
            Self::Linear => Box::new(LinearScale::new(domain, range)?),
            Self::Pow { exponent } => Box::new(PowScale::new(exponent, domain, range)?),
            Self::Sqrt => Box::new(PowScale::sqrt(domain, range)?),
        })
    }
}

/// Integer tick bounds and increment for `[start, stop]`.
///
/// A negative increment means "divide by `-inc`", which keeps steps like
/// 0.1 exact instead of accumulating `0.1 * i` rounding error.
fn tick_bounds(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let div = 10f64.powf(-power) / factor;
        i1 = (start * div).round();
        i2 = (stop * div).round();
        if i1 / div < start {
            i1 += 1.0;
        }
        if i2 / div > stop {
            i2 -= 1.0;
        }
        inc = -div;
    } else {
        let mul = 10f64.powf(power) * factor;
        i1 = (start / mul).round();
        i2 = (stop / mul).round();
        if i1 * mul < start {
            i1 += 1.0;
        }
        if i2 * mul > stop {
            i2 -= 1.0;
        }
        inc = mul;
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_bounds(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Nice ticks covering `[lo, hi]` with about `count` intervals.
///
/// Every returned value lies inside `[lo, hi]`. Returns an empty vector for
/// `count == 0` or non-finite bounds, and `[lo]` when `lo == hi`. Counts
/// above [`MAX_TICK_COUNT`] are treated as `MAX_TICK_COUNT`.
#[must_use]
pub fn linear_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    let count = count.min(MAX_TICK_COUNT);
    if count == 0 || !lo.is_finite() || !hi.is_finite() {
        return Vec::new();
    }
    if lo == hi {
        return vec![lo];
    }
    let (start, stop, reverse) = if hi < lo { (hi, lo, true) } else { (lo, hi, false) };

    let (i1, i2, inc) = tick_bounds(start, stop, count as f64);
    if !(i2 >= i1) || !inc.is_finite() {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let k = i1 + i as f64;
            if inc < 0.0 {
                k / -inc
            } else {
                k * inc
            }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // =========================================================================
    // LinearScale Construction Tests
    // =========================================================================

    #[test]
    fn test_linear_new_rejects_empty_domain() {
        assert_eq!(
            LinearScale::new((1.0, 1.0), (0.0, 100.0)),
            Err(ScaleError::EmptyDomain { lo: 1.0, hi: 1.0 })
        );
        assert!(LinearScale::new((2.0, 1.0), (0.0, 100.0)).is_err());
    }

    #[test]
    fn test_linear_new_rejects_non_finite_domain() {
        assert_eq!(
            LinearScale::new((0.0, f64::INFINITY), (0.0, 100.0)),
            Err(ScaleError::NonFiniteDomain)
        );
        assert_eq!(
            LinearScale::new((f64::NAN, 1.0), (0.0, 100.0)),
            Err(ScaleError::NonFiniteDomain)
        );
    }

    #[test]
    fn test_linear_new_rejects_negative_range() {
        assert_eq!(
            LinearScale::new((0.0, 1.0), (0.0, -10.0)),
            Err(ScaleError::InvalidRange {
                start: 0.0,
                end: -10.0
            })
        );
    }

    #[test]
    fn test_linear_accepts_zero_width_range() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 0.0)).unwrap();
        assert_eq!(scale.invert(10.0), 0.0);
        assert_eq!(scale.forward(0.7), 0.0);
    }

    // =========================================================================
    // Mapping Tests
    // =========================================================================

    #[test]
    fn test_linear_forward_and_invert() {
        let scale = LinearScale::new((0.0, 100.0), (0.0, 170.0)).unwrap();
        assert_eq!(scale.forward(0.0), 0.0);
        assert_eq!(scale.forward(50.0), 85.0);
        assert_eq!(scale.forward(100.0), 170.0);
        assert_eq!(scale.invert(85.0), 50.0);
        assert_eq!(scale.invert(0.0), 0.0);
    }

    #[test]
    fn test_linear_clamps_both_directions() {
        let scale = LinearScale::new((10.0, 20.0), (0.0, 100.0)).unwrap();
        assert_eq!(scale.invert(-50.0), 10.0);
        assert_eq!(scale.invert(500.0), 20.0);
        assert_eq!(scale.forward(0.0), 0.0);
        assert_eq!(scale.forward(99.0), 100.0);
    }

    #[test]
    fn test_linear_invert_past_end_stays_in_domain() {
        // hi - lo + lo rounds above hi for this domain
        let (lo, hi) = (-348_737.876_562_379_2, 211_734.355_001_047_3);
        let scale = LinearScale::new((lo, hi), (0.0, 170.0)).unwrap();
        assert_eq!(scale.invert(1e9), hi);
        assert_eq!(scale.invert(170.0), hi);
        assert_eq!(scale.invert(-1e9), lo);
    }

    #[test]
    fn test_linear_invert_nan_maps_to_lo() {
        let scale = LinearScale::new((10.0, 20.0), (0.0, 100.0)).unwrap();
        assert_eq!(scale.invert(f64::NAN), 10.0);
        assert_eq!(scale.invert(f64::INFINITY), 20.0);
    }

    #[test]
    fn test_set_range_keeps_domain() {
        let mut scale = LinearScale::new((0.0, 100.0), (0.0, 170.0)).unwrap();
        scale.set_range((0.0, 270.0)).unwrap();
        assert_eq!(scale.domain(), (0.0, 100.0));
        assert_eq!(scale.range(), (0.0, 270.0));
        assert_eq!(scale.range_width(), 270.0);
        assert_eq!(scale.forward(0.0), 0.0);
    }

    #[test]
    fn test_set_range_rejects_invalid_and_keeps_old() {
        let mut scale = LinearScale::new((0.0, 1.0), (0.0, 170.0)).unwrap();
        assert!(scale.set_range((0.0, -1.0)).is_err());
        assert!(scale.set_range((0.0, f64::NAN)).is_err());
        assert_eq!(scale.range(), (0.0, 170.0));
    }

    // =========================================================================
    // Tick Tests
    // =========================================================================

    #[test]
    fn test_ticks_unit_domain() {
        let scale = LinearScale::new((0.0, 1.0), (0.0, 170.0)).unwrap();
        assert_eq!(scale.ticks(3), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_ticks_hundred_domain() {
        assert_eq!(linear_ticks(0.0, 100.0, 3), vec![0.0, 50.0, 100.0]);
        assert_eq!(
            linear_ticks(0.0, 100.0, 10),
            vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0]
        );
    }

    #[test]
    fn test_ticks_decimal_steps_are_exact() {
        assert_eq!(
            linear_ticks(0.0, 1.0, 10),
            vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]
        );
    }

    #[test]
    fn test_ticks_offset_domain() {
        assert_eq!(linear_ticks(-3.0, 7.0, 3), vec![0.0, 5.0]);
        assert_eq!(linear_ticks(1.0, 9.0, 4), vec![2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_ticks_edge_cases() {
        assert!(linear_ticks(0.0, 1.0, 0).is_empty());
        assert_eq!(linear_ticks(5.0, 5.0, 3), vec![5.0]);
        assert!(linear_ticks(0.0, f64::NAN, 3).is_empty());
        assert_eq!(linear_ticks(1.0, 0.0, 2), vec![1.0, 0.5, 0.0]);
    }

    #[test]
    fn test_ticks_count_is_capped() {
        let ticks = linear_ticks(0.0, 1.0, 1_000_000_000_000);
        assert_eq!(ticks, linear_ticks(0.0, 1.0, MAX_TICK_COUNT));
        assert!(ticks.len() <= MAX_TICK_COUNT + 1);
    }

    #[test]
    fn test_ticks_single_count() {
        let ticks = linear_ticks(0.0, 1.0, 1);
        assert_eq!(ticks, vec![0.0, 1.0]);
    }

    // =========================================================================
    // PowScale Tests
    // =========================================================================

    #[test]
    fn test_pow_rejects_bad_exponent() {
        assert_eq!(
            PowScale::new(0.0, (0.0, 1.0), (0.0, 1.0)),
            Err(ScaleError::InvalidExponent(0.0))
        );
        assert!(PowScale::new(f64::NAN, (0.0, 1.0), (0.0, 1.0)).is_err());
    }

    #[test]
    fn test_pow_rejects_negative_exponent() {
        assert_eq!(
            PowScale::new(-1.0, (0.0, 10.0), (0.0, 100.0)),
            Err(ScaleError::InvalidExponent(-1.0))
        );
        assert!(ScaleKind::Pow { exponent: -0.5 }
            .build((1.0, 10.0), (0.0, 100.0))
            .is_err());
    }

    #[test]
    fn test_pow_rejects_domain_that_overflows() {
        assert_eq!(
            PowScale::new(2.0, (0.0, 1e200), (0.0, 100.0)),
            Err(ScaleError::InvalidExponent(2.0))
        );
        assert!(PowScale::new(2.0, (0.0, 1e-200), (0.0, 100.0)).is_err());
    }

    #[test]
    fn test_pow_invert_is_always_finite() {
        let scale = PowScale::new(3.0, (-1e100, 1e100), (0.0, 170.0)).unwrap();
        for p in [f64::NEG_INFINITY, -1.0, 0.0, 85.0, 170.0, 1e9, f64::NAN] {
            let v = scale.invert(p);
            assert!(v.is_finite(), "invert({p}) = {v}");
            assert!((-1e100..=1e100).contains(&v));
        }
    }

    #[test]
    fn test_sqrt_forward_invert() {
        let scale = PowScale::sqrt((0.0, 100.0), (0.0, 100.0)).unwrap();
        assert!(approx(scale.forward(25.0), 50.0));
        assert!(approx(scale.invert(50.0), 25.0));
        assert_eq!(scale.exponent(), 0.5);
    }

    #[test]
    fn test_pow_negative_domain() {
        let scale = PowScale::new(2.0, (-10.0, 10.0), (0.0, 200.0)).unwrap();
        assert!(approx(scale.forward(0.0), 100.0));
        assert!(approx(scale.invert(100.0), 0.0));
        assert!(approx(scale.invert(200.0), 10.0));
        assert_eq!(scale.invert(-5.0), -10.0);
    }

    #[test]
    fn test_pow_ticks_follow_domain() {
        let scale = PowScale::new(3.0, (0.0, 100.0), (0.0, 10.0)).unwrap();
        assert_eq!(scale.ticks(3), vec![0.0, 50.0, 100.0]);
    }

    // =========================================================================
    // ScaleKind Tests
    // =========================================================================

    #[test]
    fn test_scale_kind_default_is_linear() {
        assert_eq!(ScaleKind::default(), ScaleKind::Linear);
    }

    #[test]
    fn test_scale_kind_build() {
        let linear = ScaleKind::Linear.build((0.0, 100.0), (0.0, 170.0)).unwrap();
        assert_eq!(linear.forward(50.0), 85.0);

        let sqrt = ScaleKind::Sqrt.build((0.0, 100.0), (0.0, 100.0)).unwrap();
        assert!(approx(sqrt.forward(25.0), 50.0));

        let err = ScaleKind::Pow { exponent: 0.0 }.build((0.0, 1.0), (0.0, 1.0));
        assert!(err.is_err());
    }

    #[test]
    fn test_scale_kind_serde() {
        let kind: ScaleKind = serde_json::from_str(r#"{"type":"pow","exponent":2.0}"#).unwrap();
        assert_eq!(kind, ScaleKind::Pow { exponent: 2.0 });
        let kind: ScaleKind = serde_json::from_str(r#"{"type":"sqrt"}"#).unwrap();
        assert_eq!(kind, ScaleKind::Sqrt);
    }

    #[test]
    fn test_scale_error_display() {
        assert_eq!(
            ScaleError::EmptyDomain { lo: 1.0, hi: 1.0 }.to_string(),
            "domain [1, 1] is empty (expected lo < hi)"
        );
        assert_eq!(
            ScaleError::NonFiniteDomain.to_string(),
            "domain bounds must be finite"
        );
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    proptest! {
        #[test]
        fn prop_linear_round_trip(
            lo in -1e6f64..1e6,
            span in 1e-3f64..1e6,
            width in 1.0f64..4000.0,
            frac in 0.0f64..=1.0,
        ) {
            let scale = LinearScale::new((lo, lo + span), (0.0, width)).unwrap();
            let p = frac * width;
            let back = scale.forward(scale.invert(p));
            prop_assert!((back - p).abs() < 1e-6 * width.max(1.0), "p={p} back={back}");
        }

        #[test]
        fn prop_invert_clamped(
            a in -1e6f64..1e6,
            b in -1e6f64..1e6,
            width in 1.0f64..4000.0,
            p in -1e9f64..1e9,
        ) {
            prop_assume!(a != b);
            let (lo, hi) = (a.min(b), a.max(b));
            let scale = LinearScale::new((lo, hi), (0.0, width)).unwrap();
            let v = scale.invert(p);
            prop_assert!(v >= lo && v <= hi, "invert({p}) = {v} outside [{lo}, {hi}]");
            let x = scale.forward(v);
            prop_assert!((0.0..=width).contains(&x));
        }

        #[test]
        fn prop_ticks_within_domain(
            lo in -1e6f64..1e6,
            span in 1e-6f64..1e6,
            count in 0usize..50,
        ) {
            let hi = lo + span;
            for t in linear_ticks(lo, hi, count) {
                prop_assert!(t >= lo && t <= hi, "tick {t} outside [{lo}, {hi}]");
            }
        }

        #[test]
        fn prop_sqrt_invert_clamped(p in -1e4f64..1e4) {
            let scale = PowScale::sqrt((0.0, 100.0), (0.0, 300.0)).unwrap();
            let v = scale.invert(p);
            prop_assert!((0.0..=100.0).contains(&v));
        }
    }
}
