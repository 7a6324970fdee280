// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration: range, limits, stepping, and behavior flags.
//!
//! Every field has a default matching the usual slider prop surface
//! (`0..=1`, no limits, continuous stepping). A [`SliderConfig`] is checked
//! once by [`SliderConfig::validate`], which produces a [`ValueEngine`] that
//! never re-checks its inputs on the hot path.

use core::fmt;

use crate::engine::ValueEngine;
use crate::slider::Slider;

/// Default granularity used while dragging with snapping disabled.
pub const DEFAULT_CONTINUOUS_STEP: f64 = 0.0001;

/// The full domain of reportable values before limits are applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    /// Value at the start of the track.
    pub minimum_value: f64,
    /// Value at the end of the track.
    pub maximum_value: f64,
}

impl SliderRange {
    /// Creates a range from its two bounds.
    #[must_use]
    pub const fn new(minimum_value: f64, maximum_value: f64) -> Self {
        Self {
            minimum_value,
            maximum_value,
        }
    }

    /// Length of the range.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.maximum_value - self.minimum_value
    }
}

impl Default for SliderRange {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Optional sub-band of the range that dragging cannot leave.
///
/// Absent limits default to the corresponding [`SliderRange`] bound.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Limits {
    /// The user won't be able to slide below this value.
    pub lower_limit: Option<f64>,
    /// The user won't be able to slide above this value.
    pub upper_limit: Option<f64>,
}

impl Limits {
    /// No limits; the whole range is reachable.
    pub const NONE: Self = Self {
        lower_limit: None,
        upper_limit: None,
    };

    /// Creates limits with both bounds set.
    #[must_use]
    pub const fn new(lower_limit: f64, upper_limit: f64) -> Self {
        Self {
            lower_limit: Some(lower_limit),
            upper_limit: Some(upper_limit),
        }
    }

    /// Resolves absent limits against `range`, returning `(lower, upper)`.
    #[must_use]
    pub fn resolve(&self, range: &SliderRange) -> (f64, f64) {
        (
            self.lower_limit.unwrap_or(range.minimum_value),
            self.upper_limit.unwrap_or(range.maximum_value),
        )
    }
}

/// Quantization and snapping behavior.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepConfig {
    /// Grid spacing measured from the range minimum. `0` means continuous.
    pub step: f64,
    /// Move freely on the [`continuous_step`](Self::continuous_step) grid
    /// while dragging instead of snapping to `step`.
    pub disable_snap: bool,
    /// Granularity used while dragging when `disable_snap` is set.
    pub continuous_step: f64,
    /// Release-time snapping distance when `disable_snap` is set.
    ///
    /// `None` means the released value is never snapped.
    pub snap_threshold: Option<f64>,
}

impl Default for StepConfig {
    fn default() -> Self {
        Self {
            step: 0.0,
            disable_snap: false,
            continuous_step: DEFAULT_CONTINUOUS_STEP,
            snap_threshold: None,
        }
    }
}

bitflags::bitflags! {
    /// Behavior flags for a [`Slider`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct SliderFlags: u8 {
        /// Gestures are ignored. The value can still be set imperatively.
        const DISABLED    = 0b0000_0001;
        /// The track maps from maximum to minimum.
        const INVERTED    = 0b0000_0010;
        /// A tap on the track moves the thumb there.
        const TAP_TO_SEEK = 0b0000_0100;
        /// The track runs bottom-to-top rather than left-to-right.
        const VERTICAL    = 0b0000_1000;
    }
}

/// Complete slider configuration with every field defaulted.
///
/// ```
/// use understory_slider::{SliderConfig, SliderRange};
///
/// let engine = SliderConfig::default()
///     .with_range(SliderRange::new(0.0, 100.0))
///     .with_step(25.0)
///     .validate()
///     .unwrap();
/// assert_eq!(engine.live_value(0.4), 50.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderConfig {
    /// Reportable domain.
    pub range: SliderRange,
    /// Drag limits inside the range.
    pub limits: Limits,
    /// Stepping and snapping.
    pub step: StepConfig,
    /// Initial value; clamped into the limits on build.
    pub value: f64,
    /// Behavior flags.
    pub flags: SliderFlags,
}

impl SliderConfig {
    /// Sets the range.
    #[must_use]
    pub fn with_range(mut self, range: SliderRange) -> Self {
        self.range = range;
        self
    }

    /// Sets the drag limits.
    #[must_use]
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the step size, keeping the rest of the step configuration.
    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step.step = step;
        self
    }

    /// Enables free movement while dragging, with an optional release snap
    /// threshold.
    #[must_use]
    pub fn with_deferred_snap(mut self, continuous_step: f64, snap_threshold: Option<f64>) -> Self {
        self.step.disable_snap = true;
        self.step.continuous_step = continuous_step;
        self.step.snap_threshold = snap_threshold;
        self
    }

    /// Replaces the whole step configuration.
    #[must_use]
    pub fn with_step_config(mut self, step: StepConfig) -> Self {
        self.step = step;
        self
    }

    /// Sets the initial value.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Sets the behavior flags.
    #[must_use]
    pub fn with_flags(mut self, flags: SliderFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Checks the numeric configuration and produces a [`ValueEngine`].
    pub fn validate(&self) -> Result<ValueEngine, SliderConfigError> {
        let range = self.range;
        let step = self.step;
        ensure_finite(range.minimum_value, Field::MinimumValue)?;
        ensure_finite(range.maximum_value, Field::MaximumValue)?;
        if range.minimum_value > range.maximum_value {
            return Err(SliderConfigError::InvertedRange {
                minimum_value: range.minimum_value,
                maximum_value: range.maximum_value,
            });
        }

        if !range.span().is_finite() {
            return Err(SliderConfigError::SpanOverflow {
                minimum_value: range.minimum_value,
                maximum_value: range.maximum_value,
            });
        }

        if let Some(lower) = self.limits.lower_limit {
            ensure_finite(lower, Field::LowerLimit)?;
        }
        if let Some(upper) = self.limits.upper_limit {
            ensure_finite(upper, Field::UpperLimit)?;
        }
        let (lower, upper) = self.limits.resolve(&range);
        for (field, limit) in [(Field::LowerLimit, lower), (Field::UpperLimit, upper)] {
            if limit < range.minimum_value || limit > range.maximum_value {
                return Err(SliderConfigError::LimitOutOfRange { field, value: limit });
            }
        }
        if lower > upper {
            return Err(SliderConfigError::InvertedLimits {
                lower_limit: lower,
                upper_limit: upper,
            });
        }

        ensure_finite(step.step, Field::Step)?;
        if step.step < 0.0 {
            return Err(SliderConfigError::NegativeStep(step.step));
        }
        if step.step > range.span() {
            return Err(SliderConfigError::StepExceedsRange {
                step: step.step,
                span: range.span(),
            });
        }
        ensure_finite(step.continuous_step, Field::ContinuousStep)?;
        if step.continuous_step <= 0.0 {
            return Err(SliderConfigError::NonPositiveContinuousStep(
                step.continuous_step,
            ));
        }
        if let Some(threshold) = step.snap_threshold {
            ensure_finite(threshold, Field::SnapThreshold)?;
            if threshold < 0.0 {
                return Err(SliderConfigError::NegativeSnapThreshold(threshold));
            }
        }

        Ok(ValueEngine::from_parts(range, lower, upper, step))
    }

    /// Validates the configuration and builds a [`Slider`] holding the
    /// initial value, clamped into the limits.
    pub fn build(&self) -> Result<Slider, SliderConfigError> {
        let engine = self.validate()?;
        Ok(Slider::new(engine, self.value, self.flags))
    }
}

fn ensure_finite(value: f64, field: Field) -> Result<(), SliderConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SliderConfigError::NonFinite { field, value })
    }
}

/// Names a numeric configuration field in a [`SliderConfigError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// [`SliderRange::minimum_value`].
    MinimumValue,
    /// [`SliderRange::maximum_value`].
    MaximumValue,
    /// [`Limits::lower_limit`].
    LowerLimit,
    /// [`Limits::upper_limit`].
    UpperLimit,
    /// [`StepConfig::step`].
    Step,
    /// [`StepConfig::continuous_step`].
    ContinuousStep,
    /// [`StepConfig::snap_threshold`].
    SnapThreshold,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::MinimumValue => "minimum value",
            Self::MaximumValue => "maximum value",
            Self::LowerLimit => "lower limit",
            Self::UpperLimit => "upper limit",
            Self::Step => "step",
            Self::ContinuousStep => "continuous step",
            Self::SnapThreshold => "snap threshold",
        })
    }
}

/// Error returned by [`SliderConfig::validate`] for configuration the engine
/// cannot honor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderConfigError {
    /// A numeric field is NaN or infinite.
    NonFinite {
        /// The offending field.
        field: Field,
        /// Its value.
        value: f64,
    },
    /// `minimum_value > maximum_value`.
    InvertedRange {
        /// Configured minimum.
        minimum_value: f64,
        /// Configured maximum.
        maximum_value: f64,
    },
    /// `maximum_value - minimum_value` is not representable as a finite
    /// `f64`.
    SpanOverflow {
        /// Configured minimum.
        minimum_value: f64,
        /// Configured maximum.
        maximum_value: f64,
    },
    /// A limit lies outside the range.
    LimitOutOfRange {
        /// Which limit.
        field: Field,
        /// Its value.
        value: f64,
    },
    /// Resolved `lower_limit > upper_limit`.
    InvertedLimits {
        /// Resolved lower limit.
        lower_limit: f64,
        /// Resolved upper limit.
        upper_limit: f64,
    },
    /// `step < 0`.
    NegativeStep(f64),
    /// `step` is larger than the range span.
    StepExceedsRange {
        /// Configured step.
        step: f64,
        /// `maximum_value - minimum_value`.
        span: f64,
    },
    /// `continuous_step <= 0`.
    NonPositiveContinuousStep(f64),
    /// `snap_threshold < 0`.
    NegativeSnapThreshold(f64),
}

impl fmt::Display for SliderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field, value } => write!(f, "{field} must be finite, got {value}"),
            Self::InvertedRange {
                minimum_value,
                maximum_value,
            } => write!(
                f,
                "minimum value {minimum_value} is greater than maximum value {maximum_value}"
            ),
            Self::SpanOverflow {
                minimum_value,
                maximum_value,
            } => write!(
                f,
                "range {minimum_value}..{maximum_value} is too wide to represent its span"
            ),
            Self::LimitOutOfRange { field, value } => {
                write!(f, "{field} {value} lies outside the slider range")
            }
            Self::InvertedLimits {
                lower_limit,
                upper_limit,
            } => write!(
                f,
                "lower limit {lower_limit} is greater than upper limit {upper_limit}"
            ),
            Self::NegativeStep(step) => write!(f, "step must not be negative, got {step}"),
            Self::StepExceedsRange { step, span } => {
                write!(f, "step {step} exceeds the range span {span}")
            }
            Self::NonPositiveContinuousStep(step) => {
                write!(f, "continuous step must be positive, got {step}")
            }
            Self::NegativeSnapThreshold(threshold) => {
                write!(f, "snap threshold must not be negative, got {threshold}")
            }
        }
    }
}

impl core::error::Error for SliderConfigError {}
