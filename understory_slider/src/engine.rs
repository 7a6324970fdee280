// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value engine: quantize a track position into a reported slider value.
//!
//! The engine is a pure function of its configuration and the fractional
//! track position `p`. Positions are expected in `[0, 1]` and already
//! inverted by the caller when the slider is inverted; anything else,
//! including NaN and infinities, is clamped to the nearest limit.
//!
//! ## Snapping modes
//!
//! - `step == 0`: values are continuous and never rounded.
//! - `disable_snap == false`: live and released values sit on the step grid
//!   `minimum_value + k * step`.
//! - `disable_snap == true`: live values sit on the finer
//!   `continuous_step` grid; on release the value snaps to the nearest step
//!   only when it lies within `snap_threshold` of it.
//!
//! Grid indices are rounded half up, so a position exactly between two grid
//! points reports the upper one.
//!
//! ```
//! use understory_slider::{SliderConfig, SliderRange};
//!
//! let engine = SliderConfig::default()
//!     .with_range(SliderRange::new(0.0, 100.0))
//!     .with_step(25.0)
//!     .with_deferred_snap(0.0001, Some(5.0))
//!     .validate()
//!     .unwrap();
//!
//! // Dragging moves freely...
//! assert!((engine.live_value(0.21) - 21.0).abs() < 1e-9);
//! // ...and releasing within the threshold snaps to the step.
//! assert_eq!(engine.final_value(0.21), 25.0);
//! // Outside the threshold the free value is kept.
//! assert!((engine.final_value(0.19) - 19.0).abs() < 1e-9);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::{SliderRange, StepConfig};
use crate::marker::{StepMarker, StepMarkerRenderer, StepMarkers};

/// Relative slack applied when comparing against the snap threshold, so that
/// grid arithmetic noise does not flip a boundary decision.
const THRESHOLD_SLACK: f64 = 1e-9;

/// Validated slider configuration with the quantization rules applied per
/// tick.
///
/// Obtain one from [`SliderConfig::validate`](crate::SliderConfig::validate).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueEngine {
    range: SliderRange,
    lower_limit: f64,
    upper_limit: f64,
    step: StepConfig,
}

impl ValueEngine {
    /// Assembles an engine from already validated parts.
    pub(crate) fn from_parts(
        range: SliderRange,
        lower_limit: f64,
        upper_limit: f64,
        step: StepConfig,
    ) -> Self {
        Self {
            range,
            lower_limit,
            upper_limit,
            step,
        }
    }

    /// The full value range.
    #[must_use]
    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// Resolved lower limit.
    #[must_use]
    pub fn lower_limit(&self) -> f64 {
        self.lower_limit
    }

    /// Resolved upper limit.
    #[must_use]
    pub fn upper_limit(&self) -> f64 {
        self.upper_limit
    }

    /// Step configuration.
    #[must_use]
    pub fn step_config(&self) -> StepConfig {
        self.step
    }

    /// Returns `true` when values are quantized at all (`step > 0`).
    #[must_use]
    pub fn snap_applies(&self) -> bool {
        self.step.step > 0.0
    }

    /// Clamps `value` into the limits. NaN maps to the lower limit.
    ///
    /// This is the last step of [`final_value`](Self::final_value) and the
    /// only transformation applied to imperatively set values.
    #[must_use]
    pub fn clamp_value(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.lower_limit;
        }
        value.clamp(self.lower_limit, self.upper_limit)
    }

    /// Value reported while dragging at track position `p`.
    #[must_use]
    pub fn live_value(&self, p: f64) -> f64 {
        let clamped = self.clamp_value(self.raw_value(p));
        if !self.snap_applies() {
            return clamped;
        }
        let grid = if self.step.disable_snap {
            self.step.continuous_step
        } else {
            self.step.step
        };
        self.quantize(clamped, grid)
    }

    /// Value settled on when the gesture is released at track position `p`.
    #[must_use]
    pub fn final_value(&self, p: f64) -> f64 {
        self.settle(self.live_value(p))
    }

    /// Applies the release-time snap decision to a value.
    ///
    /// [`final_value`](Self::final_value) is `settle(live_value(p))`.
    #[must_use]
    pub fn settle(&self, value: f64) -> f64 {
        let value = self.clamp_value(value);
        if !self.snap_applies() {
            return value;
        }
        if !self.step.disable_snap {
            return self.quantize(value, self.step.step);
        }
        let Some(threshold) = self.step.snap_threshold else {
            return value;
        };
        let Some(nearest) = self.nearest_step_value(value) else {
            return value;
        };
        let slack = THRESHOLD_SLACK * self.range.span().max(1.0);
        if (value - nearest).abs() <= threshold + slack {
            nearest
        } else {
            value
        }
    }

    /// Nearest point of the step grid to `value` that lies inside the limits.
    ///
    /// Returns `None` when `step == 0` or when no grid point falls between
    /// the limits.
    #[must_use]
    pub fn nearest_step_value(&self, value: f64) -> Option<f64> {
        if !self.snap_applies() {
            return None;
        }
        let min = self.range.minimum_value;
        let step = self.step.step;
        let first = ((self.lower_limit - min) / step - THRESHOLD_SLACK).ceil();
        let last = ((self.upper_limit - min) / step + THRESHOLD_SLACK).floor();
        if first > last {
            return None;
        }
        let index = round_half_up((self.clamp_value(value) - min) / step).clamp(first, last);
        Some(self.clamp_value(min + index * step))
    }

    /// Grid index of the step nearest to `value`, in `0..=step_count()`.
    #[must_use]
    pub fn step_index(&self, value: f64) -> usize {
        if !self.snap_applies() {
            return 0;
        }
        let offset = (self.clamp_value(value) - self.range.minimum_value) / self.step.step;
        to_index(round_half_up(offset)).min(self.step_count())
    }

    /// Number of whole step intervals in the range; `0` when `step == 0`.
    ///
    /// Step markers are drawn at indices `0..=step_count()`.
    #[must_use]
    pub fn step_count(&self) -> usize {
        if !self.snap_applies() {
            return 0;
        }
        let intervals = self.range.span() / self.step.step;
        to_index((intervals + THRESHOLD_SLACK).floor())
    }

    /// Value of the step grid point at `index`, without clamping.
    #[must_use]
    pub fn step_value(&self, index: usize) -> f64 {
        self.range.minimum_value + index as f64 * self.step.step
    }

    /// Fractional track position of `value`, the inverse of the linear
    /// mapping used by [`live_value`](Self::live_value).
    ///
    /// Useful for placing the thumb. A zero-length range maps to `0`.
    #[must_use]
    pub fn position_of(&self, value: f64) -> f64 {
        let span = self.range.span();
        if span <= 0.0 {
            return 0.0;
        }
        (self.clamp_value(value) - self.range.minimum_value) / span
    }

    /// Iterates over the step markers for the given current value.
    ///
    /// Yields nothing when `step == 0`.
    #[must_use]
    pub fn step_markers(&self, current_value: f64) -> StepMarkers {
        StepMarkers::new(self, current_value)
    }

    /// Drives `renderer` once per step marker.
    pub fn render_step_markers<R>(&self, current_value: f64, renderer: &mut R)
    where
        R: StepMarkerRenderer + ?Sized,
    {
        for marker in self.step_markers(current_value) {
            renderer.render_marker(&marker);
        }
    }

    /// Marker for a single grid index.
    #[must_use]
    pub fn step_marker(&self, index: usize, current_value: f64) -> StepMarker {
        StepMarker {
            step_marked: self.snap_applies() && self.step_index(current_value) == index,
            current_value,
            index,
            min: self.range.minimum_value,
            max: self.range.maximum_value,
        }
    }

    fn raw_value(&self, p: f64) -> f64 {
        self.range.minimum_value + p * self.range.span()
    }

    fn quantize(&self, value: f64, grid: f64) -> f64 {
        let min = self.range.minimum_value;
        let index = round_half_up((value - min) / grid);
        self.clamp_value(min + index * grid)
    }
}

fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}

fn to_index(x: f64) -> usize {
    if x <= 0.0 {
        return 0;
    }
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Saturating float-to-int cast; callers clamp to the marker count"
    )]
    {
        x as usize
    }
}
