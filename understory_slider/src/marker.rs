// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Step markers: one entry per point of the step grid.
//!
//! The engine only knows how many grid points exist and which one the
//! current value sits nearest to. How a marker looks is up to the caller,
//! either by iterating [`StepMarkers`] or by handing a [`StepMarkerRenderer`]
//! to [`ValueEngine::render_step_markers`].
//!
//! ```
//! use understory_slider::{SliderConfig, SliderRange, StepMarker};
//!
//! let engine = SliderConfig::default()
//!     .with_range(SliderRange::new(0.0, 4.0))
//!     .with_step(1.0)
//!     .validate()
//!     .unwrap();
//!
//! let mut labels = Vec::new();
//! engine.render_step_markers(2.0, &mut |m: &StepMarker| {
//!     labels.push(if m.step_marked { '|' } else { '.' });
//! });
//! assert_eq!(labels, ['.', '.', '|', '.', '.']);
//! ```

use core::ops::RangeInclusive;

use crate::engine::ValueEngine;

/// Everything a marker renderer needs for one grid index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepMarker {
    /// `true` for the grid point nearest the current value.
    pub step_marked: bool,
    /// The slider's current value.
    pub current_value: f64,
    /// Grid index, starting at `0` for the range minimum.
    pub index: usize,
    /// Range minimum.
    pub min: f64,
    /// Range maximum.
    pub max: f64,
}

/// Strategy invoked once per step marker.
pub trait StepMarkerRenderer {
    /// Renders a single marker.
    fn render_marker(&mut self, marker: &StepMarker);
}

impl<F> StepMarkerRenderer for F
where
    F: FnMut(&StepMarker),
{
    fn render_marker(&mut self, marker: &StepMarker) {
        self(marker);
    }
}

/// Iterator over the step markers of a [`ValueEngine`].
#[derive(Clone, Debug)]
pub struct StepMarkers {
    engine: ValueEngine,
    current_value: f64,
    indices: RangeInclusive<usize>,
}

impl StepMarkers {
    pub(crate) fn new(engine: &ValueEngine, current_value: f64) -> Self {
        let mut indices = 0..=engine.step_count();
        if !engine.snap_applies() {
            // Exhaust the range so a continuous slider draws no markers.
            indices.next();
        }
        Self {
            engine: *engine,
            current_value,
            indices,
        }
    }
}

impl Iterator for StepMarkers {
    type Item = StepMarker;

    fn next(&mut self) -> Option<StepMarker> {
        let index = self.indices.next()?;
        Some(self.engine.step_marker(index, self.current_value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl DoubleEndedIterator for StepMarkers {
    fn next_back(&mut self) -> Option<StepMarker> {
        let index = self.indices.next_back()?;
        Some(self.engine.step_marker(index, self.current_value))
    }
}
