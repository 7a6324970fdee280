// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track geometry: map pointer coordinates onto a fractional track position.
//!
//! A [`Track`] is the 1D span, in view/device units, that the thumb travels
//! along. Horizontal tracks grow left-to-right along X; vertical tracks grow
//! bottom-to-top along Y, so that larger values sit higher on screen.
//!
//! The fraction produced here is the *raw* track position. Inversion is a
//! property of the drag session and is applied by [`Slider`](crate::Slider).
//!
//! ```
//! use kurbo::{Point, Rect};
//! use understory_slider::{Orientation, Track};
//!
//! let track = Track::from_rect(Rect::new(10.0, 0.0, 110.0, 20.0), Orientation::Horizontal);
//! assert_eq!(track.fraction_at(Point::new(35.0, 10.0)), 0.25);
//!
//! let track = Track::from_rect(Rect::new(0.0, 0.0, 20.0, 200.0), Orientation::Vertical);
//! assert_eq!(track.fraction_at(Point::new(10.0, 150.0)), 0.25);
//! ```

use core::ops::Range;

use kurbo::{Point, Rect, Vec2};

use crate::config::SliderFlags;

/// Direction in which a track grows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Left-to-right along X.
    #[default]
    Horizontal,
    /// Bottom-to-top along Y.
    Vertical,
}

impl Orientation {
    /// Orientation selected by [`SliderFlags::VERTICAL`].
    #[must_use]
    pub fn from_flags(flags: SliderFlags) -> Self {
        if flags.contains(SliderFlags::VERTICAL) {
            Self::Vertical
        } else {
            Self::Horizontal
        }
    }
}

/// 1D track span in view/device coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    span: Range<f64>,
    orientation: Orientation,
}

impl Track {
    /// Creates a track over `span` along the axis given by `orientation`.
    ///
    /// For vertical tracks `span.start` is the top edge and `span.end` the
    /// bottom edge, matching device Y.
    #[must_use]
    pub fn new(span: Range<f64>, orientation: Orientation) -> Self {
        Self { span, orientation }
    }

    /// Creates a track along the matching edge pair of `rect`.
    #[must_use]
    pub fn from_rect(rect: Rect, orientation: Orientation) -> Self {
        let span = match orientation {
            Orientation::Horizontal => rect.x0..rect.x1,
            Orientation::Vertical => rect.y0..rect.y1,
        };
        Self::new(span, orientation)
    }

    /// Returns the span in device coordinates.
    #[must_use]
    pub fn span(&self) -> Range<f64> {
        self.span.clone()
    }

    /// Returns the track orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Updates the span, for example after a layout pass.
    pub fn set_span(&mut self, span: Range<f64>) {
        self.span = span;
    }

    /// Track length in device units.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.span.end - self.span.start
    }

    /// Raw track fraction under `pt`, clamped to `[0, 1]`.
    ///
    /// Degenerate (zero or negative length) tracks always report `0`.
    #[must_use]
    pub fn fraction_at(&self, pt: Point) -> f64 {
        let len = self.length();
        if len <= 0.0 {
            return 0.0;
        }
        let along = match self.orientation {
            Orientation::Horizontal => pt.x - self.span.start,
            Orientation::Vertical => self.span.end - pt.y,
        };
        (along / len).clamp(0.0, 1.0)
    }

    /// Fractional change produced by a pointer movement of `delta`.
    ///
    /// The result is not clamped; add it to a session's start fraction and
    /// clamp afterwards.
    #[must_use]
    pub fn delta_fraction(&self, delta: Vec2) -> f64 {
        let len = self.length();
        if len <= 0.0 {
            return 0.0;
        }
        match self.orientation {
            Orientation::Horizontal => delta.x / len,
            Orientation::Vertical => -delta.y / len,
        }
    }

    /// Device coordinate along the track axis for raw fraction `p`.
    ///
    /// This is the inverse of [`fraction_at`](Self::fraction_at) and is
    /// typically used to place the thumb.
    #[must_use]
    pub fn coordinate_at(&self, p: f64) -> f64 {
        let p = p.clamp(0.0, 1.0);
        match self.orientation {
            Orientation::Horizontal => self.span.start + p * self.length(),
            Orientation::Vertical => self.span.end - p * self.length(),
        }
    }
}
