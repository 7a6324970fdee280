// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: a headless value model for draggable range controls.
//!
//! This crate turns a position along a slider track into the value the
//! slider reports. It focuses on:
//! - Mapping a fractional track position onto a value range.
//! - Clamping into optional lower/upper limits.
//! - Quantizing onto a step grid, either immediately or deferred until
//!   release with a snap threshold.
//! - Tracking a drag session (start, move, release, cancel) and reporting
//!   sliding-start / value-change / sliding-complete notifications.
//!
//! It does **not** render anything or recognize gestures. Callers are
//! expected to:
//! - Draw the track, thumb and step markers themselves, using
//!   [`Slider::thumb_position`] and [`ValueEngine::step_markers`].
//! - Route pointer input to the slider and call the matching transition
//!   ([`Slider::begin_drag`], [`Slider::drag_to`], [`Slider::release`],
//!   [`Slider::cancel`]).
//! - Forward the returned [`SliderEvent`]s to whatever callbacks the
//!   application exposes, for example through a [`SliderListener`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_slider::{
//!     Orientation, SliderConfig, SliderEvent, SliderRange, Track,
//! };
//!
//! let mut slider = SliderConfig::default()
//!     .with_range(SliderRange::new(0.0, 100.0))
//!     .with_step(25.0)
//!     .with_value(50.0)
//!     .build()
//!     .unwrap();
//! let track = Track::from_rect(Rect::new(0.0, 0.0, 200.0, 24.0), Orientation::Horizontal);
//!
//! slider.begin_drag();
//! let events = slider.drag_to_point(&track, Point::new(160.0, 12.0));
//! assert_eq!(events.as_slice(), &[SliderEvent::ValueChange(75.0)]);
//!
//! let events = slider.release_at(&track, Point::new(160.0, 12.0));
//! assert_eq!(events.as_slice(), &[SliderEvent::SlidingComplete(75.0)]);
//! ```
//!
//! ## Deferred snapping
//!
//! With [`StepConfig::disable_snap`] the thumb moves on the fine
//! [`StepConfig::continuous_step`] grid while dragging. On release the value
//! snaps to the nearest step only if it lies within
//! [`StepConfig::snap_threshold`]; without a threshold it never snaps.
//!
//! ```rust
//! use understory_slider::{SliderConfig, SliderRange};
//!
//! let engine = SliderConfig::default()
//!     .with_range(SliderRange::new(0.0, 100.0))
//!     .with_step(25.0)
//!     .with_deferred_snap(0.0001, Some(5.0))
//!     .validate()
//!     .unwrap();
//!
//! assert_eq!(engine.final_value(0.21), 25.0);
//! assert!((engine.final_value(0.19) - 19.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - [`ValueEngine`] is `Copy` and pure; it can be shared across threads
//!   and independent sliders freely.
//! - Configuration is validated once by [`SliderConfig::validate`]; the
//!   per-tick operations never fail and clamp malformed positions (NaN,
//!   infinities) to the nearest limit.
//! - Grid indices round half up.
//! - Cancelling a drag restores the start value without a completion
//!   notification.
//!
//! ## Features
//!
//! - `std` (default): build against the standard library.
//! - `libm`: `no_std` float math through Kurbo.
//! - `tracing`: emit `tracing` events on drag session transitions.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod engine;
mod marker;
mod slider;
mod track;

pub use config::{
    DEFAULT_CONTINUOUS_STEP, Field, Limits, SliderConfig, SliderConfigError, SliderFlags,
    SliderRange, StepConfig,
};
pub use engine::ValueEngine;
pub use marker::{StepMarker, StepMarkerRenderer, StepMarkers};
pub use slider::{
    DragSession, Slider, SliderDebugInfo, SliderEvent, SliderEvents, SliderListener, dispatch,
};
pub use track::{Orientation, Track};
