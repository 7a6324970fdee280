// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider handle: the current value plus the drag session state machine.
//!
//! ## Usage
//!
//! 1) Build a [`Slider`] from a [`SliderConfig`](crate::SliderConfig).
//! 2) On gesture start call [`Slider::begin_drag`]; this captures the start
//!    value and reports [`SliderEvent::SlidingStart`].
//! 3) On each move call [`Slider::drag_to`] with the raw track fraction (or
//!    one of the pointer-level helpers); changed values are reported as
//!    [`SliderEvent::ValueChange`].
//! 4) On release call [`Slider::release`]; the settled value is reported as
//!    [`SliderEvent::SlidingComplete`].
//! 5) On cancel call [`Slider::cancel`]; the value reverts to the start
//!    value and no completion is reported.
//!
//! Every transition returns the [`SliderEvents`] it produced. Feed them to a
//! [`SliderListener`] with [`dispatch`] or match on them directly.
//!
//! ## Minimal example
//!
//! ```
//! use understory_slider::{SliderConfig, SliderEvent, SliderRange};
//!
//! let mut slider = SliderConfig::default()
//!     .with_range(SliderRange::new(0.0, 10.0))
//!     .with_step(1.0)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(slider.begin_drag().as_slice(), &[SliderEvent::SlidingStart(0.0)]);
//! assert_eq!(slider.drag_to(0.42).as_slice(), &[SliderEvent::ValueChange(4.0)]);
//! // Same grid point: nothing to report.
//! assert!(slider.drag_to(0.38).is_empty());
//! assert_eq!(slider.release(0.38).as_slice(), &[SliderEvent::SlidingComplete(4.0)]);
//! assert_eq!(slider.value(), 4.0);
//! ```

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

use crate::config::SliderFlags;
use crate::engine::ValueEngine;
use crate::track::Track;

/// Notification produced by a slider transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SliderEvent {
    /// The user picked up the thumb; carries the pre-drag value.
    SlidingStart(f64),
    /// The reported value changed.
    ValueChange(f64),
    /// The user released the thumb; carries the settled value.
    SlidingComplete(f64),
}

impl SliderEvent {
    /// Value carried by the event.
    #[must_use]
    pub fn value(&self) -> f64 {
        match *self {
            Self::SlidingStart(v) | Self::ValueChange(v) | Self::SlidingComplete(v) => v,
        }
    }

    /// Delivers this event to the matching listener method.
    pub fn dispatch<L>(&self, listener: &mut L)
    where
        L: SliderListener + ?Sized,
    {
        match *self {
            Self::SlidingStart(v) => listener.on_sliding_start(v),
            Self::ValueChange(v) => listener.on_value_change(v),
            Self::SlidingComplete(v) => listener.on_sliding_complete(v),
        }
    }
}

/// Events produced by one transition. A tap produces at most three.
pub type SliderEvents = SmallVec<[SliderEvent; 3]>;

/// Receiver for slider notifications. All methods default to no-ops.
pub trait SliderListener {
    /// Called once when a gesture starts, with the pre-drag value.
    fn on_sliding_start(&mut self, _value: f64) {}

    /// Called whenever the reported value changes.
    fn on_value_change(&mut self, _value: f64) {}

    /// Called once when a gesture is released, with the settled value.
    fn on_sliding_complete(&mut self, _value: f64) {}
}

/// Delivers `events` to `listener` in order.
pub fn dispatch<L>(events: &[SliderEvent], listener: &mut L)
where
    L: SliderListener + ?Sized,
{
    for event in events {
        event.dispatch(listener);
    }
}

/// Context captured when a gesture starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Value when the gesture started; restored on cancel.
    pub start_value: f64,
    /// Whether positions are mirrored for this gesture.
    pub inverted: bool,
    /// Raw track fraction of the thumb when the gesture started.
    pub start_position: f64,
}

impl DragSession {
    /// Converts a raw track fraction into the engine's position.
    #[must_use]
    pub fn engine_position(&self, raw: f64) -> f64 {
        mirror(raw, self.inverted)
    }
}

/// A slider's current value, behavior flags and active drag session.
///
/// The value is only ever changed through the engine: drags report
/// [`ValueEngine::live_value`], releases [`ValueEngine::final_value`], and
/// [`set_value`](Self::set_value) applies [`ValueEngine::clamp_value`].
#[derive(Clone, Debug)]
pub struct Slider {
    engine: ValueEngine,
    value: f64,
    flags: SliderFlags,
    session: Option<DragSession>,
}

impl Slider {
    /// Creates an idle slider. `value` is clamped into the engine's limits.
    #[must_use]
    pub fn new(engine: ValueEngine, value: f64, flags: SliderFlags) -> Self {
        Self {
            value: engine.clamp_value(value),
            engine,
            flags,
            session: None,
        }
    }

    /// The value engine.
    #[must_use]
    pub fn engine(&self) -> &ValueEngine {
        &self.engine
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Behavior flags.
    #[must_use]
    pub fn flags(&self) -> SliderFlags {
        self.flags
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// The active drag session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Replaces the behavior flags.
    ///
    /// Disabling the slider mid-drag cancels the gesture; the returned events
    /// are those of [`cancel`](Self::cancel).
    pub fn set_flags(&mut self, flags: SliderFlags) -> SliderEvents {
        self.flags = flags;
        if flags.contains(SliderFlags::DISABLED) && self.session.is_some() {
            return self.cancel();
        }
        SliderEvents::new()
    }

    /// Imperatively sets the value, clamped into the limits.
    ///
    /// Returns `true` if the value changed. No notifications are produced;
    /// an active drag keeps its original start value.
    pub fn set_value(&mut self, value: f64) -> bool {
        let value = self.engine.clamp_value(value);
        if value == self.value {
            return false;
        }
        self.value = value;
        true
    }

    /// Raw track fraction at which the thumb should be drawn.
    #[must_use]
    pub fn thumb_position(&self) -> f64 {
        let inverted = self
            .session
            .map_or(self.inverted_by_flags(), |s| s.inverted);
        mirror(self.engine.position_of(self.value), inverted)
    }

    /// Starts a drag session from the current value.
    ///
    /// Ignored while a session is already active, so the original start
    /// value survives until the gesture ends.
    pub fn begin_drag(&mut self) -> SliderEvents {
        let mut events = SliderEvents::new();
        if self.flags.contains(SliderFlags::DISABLED) {
            #[cfg(feature = "tracing")]
            tracing::debug!(value = self.value, "slider disabled; ignoring drag start");
            return events;
        }
        if self.session.is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!(value = self.value, "drag already active; ignoring drag start");
            return events;
        }
        let inverted = self.inverted_by_flags();
        self.session = Some(DragSession {
            start_value: self.value,
            inverted,
            start_position: mirror(self.engine.position_of(self.value), inverted),
        });
        #[cfg(feature = "tracing")]
        tracing::trace!(start_value = self.value, inverted, "slider drag started");
        events.push(SliderEvent::SlidingStart(self.value));
        events
    }

    /// Moves the thumb to raw track fraction `p`.
    pub fn drag_to(&mut self, p: f64) -> SliderEvents {
        let mut events = SliderEvents::new();
        let Some(session) = self.session else {
            return events;
        };
        let value = self.engine.live_value(session.engine_position(p));
        self.update_value(value, &mut events);
        events
    }

    /// Moves the thumb under `pt` on `track`.
    pub fn drag_to_point(&mut self, track: &Track, pt: Point) -> SliderEvents {
        self.drag_to(track.fraction_at(pt))
    }

    /// Moves the thumb by `total_offset`, the pointer offset since the
    /// gesture started.
    ///
    /// This suits gestures that report relative movement rather than an
    /// absolute position.
    pub fn drag_by(&mut self, track: &Track, total_offset: Vec2) -> SliderEvents {
        let Some(session) = self.session else {
            return SliderEvents::new();
        };
        let p = (session.start_position + track.delta_fraction(total_offset)).clamp(0.0, 1.0);
        self.drag_to(p)
    }

    /// Ends the drag at raw track fraction `p` and settles the value.
    pub fn release(&mut self, p: f64) -> SliderEvents {
        let Some(session) = self.session else {
            return SliderEvents::new();
        };
        let value = self.engine.final_value(session.engine_position(p));
        self.complete(value)
    }

    /// Ends the drag at `pt` on `track`.
    pub fn release_at(&mut self, track: &Track, pt: Point) -> SliderEvents {
        self.release(track.fraction_at(pt))
    }

    /// Ends the drag where the thumb currently is.
    pub fn end_drag(&mut self) -> SliderEvents {
        if self.session.is_none() {
            return SliderEvents::new();
        }
        let value = self.engine.settle(self.value);
        self.complete(value)
    }

    /// Abandons the drag and restores the start value.
    ///
    /// A [`SliderEvent::ValueChange`] is reported if the value moves back;
    /// no [`SliderEvent::SlidingComplete`] is produced.
    pub fn cancel(&mut self) -> SliderEvents {
        let mut events = SliderEvents::new();
        let Some(session) = self.session.take() else {
            return events;
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(start_value = session.start_value, "slider drag cancelled");
        self.update_value(session.start_value, &mut events);
        events
    }

    /// Seeks to raw track fraction `p` as a single tap.
    ///
    /// Only honored with [`SliderFlags::TAP_TO_SEEK`], while enabled and idle.
    /// Produces a full start/change/complete cycle.
    pub fn tap(&mut self, p: f64) -> SliderEvents {
        let mut events = SliderEvents::new();
        if !self.flags.contains(SliderFlags::TAP_TO_SEEK)
            || self.flags.contains(SliderFlags::DISABLED)
            || self.session.is_some()
        {
            #[cfg(feature = "tracing")]
            tracing::debug!(flags = ?self.flags, "ignoring tap");
            return events;
        }
        let value = self
            .engine
            .final_value(mirror(p, self.inverted_by_flags()));
        events.push(SliderEvent::SlidingStart(self.value));
        self.update_value(value, &mut events);
        events.push(SliderEvent::SlidingComplete(value));
        events
    }

    /// Taps at `pt` on `track`.
    pub fn tap_at(&mut self, track: &Track, pt: Point) -> SliderEvents {
        self.tap(track.fraction_at(pt))
    }

    /// Snapshot of the slider state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SliderDebugInfo {
        SliderDebugInfo {
            value: self.value,
            lower_limit: self.engine.lower_limit(),
            upper_limit: self.engine.upper_limit(),
            step_index: self.engine.step_index(self.value),
            step_count: self.engine.step_count(),
            thumb_position: self.thumb_position(),
            flags: self.flags,
            session: self.session,
        }
    }

    fn complete(&mut self, value: f64) -> SliderEvents {
        let mut events = SliderEvents::new();
        self.session = None;
        self.update_value(value, &mut events);
        #[cfg(feature = "tracing")]
        tracing::trace!(value, "slider drag completed");
        events.push(SliderEvent::SlidingComplete(value));
        events
    }

    fn update_value(&mut self, value: f64, events: &mut SliderEvents) {
        if value != self.value {
            self.value = value;
            events.push(SliderEvent::ValueChange(value));
        }
    }

    fn inverted_by_flags(&self) -> bool {
        self.flags.contains(SliderFlags::INVERTED)
    }
}

/// Debug snapshot of a [`Slider`] state.
#[derive(Clone, Debug)]
pub struct SliderDebugInfo {
    /// Current value.
    pub value: f64,
    /// Resolved lower limit.
    pub lower_limit: f64,
    /// Resolved upper limit.
    pub upper_limit: f64,
    /// Index of the step nearest the value (`0` for continuous sliders).
    pub step_index: usize,
    /// Number of step intervals.
    pub step_count: usize,
    /// Raw track fraction of the thumb.
    pub thumb_position: f64,
    /// Behavior flags.
    pub flags: SliderFlags,
    /// Active drag session, if any.
    pub session: Option<DragSession>,
}

fn mirror(p: f64, inverted: bool) -> f64 {
    if inverted { 1.0 - p } else { p }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;
    use crate::config::{Limits, SliderConfig, SliderRange};
    use crate::track::Orientation;

    fn stepped(flags: SliderFlags) -> Slider {
        SliderConfig::default()
            .with_range(SliderRange::new(0.0, 100.0))
            .with_step(10.0)
            .with_value(50.0)
            .with_flags(flags)
            .build()
            .unwrap()
    }

    #[derive(Default)]
    struct Recorder(Vec<(&'static str, f64)>);

    impl SliderListener for Recorder {
        fn on_sliding_start(&mut self, value: f64) {
            self.0.push(("start", value));
        }

        fn on_value_change(&mut self, value: f64) {
            self.0.push(("change", value));
        }

        fn on_sliding_complete(&mut self, value: f64) {
            self.0.push(("complete", value));
        }
    }

    #[test]
    fn new_slider_is_idle() {
        let slider = stepped(SliderFlags::empty());
        assert!(!slider.is_dragging());
        assert!(slider.session().is_none());
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn begin_captures_start_value() {
        let mut slider = stepped(SliderFlags::empty());
        let events = slider.begin_drag();
        assert_eq!(events.as_slice(), &[SliderEvent::SlidingStart(50.0)]);
        let session = slider.session().copied().unwrap();
        assert_eq!(session.start_value, 50.0);
        assert!(!session.inverted);
        assert_eq!(session.start_position, 0.5);
    }

    #[test]
    fn repeated_begin_keeps_the_first_session() {
        let mut slider = stepped(SliderFlags::empty());
        let mut recorder = Recorder::default();

        dispatch(&slider.begin_drag(), &mut recorder);
        dispatch(&slider.drag_to(0.8), &mut recorder);
        assert!(slider.begin_drag().is_empty());
        assert_eq!(slider.session().map(|s| s.start_value), Some(50.0));
        dispatch(&slider.cancel(), &mut recorder);

        assert_eq!(recorder.0, [("start", 50.0), ("change", 80.0), ("change", 50.0)]);
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn full_gesture_reports_start_changes_and_complete() {
        let mut slider = stepped(SliderFlags::empty());
        let mut recorder = Recorder::default();

        dispatch(&slider.begin_drag(), &mut recorder);
        dispatch(&slider.drag_to(0.61), &mut recorder);
        dispatch(&slider.drag_to(0.62), &mut recorder);
        dispatch(&slider.drag_to(0.79), &mut recorder);
        dispatch(&slider.release(0.79), &mut recorder);

        assert_eq!(
            recorder.0,
            [
                ("start", 50.0),
                ("change", 60.0),
                ("change", 80.0),
                ("complete", 80.0)
            ]
        );
        assert!(!slider.is_dragging());
        assert_eq!(slider.value(), 80.0);
    }

    #[test]
    fn moves_without_session_are_ignored() {
        let mut slider = stepped(SliderFlags::empty());
        assert!(slider.drag_to(0.9).is_empty());
        assert!(slider.release(0.9).is_empty());
        assert!(slider.end_drag().is_empty());
        assert!(slider.cancel().is_empty());
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn cancel_reverts_without_completion() {
        let mut slider = stepped(SliderFlags::empty());
        slider.begin_drag();
        slider.drag_to(0.9);
        assert_eq!(slider.value(), 90.0);

        let events = slider.cancel();
        assert_eq!(events.as_slice(), &[SliderEvent::ValueChange(50.0)]);
        assert_eq!(slider.value(), 50.0);
        assert!(!slider.is_dragging());
    }

    #[test]
    fn cancel_without_movement_is_silent() {
        let mut slider = stepped(SliderFlags::empty());
        slider.begin_drag();
        assert!(slider.cancel().is_empty());
    }

    #[test]
    fn inverted_sessions_mirror_positions() {
        let mut slider = stepped(SliderFlags::INVERTED);
        slider.begin_drag();
        assert!(slider.session().unwrap().inverted);
        assert_eq!(slider.drag_to(0.2).as_slice(), &[SliderEvent::ValueChange(80.0)]);
        assert!((slider.thumb_position() - 0.2).abs() < 1e-12);
        assert_eq!(
            slider.release(1.0).as_slice(),
            &[
                SliderEvent::ValueChange(0.0),
                SliderEvent::SlidingComplete(0.0)
            ]
        );
    }

    #[test]
    fn disabled_slider_ignores_gestures_but_accepts_set_value() {
        let mut slider = stepped(SliderFlags::DISABLED | SliderFlags::TAP_TO_SEEK);
        assert!(slider.begin_drag().is_empty());
        assert!(slider.drag_to(0.9).is_empty());
        assert!(slider.tap(0.9).is_empty());
        assert_eq!(slider.value(), 50.0);

        assert!(slider.set_value(70.0));
        assert_eq!(slider.value(), 70.0);
    }

    #[test]
    fn disabling_mid_drag_cancels() {
        let mut slider = stepped(SliderFlags::empty());
        slider.begin_drag();
        slider.drag_to(0.3);
        let events = slider.set_flags(SliderFlags::DISABLED);
        assert_eq!(events.as_slice(), &[SliderEvent::ValueChange(50.0)]);
        assert!(!slider.is_dragging());
        assert!(slider.set_flags(SliderFlags::empty()).is_empty());
    }

    #[test]
    fn set_value_clamps_into_limits() {
        let mut slider = SliderConfig::default()
            .with_range(SliderRange::new(0.0, 100.0))
            .with_limits(Limits::new(10.0, 90.0))
            .with_step(25.0)
            .with_value(50.0)
            .build()
            .unwrap();

        assert!(slider.set_value(200.0));
        assert_eq!(slider.value(), 90.0);
        assert!(!slider.set_value(95.0));
        assert!(slider.set_value(f64::NAN));
        assert_eq!(slider.value(), 10.0);
        // Only clamped, never snapped.
        assert!(slider.set_value(33.3));
        assert_eq!(slider.value(), 33.3);
    }

    #[test]
    fn set_value_during_drag_keeps_start_value() {
        let mut slider = stepped(SliderFlags::empty());
        slider.begin_drag();
        slider.set_value(20.0);
        slider.drag_to(0.7);
        slider.cancel();
        assert_eq!(slider.value(), 50.0);
    }

    #[test]
    fn end_drag_settles_current_value() {
        let mut slider = SliderConfig::default()
            .with_range(SliderRange::new(0.0, 100.0))
            .with_step(25.0)
            .with_deferred_snap(0.0001, Some(5.0))
            .build()
            .unwrap();
        slider.begin_drag();
        slider.drag_to(0.22);
        assert!((slider.value() - 22.0).abs() < 1e-9);
        assert_eq!(
            slider.end_drag().as_slice(),
            &[
                SliderEvent::ValueChange(25.0),
                SliderEvent::SlidingComplete(25.0)
            ]
        );
    }

    #[test]
    fn tap_to_seek_runs_a_full_cycle() {
        let mut slider = stepped(SliderFlags::TAP_TO_SEEK);
        assert_eq!(
            slider.tap(0.33).as_slice(),
            &[
                SliderEvent::SlidingStart(50.0),
                SliderEvent::ValueChange(30.0),
                SliderEvent::SlidingComplete(30.0)
            ]
        );
        assert!(!slider.is_dragging());

        let mut plain = stepped(SliderFlags::empty());
        assert!(plain.tap(0.33).is_empty());
        assert_eq!(plain.value(), 50.0);
    }

    #[test]
    fn tap_on_current_value_omits_change() {
        let mut slider = stepped(SliderFlags::TAP_TO_SEEK);
        assert_eq!(
            slider.tap(0.5).as_slice(),
            &[
                SliderEvent::SlidingStart(50.0),
                SliderEvent::SlidingComplete(50.0)
            ]
        );
    }

    #[test]
    fn pointer_helpers_use_track_geometry() {
        let track = Track::new(0.0..200.0, Orientation::Horizontal);
        let mut slider = stepped(SliderFlags::empty());
        slider.begin_drag();
        assert_eq!(
            slider.drag_to_point(&track, Point::new(40.0, 3.0)).as_slice(),
            &[SliderEvent::ValueChange(20.0)]
        );
        // Relative movement is measured from the thumb at gesture start (50).
        assert_eq!(
            slider.drag_by(&track, Vec2::new(60.0, 0.0)).as_slice(),
            &[SliderEvent::ValueChange(80.0)]
        );
        assert_eq!(
            slider.drag_by(&track, Vec2::new(500.0, 0.0)).as_slice(),
            &[SliderEvent::ValueChange(100.0)]
        );
        assert_eq!(
            slider.release_at(&track, Point::new(100.0, 0.0)).as_slice(),
            &[
                SliderEvent::ValueChange(50.0),
                SliderEvent::SlidingComplete(50.0)
            ]
        );
    }

    #[test]
    fn relative_drag_on_inverted_vertical_track() {
        let track = Track::new(0.0..100.0, Orientation::Vertical);
        let mut slider = stepped(SliderFlags::INVERTED | SliderFlags::VERTICAL);
        slider.begin_drag();
        // Moving up grows the raw fraction, which an inverted slider reads
        // as a smaller value.
        assert_eq!(
            slider.drag_by(&track, Vec2::new(0.0, -20.0)).as_slice(),
            &[SliderEvent::ValueChange(30.0)]
        );
    }

    #[test]
    fn event_value_and_dispatch() {
        let mut recorder = Recorder::default();
        for event in [
            SliderEvent::SlidingStart(1.0),
            SliderEvent::ValueChange(2.0),
            SliderEvent::SlidingComplete(3.0),
        ] {
            event.dispatch(&mut recorder);
            assert_eq!(recorder.0.last().map(|e| e.1), Some(event.value()));
        }
    }

    #[test]
    fn listener_defaults_are_no_ops() {
        struct Silent;
        impl SliderListener for Silent {}

        let mut slider = stepped(SliderFlags::empty());
        let mut events = slider.begin_drag();
        events.extend(slider.release(0.1));
        dispatch(&events, &mut Silent);
        assert_eq!(slider.value(), 10.0);
    }

    #[test]
    fn debug_info_snapshot() {
        let mut slider = stepped(SliderFlags::INVERTED);
        let info = slider.debug_info();
        assert_eq!(info.value, 50.0);
        assert_eq!(info.lower_limit, 0.0);
        assert_eq!(info.upper_limit, 100.0);
        assert_eq!(info.step_index, 5);
        assert_eq!(info.step_count, 10);
        assert_eq!(info.thumb_position, 0.5);
        assert_eq!(info.flags, SliderFlags::INVERTED);
        assert!(info.session.is_none());

        slider.begin_drag();
        slider.drag_to(0.1);
        let info = slider.debug_info();
        assert_eq!(info.value, 90.0);
        assert_eq!(info.step_index, 9);
        assert!((info.thumb_position - 0.1).abs() < 1e-12);
        assert_eq!(info.session.map(|s| s.start_value), Some(50.0));
    }
}
