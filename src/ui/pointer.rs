//! Reactive wrapper around [`PointerTracker`]
//!
//! [`use_pointer_tracker`] owns one tracker per component instance, schedules
//! at most one animation frame at a time and publishes the coalesced state
//! through a signal. The pending frame is cancelled when the owner is cleaned up.

use leptos::prelude::*;

use crate::core::geometry::GeometryProvider;
use crate::core::pointer::{PointerState, PointerTracker, TrackerVariant};

#[derive(Clone, Copy)]
pub struct PointerHandle {
    variant: TrackerVariant,
    tracker: StoredValue<PointerTracker>,
    #[cfg(not(feature = "ssr"))]
    frame: StoredValue<Option<AnimationFrameRequestHandle>>,
    state: RwSignal<PointerState>,
}

impl PointerHandle {
    /// Last published state
    pub fn state(&self) -> PointerState {
        self.state.get()
    }

    /// CSS `transform` for tilt and magnetic trackers
    pub fn transform(&self) -> String {
        self.variant
            .transform_css(&self.state.get())
            .unwrap_or_default()
    }

    pub fn pointer_moved(&self, geometry: &impl GeometryProvider, x: f64, y: f64) {
        let needs_frame = self
            .tracker
            .try_update_value(|tracker| tracker.on_move(geometry, x, y))
            .unwrap_or(false);
        if needs_frame {
            self.request_frame();
        }
    }

    pub fn pointer_left(&self) {
        if let Some(Some(state)) = self.tracker.try_update_value(|tracker| tracker.on_leave()) {
            self.cancel_frame();
            self.state.set(state);
        }
    }

    fn request_frame(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            let handle = *self;
            match request_animation_frame_with_handle(move || handle.flush()) {
                Ok(frame) => self.frame.set_value(Some(frame)),
                Err(err) => {
                    leptos::logging::debug_warn!("requestAnimationFrame failed: {err:?}");
                    self.flush();
                }
            }
        }
        #[cfg(feature = "ssr")]
        self.flush();
    }

    fn flush(&self) {
        #[cfg(not(feature = "ssr"))]
        self.frame.try_set_value(None);
        if let Some(Some(state)) = self.tracker.try_update_value(|tracker| tracker.on_frame()) {
            self.state.set(state);
        }
    }

    fn cancel_frame(&self) {
        #[cfg(not(feature = "ssr"))]
        if let Some(Some(frame)) = self.frame.try_update_value(Option::take) {
            frame.cancel();
        }
    }

    fn teardown(&self) {
        self.tracker.try_update_value(|tracker| tracker.cancel());
        self.cancel_frame();
    }
}

/// Create a tracker bound to the current reactive owner
pub fn use_pointer_tracker(tracker: PointerTracker) -> PointerHandle {
    let handle = PointerHandle {
        variant: tracker.variant(),
        state: RwSignal::new(tracker.state()),
        tracker: StoredValue::new(tracker),
        #[cfg(not(feature = "ssr"))]
        frame: StoredValue::new(None),
    };
    on_cleanup(move || handle.teardown());
    handle
}

#[cfg(not(feature = "ssr"))]
impl PointerHandle {
    /// Feed a DOM pointer event measured against `element`
    pub fn track_event(&self, element: &leptos::web_sys::Element, ev: &leptos::web_sys::PointerEvent) {
        self.pointer_moved(element, ev.client_x() as f64, ev.client_y() as f64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Rect;
    use crate::core::pointer::{PointerSample, TiltAngles};

    // Without a browser frames flush synchronously, so each move publishes at once.

    #[test]
    fn test_move_publishes_through_signal() {
        let owner = Owner::new();
        owner.with(|| {
            let pointer = use_pointer_tracker(PointerTracker::tilt());
            let rect = Rect::new(0.0, 0.0, 100.0, 100.0);

            assert_eq!(pointer.transform(), TiltAngles::NEUTRAL.css());
            pointer.pointer_moved(&rect, 100.0, 50.0);

            let state = pointer.state.get_untracked();
            assert!(state.active);
            assert_eq!(state.sample(), PointerSample::new(100.0, 50.0));
            assert_eq!(
                pointer.variant.transform_css(&state).as_deref(),
                Some("perspective(900px) rotateX(0.000deg) rotateY(4.000deg)")
            );
        });
    }

    #[test]
    fn test_leave_resets_tilt() {
        let owner = Owner::new();
        owner.with(|| {
            let pointer = use_pointer_tracker(PointerTracker::tilt());
            let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
            pointer.pointer_moved(&rect, 10.0, 10.0);
            pointer.pointer_left();

            let state = pointer.state.get_untracked();
            assert!(!state.active);
            assert_eq!(state.tilt_angles(4.0), TiltAngles::NEUTRAL);
        });
    }

    #[test]
    fn test_glow_ignores_leave() {
        let owner = Owner::new();
        owner.with(|| {
            let pointer = use_pointer_tracker(PointerTracker::glow());
            let rect = Rect::new(0.0, 0.0, 200.0, 200.0);
            pointer.pointer_moved(&rect, 50.0, 150.0);
            let before = pointer.state.get_untracked();
            pointer.pointer_left();
            assert_eq!(pointer.state.get_untracked(), before);
            assert_eq!(before.sample(), PointerSample::new(25.0, 75.0));
        });
    }

    #[test]
    fn test_handle_is_inert_after_cleanup() {
        let owner = Owner::new();
        let pointer = owner.with(|| use_pointer_tracker(PointerTracker::magnetic(10.0)));
        owner.cleanup();

        // Stored values are gone; events after unmount are dropped silently
        pointer.pointer_moved(&Rect::new(0.0, 0.0, 10.0, 10.0), 5.0, 5.0);
        pointer.pointer_left();
    }

    #[test]
    fn test_owner_cleanup_cancels_pending_sample() {
        use std::sync::{Arc, Mutex};

        let owner = Owner::new();
        let pending_at_cleanup = Arc::new(Mutex::new(None));
        let pointer = owner.with(|| {
            let pointer = use_pointer_tracker(PointerTracker::tilt());
            // offered but not flushed, as between a move and its animation frame
            let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
            let offered = pointer
                .tracker
                .try_update_value(|tracker| tracker.on_move(&rect, 30.0, 30.0));
            assert_eq!(offered, Some(true));

            // cleanups run in registration order, after the handle's teardown
            let pending_at_cleanup = Arc::clone(&pending_at_cleanup);
            on_cleanup(move || {
                *pending_at_cleanup.lock().unwrap() =
                    pointer.tracker.try_with_value(PointerTracker::is_frame_pending);
            });
            pointer
        });

        owner.cleanup();
        assert_eq!(*pending_at_cleanup.lock().unwrap(), Some(false));
        assert_eq!(pointer.tracker.try_with_value(PointerTracker::is_frame_pending), None);
        assert!(!pointer.state.try_get_untracked().is_some_and(|state| state.active));
    }
}
