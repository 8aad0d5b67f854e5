//! Pointer events, normalization and the shared drag/capture state machine.
//!
//! Every mode resolves pointer and pinch input through [`DragState`]: at most
//! one target is captured at a time, a pointer-down wins over a pinch that
//! would start in the same frame, and releasing a pinch only drops the capture
//! when no pointer button is held.

use crate::gesture::PinchState;
use glam::DVec2;

/// Logical drawing size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height, 1.0 for a degenerate viewport.
    pub fn aspect(&self) -> f64 {
        if self.width > 0.0 && self.height > 0.0 {
            self.width / self.height
        } else {
            1.0
        }
    }

    #[inline]
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Canvas bounding rectangle in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// A pointer position as delivered by the host: client coordinates plus the
/// canvas rectangle they are relative to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
    pub rect: CanvasRect,
}

impl PointerSample {
    pub fn new(client_x: f64, client_y: f64, rect: CanvasRect) -> Self {
        Self {
            client_x,
            client_y,
            rect,
        }
    }

    /// Position in canvas pixels.
    #[inline]
    pub fn local_px(&self) -> DVec2 {
        DVec2::new(
            self.client_x - self.rect.left,
            self.client_y - self.rect.top,
        )
    }

    /// Position in [0, 1] viewport units (not clamped; drags may leave the
    /// canvas). A zero-sized rect maps to the center.
    pub fn normalized(&self) -> DVec2 {
        if self.rect.width > 0.0 && self.rect.height > 0.0 {
            self.local_px() / DVec2::new(self.rect.width, self.rect.height)
        } else {
            DVec2::splat(0.5)
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.rect.width, self.rect.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    PointerDown(PointerSample),
    PointerMove(PointerSample),
    PointerUp,
    Wheel { delta_y: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragSource {
    Pointer,
    Pinch,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capture<T> {
    pub target: T,
    pub source: DragSource,
}

/// Capture state for one mode. `T` names the draggable things of that mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragState<T> {
    capture: Option<Capture<T>>,
    pointer_held: bool,
    was_pinching: bool,
}

impl<T> Default for DragState<T> {
    fn default() -> Self {
        Self {
            capture: None,
            pointer_held: false,
            was_pinching: false,
        }
    }
}

impl<T: Copy + PartialEq> DragState<T> {
    pub fn idle() -> Self {
        Self::default()
    }

    #[inline]
    pub fn target(&self) -> Option<T> {
        self.capture.map(|c| c.target)
    }

    #[inline]
    pub fn source(&self) -> Option<DragSource> {
        self.capture.map(|c| c.source)
    }

    #[inline]
    pub fn is_captured(&self, target: T) -> bool {
        self.target() == Some(target)
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.capture.is_some()
    }

    #[inline]
    pub fn pointer_held(&self) -> bool {
        self.pointer_held
    }

    /// Pointer pressed. Captures `pick` when nothing is captured yet and
    /// returns the target the pointer now drives.
    pub fn pointer_down(&mut self, pick: Option<T>) -> Option<T> {
        self.pointer_held = true;
        if self.capture.is_none() {
            self.capture = pick.map(|target| Capture {
                target,
                source: DragSource::Pointer,
            });
        }
        self.target()
    }

    /// Pointer moved. Returns the target to move, if the button is held.
    pub fn pointer_move(&self) -> Option<T> {
        if self.pointer_held {
            self.target()
        } else {
            None
        }
    }

    /// Pointer released: always ends the capture.
    pub fn pointer_up(&mut self) {
        self.pointer_held = false;
        if let Some(c) = self.capture.take() {
            log::debug!("[drag] released ({:?})", c.source);
        }
    }

    /// Feeds this frame's pinch. `pick` is consulted only on the frame the
    /// pinch begins and only while idle. Returns the target and the position
    /// it should move to.
    pub fn pinch(
        &mut self,
        pinch: Option<PinchState>,
        pick: impl FnOnce(DVec2) -> Option<T>,
    ) -> Option<(T, DVec2)> {
        let Some(p) = pinch.filter(|p| p.is_pinching) else {
            self.was_pinching = false;
            if !self.pointer_held {
                if let Some(c) = self.capture.take() {
                    log::debug!("[drag] released ({:?})", c.source);
                }
            }
            return None;
        };
        let began = !self.was_pinching;
        self.was_pinching = true;

        if self.capture.is_none() && began && !self.pointer_held {
            self.capture = pick(p.position()).map(|target| Capture {
                target,
                source: DragSource::Pinch,
            });
        }
        match self.capture {
            Some(c) if c.source == DragSource::Pointer && self.pointer_held => None,
            Some(c) => Some((c.target, p.position())),
            None => None,
        }
    }

    /// Drops any capture and forgets held buttons.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Nearest candidate strictly closer than `radius`, by `distance`.
pub fn nearest_within<T, I>(candidates: I, radius: f64, distance: impl Fn(DVec2) -> f64) -> Option<T>
where
    I: IntoIterator<Item = (T, DVec2)>,
{
    let mut best: Option<(T, f64)> = None;
    for (item, pos) in candidates {
        let d = distance(pos);
        if d < radius && best.as_ref().map_or(true, |(_, bd)| d < *bd) {
            best = Some((item, d));
        }
    }
    best.map(|(item, _)| item)
}

/// Euclidean `nearest_within` around `p`.
pub fn nearest_point<T, I>(candidates: I, p: DVec2, radius: f64) -> Option<T>
where
    I: IntoIterator<Item = (T, DVec2)>,
{
    nearest_within(candidates, radius, |q| q.distance(p))
}
