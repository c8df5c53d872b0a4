//! Layout state and display mode.
//!
//! `LayoutState` owns the terminal center point. It is mutated only through
//! [`LayoutState::recompute`], which the event loop calls at startup and on
//! every resize notification.

use crate::types::{CenterPoint, ColorIndex, Viewport};

/// Terminal geometry tracked between frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutState {
    viewport: Viewport,
    center: CenterPoint,
}

impl LayoutState {
    pub fn new(viewport: Viewport) -> Self {
        let mut layout = Self::default();
        layout.recompute(viewport);
        layout
    }

    /// Store the new dimensions and return the recomputed center point.
    pub fn recompute(&mut self, viewport: Viewport) -> CenterPoint {
        self.viewport = viewport;
        self.center = CenterPoint::of(viewport);
        self.center
    }

    pub fn center(&self) -> CenterPoint {
        self.center
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}

/// Toggleable visual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    pub date_visible: bool,
    pub color: ColorIndex,
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self {
            date_visible: true,
            color: ColorIndex::default(),
        }
    }
}

impl DisplayMode {
    /// Flip date visibility, returning the new value.
    pub fn toggle_date(&mut self) -> bool {
        self.date_visible = !self.date_visible;
        self.date_visible
    }

    /// Advance to the next color pair, returning it.
    pub fn cycle_color(&mut self) -> ColorIndex {
        self.color = self.color.next();
        self.color
    }
}
