//! The clock's event loop.
//!
//! One thread of control owns the surface, the layout and the display mode.
//! Each iteration samples the time, composes a frame, then waits up to the
//! refresh cadence for a key or resize. Structural changes (resize, manual
//! redraw, date toggle) clear the screen and redraw the border before the
//! next frame is composed.

use std::time::Duration;

use anyhow::Result;
use log::{debug, info};

use crate::config::ClockConfig;
use crate::core::{
    format_date, format_time, ClockText, DisplayMode, HourFormat, LayoutState, TimeSource,
};
use crate::input::EventSource;
use crate::term::{FrameCompositor, Surface};
use crate::types::{CenterPoint, ClockAction, ClockEvent};

/// What the loop should do after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Clock<S, T> {
    surface: S,
    time: T,
    view: FrameCompositor,
    layout: LayoutState,
    mode: DisplayMode,
    hours: HourFormat,
    refresh: Duration,
    time_text: ClockText,
    date_text: ClockText,
    last_day: Option<u32>,
}

impl<S: Surface, T: TimeSource> Clock<S, T> {
    pub fn new(surface: S, time: T, config: &ClockConfig) -> Self {
        Self {
            surface,
            time,
            view: FrameCompositor::new(config.charset, config.colors_enabled),
            layout: LayoutState::default(),
            mode: DisplayMode {
                date_visible: config.show_date,
                color: config.start_color,
            },
            hours: config.hours,
            refresh: config.refresh(),
            time_text: ClockText::new(),
            date_text: ClockText::new(),
            last_day: None,
        }
    }

    /// Run until `q`. Terminal restoration is the caller's job.
    pub fn run<E: EventSource>(&mut self, events: &mut E) -> Result<()> {
        self.start()?;
        loop {
            self.tick()?;
            let Some(event) = events.next_event(self.refresh)? else {
                continue;
            };
            if self.handle_event(event)? == Flow::Quit {
                info!("quit requested");
                return Ok(());
            }
        }
    }

    /// Initial layout and static frame.
    pub fn start(&mut self) -> Result<()> {
        let center = self.handle_resize()?;
        info!(
            "clock started: viewport {:?}, center {:?}, refresh {:?}",
            self.layout.viewport(),
            center,
            self.refresh
        );
        Ok(())
    }

    /// Sample the time and draw one frame.
    pub fn tick(&mut self) -> Result<()> {
        let now = self.time.now();
        format_time(&now, self.hours, &mut self.time_text)?;
        if self.last_day != Some(now.day_of_year) {
            format_date(&now, &mut self.date_text)?;
            self.last_day = Some(now.day_of_year);
            debug!("date changed to {}", self.date_text);
        }

        self.view.compose(
            &mut self.surface,
            self.time_text.as_str(),
            Some(self.date_text.as_str()),
            &self.mode,
            self.layout.center(),
        )?;
        self.surface.flush()
    }

    pub fn handle_event(&mut self, event: ClockEvent) -> Result<Flow> {
        match event {
            ClockEvent::Action(ClockAction::Quit) => return Ok(Flow::Quit),
            ClockEvent::Resize | ClockEvent::Action(ClockAction::Redraw) => {
                self.handle_resize()?;
            }
            ClockEvent::Action(ClockAction::ToggleDate) => {
                let visible = self.mode.toggle_date();
                debug!("date visible: {}", visible);
                self.surface.clear()?;
                self.view.redraw_static(&mut self.surface, &self.mode)?;
            }
            ClockEvent::Action(ClockAction::CycleColor) => {
                let color = self.mode.cycle_color();
                debug!("color pair: {}", color.get());
                self.view.redraw_static(&mut self.surface, &self.mode)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Re-query the surface size, recompute the center and redraw the
    /// static frame from a cleared screen.
    pub fn handle_resize(&mut self) -> Result<CenterPoint> {
        let viewport = self.surface.size()?;
        let center = self.layout.recompute(viewport);
        debug!("layout recomputed: {:?} -> center {:?}", viewport, center);

        self.surface.clear()?;
        self.view.redraw_static(&mut self.surface, &self.mode)?;
        self.surface.flush()?;
        Ok(center)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    pub fn mode(&self) -> &DisplayMode {
        &self.mode
    }

    pub fn time_text(&self) -> &str {
        &self.time_text
    }

    pub fn date_text(&self) -> &str {
        &self.date_text
    }
}
