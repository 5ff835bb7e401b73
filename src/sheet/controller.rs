//! Sheet controller: one owner for position, overlay, header, and tabs
//!
//! The controller wires the pieces together and enforces the cross-cutting
//! rules: every route into collapse clears the tabs synchronously, the
//! overlay fade starts at the same instant as the position transition, and
//! tab toggles only apply while the sheet is expanded. Hosts feed it gesture
//! samples and frame ticks; everything it exposes back is a plain value.

use std::time::Duration;

use crate::config::SheetConfig;
use crate::gesture::{GesturePhase, GestureSample, GestureSampler, HeaderRelease};
use crate::sheet::header::HeaderDrag;
use crate::sheet::overlay::OverlayFade;
use crate::sheet::position::{SheetPhase, SheetPosition};
use crate::sheet::tabs::{AccordionTabs, TabEntry};

pub struct SheetController<C> {
    sampler: GestureSampler,
    position: SheetPosition,
    overlay: OverlayFade,
    header: HeaderDrag,
    tabs: AccordionTabs<C>,
    haptic: Option<Box<dyn FnMut()>>,
}

impl<C> SheetController<C> {
    pub fn new(config: SheetConfig) -> Self {
        let position = SheetPosition::new(&config);
        let overlay = OverlayFade::new(&config);
        let header = HeaderDrag::new(config.header);
        Self {
            sampler: GestureSampler::new(),
            position,
            overlay,
            header,
            tabs: AccordionTabs::new(),
            haptic: None,
        }
    }

    pub fn add_tab(&mut self, entry: TabEntry<C>) {
        self.tabs.push(entry);
    }

    /// Install a fire-and-forget haptic callback, pulsed once when a drag
    /// session grabs the sheet.
    pub fn set_haptic_hook(&mut self, hook: impl FnMut() + 'static) {
        self.haptic = Some(Box::new(hook));
    }

    /// Feed one panel-drag sample. Returns true if anything visible changed.
    pub fn on_gesture(&mut self, sample: GestureSample) -> bool {
        match sample.phase {
            GesturePhase::Start => {
                self.sampler.begin();
                let began = self.position.drag_start();
                if began {
                    if let Some(haptic) = self.haptic.as_mut() {
                        haptic();
                    }
                }
                began
            }
            GesturePhase::Move => {
                let delta_y = self.sampler.advance(&sample);
                let before = self.position.offset();
                self.position.drag_move(delta_y);
                self.position.offset() != before
            }
            GesturePhase::End => {
                if !matches!(self.position.phase(), SheetPhase::Dragging { .. }) {
                    return false;
                }
                let (delta_y, velocity_y) = self.sampler.finish(&sample);
                let to_expanded = self.position.drag_end(delta_y, velocity_y);
                self.apply_resolution(to_expanded);
                true
            }
        }
    }

    /// Feed a header release. Collapses the sheet when the header rule
    /// triggers; inert while not expanded.
    pub fn on_header_release(&mut self, release: HeaderRelease) -> bool {
        if self
            .header
            .should_collapse(&release, self.position.is_expanded())
        {
            return self.collapse();
        }
        false
    }

    /// Programmatic expand: spring the sheet open and fade the overlay out.
    pub fn expand(&mut self) -> bool {
        let changed = self.position.expand();
        self.overlay.begin_hide();
        changed
    }

    /// Programmatic collapse: clear the tabs, spring the sheet shut, fade
    /// the overlay back in. Idempotent.
    pub fn collapse(&mut self) -> bool {
        let tabs_changed = self.tabs.collapse_all();
        let position_changed = self.position.collapse();
        self.overlay.begin_show();
        tabs_changed || position_changed
    }

    /// Toggle a tab. Only applies while the sheet is expanded, which is
    /// what keeps a collapsed sheet's tabs closed.
    pub fn toggle_tab(&mut self, id: &str) -> bool {
        if !self.position.is_expanded() {
            return false;
        }
        self.tabs.toggle(id)
    }

    /// Advance in-flight animations. Returns true while anything is moving.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let position_moving = self.position.tick(dt);
        let overlay_moving = self.overlay.tick(dt);
        position_moving || overlay_moving
    }

    pub fn offset(&self) -> f64 {
        self.position.offset()
    }

    pub fn overlay_opacity(&self) -> f64 {
        self.overlay.opacity()
    }

    pub fn is_expanded(&self) -> bool {
        self.position.is_expanded()
    }

    pub fn phase(&self) -> SheetPhase {
        self.position.phase()
    }

    pub fn peek_height(&self) -> f64 {
        self.position.peek_height()
    }

    pub fn tabs(&self) -> &AccordionTabs<C> {
        &self.tabs
    }

    /// Terminal bookkeeping for a resolved panel drag. Collapse resolutions
    /// clear the tabs; snap-backs fall through as no-ops because the overlay
    /// is already at its terminal value.
    fn apply_resolution(&mut self, to_expanded: bool) {
        if to_expanded {
            self.overlay.begin_hide();
        } else {
            self.tabs.collapse_all();
            self.overlay.begin_show();
        }
    }
}
