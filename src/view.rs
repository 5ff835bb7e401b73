//! Software renderer for the demo host
//!
//! Draws the host screen, the floating now-playing chip, and the bottom
//! sheet with its accordion rows into a softbuffer surface. Everything is
//! flat rectangles so the demo stays font-free; titles render as light
//! bands sized to their text length.
//!
//! The geometry helpers (`sheet_layout`, `tab_at_point`) are shared with
//! the runtime so hit-testing and drawing can never disagree about where
//! a row sits.

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::Result;
use softbuffer::Surface;
use winit::window::Window;

use crate::hit_test::{Point, Rect, SheetLayout};
use crate::sheet::SheetController;

/// Height of the drag header band at the top of the panel.
pub const HEADER_HEIGHT: f64 = 48.0;
/// Height of one collapsed accordion row.
pub const TAB_ROW_HEIGHT: f64 = 44.0;
/// Extra height revealed below a row while its tab is expanded.
pub const TAB_CONTENT_HEIGHT: f64 = 132.0;
/// Gap the panel leaves to the top edge when fully expanded.
pub const PANEL_TOP_MARGIN: f64 = 96.0;

const BACKGROUND: u32 = 0xFF14161B;
const HOST_BAND: u32 = 0xFF20242C;
const CHIP: u32 = 0xFF31564A;
const CHIP_BAND: u32 = 0xFFB9D6C6;
const PANEL: u32 = 0xFF262B34;
const HEADER: u32 = 0xFF2F3540;
const GRIP: u32 = 0xFF5A6374;
const TAB_ROW: u32 = 0xFF2B313B;
const TAB_ROW_ACTIVE: u32 = 0xFF39414E;
const TEXT_BAND: u32 = 0xFFC9D1DC;

/// Total height of the sliding panel for a given window size.
///
/// The panel reaches to `PANEL_TOP_MARGIN` below the top edge when fully
/// expanded. Tiny windows still get at least the peek height so the
/// collapsed sheet never degenerates to zero.
pub fn panel_height(window_size: (u32, u32), peek_height: f64) -> f64 {
    (window_size.1 as f64 - PANEL_TOP_MARGIN).max(peek_height)
}

/// Window-space layout of the panel and its header for the current offset.
pub fn sheet_layout<C>(controller: &SheetController<C>, window_size: (u32, u32)) -> SheetLayout {
    SheetLayout::compute(
        window_size.0 as f64,
        window_size.1 as f64,
        panel_height(window_size, controller.peek_height()),
        controller.offset(),
        HEADER_HEIGHT,
    )
}

/// Id of the accordion title row under `pt`, if any.
///
/// Expanded content areas are not title rows; a point inside one returns
/// `None` so taps on revealed content never toggle a neighbouring tab.
pub fn tab_at_point<C>(
    controller: &SheetController<C>,
    window_size: (u32, u32),
    pt: Point,
) -> Option<&str> {
    let layout = sheet_layout(controller, window_size);
    let mut row_top = layout.header.bottom();
    for entry in controller.tabs().entries() {
        let row = Rect::new(layout.panel.x, row_top, layout.panel.width, TAB_ROW_HEIGHT);
        if row.contains(pt) {
            return Some(&entry.id);
        }
        row_top += TAB_ROW_HEIGHT;
        if entry.expanded {
            row_top += TAB_CONTENT_HEIGHT;
        }
    }
    None
}

pub struct Renderer {
    surface: Surface<Rc<Window>, Rc<Window>>,
    width: u32,
    height: u32,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let (width, height) = {
            let size = window.inner_size();
            (size.width, size.height)
        };

        let surface = Surface::new(context, Rc::clone(&window))
            .map_err(|e| anyhow::anyhow!("Failed to create surface: {}", e))?;

        Ok(Self {
            surface,
            width,
            height,
        })
    }

    /// Draw one frame of the demo host.
    ///
    /// Tab content payloads are ARGB accent colors; the expanded tab's
    /// body is filled with its accent.
    pub fn render(
        &mut self,
        controller: &SheetController<u32>,
        window_size: (u32, u32),
    ) -> Result<()> {
        if window_size.0 == 0 || window_size.1 == 0 {
            return Ok(());
        }

        if self.width != window_size.0 || self.height != window_size.1 {
            self.width = window_size.0;
            self.height = window_size.1;
            self.surface
                .resize(
                    NonZeroU32::new(self.width).unwrap(),
                    NonZeroU32::new(self.height).unwrap(),
                )
                .map_err(|e| anyhow::anyhow!("Failed to resize surface: {}", e))?;
        }

        let width = self.width;
        let height = self.height;
        let opacity = controller.overlay_opacity();
        let layout = sheet_layout(controller, (width, height));

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow::anyhow!("Failed to get surface buffer: {}", e))?;

        buffer.fill(BACKGROUND);

        draw_host_screen(&mut buffer, width, height);
        draw_overlay_chip(&mut buffer, width, height, opacity);
        draw_sheet(&mut buffer, width, height, controller, &layout);

        buffer
            .present()
            .map_err(|e| anyhow::anyhow!("Failed to present buffer: {}", e))?;
        Ok(())
    }
}

/// Placeholder content bands so the sheet visibly slides over something.
fn draw_host_screen(buffer: &mut [u32], width: u32, height: u32) {
    let w = width as f64;
    for i in 0..4 {
        let y = 96.0 + i as f64 * 72.0;
        fill_rect(
            buffer,
            width,
            height,
            Rect::new(16.0, y, w - 32.0, 48.0),
            HOST_BAND,
        );
    }
}

/// The now-playing chip that fades out while the sheet is up.
fn draw_overlay_chip(buffer: &mut [u32], width: u32, height: u32, opacity: f64) {
    let w = width as f64;
    let chip = Rect::new(16.0, 16.0, w - 32.0, 56.0);
    blend_rect(buffer, width, height, chip, CHIP, opacity);
    let band = Rect::new(32.0, 40.0, (w - 64.0).min(180.0), 8.0);
    blend_rect(buffer, width, height, band, CHIP_BAND, opacity);
}

fn draw_sheet(
    buffer: &mut [u32],
    width: u32,
    height: u32,
    controller: &SheetController<u32>,
    layout: &SheetLayout,
) {
    fill_rect(buffer, width, height, layout.panel, PANEL);
    fill_rect(buffer, width, height, layout.header, HEADER);

    let grip = Rect::new(
        layout.header.x + (layout.header.width - 44.0) / 2.0,
        layout.header.y + 10.0,
        44.0,
        5.0,
    );
    fill_rect(buffer, width, height, grip, GRIP);

    let mut row_top = layout.header.bottom();
    for entry in controller.tabs().entries() {
        let row = Rect::new(layout.panel.x, row_top, layout.panel.width, TAB_ROW_HEIGHT);
        let row_bg = if entry.expanded { TAB_ROW_ACTIVE } else { TAB_ROW };
        fill_rect(buffer, width, height, row, row_bg);

        let band_w = (entry.title.len() as f64 * 9.0).min(row.width - 72.0);
        fill_rect(
            buffer,
            width,
            height,
            Rect::new(row.x + 20.0, row.y + 18.0, band_w, 8.0),
            TEXT_BAND,
        );

        let chevron = Rect::new(row.x + row.width - 34.0, row.y + 17.0, 10.0, 10.0);
        let chevron_color = if entry.expanded { entry.content } else { GRIP };
        fill_rect(buffer, width, height, chevron, chevron_color);

        fill_rect(
            buffer,
            width,
            height,
            Rect::new(row.x, row.bottom() - 1.0, row.width, 1.0),
            PANEL,
        );

        row_top += TAB_ROW_HEIGHT;
        if entry.expanded {
            let body = Rect::new(row.x, row_top, row.width, TAB_CONTENT_HEIGHT);
            fill_rect(buffer, width, height, body, entry.content);
            for i in 0..3 {
                let item = Rect::new(
                    row.x + 20.0,
                    row_top + 16.0 + i as f64 * 38.0,
                    row.width - 40.0,
                    24.0,
                );
                blend_rect(buffer, width, height, item, 0xFFFFFFFF, 0.18);
            }
            row_top += TAB_CONTENT_HEIGHT;
        }
    }
}

/// Fill a rectangle with a solid color, clamped to the buffer.
fn fill_rect(buffer: &mut [u32], width: u32, height: u32, rect: Rect, color: u32) {
    let x0 = rect.x.max(0.0) as usize;
    let y0 = rect.y.max(0.0) as usize;
    let x1 = ((rect.x + rect.width).max(0.0) as usize).min(width as usize);
    let y1 = ((rect.y + rect.height).max(0.0) as usize).min(height as usize);

    for y in y0..y1 {
        let row_start = y * width as usize;
        for x in x0..x1 {
            buffer[row_start + x] = color;
        }
    }
}

/// Fill a rectangle blended over the existing pixels.
fn blend_rect(buffer: &mut [u32], width: u32, height: u32, rect: Rect, color: u32, alpha: f64) {
    if alpha <= 0.0 {
        return;
    }
    if alpha >= 1.0 {
        return fill_rect(buffer, width, height, rect, color);
    }

    let x0 = rect.x.max(0.0) as usize;
    let y0 = rect.y.max(0.0) as usize;
    let x1 = ((rect.x + rect.width).max(0.0) as usize).min(width as usize);
    let y1 = ((rect.y + rect.height).max(0.0) as usize).min(height as usize);

    for y in y0..y1 {
        let row_start = y * width as usize;
        for x in x0..x1 {
            let idx = row_start + x;
            buffer[idx] = blend_colors(buffer[idx], color, alpha);
        }
    }
}

fn blend_colors(bg: u32, fg: u32, alpha: f64) -> u32 {
    let bg_r = ((bg >> 16) & 0xFF) as f64;
    let bg_g = ((bg >> 8) & 0xFF) as f64;
    let bg_b = (bg & 0xFF) as f64;

    let fg_r = ((fg >> 16) & 0xFF) as f64;
    let fg_g = ((fg >> 8) & 0xFF) as f64;
    let fg_b = (fg & 0xFF) as f64;

    let r = (bg_r * (1.0 - alpha) + fg_r * alpha) as u32;
    let g = (bg_g * (1.0 - alpha) + fg_g * alpha) as u32;
    let b = (bg_b * (1.0 - alpha) + fg_b * alpha) as u32;

    0xFF000000 | (r << 16) | (g << 8) | b
}
