//! Display: the "physical screen" behind the offscreen surface.
//!
//! Owns a second [`Surface`] that stands in for display memory, the active
//! palette plus one saved-palette slot, and the terminal renderer. Presenting
//! a frame is one bulk copy into display memory followed by a terminal flush,
//! so a half-drawn offscreen surface is never visible.

use anyhow::Result;
use crossterm::terminal;
use tracing::{debug, info};

use crate::core::{Palette, Surface};
use crate::grid::CellGrid;
use crate::renderer::TerminalRenderer;
use crate::surface_view::{SurfaceView, Viewport};

pub struct Display {
    renderer: TerminalRenderer,
    view: SurfaceView,
    physical: Surface,
    palette: Palette,
    saved_palette: Option<Palette>,
    grid: CellGrid,
}

impl Display {
    pub fn new() -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            view: SurfaceView::default(),
            physical: Surface::new(),
            palette: Palette::system(),
            saved_palette: None,
            grid: CellGrid::default(),
        }
    }

    /// Take over the terminal (raw mode, alternate screen, hidden cursor).
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        info!("display acquired");
        Ok(())
    }

    /// Restore the saved palette and hand the terminal back.
    pub fn exit(&mut self) -> Result<()> {
        self.restore_palette();
        self.renderer.exit()?;
        info!("display released");
        Ok(())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Snapshot the active palette so [`Display::restore_palette`] can put it
    /// back later.
    pub fn save_palette(&mut self) {
        self.saved_palette = Some(self.palette);
    }

    /// Install a palette. Takes effect on the next presentation.
    pub fn set_palette(&mut self, palette: Palette) {
        debug!(words = ?palette.words(), "palette installed");
        self.palette = palette;
    }

    /// Put the saved palette back, if one was saved. The slot is consumed.
    pub fn restore_palette(&mut self) {
        if let Some(saved) = self.saved_palette.take() {
            self.palette = saved;
            debug!("palette restored");
        }
    }

    /// Copy `offscreen` into display memory and show it.
    pub fn present(&mut self, offscreen: &Surface) -> Result<()> {
        offscreen.present_to(&mut self.physical);
        self.refresh()
    }

    /// Redraw the terminal from display memory with the active palette.
    pub fn refresh(&mut self) -> Result<()> {
        let (w, h) = terminal::size().unwrap_or((80, 24));
        self.view
            .render_into(&self.physical, &self.palette, Viewport::new(w, h), &mut self.grid);
        self.renderer.present(&mut self.grid)
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::new()
    }
}
