//! TerminalRenderer: writes half-block cell grids to a real terminal.
//!
//! The first frame (and any frame after a size change) repaints every cell;
//! after that only runs of changed cells are written. Colour escapes are the
//! bulk of the output, so the encoder remembers the selected foreground and
//! background separately and re-sends each one only when it changes.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::grid::{CellGrid, PixelPair, Rgb};

/// Upper half block: foreground is the upper pixel, background the lower.
pub const HALF_BLOCK: char = '▀';

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<CellGrid>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(256 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("failed to disable raw mode")
    }

    /// Show `grid`, then hand the previous frame back through it.
    ///
    /// The renderer keeps the frame it just wrote to diff the next one
    /// against, so the caller always renders into a recycled buffer.
    pub fn present(&mut self, grid: &mut CellGrid) -> Result<()> {
        self.buf.clear();
        match &self.last {
            Some(prev) if prev.same_size(grid) => encode_diff_into(prev, grid, &mut self.buf)?,
            _ => encode_full_into(grid, &mut self.buf)?,
        }
        self.flush_buf()?;

        std::mem::swap(self.last.get_or_insert_with(CellGrid::default), grid);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

/// Colours currently selected on the terminal. `None` until first set.
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
}

impl Pen {
    /// Print one cell at the cursor. A solid pair is a plain space, which
    /// needs only the background.
    fn paint(&mut self, out: &mut Vec<u8>, pair: PixelPair) -> Result<()> {
        if self.bg != Some(pair.lower) {
            out.queue(SetBackgroundColor(pair.lower.into()))?;
            self.bg = Some(pair.lower);
        }
        if pair.is_solid() {
            out.queue(Print(' '))?;
            return Ok(());
        }
        if self.fg != Some(pair.upper) {
            out.queue(SetForegroundColor(pair.upper.into()))?;
            self.fg = Some(pair.upper);
        }
        out.queue(Print(HALF_BLOCK))?;
        Ok(())
    }

    fn used(&self) -> bool {
        self.fg.is_some() || self.bg.is_some()
    }
}

/// Encode a repaint of every cell into `out`.
pub fn encode_full_into(grid: &CellGrid, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..grid.rows() {
        let Some(row) = grid.row(y) else { break };
        out.queue(cursor::MoveTo(0, y))?;
        for &pair in row {
            pen.paint(out, pair)?;
        }
    }

    if pen.used() {
        out.queue(ResetColor)?;
    }
    Ok(())
}

/// Encode only the cells of `next` that differ from `prev`. Both grids must
/// have the same size.
pub fn encode_diff_into(prev: &CellGrid, next: &CellGrid, out: &mut Vec<u8>) -> Result<()> {
    let mut pen = Pen::default();
    for y in 0..next.rows() {
        let (Some(old), Some(new)) = (prev.row(y), next.row(y)) else {
            break;
        };
        for (start, end) in changed_runs(old, new) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for &pair in &new[start..end] {
                pen.paint(out, pair)?;
            }
        }
    }

    if pen.used() {
        out.queue(ResetColor)?;
    }
    Ok(())
}

/// Half-open column ranges where two equally long rows disagree.
fn changed_runs<'a>(
    old: &'a [PixelPair],
    new: &'a [PixelPair],
) -> impl Iterator<Item = (usize, usize)> + 'a {
    let len = old.len().min(new.len());
    let mut x = 0;
    std::iter::from_fn(move || {
        while x < len && old[x] == new[x] {
            x += 1;
        }
        if x == len {
            return None;
        }
        let start = x;
        while x < len && old[x] != new[x] {
            x += 1;
        }
        Some((start, x))
    })
}
