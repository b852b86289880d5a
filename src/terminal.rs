/// Terminal implementation of the drawing surface.
///
/// The 600×600 logical surface is scaled onto whatever grid the terminal
/// currently has. Sprites become short glyph strings, rectangles become
/// background-coloured cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Attribute, Color, Print},
    terminal, QueueableCommand,
};
use fly_fighter::display::{Font, Sprite, Surface};
use fly_fighter::entities::{SURFACE_HEIGHT, SURFACE_WIDTH};

const C_SHIP: Color = Color::White;
const C_ENEMY: Color = Color::Green;

/// Cell rectangle `(left, top, right, bottom)` filled this frame.
type Panel = (i32, i32, i32, i32, Color);

pub struct TerminalSurface<W: Write> {
    out: W,
    cols: u16,
    rows: u16,
    /// Text drawn over a filled rectangle keeps its background.
    panels: Vec<Panel>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W, cols: u16, rows: u16) -> Self {
        TerminalSurface { out, cols, rows, panels: Vec::new() }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
    }

    /// The terminal's stand-in for "play the laser sound from the start".
    pub fn bell(&mut self) -> std::io::Result<()> {
        self.out.queue(Print('\x07'))?;
        Ok(())
    }

    fn col(&self, x: f32) -> i32 {
        (x * f32::from(self.cols) / SURFACE_WIDTH).floor() as i32
    }

    fn row(&self, y: f32) -> i32 {
        (y * f32::from(self.rows) / SURFACE_HEIGHT).floor() as i32
    }

    fn panel_at(&self, col: i32, row: i32) -> Option<Color> {
        self.panels
            .iter()
            .find(|(l, t, r, b, _)| (*l..*r).contains(&col) && (*t..*b).contains(&row))
            .map(|panel| panel.4)
    }

    fn visible(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && col < i32::from(self.cols) && row < i32::from(self.rows)
    }

    /// Print `text` starting at a cell, cut at the right edge.
    fn put(&mut self, col: i32, row: i32, text: &str) -> std::io::Result<()> {
        if row < 0 || row >= i32::from(self.rows) {
            return Ok(());
        }
        let skip = (-col).max(0) as usize;
        let room = (i32::from(self.cols) - col.max(0)).max(0) as usize;
        let clipped: String = text.chars().skip(skip).take(room).collect();
        if clipped.is_empty() {
            return Ok(());
        }
        self.out.queue(cursor::MoveTo(col.max(0) as u16, row as u16))?;
        self.out.queue(Print(clipped))?;
        Ok(())
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    type Error = std::io::Error;

    fn clear(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) -> std::io::Result<()> {
        // Frames always clear the whole surface
        self.out.queue(style::ResetColor)?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        self.panels.clear();
        Ok(())
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, _h: f32) -> std::io::Result<()> {
        let (glyph, color) = match sprite {
            Sprite::Ship => ("/█\\", C_SHIP),
            Sprite::Enemy => ("«▼»", C_ENEMY),
        };
        // Centre the 3-cell glyph on the sprite's horizontal midpoint
        let col = self.col(x + w / 2.0) - 1;
        let row = self.row(y);
        self.out.queue(style::SetForegroundColor(color))?;
        self.put(col, row, glyph)
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Color) -> std::io::Result<()> {
        // Baseline to the cell row the glyphs mostly occupy
        let row = self.row(y - font.size_px() as f32 / 2.0);
        let col = self.col(x);
        self.out.queue(style::SetForegroundColor(color))?;
        if let Some(background) = self.panel_at(col, row) {
            self.out.queue(style::SetBackgroundColor(background))?;
        }
        match font {
            Font::Hud => {
                self.put(col, row, text)?;
                self.out.queue(style::ResetColor)?;
                Ok(())
            }
            Font::Title => {
                self.out.queue(style::SetAttribute(Attribute::Bold))?;
                self.put(col, row, &text.to_uppercase())?;
                self.out.queue(style::SetAttribute(Attribute::Reset))?;
                self.out.queue(style::ResetColor)?;
                Ok(())
            }
        }
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) -> std::io::Result<()> {
        let (left, top) = (self.col(x), self.row(y));
        let right = self.col(x + w).max(left + 1);
        let bottom = self.row(y + h).max(top + 1);
        self.out.queue(style::SetBackgroundColor(color))?;
        for row in top..bottom {
            for col in left..right {
                if self.visible(col, row) {
                    self.out.queue(cursor::MoveTo(col as u16, row as u16))?;
                    self.out.queue(Print(' '))?;
                }
            }
        }
        self.out.queue(style::ResetColor)?;
        self.panels.push((left, top, right, bottom, color));
        Ok(())
    }

    fn present(&mut self) -> std::io::Result<()> {
        self.out.queue(style::ResetColor)?;
        self.out.queue(cursor::MoveTo(0, self.rows.saturating_sub(1)))?;
        self.out.flush()
    }
}
