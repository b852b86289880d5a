/// Rendering layer.
///
/// `render` translates an immutable view of the game state into calls on a
/// `Surface`. No game logic is performed here; the surface decides how
/// logical units become pixels or terminal cells.

use crossterm::style::Color;

use crate::entities::{
    GameState, GameStatus, Projectile, ENEMY_HEIGHT, ENEMY_WIDTH, PROJECTILE_HEIGHT,
    PROJECTILE_WIDTH, SHIP_HEIGHT, SHIP_WIDTH, SURFACE_HEIGHT, SURFACE_WIDTH,
};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_TEXT: Color = Color::White;
const C_LASER: Color = Color::Red;
const C_BUTTON: Color = Color::White;
const C_BUTTON_TEXT: Color = Color::Black;

pub const TITLE: &str = "Fly Fighter";

/// Images the surface knows how to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Ship,
    Enemy,
}

/// Pixel font sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Font {
    /// 20px, HUD and menu lines.
    Hud,
    /// 48px, the title.
    Title,
}

impl Font {
    pub fn size_px(&self) -> u32 {
        match self {
            Font::Hud => 20,
            Font::Title => 48,
        }
    }
}

/// Opaque 2D drawing surface in logical units (600×600, y down).
///
/// Text is positioned by its baseline, like a canvas `fillText`.
pub trait Surface {
    type Error;

    fn clear(&mut self, x: f32, y: f32, w: f32, h: f32) -> Result<(), Self::Error>;
    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, w: f32, h: f32) -> Result<(), Self::Error>;
    fn fill_text(&mut self, text: &str, x: f32, y: f32, font: Font, color: Color) -> Result<(), Self::Error>;
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) -> Result<(), Self::Error>;

    /// Push the frame out, for surfaces that buffer.
    fn present(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame for whichever state the game is in.
pub fn render<S: Surface>(surface: &mut S, state: &GameState) -> Result<(), S::Error> {
    surface.clear(0.0, 0.0, SURFACE_WIDTH, SURFACE_HEIGHT)?;

    match state.status {
        GameStatus::Home => draw_home(surface, state)?,
        GameStatus::Playing => {
            draw_world(surface, state)?;
            draw_hud(surface, state)?;
        }
        GameStatus::GameOver => {
            draw_game_over(surface)?;
            draw_hud(surface, state)?;
        }
    }

    surface.present()
}

// ── Screens ───────────────────────────────────────────────────────────────────

fn draw_home<S: Surface>(surface: &mut S, state: &GameState) -> Result<(), S::Error> {
    draw_hud(surface, state)?;
    surface.fill_text(TITLE, 160.0, 400.0, Font::Title, C_TEXT)?;
    surface.fill_text("Click or Enter to Play", 160.0, 430.0, Font::Hud, C_TEXT)?;
    surface.fill_text("Press Arrow Keys to Move", 160.0, 470.0, Font::Hud, C_TEXT)?;
    surface.fill_text("Press Space to Fire", 160.0, 500.0, Font::Hud, C_TEXT)
}

fn draw_game_over<S: Surface>(surface: &mut S) -> Result<(), S::Error> {
    surface.fill_text("Game Over", 250.0, 430.0, Font::Hud, C_TEXT)?;
    surface.fill_rect(190.0, 450.0, 230.0, 30.0, C_BUTTON)?;
    surface.fill_text("Click to Restart Game", 200.0, 470.0, Font::Hud, C_BUTTON_TEXT)
}

// ── HUD ───────────────────────────────────────────────────────────────────────

fn draw_hud<S: Surface>(surface: &mut S, state: &GameState) -> Result<(), S::Error> {
    surface.fill_text(&format!("Health: {}", state.health), 10.0, 30.0, Font::Hud, C_TEXT)?;
    surface.fill_text(&format!("Score: {}", state.score), 10.0, 60.0, Font::Hud, C_TEXT)
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_world<S: Surface>(surface: &mut S, state: &GameState) -> Result<(), S::Error> {
    // Hidden on blink frames while invincible
    if !state.ship.blink {
        surface.draw_image(Sprite::Ship, state.ship.x, state.ship.y, SHIP_WIDTH, SHIP_HEIGHT)?;
    }

    for projectile in state.projectiles.slots.iter().filter(|p| on_screen(p)) {
        surface.fill_rect(projectile.x, projectile.y, PROJECTILE_WIDTH, PROJECTILE_HEIGHT, C_LASER)?;
    }

    for enemy in &state.enemies {
        surface.draw_image(Sprite::Enemy, enemy.x, enemy.y, ENEMY_WIDTH, ENEMY_HEIGHT)?;
    }

    Ok(())
}

/// Any part of the projectile inside the surface.
fn on_screen(projectile: &Projectile) -> bool {
    projectile.y + PROJECTILE_HEIGHT > 0.0 && projectile.y < SURFACE_HEIGHT
}
