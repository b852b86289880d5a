use std::convert::Infallible;

use crossterm::style::Color;
use fly_fighter::compute::{init_state, start};
use fly_fighter::display::*;
use fly_fighter::entities::*;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Records every drawing call instead of drawing.
#[derive(Debug, Default)]
struct Recorder {
    ops: Vec<Op>,
    presented: usize,
}

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Clear,
    Image(Sprite, f32, f32),
    Text(String, Font, Color),
    Rect(f32, f32, f32, f32, Color),
}

impl Surface for Recorder {
    type Error = Infallible;

    fn clear(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) -> Result<(), Infallible> {
        self.ops.push(Op::Clear);
        Ok(())
    }

    fn draw_image(&mut self, sprite: Sprite, x: f32, y: f32, _w: f32, _h: f32) -> Result<(), Infallible> {
        self.ops.push(Op::Image(sprite, x, y));
        Ok(())
    }

    fn fill_text(&mut self, text: &str, _x: f32, _y: f32, font: Font, color: Color) -> Result<(), Infallible> {
        self.ops.push(Op::Text(text.to_string(), font, color));
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) -> Result<(), Infallible> {
        self.ops.push(Op::Rect(x, y, w, h, color));
        Ok(())
    }

    fn present(&mut self) -> Result<(), Infallible> {
        self.presented += 1;
        Ok(())
    }
}

impl Recorder {
    fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text(text, _, _) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn images(&self, sprite: Sprite) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Image(s, _, _) if *s == sprite)).count()
    }
}

fn playing() -> GameState {
    start(&init_state(), &mut StdRng::seed_from_u64(1))
}

fn draw(state: &GameState) -> Recorder {
    let mut recorder = Recorder::default();
    render(&mut recorder, state).unwrap();
    recorder
}

#[test]
fn every_frame_clears_then_presents() {
    let r = draw(&init_state());
    assert_eq!(r.ops.first(), Some(&Op::Clear));
    assert_eq!(r.presented, 1);
}

#[test]
fn home_screen_shows_title_and_instructions() {
    let r = draw(&init_state());
    assert!(r.ops.contains(&Op::Text(TITLE.to_string(), Font::Title, Color::White)));
    let texts = r.texts();
    assert!(texts.contains(&"Health: 3"));
    assert!(texts.contains(&"Score: 0"));
    assert!(texts.contains(&"Press Space to Fire"));
    assert_eq!(r.images(Sprite::Ship), 0);
}

#[test]
fn playing_draws_world_and_hud() {
    let mut s = playing();
    s.score = 30;
    let r = draw(&s);
    assert!(r.ops.contains(&Op::Image(Sprite::Ship, 275.0, 540.0)));
    assert_eq!(r.images(Sprite::Enemy), 1);
    let texts = r.texts();
    assert!(texts.contains(&"Score: 30"));
    assert!(!texts.contains(&TITLE));
}

#[test]
fn blinking_ship_is_hidden() {
    let mut s = playing();
    s.ship.invincible = true;
    s.ship.blink = true;
    assert_eq!(draw(&s).images(Sprite::Ship), 0);
}

#[test]
fn only_visible_projectiles_are_drawn() {
    let mut s = playing();
    s.projectiles.slots[1].x = 298.0;
    s.projectiles.slots[1].y = 200.0;
    let rects: Vec<_> = draw(&s)
        .ops
        .into_iter()
        .filter(|op| matches!(op, Op::Rect(..)))
        .collect();
    assert_eq!(rects, vec![Op::Rect(298.0, 200.0, PROJECTILE_WIDTH, PROJECTILE_HEIGHT, Color::Red)]);
}

#[test]
fn game_over_shows_banner_and_restart_button() {
    let mut s = playing();
    s.status = GameStatus::GameOver;
    s.health = 0;
    s.score = 230;
    let r = draw(&s);
    assert!(r.texts().contains(&"Game Over"));
    assert!(r.texts().contains(&"Score: 230"));
    assert!(r.texts().contains(&"Health: 0"));
    assert!(r.ops.contains(&Op::Rect(190.0, 450.0, 230.0, 30.0, Color::White)));
    assert!(r.ops.contains(&Op::Text("Click to Restart Game".to_string(), Font::Hud, Color::Black)));
    assert_eq!(r.images(Sprite::Enemy), 0);
}

#[test]
fn font_sizes() {
    assert_eq!(Font::Hud.size_px(), 20);
    assert_eq!(Font::Title.size_px(), 48);
}
