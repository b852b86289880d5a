mod terminal;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    terminal as term, ExecutableCommand,
};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use fly_fighter::compute::{init_state, start, tick};
use fly_fighter::config::Config;
use fly_fighter::display::render;
use fly_fighter::entities::{GameEvent, GameState, GameStatus};
use fly_fighter::error::GameError;
use fly_fighter::input::{is_start_trigger, HeldKeys};

use crate::terminal::TerminalSurface;

// ── Game loop ─────────────────────────────────────────────────────────────────

fn is_quit(event: &Event) -> bool {
    match event {
        Event::Key(KeyEvent { code, modifiers, kind: KeyEventKind::Press, .. }) => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
            KeyCode::Char('c') => modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        },
        _ => false,
    }
}

/// Runs until the player quits.
///
/// Each frame drains all pending input events without blocking, feeds key
/// events into the held-key tracker, honours the start trigger only on the
/// title and game-over screens, advances the simulation only while playing,
/// renders, and sleeps out the rest of the frame budget.
fn game_loop<W: Write>(
    out: W,
    rx: &mpsc::Receiver<Event>,
    config: &Config,
) -> Result<(), GameError> {
    let (cols, rows) = term::size()?;
    let surface = &mut TerminalSurface::new(out, cols, rows);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let frame_budget: Duration = config.frame_duration();

    let mut state: GameState = init_state();
    let mut held = HeldKeys::new();
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            if is_quit(&ev) {
                info!("quit at score {}", state.score);
                return Ok(());
            }
            if is_start_trigger(&ev) && state.status != GameStatus::Playing {
                state = start(&state, &mut rng);
                held = HeldKeys::new();
                continue;
            }
            match ev {
                Event::Key(key) => held.handle(&key, frame),
                Event::Resize(cols, rows) => surface.resize(cols, rows),
                _ => {}
            }
        }

        // ── Simulate ──────────────────────────────────────────────────────────
        if state.status == GameStatus::Playing {
            let outcome = tick(&state, &held.state(frame), &mut rng);
            for event in &outcome.events {
                if let GameEvent::LaserFired { slot } = event {
                    debug!("laser sound restarted on slot {slot}");
                    if config.bell {
                        surface.bell()?;
                    }
                }
            }
            held.apply(&outcome.events);
            state = outcome.state;
        }

        render(surface, &state)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_budget {
            thread::sleep(frame_budget - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_default_env().init();

    let config = Config::load()?;
    info!("starting Fly Fighter with {config:?}");

    let mut out = BufWriter::new(stdout());

    term::enable_raw_mode()?;
    out.execute(term::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back to hold expiry.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        warn!("terminal does not report key releases, using hold expiry");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    // Fallible setup lives in game_loop so the restore below always runs
    let result = game_loop(out, &rx, &config);

    // Always restore the terminal
    let mut out = stdout();
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(term::LeaveAlternateScreen);
    let _ = term::disable_raw_mode();

    result
}
