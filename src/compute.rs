/// Pure game-logic functions.
///
/// Every public function takes immutable references to the current state (and,
/// where needed, an RNG handle) and returns brand-new values. Side effects are
/// limited to the injected RNG and to logging.

use log::{debug, info, trace};
use rand::Rng;

use crate::collision::top_edge_contact;
use crate::entities::{
    Enemy, GameEvent, GameState, GameStatus, LaserSound, Movement, ProjectilePool, Ship,
    BLINK_ON_FRAMES, BLINK_PERIOD, DIFFICULTY_STEP, ENEMY_BASE_SPEED, ENEMY_SPEED_SCALE,
    ENEMY_WIDTH, INVINCIBLE_FRAMES, KILL_AWARD, MAX_ENEMIES, POOL_SIZE,
    PROJECTILE_SPEED, SHIP_BASE_SPEED, SHIP_HEIGHT, SHIP_SPEED_SCALE, SHIP_WIDTH,
    SPEED_CEILING, START_DIFFICULTY, START_HEALTH, SURFACE_HEIGHT, SURFACE_WIDTH,
};
use crate::input::InputState;

/// Freshly spawned enemies enter from just above the top edge.
const ENEMY_SPAWN_Y: f32 = -50.0;

/// Result of advancing the simulation by one frame.
#[derive(Clone, Debug)]
pub struct Frame {
    pub state: GameState,
    pub events: Vec<GameEvent>,
}

// ── Constructors & state machine ─────────────────────────────────────────────

/// The title-screen state shown before the first game.
pub fn init_state() -> GameState {
    GameState {
        ship: Ship::new(),
        enemies: Vec::new(),
        projectiles: ProjectilePool::new(),
        health: START_HEALTH,
        score: 0,
        difficulty: START_DIFFICULTY,
        status: GameStatus::Home,
        frame: 0,
    }
}

/// Handle the start/restart trigger. Only honoured from `Home` or `GameOver`;
/// otherwise the state comes back unchanged.
///
/// A (re)start resets health, score, difficulty, the ship and every projectile,
/// and seeds the field with exactly one enemy.
pub fn start(state: &GameState, rng: &mut impl Rng) -> GameState {
    match state.status {
        GameStatus::Home | GameStatus::GameOver => {}
        GameStatus::Playing => return state.clone(),
    }
    info!("game started (previous status {:?})", state.status);
    GameState {
        enemies: vec![spawn_enemy(0, rng)],
        status: GameStatus::Playing,
        ..init_state()
    }
}

// ── Speed scaling ────────────────────────────────────────────────────────────

/// Recompute a speed from the score while it is still below the ceiling,
/// never past it. Once at the ceiling the speed is left alone.
pub fn scaled_speed(current: f32, base: f32, scale: f32, score: u32) -> f32 {
    if current < SPEED_CEILING {
        (base + score as f32 / scale).min(SPEED_CEILING)
    } else {
        current
    }
}

// ── Ship ─────────────────────────────────────────────────────────────────────

/// Advance the ship one frame: invincibility countdown and blink, speed
/// scaling, then movement clamped to the surface.
pub fn update_ship(ship: &Ship, input: &InputState, score: u32) -> Ship {
    let mut next = ship.clone();

    if next.invincible {
        next.invincible_time += 1;
        next.blink = next.invincible_time % BLINK_PERIOD < BLINK_ON_FRAMES;
        if next.invincible_time > INVINCIBLE_FRAMES {
            next.invincible = false;
            next.blink = false;
            next.invincible_time = 0;
        }
    }

    next.speed = scaled_speed(next.speed, SHIP_BASE_SPEED, SHIP_SPEED_SCALE, score);

    if input.up && next.y > 0.0 {
        next.y = (next.y - next.speed).max(0.0);
    }
    if input.right && next.x + SHIP_WIDTH < SURFACE_WIDTH {
        next.x = (next.x + next.speed).min(SURFACE_WIDTH - SHIP_WIDTH);
    }
    if input.down && next.y + SHIP_HEIGHT < SURFACE_HEIGHT {
        next.y = (next.y + next.speed).min(SURFACE_HEIGHT - SHIP_HEIGHT);
    }
    if input.left && next.x > 0.0 {
        next.x = (next.x - next.speed).max(0.0);
    }

    next
}

// ── Enemies ──────────────────────────────────────────────────────────────────

fn random_enemy_x(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0..(SURFACE_WIDTH - ENEMY_WIDTH) as u32) as f32
}

/// New enemy at a random column above the top edge. Its behaviour follows
/// spawn order so the four movement types are spread evenly.
pub fn spawn_enemy(index: usize, rng: &mut impl Rng) -> Enemy {
    Enemy {
        x: random_enemy_x(rng),
        y: ENEMY_SPAWN_Y,
        speed: ENEMY_BASE_SPEED,
        movement: Movement::for_spawn_index(index),
    }
}

/// Send an enemy back to the top at a random column, keeping its behaviour.
pub fn recycle(enemy: &Enemy, rng: &mut impl Rng) -> Enemy {
    Enemy {
        x: random_enemy_x(rng),
        y: 0.0,
        ..enemy.clone()
    }
}

/// Boundary rules applied before an enemy moves: bounce off the side edges by
/// switching drift direction, and recycle once it has fallen past the bottom.
pub fn steer_enemy(enemy: &Enemy, rng: &mut impl Rng) -> Enemy {
    let mut next = enemy.clone();
    if next.x < 0.0 {
        next.movement = Movement::DriftRight;
    }
    if next.x + ENEMY_WIDTH > SURFACE_WIDTH {
        next.movement = Movement::DriftLeft;
    }
    if next.y > SURFACE_HEIGHT {
        next = recycle(&next, rng);
    }
    next
}

pub fn move_enemy(enemy: &Enemy) -> Enemy {
    let (dx, dy) = enemy.movement.step(enemy.speed);
    Enemy {
        x: enemy.x + dx,
        y: enemy.y + dy,
        ..enemy.clone()
    }
}

/// Speed scaling for one enemy, same capped rule as the ship.
pub fn scale_enemy(enemy: &Enemy, score: u32) -> Enemy {
    Enemy {
        speed: scaled_speed(enemy.speed, ENEMY_BASE_SPEED, ENEMY_SPEED_SCALE, score),
        ..enemy.clone()
    }
}

/// Enemy phase of a frame: speed scaling, boundary rules, ship contact, then
/// each enemy's movement behaviour.
///
/// Contact only counts while the ship is not invincible and an enemy comes
/// down onto the ship's top edge. A hit makes the ship invincible and recycles
/// that enemy. Returns the new enemies, the new ship and the number of hits.
pub fn update_enemies(
    enemies: &[Enemy],
    ship: &Ship,
    score: u32,
    rng: &mut impl Rng,
) -> (Vec<Enemy>, Ship, u32) {
    let mut ship = ship.clone();
    let mut hits = 0;
    let enemies: Vec<Enemy> = enemies
        .iter()
        .map(|enemy| {
            let mut steered = steer_enemy(&scale_enemy(enemy, score), rng);
            if !ship.invincible && top_edge_contact(&ship.bounds(), &steered.bounds()) {
                hits += 1;
                ship.invincible = true;
                steered = recycle(&steered, rng);
            }
            move_enemy(&steered)
        })
        .collect();
    (enemies, ship, hits)
}

/// Grow the enemy population by at most one per frame while it is below the
/// difficulty allowance.
pub fn spawn_enemies(enemies: &[Enemy], difficulty: u32, rng: &mut impl Rng) -> Vec<Enemy> {
    let mut next = enemies.to_vec();
    if next.len() < enemy_cap(difficulty) {
        next.push(spawn_enemy(next.len(), rng));
    }
    next
}

// ── Difficulty ───────────────────────────────────────────────────────────────

/// Score at which `difficulty` goes up by one: `40 * 2^difficulty`,
/// saturating for absurd levels.
pub fn next_threshold(difficulty: u32) -> u64 {
    2u64.checked_pow(difficulty)
        .and_then(|p| p.checked_mul(DIFFICULTY_STEP))
        .unwrap_or(u64::MAX)
}

/// Raise difficulty by at most one level per call once the score has reached
/// the current threshold. A crossing is never skipped, whatever the award.
pub fn raise_difficulty(score: u32, difficulty: u32) -> u32 {
    if u64::from(score) >= next_threshold(difficulty) {
        difficulty + 1
    } else {
        difficulty
    }
}

/// Concurrent enemy allowance for a difficulty level.
pub fn enemy_cap(difficulty: u32) -> usize {
    (difficulty as usize).min(MAX_ENEMIES)
}

// ── Projectile pool ──────────────────────────────────────────────────────────

/// Try to fire from the pool.
///
/// The fire control must be held, and the candidate slot's sound must be idle
/// or have played past the refire threshold, wherever the slot currently is. If the candidate is still on screen the shot rotates to the next
/// slot instead, so volleys spread across the pool. Returns the new pool and
/// the slot that fired, if any.
pub fn try_fire(
    pool: &ProjectilePool,
    ship: &Ship,
    input: &InputState,
) -> (ProjectilePool, Option<usize>) {
    let candidate = &pool.slots[pool.index];
    if !input.fire || !candidate.sound.allows_refire() {
        return (pool.clone(), None);
    }

    let mut next = pool.clone();
    if candidate.is_active() {
        next.index = (next.index + 1) % POOL_SIZE;
    }

    let (x, y) = ship.muzzle();
    let slot = &mut next.slots[next.index];
    slot.x = x;
    slot.y = y;
    slot.sound = LaserSound::Playing(0);

    trace!("laser fired from slot {} at ({x}, {y})", next.index);
    let fired = next.index;
    (next, Some(fired))
}

/// Per-frame projectile update: advance sound clocks, resolve hits against
/// every enemy (upward contact only), then move every projectile up.
///
/// Each hit recycles the enemy and retires the projectile; the returned count
/// is the number of enemies destroyed.
pub fn update_projectiles(
    pool: &ProjectilePool,
    enemies: &[Enemy],
    rng: &mut impl Rng,
) -> (ProjectilePool, Vec<Enemy>, u32) {
    let mut next = pool.clone();
    let mut enemies = enemies.to_vec();
    let mut kills = 0;

    for projectile in next.slots.iter_mut() {
        projectile.sound = projectile.sound.advance();
        for enemy in enemies.iter_mut() {
            if top_edge_contact(&projectile.bounds(), &enemy.bounds()) {
                kills += 1;
                *enemy = recycle(enemy, rng);
                projectile.retire();
            }
        }
        projectile.y -= PROJECTILE_SPEED;
    }

    (next, enemies, kills)
}

// ── Per-frame tick ───────────────────────────────────────────────────────────

/// Advance the simulation by one frame. All randomness comes through `rng`
/// so callers control determinism (tests use a seeded RNG).
///
/// Order: ship, projectiles and firing, enemies and ship collisions,
/// difficulty, spawning, and finally the game-over check. Only a `Playing`
/// state advances.
pub fn tick(state: &GameState, input: &InputState, rng: &mut impl Rng) -> Frame {
    if state.status != GameStatus::Playing {
        return Frame { state: state.clone(), events: Vec::new() };
    }

    let mut events = Vec::new();
    let mut score = state.score;
    let mut health = state.health;

    // ── 1. Ship ──────────────────────────────────────────────────────────────
    let ship = update_ship(&state.ship, input, score);

    // ── 2. Projectiles: collisions, movement, then firing ────────────────────
    let (projectiles, enemies, kills) =
        update_projectiles(&state.projectiles, &state.enemies, rng);
    for _ in 0..kills {
        score = score.saturating_add(KILL_AWARD);
        events.push(GameEvent::EnemyDestroyed { award: KILL_AWARD });
    }
    let (projectiles, fired) = try_fire(&projectiles, &ship, input);
    if let Some(slot) = fired {
        events.push(GameEvent::LaserFired { slot });
    }

    // ── 3. Enemies: scaling, boundaries, ship contact, movement ──────────────
    let (enemies, ship, hits) = update_enemies(&enemies, &ship, score, rng);
    for _ in 0..hits {
        health -= 1;
        debug!("ship hit, health {health}");
        events.push(GameEvent::ShipHit { health_left: health });
    }

    // ── 4. Difficulty & spawning ─────────────────────────────────────────────
    let difficulty = raise_difficulty(score, state.difficulty);
    if difficulty != state.difficulty {
        debug!("difficulty raised to {difficulty} at score {score}");
        events.push(GameEvent::DifficultyRaised { level: difficulty });
    }
    let enemies = spawn_enemies(&enemies, difficulty, rng);
    if enemies.len() > state.enemies.len() {
        events.push(GameEvent::EnemySpawned { count: enemies.len() });
    }

    // ── 5. Game over check ───────────────────────────────────────────────────
    let status = if health <= 0 {
        info!("game over with score {score}");
        events.push(GameEvent::GameOver { score });
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    };

    Frame {
        state: GameState {
            ship,
            enemies,
            projectiles,
            health,
            score,
            difficulty,
            status,
            frame: state.frame + 1,
        },
        events,
    }
}
