/// All game entity types and tuning constants — pure data, no frame logic.

// ── Surface & tuning ─────────────────────────────────────────────────────────

/// Logical surface size. All spawn and bounds math is relative to these.
pub const SURFACE_WIDTH: f32 = 600.0;
pub const SURFACE_HEIGHT: f32 = 600.0;

/// Simulation rate the timings below are tuned for.
pub const FRAMES_PER_SECOND: u32 = 60;

pub const SHIP_WIDTH: f32 = 50.0;
pub const SHIP_HEIGHT: f32 = 50.0;
pub const SHIP_BASE_SPEED: f32 = 4.0;
/// Score points per extra unit of ship speed.
pub const SHIP_SPEED_SCALE: f32 = 200.0;

pub const ENEMY_WIDTH: f32 = 50.0;
pub const ENEMY_HEIGHT: f32 = 38.0;
pub const ENEMY_BASE_SPEED: f32 = 2.0;
/// Score points per extra unit of enemy speed.
pub const ENEMY_SPEED_SCALE: f32 = 250.0;
/// Speed recomputation stops once a ship or enemy reaches this value.
pub const SPEED_CEILING: f32 = 8.0;

pub const PROJECTILE_WIDTH: f32 = 4.0;
pub const PROJECTILE_HEIGHT: f32 = 40.0;
pub const PROJECTILE_SPEED: f32 = 10.0;
pub const POOL_SIZE: usize = 3;
/// Where retired projectiles are parked, well clear of the visible area.
pub const RETIRED_Y: f32 = -500.0;

/// Laser clip length (0.5 s).
pub const LASER_SOUND_FRAMES: u32 = 30;
/// A slot may refire once its sound has played this long (0.3 s).
pub const REFIRE_FRAMES: u32 = 18;

pub const INVINCIBLE_FRAMES: u32 = 150;
pub const BLINK_PERIOD: u32 = 25;
/// Frames of each blink window during which the ship is hidden.
pub const BLINK_ON_FRAMES: u32 = 12;

pub const START_HEALTH: i32 = 3;
pub const KILL_AWARD: u32 = 10;
pub const START_DIFFICULTY: u32 = 1;
pub const MAX_ENEMIES: usize = 9;
/// Base of the doubling score threshold, `40 * 2^difficulty`.
pub const DIFFICULTY_STEP: u64 = 40;

// ── Geometry ─────────────────────────────────────────────────────────────────

/// Axis-aligned bounding box in surface units, y growing downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

// ── Player ───────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Ship {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub invincible: bool,
    /// Frames elapsed in the current invincibility window.
    pub invincible_time: u32,
    /// Hidden this frame (blink during invincibility).
    pub blink: bool,
}

impl Ship {
    /// Fresh ship at the launch position: horizontally centred, near the bottom.
    pub fn new() -> Self {
        Ship {
            x: (SURFACE_WIDTH - SHIP_WIDTH) / 2.0,
            y: SURFACE_HEIGHT - 60.0,
            speed: SHIP_BASE_SPEED,
            invincible: false,
            invincible_time: 0,
            blink: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: SHIP_WIDTH, height: SHIP_HEIGHT }
    }

    /// Where projectiles leave the ship, as the top-left of a projectile box.
    pub fn muzzle(&self) -> (f32, f32) {
        (self.x + SHIP_WIDTH / 2.0 - PROJECTILE_WIDTH / 2.0, self.y)
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

// ── Enemies ──────────────────────────────────────────────────────────────────

/// Enemy movement behaviour, reassigned when an enemy reaches a side edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    StraightDown,
    DriftLeft,
    DriftRight,
    FastDown,
}

impl Movement {
    /// Spawn-order assignment: the n-th enemy gets behaviour `n mod 4`.
    pub fn for_spawn_index(index: usize) -> Self {
        match index % 4 {
            0 => Movement::StraightDown,
            1 => Movement::DriftLeft,
            2 => Movement::DriftRight,
            _ => Movement::FastDown,
        }
    }

    /// Per-frame displacement `(dx, dy)` at the given speed.
    pub fn step(&self, speed: f32) -> (f32, f32) {
        let half = speed / 2.0;
        match self {
            Movement::StraightDown => (0.0, half),
            Movement::DriftLeft => (-half, half),
            Movement::DriftRight => (half, half),
            Movement::FastDown => (0.0, speed),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Enemy {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub movement: Movement,
}

impl Enemy {
    pub fn bounds(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: ENEMY_WIDTH, height: ENEMY_HEIGHT }
    }
}

// ── Projectiles ──────────────────────────────────────────────────────────────

/// Playback clock of one projectile's laser sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LaserSound {
    Idle,
    /// Frames since the clip was last started.
    Playing(u32),
}

impl LaserSound {
    /// Advance one frame; the clip goes idle once it has played through.
    pub fn advance(self) -> Self {
        match self {
            LaserSound::Idle => LaserSound::Idle,
            LaserSound::Playing(pos) if pos + 1 >= LASER_SOUND_FRAMES => LaserSound::Idle,
            LaserSound::Playing(pos) => LaserSound::Playing(pos + 1),
        }
    }

    /// Whether the slot's sound no longer blocks a refire.
    pub fn allows_refire(&self) -> bool {
        match self {
            LaserSound::Idle => true,
            LaserSound::Playing(pos) => *pos >= REFIRE_FRAMES,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Projectile {
    pub x: f32,
    pub y: f32,
    pub sound: LaserSound,
}

impl Projectile {
    pub fn retired() -> Self {
        Projectile { x: 0.0, y: RETIRED_Y, sound: LaserSound::Idle }
    }

    /// In flight on screen. Inactive projectiles are parked off-screen
    /// instead of carrying a flag.
    pub fn is_active(&self) -> bool {
        self.y > 0.0
    }

    pub fn retire(&mut self) {
        self.y = RETIRED_Y;
    }

    pub fn bounds(&self) -> Rect {
        Rect { x: self.x, y: self.y, width: PROJECTILE_WIDTH, height: PROJECTILE_HEIGHT }
    }
}

/// Fixed set of projectiles cycled round-robin.
#[derive(Clone, Debug, PartialEq)]
pub struct ProjectilePool {
    pub slots: [Projectile; POOL_SIZE],
    /// Slot the next shot is taken from.
    pub index: usize,
}

impl ProjectilePool {
    pub fn new() -> Self {
        ProjectilePool {
            slots: std::array::from_fn(|_| Projectile::retired()),
            index: 0,
        }
    }
}

impl Default for ProjectilePool {
    fn default() -> Self {
        Self::new()
    }
}

// ── Game state ───────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    /// Title screen, waiting for the start trigger.
    Home,
    Playing,
    /// Waiting for the restart trigger.
    GameOver,
}

/// Things that happened during one frame, for the frontend to react to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Restart the laser sound of this pool slot.
    LaserFired { slot: usize },
    EnemyDestroyed { award: u32 },
    ShipHit { health_left: i32 },
    DifficultyRaised { level: u32 },
    EnemySpawned { count: usize },
    GameOver { score: u32 },
}

/// The entire game state. Cloneable so update functions can return a new
/// copy without mutating the original.
#[derive(Clone, Debug, PartialEq)]
pub struct GameState {
    pub ship: Ship,
    pub enemies: Vec<Enemy>,
    pub projectiles: ProjectilePool,
    pub health: i32,
    pub score: u32,
    pub difficulty: u32,
    pub status: GameStatus,
    pub frame: u64,
}
