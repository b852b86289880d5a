use fly_fighter::entities::*;

// ── Ship ──────────────────────────────────────────────────────────────────────

#[test]
fn new_ship_starts_centred_near_bottom() {
    let ship = Ship::new();
    assert_eq!((ship.x, ship.y), (275.0, 540.0));
    assert_eq!(ship.speed, SHIP_BASE_SPEED);
    assert!(!ship.invincible);
    assert!(!ship.blink);
}

#[test]
fn muzzle_is_centred_on_ship() {
    let mut ship = Ship::new();
    ship.x = 100.0;
    ship.y = 300.0;
    assert_eq!(ship.muzzle(), (123.0, 300.0));
}

#[test]
fn bounds_use_entity_sizes() {
    let ship = Ship::new().bounds();
    assert_eq!((ship.width, ship.height), (SHIP_WIDTH, SHIP_HEIGHT));
    assert_eq!(ship.right(), 325.0);
    assert_eq!(ship.bottom(), 590.0);
}

// ── Movement ──────────────────────────────────────────────────────────────────

#[test]
fn spawn_order_cycles_behaviours() {
    let kinds: Vec<_> = (0..6).map(Movement::for_spawn_index).collect();
    assert_eq!(
        kinds,
        vec![
            Movement::StraightDown,
            Movement::DriftLeft,
            Movement::DriftRight,
            Movement::FastDown,
            Movement::StraightDown,
            Movement::DriftLeft,
        ]
    );
}

#[test]
fn movement_steps_scale_with_speed() {
    assert_eq!(Movement::StraightDown.step(4.0), (0.0, 2.0));
    assert_eq!(Movement::DriftLeft.step(4.0), (-2.0, 2.0));
    assert_eq!(Movement::DriftRight.step(4.0), (2.0, 2.0));
    assert_eq!(Movement::FastDown.step(4.0), (0.0, 4.0));
}

// ── Laser sound ───────────────────────────────────────────────────────────────

#[test]
fn sound_blocks_refire_until_threshold() {
    assert!(LaserSound::Idle.allows_refire());
    assert!(!LaserSound::Playing(0).allows_refire());
    assert!(!LaserSound::Playing(REFIRE_FRAMES - 1).allows_refire());
    assert!(LaserSound::Playing(REFIRE_FRAMES).allows_refire());
}

#[test]
fn sound_goes_idle_after_clip() {
    let mut sound = LaserSound::Playing(0);
    for _ in 0..LASER_SOUND_FRAMES - 1 {
        sound = sound.advance();
        assert!(matches!(sound, LaserSound::Playing(_)));
    }
    assert_eq!(sound.advance(), LaserSound::Idle);
    assert_eq!(LaserSound::Idle.advance(), LaserSound::Idle);
}

// ── Projectiles ───────────────────────────────────────────────────────────────

#[test]
fn pool_starts_fully_retired() {
    let pool = ProjectilePool::new();
    assert_eq!(pool.slots.len(), POOL_SIZE);
    assert_eq!(pool.index, 0);
    assert!(pool.slots.iter().all(|p| !p.is_active() && p.sound == LaserSound::Idle));
}

#[test]
fn retire_parks_projectile_off_screen() {
    let mut p = Projectile { x: 10.0, y: 200.0, sound: LaserSound::Playing(3) };
    assert!(p.is_active());
    p.retire();
    assert_eq!(p.y, RETIRED_Y);
    assert!(!p.is_active());
}

#[test]
fn projectile_at_top_edge_is_inactive() {
    let p = Projectile { x: 10.0, y: 0.0, sound: LaserSound::Idle };
    assert!(!p.is_active());
}
