//! Tuning constants for the tide heuristics.
//!
//! These shape the look of the simulation rather than its scale, so they are
//! fixed at compile time. Scale-dependent values live in `SimConfig`.

/// Half-width of the horizontal velocity jitter given to a freshly spawned particle.
pub const SPAWN_JITTER: f32 = 0.5;

/// Day-mode repulsion is `REPEL_STRENGTH / (distance + REPEL_SOFTENING)`.
pub const REPEL_STRENGTH: f32 = 200.0;
pub const REPEL_SOFTENING: f32 = 10.0;

/// Half-width of the uniform "foam" noise added to the horizontal push.
pub const FOAM_JITTER: f32 = 0.2;

/// Upward acceleration applied in day mode to particles near the floor.
pub const FLOOR_LIFT: f32 = 0.5;
/// Height of the band above the floor where `FLOOR_LIFT` applies.
pub const FLOOR_LIFT_BAND: f32 = 50.0;

/// Night-mode wall bounce: horizontal velocity is multiplied by this.
pub const WALL_RESTITUTION: f32 = -0.5;

/// Horizontal speed given to a particle sliding off a pile.
pub const SLIDE_SPEED: f32 = 2.0;

/// Column picks per `spawn_particle` call before giving up.
pub const SPAWN_ATTEMPTS: u32 = 10;

/// Particles this far below the floor are recycled.
pub const DEAD_MARGIN: f32 = 50.0;

/// Tide intensity at the top and bottom of the viewport.
pub const TIDE_MAX: f32 = 5.0;
pub const TIDE_MIN: f32 = 1.0;

/// Upper bound on `maxParticles`; the arena is allocated up front.
pub const MAX_PARTICLES: u32 = 1 << 20;
/// Upper bound on `cols * rows` for the occupancy grid.
pub const MAX_GRID_CELLS: usize = 1 << 22;
/// Viewport sides accepted by `ParticleSystem::new` are clamped to `[1, MAX_VIEWPORT_EXTENT]`.
pub const MAX_VIEWPORT_EXTENT: f32 = 16_384.0;
