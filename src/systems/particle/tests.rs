use super::*;
use crate::domain::constants::{FLOOR_LIFT, FOAM_JITTER};

// 120x120 viewport, radius 6 => 10x10 grid of 12-unit cells
fn config() -> SimConfig {
    SimConfig {
        max_particles: 16,
        ..SimConfig::with_viewport(120.0, 120.0)
    }
}

fn run(particle: &mut Particle, id: ParticleId, grid: &CellGrid, config: &SimConfig, step: StepContext, rng: &mut Rng) {
    let mut ctx = UpdateContext {
        grid,
        config,
        step: &step,
        rng,
    };
    particle.update(id, &mut ctx);
}

fn still_particle(x: f32, y: f32) -> Particle {
    let mut rng = Rng::new(1);
    let mut p = Particle::new();
    p.spawn(x, y, &mut rng);
    p.velocity = Vec2::zero();
    p
}

#[test]
fn spawn_resets_to_falling_with_small_jitter() {
    let mut rng = Rng::new(3);
    let mut p = Particle::new();
    p.acceleration = Vec2::new(5.0, 5.0);
    p.spawn(30.0, 40.0, &mut rng);

    assert_eq!(p.state(), ParticleState::Falling);
    assert_eq!(p.position, Vec2::new(30.0, 40.0));
    assert_eq!(p.velocity.y, 0.0);
    assert!(p.velocity.x.abs() <= 0.5);
    assert_eq!(p.acceleration, Vec2::zero());
}

#[test]
fn inactive_particle_does_not_move() {
    let config = config();
    let grid = CellGrid::new(config.width, config.height, config.cell_size());
    let mut rng = Rng::new(1);
    let mut p = Particle::new();
    p.position = Vec2::new(50.0, 50.0);

    run(&mut p, 0, &grid, &config, StepContext::night(0.0, 0.0), &mut rng);

    assert_eq!(p.position, Vec2::new(50.0, 50.0));
    assert!(p.is_dead(config.height));
}

#[test]
fn falls_under_gravity_until_it_rests_on_the_floor() {
    let config = config();
    let grid = CellGrid::new(config.width, config.height, config.cell_size());
    let mut rng = Rng::new(5);
    let mut p = Particle::new();
    p.spawn(6.0, 6.0, &mut rng);

    let mut steps = 0;
    while !p.is_resting() {
        assert!(p.position.y + config.particle_radius < config.height);
        run(&mut p, 0, &grid, &config, StepContext::night(400.0, 0.0), &mut rng);
        steps += 1;
        assert!(steps < 200, "particle never reached the floor");
    }

    assert_eq!(p.position.y, config.height - config.particle_radius);
    assert_eq!(p.velocity.y, 0.0);
    assert!(steps > 1);
}

#[test]
fn velocity_is_capped_at_terminal_velocity() {
    let config = SimConfig {
        gravity: 50.0,
        ..SimConfig::with_viewport(1000.0, 1000.0)
    };
    let grid = CellGrid::new(config.width, config.height, config.cell_size());
    let mut rng = Rng::new(1);
    let mut p = still_particle(500.0, 10.0);

    run(&mut p, 0, &grid, &config, StepContext::night(0.0, 0.0), &mut rng);

    assert!((p.velocity.length() - config.terminal_velocity).abs() < 1e-3);
    assert_eq!(p.acceleration, Vec2::zero());
}

#[test]
fn resting_particle_skips_integration_at_night() {
    let config = config();
    let grid = CellGrid::new(config.width, config.height, config.cell_size());
    let mut rng = Rng::new(1);
    let mut p = still_particle(50.0, config.height - config.particle_radius);
    p.velocity.x = 3.0;
    p.state = ParticleState::Resting;

    run(&mut p, 0, &grid, &config, StepContext::night(0.0, 0.0), &mut rng);

    assert_eq!(p.position, Vec2::new(50.0, config.height - config.particle_radius));
    assert!(p.is_resting());
    assert_eq!(p.acceleration, Vec2::zero());
}

#[test]
fn day_mode_wakes_resting_particles() {
    let config = config();
    let grid = CellGrid::new(config.width, config.height, config.cell_size());
    let mut rng = Rng::new(1);
    let mut p = still_particle(60.0, 30.0);
    p.state = ParticleState::Resting;

    run(&mut p, 0, &grid, &config, StepContext::day(100.0, 30.0), &mut rng);

    assert_eq!(p.state(), ParticleState::Falling);
    assert!(p.position.x < 60.0);
}

#[test]
fn repulsion_pushes_along_x_away_from_pointer() {
    let pointer = Vec2::new(100.0, 100.0);

    let left = Vec2::new(70.0, 60.0);
    let d = left.distance(pointer);
    assert!((horizontal_repulsion(left, pointer) + 200.0 / (d + 10.0)).abs() < 1e-5);

    let right = Vec2::new(130.0, 140.0);
    let d = right.distance(pointer);
    assert!((horizontal_repulsion(right, pointer) - 200.0 / (d + 10.0)).abs() < 1e-5);

    // Directly below the pointer counts as "not to the right"
    assert!(horizontal_repulsion(Vec2::new(100.0, 150.0), pointer) < 0.0);
}

#[test]
fn day_forces_add_jittered_repulsion_and_gravity() {
    let config = config();
    let grid = CellGrid::new(config.width, config.height, config.cell_size());
    let step = StepContext::day(80.0, 20.0);
    let mut rng = Rng::new(11);

    for (x, sign) in [(20.0f32, -1.0f32), (110.0, 1.0)] {
        let mut p = still_particle(x, 20.0);
        let mut ctx = UpdateContext { grid: &grid, config: &config, step: &step, rng: &mut rng };
        forces::apply_forces(&mut p, &mut ctx);

        let expected = sign * 200.0 / ((x - 80.0).abs() + 10.0);
        assert!((p.acceleration.x - expected).abs() <= FOAM_JITTER + 1e-5);
        assert_eq!(p.acceleration.x.signum(), sign);
        assert!((p.acceleration.y - config.gravity).abs() < 1e-6);
    }
}

#[test]
fn day_forces_lift_particles_near_the_floor() {
    let config = config();
    let grid = CellGrid::new(config.width, config.height, config.cell_size());
    let step = StepContext::day(0.0, 0.0);
    let mut rng = Rng::new(2);
    let mut p = still_particle(60.0, config.height - 20.0);
    let mut ctx = UpdateContext { grid: &grid, config: &config, step: &step, rng: &mut rng };

    forces::apply_forces(&mut p, &mut ctx);

    assert!((p.acceleration.y - (config.gravity - FLOOR_LIFT)).abs() < 1e-6);
}

#[test]
fn day_mode_wall_exit_deactivates() {
    let config = config();
    let grid = CellGrid::new(config.width, config.height, config.cell_size());
    let mut rng = Rng::new(1);
    let mut p = still_particle(1.0, 50.0);
    p.velocity.x = -5.0;

    run(&mut p, 0, &grid, &config, StepContext::day(100.0, 50.0), &mut rng);

    assert_eq!(p.state(), ParticleState::Inactive);
    assert!(p.is_dead(config.height));
}

#[test]
fn nan_position_counts_as_a_wall_exit() {
    let config = config();
    let grid = CellGrid::new(config.width, config.height, config.cell_size());
    let mut rng = Rng::new(1);

    let mut p = still_particle(50.0, 50.0);
    p.position.x = f32::NAN;
    run(&mut p, 0, &grid, &config, StepContext::day(100.0, 50.0), &mut rng);
    assert!(p.is_dead(config.height));

    let mut p = still_particle(50.0, 50.0);
    p.position.x = f32::NAN;
    run(&mut p, 0, &grid, &config, StepContext::night(100.0, 50.0), &mut rng);
    assert!(p.is_active());
    assert_eq!(p.position.x, 0.0);
    assert_eq!(p.velocity.x, 0.0);
}

#[test]
fn night_mode_wall_exit_bounces_back_inside() {
    let config = config();
    let grid = CellGrid::new(config.width, config.height, config.cell_size());
    let mut rng = Rng::new(1);
    let mut p = still_particle(118.0, 30.0);
    p.velocity.x = 4.0;

    run(&mut p, 0, &grid, &config, StepContext::night(0.0, 0.0), &mut rng);

    assert!(p.is_active());
    assert_eq!(p.velocity.x, -2.0);
    assert_eq!(p.position.x, config.width);
}

#[test]
fn lands_on_particle_below_and_stays_when_boxed_in() {
    let config = config();
    let mut grid = CellGrid::new(config.width, config.height, config.cell_size());
    grid.set(2, 5, 10);
    grid.set(3, 5, 11);
    grid.set(4, 5, 12);
    let mut rng = Rng::new(1);
    let mut p = still_particle(42.0, 54.0);

    run(&mut p, 0, &grid, &config, StepContext::night(0.0, 0.0), &mut rng);

    assert!(p.is_resting());
    assert_eq!(p.position.y, 48.0);
    assert_eq!(p.velocity.y, 0.0);
}

#[test]
fn slides_left_when_only_left_diagonal_is_open() {
    let config = config();
    let mut grid = CellGrid::new(config.width, config.height, config.cell_size());
    grid.set(3, 5, 11);
    grid.set(4, 5, 12);
    let mut rng = Rng::new(1);
    let mut p = still_particle(42.0, 54.0);

    run(&mut p, 0, &grid, &config, StepContext::night(0.0, 0.0), &mut rng);

    assert_eq!(p.state(), ParticleState::Sliding);
    assert_eq!(p.velocity.x, -2.0);
    assert_eq!(p.velocity.y, 0.0);
}

#[test]
fn picks_a_side_when_both_diagonals_are_open() {
    let config = config();
    let mut grid = CellGrid::new(config.width, config.height, config.cell_size());
    grid.set(3, 5, 11);
    let mut rng = Rng::new(1);
    let mut p = still_particle(42.0, 54.0);

    run(&mut p, 0, &grid, &config, StepContext::night(0.0, 0.0), &mut rng);

    assert_eq!(p.state(), ParticleState::Sliding);
    assert_eq!(p.velocity.x.abs(), 2.0);
}

#[test]
fn neighbour_beside_blocks_the_slide() {
    let config = config();
    let mut grid = CellGrid::new(config.width, config.height, config.cell_size());
    grid.set(3, 5, 11);
    grid.set(4, 5, 12);
    grid.set(2, 4, 13);
    let mut rng = Rng::new(1);

    assert_eq!(slide_direction(&grid, 3, 4, &mut rng), None);
}

#[test]
fn grid_edge_is_never_a_slide_target() {
    let config = config();
    let mut grid = CellGrid::new(config.width, config.height, config.cell_size());
    grid.set(0, 5, 1);
    grid.set(1, 5, 2);
    grid.set(9, 5, 3);
    grid.set(8, 5, 4);
    let mut rng = Rng::new(1);

    assert_eq!(slide_direction(&grid, 0, 4, &mut rng), None);
    assert_eq!(slide_direction(&grid, 9, 4, &mut rng), None);
}

#[test]
fn slide_rule_saturates_at_the_last_row_index() {
    let config = config();
    let grid = CellGrid::new(config.width, config.height, config.cell_size());
    let mut rng = Rng::new(1);

    // Rows past the grid read as empty, so only the in-grid column test applies
    assert_eq!(slide_direction(&grid, 0, i32::MAX, &mut rng), Some(1.0));
    assert_eq!(slide_direction(&grid, 9, i32::MAX, &mut rng), Some(-1.0));
}

#[test]
fn does_not_stack_on_itself() {
    let config = config();
    let mut grid = CellGrid::new(config.width, config.height, config.cell_size());
    grid.set(3, 5, 7);
    let mut rng = Rng::new(1);
    let mut p = still_particle(42.0, 54.0);

    run(&mut p, 7, &grid, &config, StepContext::night(0.0, 0.0), &mut rng);

    assert_eq!(p.state(), ParticleState::Falling);
    assert!(p.position.y > 54.0);
}

#[test]
fn piles_do_not_form_in_day_mode() {
    let config = config();
    let mut grid = CellGrid::new(config.width, config.height, config.cell_size());
    grid.set(3, 5, 11);
    let mut rng = Rng::new(1);
    let mut p = still_particle(42.0, 54.0);

    run(&mut p, 0, &grid, &config, StepContext::day(42.0, 0.0), &mut rng);

    assert!(!p.is_resting());
    assert_ne!(p.position.y, 48.0);
}

#[test]
fn far_below_floor_counts_as_dead() {
    let config = config();
    let mut p = still_particle(10.0, config.height + 51.0);
    assert!(p.is_dead(config.height));
    p.position.y = config.height + 49.0;
    assert!(!p.is_dead(config.height));
}
