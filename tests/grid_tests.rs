use tether::config::DEFAULT_TIME_STEP;
use tether::{Grid, GridConfig, ParticleConstraint, SolverConfig, Topology, Vec2, VerletIntegrator};

fn cloth_config() -> GridConfig<f32> {
    GridConfig {
        cols: 8,
        rows: 6,
        spacing: Vec2::new(1.0, 1.0),
        damping: 0.0,
        ..GridConfig::default()
    }
}

#[test]
fn pinned_cloth_drapes_under_gravity() {
    let mut grid = Grid::new(Vec2::new(0.0, 0.0), &cloth_config()).unwrap();
    grid.pin_top_row();
    let top: Vec<_> = (0..grid.cols()).map(|c| grid.position_at(c, 0).unwrap()).collect();
    let bottom_row = grid.rows() - 1;
    let bottom_start = grid.index(0, bottom_row);

    let config = SolverConfig::new()
        .with_gravity(Vec2::new(0.0, 9.81))
        .with_iterations(8);
    let mut sim = VerletIntegrator::from_topology(grid, config).unwrap();
    for _ in 0..120 {
        sim.integrate(DEFAULT_TIME_STEP).unwrap();
    }

    for (col, expected) in top.iter().enumerate() {
        assert_eq!(sim.particle(col).unwrap().position, *expected, "top row moved at col {}", col);
    }
    for p in &sim.particles()[bottom_start..] {
        assert!(p.position.y > 5.0, "bottom row rose to {}", p.position.y);
        assert!(p.position.is_finite());
    }
}

#[test]
fn grid_deterministic() {
    let run = || {
        let mut grid = Grid::new(Vec2::new(0.0f32, 0.0), &cloth_config()).unwrap();
        grid.pin_top_row();
        let config = SolverConfig::new()
            .with_gravity(Vec2::new(0.0, 9.81))
            .with_iterations(4);
        let mut sim = VerletIntegrator::from_topology(grid, config).unwrap();
        for _ in 0..60 {
            sim.integrate(DEFAULT_TIME_STEP).unwrap();
        }
        sim.positions()
    };

    let first = run();
    let second = run();
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.x, b.x);
        assert_eq!(a.y, b.y);
    }
}

#[test]
fn torn_particle_falls_free() {
    let mut grid = Grid::new(Vec2::new(0.0, 0.0), &cloth_config()).unwrap();
    grid.pin_top_row();
    let removed = grid.tear_at(3, 5).unwrap();
    assert!(removed > 0);
    let torn = grid.index(3, 5);
    assert!(!grid.constraints().iter().any(|c| c.references(torn)));

    let config = SolverConfig::new().with_gravity(Vec2::new(0.0, 9.81)).with_damping(1.0);
    let mut sim = VerletIntegrator::from_topology(grid, config).unwrap();
    let start_y = sim.particle(torn).unwrap().position.y;
    for _ in 0..60 {
        sim.integrate(DEFAULT_TIME_STEP).unwrap();
    }
    // Unconstrained free fall for one second
    let drop = sim.particle(torn).unwrap().position.y - start_y;
    assert!((drop - 0.5 * 9.81).abs() < 0.5, "torn particle dropped {}", drop);
}

#[test]
fn render_draws_every_link_and_point() {
    let grid = Grid::new(Vec2::new(0.0f32, 0.0), &cloth_config()).unwrap();
    let mut list = tether::DrawList::new();
    grid.render(&mut list);
    assert_eq!(list.lines().count(), grid.constraint_count());
    assert_eq!(list.points().count(), grid.particle_count());
}
