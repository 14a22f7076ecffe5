use tether::{
    Constraint, DrawCommand, DrawList, Grid, GridConfig, ParticleConstraint, PhysicsError, Ragdoll,
    RagdollConfig, Rope, RopeConfig, SolverConfig, Vec2, VerletIntegrator,
};

fn small_grid() -> Grid<f32> {
    let config = GridConfig {
        cols: 3,
        rows: 3,
        shear_stiffness: None,
        ..GridConfig::default()
    };
    Grid::new(Vec2::new(10.0, 0.0), &config).unwrap()
}

#[test]
fn add_body_offsets_indices() {
    let mut sim = VerletIntegrator::new(SolverConfig::new()).unwrap();
    let rope = sim
        .add_body(Rope::new(Vec2::new(0.0f32, 0.0), 5, 1.0, &RopeConfig::default()).unwrap())
        .unwrap();
    let grid = sim.add_body(small_grid()).unwrap();

    assert_eq!(rope, 0..5);
    assert_eq!(grid, 5..14);
    assert_eq!(sim.constraint_count(), 4 + 12);
    match &sim.constraints()[4] {
        Constraint::Distance(d) => {
            assert_eq!((d.a(), d.b()), (5, 6));
        }
        other => panic!("unexpected constraint {:?}", other),
    }
    assert!(sim.constraints()[4..].iter().all(|c| c.highest_index() < 14));
    assert_eq!(sim.particle(5).unwrap().position, Vec2::new(10.0, 0.0));
}

#[test]
fn bodies_do_not_interact() {
    let mut sim = VerletIntegrator::new(SolverConfig::new().with_gravity(Vec2::new(0.0, 10.0))).unwrap();
    let rope = sim
        .add_body(Rope::new(Vec2::new(0.0f32, 0.0), 5, 1.0, &RopeConfig::default()).unwrap())
        .unwrap();
    let doll = sim
        .add_body(Ragdoll::new(Vec2::new(50.0, 0.0), &RagdollConfig::default()).unwrap())
        .unwrap();
    assert_eq!(sim.tear_at(doll.start + tether::ragdoll::TORSO), Ok(5));

    for _ in 0..10 {
        sim.integrate(1.0 / 60.0).unwrap();
    }
    assert_eq!(sim.particle(rope.start).unwrap().position, Vec2::new(0.0, 0.0));
    assert_eq!(sim.constraint_count(), 4);
}

#[test]
fn render_draws_constraints_before_particles() {
    let mut sim = VerletIntegrator::new(SolverConfig::new()).unwrap();
    sim.add_body(small_grid()).unwrap();
    let mut list = DrawList::new();
    sim.render(&mut list);

    assert_eq!(list.len(), 12 + 9);
    assert!(list.commands()[..12].iter().all(|c| matches!(c, DrawCommand::Line(..))));
    assert!(list.commands()[12..].iter().all(|c| matches!(c, DrawCommand::Point(_))));
    let points: Vec<_> = list.points().collect();
    assert_eq!(points, sim.positions());

    list.clear();
    assert!(list.is_empty());
}

#[test]
fn accessors_reject_out_of_range() {
    let mut sim = VerletIntegrator::new(SolverConfig::new()).unwrap();
    sim.add_body(small_grid()).unwrap();
    let err = PhysicsError::IndexOutOfRange { index: 9, count: 9 };
    assert_eq!(sim.particle(9).unwrap_err(), err);
    assert_eq!(sim.pin(9), Err(err.clone()));
    assert_eq!(sim.unpin(9), Err(err));
}
