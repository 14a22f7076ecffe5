use tether::ragdoll::{HEAD, LEFT_ARM, LEFT_LEG, RIGHT_ARM, RIGHT_LEG, TORSO};
use tether::{Constraint, Ragdoll, RagdollConfig, SolverConfig, Vec2, VerletIntegrator};

fn limb_errors(sim: &VerletIntegrator<f64>) -> Vec<f64> {
    sim.constraints()
        .iter()
        .filter_map(|c| match c {
            Constraint::Distance(d) => Some(d.error(sim.particles()).unwrap().abs()),
            _ => None,
        })
        .collect()
}

#[test]
fn ragdoll_falls_and_pulls_limbs_to_length() {
    // Arms and legs start beyond limb_length and are drawn in while falling
    let doll = Ragdoll::new(Vec2::new(100.0, 50.0), &RagdollConfig::default()).unwrap();
    let config = SolverConfig::new().with_gravity(Vec2::new(0.0, 500.0));
    let mut sim = VerletIntegrator::from_topology(doll, config).unwrap();
    let initial = sim.positions();

    for _ in 0..30 {
        sim.integrate(1.0 / 60.0).unwrap();
    }

    for (before, after) in initial.iter().zip(sim.positions()) {
        assert!(after.y > before.y + 30.0, "part only moved from {} to {}", before.y, after.y);
    }
    for err in limb_errors(&sim) {
        assert!(err < 0.1, "limb off rest length by {}", err);
    }
}

#[test]
fn ragdoll_hangs_from_head() {
    let mut doll = Ragdoll::new(Vec2::new(100.0, 50.0), &RagdollConfig::default()).unwrap();
    doll.pin(HEAD).unwrap();
    let config = SolverConfig::new().with_gravity(Vec2::new(0.0, 500.0));
    let mut sim = VerletIntegrator::from_topology(doll, config).unwrap();

    for _ in 0..300 {
        sim.integrate(1.0 / 60.0).unwrap();
    }

    let y = |part: usize| sim.particle(part).unwrap().position.y;
    assert_eq!(sim.particle(HEAD).unwrap().position, Vec2::new(100.0, 50.0));
    assert!(y(TORSO) > y(HEAD));
    for limb in [LEFT_ARM, RIGHT_ARM, LEFT_LEG, RIGHT_LEG] {
        assert!(y(limb) > y(TORSO), "limb {} above torso", limb);
    }
    for err in limb_errors(&sim) {
        assert!(err < 5.0, "limb stretched by {}", err);
    }
}
