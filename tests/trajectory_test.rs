use fireworks_timer::physic_engine::trajectory::{generate_trajectory, DAMPING, GRAVITY, TIME_STEP};
use fireworks_timer::physic_engine::types::Position;

// ==================================
// 1. Longueur et point de départ
// ==================================

#[test]
fn test_trajectory_has_steps_plus_one_positions() {
    let launch = Position::new(-120.0, -400.0);
    for steps in [0, 1, 2, 15, 25, 100] {
        let t = generate_trajectory(launch, 60.0, steps, 800.0, 0.8);
        assert_eq!(t.len(), steps + 1, "steps = {}", steps);
        assert_eq!(t.first(), Some(launch));
    }
}

// ==================================
// 2. Tir vertical
// ==================================

#[test]
fn test_vertical_launch_keeps_x_at_zero_and_climbs() {
    let t = generate_trajectory(Position::new(0.0, -500.0), 90.0, 10, 1000.0, 0.8);

    assert_eq!(t.len(), 11);
    for pos in t.iter() {
        assert_eq!(pos.x, 0.0, "x drifted: {:?}", pos);
    }

    // speed = 1000 / (10 * 0.4) * 0.8 = 200 : y_speed reste positif sur 10 pas
    let ys: Vec<f64> = t.iter().map(|p| p.y).collect();
    for pair in ys.windows(2) {
        assert!(pair[1] > pair[0], "y should increase: {:?}", ys);
    }
    assert_eq!(ys[1], -400.0);
}

#[test]
fn test_gravity_eventually_reverses_the_climb() {
    // vitesse faible : la gravité reprend le dessus avant la fin
    let t = generate_trajectory(Position::ZERO, 90.0, 40, 40.0, 1.0);
    let ys: Vec<f64> = t.iter().map(|p| p.y).collect();
    let apex = ys
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    assert!(apex > 0 && apex < ys.len() - 1);
    assert!(ys[ys.len() - 1] < ys[apex]);
}

// ==================================
// 3. Ordre des opérations
// ==================================

#[test]
fn test_position_update_happens_before_damping_and_gravity() {
    // angle 0 : speed = 100 / (2 * 0.4) * 1.0 = 125
    let t = generate_trajectory(Position::ZERO, 0.0, 2, 100.0, 1.0);
    let p = t.positions();

    assert_eq!(p[1], Position::new(125.0 * TIME_STEP, 0.0));
    let expected = Position::new(
        p[1].x + 125.0 * DAMPING * TIME_STEP,
        p[1].y + GRAVITY * TIME_STEP * TIME_STEP,
    );
    assert!((p[2] - expected).length() < 1e-12, "{:?} vs {:?}", p[2], expected);
}

#[test]
fn test_horizontal_speed_decays() {
    let t = generate_trajectory(Position::ZERO, 45.0, 20, 600.0, 0.9);
    let dx: Vec<f64> = t.positions().windows(2).map(|w| w[1].x - w[0].x).collect();
    for pair in dx.windows(2) {
        assert!((pair[1] - pair[0] * DAMPING).abs() < 1e-9);
    }
}

// ==================================
// 4. Idempotence
// ==================================

#[test]
fn test_same_inputs_give_bit_identical_outputs() {
    let launch = Position::new(37.0, -360.0);
    let a = generate_trajectory(launch, 117.0, 23, 720.0, 0.7);
    let b = generate_trajectory(launch, 117.0, 23, 720.0, 0.7);
    assert_eq!(a, b);
    for (pa, pb) in a.iter().zip(b.iter()) {
        assert_eq!(pa.x.to_bits(), pb.x.to_bits());
        assert_eq!(pa.y.to_bits(), pb.y.to_bits());
    }
}
