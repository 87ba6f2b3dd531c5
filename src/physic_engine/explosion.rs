//! Générateur d'explosion radiale.
//!
//! Chaque branche part de l'origine avec un cap réparti uniformément sur 360°,
//! reçoit une impulsion initiale, puis retombe sous l'effet de la gravité
//! pendant que sa vitesse horizontale s'amortit.

use crate::physic_engine::trajectory::{unit_heading, Trajectory, DAMPING, GRAVITY};
use crate::physic_engine::types::Position;

/// Vitesse initiale de chaque branche.
pub const EXPLOSION_SPEED: f64 = 20.0;
/// Facteur de durée appliqué à chaque déplacement.
pub const EXPLOSION_TIME: f64 = 0.5;

/// Ensemble des trajectoires issues d'une même origine.
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    origin: Position,
    arms: Vec<Trajectory>,
}

impl Explosion {
    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn arms(&self) -> &[Trajectory] {
        &self.arms
    }

    pub fn arm_count(&self) -> usize {
        self.arms.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Trajectory> {
        self.arms.iter()
    }
}

/// Cap initial (en degrés) de la branche `i` parmi `lines`.
pub fn arm_heading(lines: usize, i: usize) -> f64 {
    360.0 / lines as f64 * i as f64
}

/// Calcule les `lines` branches d'une explosion partant de `origin`.
///
/// Chaque branche contient `steps + 1` positions : l'origine, le point
/// d'impulsion, puis `steps - 1` points amortis. `lines == 0` donne une
/// explosion vide et `steps == 0` des branches réduites à l'origine.
pub fn generate_explosion(origin: Position, lines: usize, steps: usize) -> Explosion {
    let arms = (0..lines)
        .map(|i| generate_arm(origin, arm_heading(lines, i), steps))
        .collect();

    Explosion { origin, arms }
}

fn generate_arm(origin: Position, heading_deg: f64, steps: usize) -> Trajectory {
    let mut positions = Vec::with_capacity(steps + 1);
    positions.push(origin);

    if steps == 0 {
        return Trajectory::from_positions(positions);
    }

    let heading = unit_heading(heading_deg);
    let mut x_speed = EXPLOSION_SPEED * heading.x;
    let mut y_speed = EXPLOSION_SPEED * heading.y;

    let mut current = Position::new(
        x_speed * EXPLOSION_TIME + origin.x,
        y_speed * EXPLOSION_TIME + origin.y,
    );
    positions.push(current);

    for _ in 0..steps - 1 {
        y_speed += GRAVITY * EXPLOSION_TIME;
        x_speed *= DAMPING;
        current = Position::new(
            x_speed * EXPLOSION_TIME + current.x,
            y_speed * EXPLOSION_TIME + current.y,
        );
        positions.push(current);
    }

    Trajectory::from_positions(positions)
}
