//! Générateur de trajectoire d'ascension.
//!
//! Intégration d'Euler à pas fixe : la position est avancée *avant*
//! l'amortissement horizontal et la gravité, ce qui donne la forme
//! caractéristique de la montée.

use rand::Rng;

use crate::physic_engine::types::Position;

/// Gravité constante, en unités / pas².
pub const GRAVITY: f64 = -5.0;
/// Pas de temps fixe.
pub const TIME_STEP: f64 = 0.5;
/// Amortissement multiplicatif de la vitesse horizontale, appliqué à chaque pas.
pub const DAMPING: f64 = 0.95;
/// Facteur reliant la hauteur d'écran et le nombre de pas à la vitesse initiale.
const SPEED_SCALE: f64 = 0.4;

/// Suite ordonnée de positions d'un projectile.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    positions: Vec<Position>,
}

impl Trajectory {
    pub(crate) fn from_positions(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn first(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    pub fn last(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }
}

/// Vecteur unitaire (cos, sin) d'un cap en degrés.
///
/// Les caps cardinaux (multiples de 90°) sont exacts : un tir vertical garde
/// une composante horizontale strictement nulle.
pub fn unit_heading(angle_deg: f64) -> Position {
    let normalized = angle_deg.rem_euclid(360.0);
    match normalized {
        a if a == 0.0 => Position::new(1.0, 0.0),
        a if a == 90.0 => Position::new(0.0, 1.0),
        a if a == 180.0 => Position::new(-1.0, 0.0),
        a if a == 270.0 => Position::new(0.0, -1.0),
        a => {
            let (sin, cos) = a.to_radians().sin_cos();
            Position::new(cos, sin)
        }
    }
}

/// Tire le facteur de vitesse aléatoire dans {0.7, 0.8, 0.9}.
pub fn random_speed_factor(rng: &mut impl Rng) -> f64 {
    rng.random_range(7..=9) as f64 / 10.0
}

/// Calcule la trajectoire de montée d'une fusée.
///
/// # Arguments
/// * `launch` - Point de lancement (premier élément de la trajectoire)
/// * `angle_deg` - Angle de lancement en degrés (convention trigonométrique)
/// * `steps` - Nombre de pas d'intégration
/// * `height` - Échelle de hauteur servant à dériver la vitesse initiale
/// * `speed_factor` - Facteur multiplicatif de la vitesse initiale
///
/// # Returns
/// `steps + 1` positions. Avec `steps == 0`, seul le point de lancement est renvoyé.
pub fn generate_trajectory(
    launch: Position,
    angle_deg: f64,
    steps: usize,
    height: f64,
    speed_factor: f64,
) -> Trajectory {
    let mut positions = Vec::with_capacity(steps + 1);
    positions.push(launch);

    if steps == 0 {
        return Trajectory::from_positions(positions);
    }

    let speed = height / (steps as f64 * SPEED_SCALE) * speed_factor;
    let heading = unit_heading(angle_deg);
    let mut x_speed = speed * heading.x;
    let mut y_speed = speed * heading.y;

    let mut current = launch;
    for _ in 0..steps {
        current = Position::new(current.x + x_speed * TIME_STEP, current.y + y_speed * TIME_STEP);
        positions.push(current);
        x_speed *= DAMPING;
        y_speed += GRAVITY * TIME_STEP;
    }

    Trajectory::from_positions(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_speed_factor_is_one_of_three_tenths() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let f = random_speed_factor(&mut rng);
            assert!(f == 0.7 || f == 0.8 || f == 0.9, "unexpected factor {}", f);
        }
    }

    #[test]
    fn test_first_step_uses_undamped_speed() {
        // speed = 100 / (1 * 0.4) * 1.0 = 250 ; angle 0 => x seulement
        let t = generate_trajectory(Position::ZERO, 0.0, 1, 100.0, 1.0);
        assert_eq!(t.len(), 2);
        assert_eq!(t.positions()[1], Position::new(125.0, 0.0));
    }

    #[test]
    fn test_unit_heading_cardinals_are_exact() {
        assert_eq!(unit_heading(90.0), Position::new(0.0, 1.0));
        assert_eq!(unit_heading(-90.0), Position::new(0.0, -1.0));
        assert_eq!(unit_heading(540.0), Position::new(-1.0, 0.0));
        let diag = unit_heading(45.0);
        assert!((diag.x - diag.y).abs() < 1e-12);
    }

    #[test]
    fn test_zero_steps_is_launch_only() {
        let launch = Position::new(3.0, -4.0);
        let t = generate_trajectory(launch, 45.0, 0, 800.0, 0.8);
        assert_eq!(t.positions(), &[launch]);
    }
}
