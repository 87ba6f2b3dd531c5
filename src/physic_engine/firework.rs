use derive_builder::Builder;
use rand::Rng;

use crate::physic_engine::explosion::{generate_explosion, Explosion};
use crate::physic_engine::launch_site::{select_launch_site, LaunchSite};
use crate::physic_engine::trajectory::{generate_trajectory, random_speed_factor, Trajectory};
use crate::physic_engine::types::Color;

/// Bornes (incluses) du nombre de branches d'une explosion aléatoire.
pub const LINES_RANGE: (usize, usize) = (10, 20);
/// Bornes (incluses) du nombre de pas d'un feu aléatoire.
pub const STEPS_RANGE: (usize, usize) = (15, 25);
/// Échelle de hauteur utilisée quand le point de lancement est imposé.
pub const EXPLICIT_LAUNCH_HEIGHT: f64 = 300.0;

/// Un feu d'artifice complet : montée puis explosion.
///
/// Simple enregistrement immuable, sans aucune dépendance au rendu.
#[derive(Debug, Clone, PartialEq)]
pub struct Firework {
    color: Color,
    lines: usize,
    steps: usize,
    trajectory: Trajectory,
    explosion: Explosion,
}

impl Firework {
    /// Construction déterministe à partir d'un lancement connu.
    pub fn from_launch(
        color: Color,
        lines: usize,
        steps: usize,
        launch: LaunchSite,
        height: f64,
        speed_factor: f64,
    ) -> Self {
        let trajectory =
            generate_trajectory(launch.position(), launch.angle, steps, height, speed_factor);
        // Une trajectoire contient toujours au moins le point de lancement.
        let origin = trajectory.last().unwrap_or_else(|| launch.position());
        let explosion = generate_explosion(origin, lines, steps);

        Self {
            color,
            lines,
            steps,
            trajectory,
            explosion,
        }
    }

    /// Feu entièrement aléatoire pour un écran de `width` x `height` pixels.
    pub fn random(rng: &mut impl Rng, width: u32, height: u32) -> Self {
        let color = Color::PALETTE[rng.random_range(0..Color::PALETTE.len())];
        let lines = rng.random_range(LINES_RANGE.0..=LINES_RANGE.1);
        let steps = rng.random_range(STEPS_RANGE.0..=STEPS_RANGE.1);
        let launch = select_launch_site(rng, width, height);
        let speed_factor = random_speed_factor(rng);

        Self::from_launch(color, lines, steps, launch, height as f64, speed_factor)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn lines(&self) -> usize {
        self.lines
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn explosion(&self) -> &Explosion {
        &self.explosion
    }
}

/// Paramètres de construction d'un feu, avec lancement imposé ou aléatoire.
///
/// ```ignore
/// let spec = FireworkSpecBuilder::default()
///     .color(Color::Red)
///     .lines(12)
///     .steps(20)
///     .launch(Some(LaunchSite::new(0.0, -300.0, 90.0)))
///     .build()?;
/// ```
#[derive(Clone, Builder, Debug)]
#[builder(pattern = "owned", build_fn(error = "anyhow::Error"))]
pub struct FireworkSpec {
    pub color: Color,

    #[builder(default = "LINES_RANGE.0")]
    pub lines: usize,

    #[builder(default = "STEPS_RANGE.0")]
    pub steps: usize,

    /// Lancement imposé ; `None` tire un site aléatoire sur l'écran.
    #[builder(default)]
    pub launch: Option<LaunchSite>,

    /// Échelle de hauteur pour un lancement imposé.
    #[builder(default = "EXPLICIT_LAUNCH_HEIGHT")]
    pub launch_height: f64,

    /// Facteur de vitesse figé ; `None` le tire au hasard.
    #[builder(default)]
    pub speed_factor: Option<f64>,
}

impl FireworkSpec {
    pub fn build_firework(&self, rng: &mut impl Rng, width: u32, height: u32) -> Firework {
        let speed_factor = self
            .speed_factor
            .unwrap_or_else(|| random_speed_factor(rng));

        let (launch, scale) = match self.launch {
            Some(site) => (site, self.launch_height),
            None => (select_launch_site(rng, width, height), height as f64),
        };

        Firework::from_launch(self.color, self.lines, self.steps, launch, scale, speed_factor)
    }
}
