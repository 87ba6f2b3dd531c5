use rand::Rng;

use crate::physic_engine::types::Position;

/// Angle de tir vertical, utilisé pile au centre de l'écran.
pub const VERTICAL_ANGLE: f64 = 90.0;

/// Point et angle de lancement d'une fusée.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchSite {
    pub x: f64,
    pub y: f64,
    /// Angle en degrés depuis l'axe des x positifs.
    pub angle: f64,
}

impl LaunchSite {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self { x, y, angle }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Choisit un point de lancement en bas de l'écran et un angle orienté vers le centre.
///
/// `x` est un entier tiré dans `[0, width]` puis recentré ; `y` est le bas de l'écran.
pub fn select_launch_site(rng: &mut impl Rng, width: u32, height: u32) -> LaunchSite {
    let x = rng.random_range(0..=width) as f64 - width as f64 / 2.0;
    let y = -(height as f64) / 2.0;
    let angle = launch_angle_for(x, rng);

    LaunchSite { x, y, angle }
}

/// Règle à trois branches sur le signe de `x` (repère centré) :
/// - `x == 0` : tir vertical (90°)
/// - `x > 0`  : entier dans [100, 130], vers la gauche
/// - `x < 0`  : entier dans [30, 80], vers la droite
pub fn launch_angle_for(x: f64, rng: &mut impl Rng) -> f64 {
    if x == 0.0 {
        VERTICAL_ANGLE
    } else if x > 0.0 {
        (rng.random_range(10..=40) + 90) as f64
    } else {
        rng.random_range(30..=80) as f64
    }
}
