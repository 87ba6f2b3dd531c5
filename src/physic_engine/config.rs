use serde::Deserialize;

use crate::physic_engine::display_queue::DEFAULT_LOOK_BEHIND;

/// Réglages de présentation du spectacle.
///
/// Les constantes physiques (gravité, amortissement, pas de temps) restent
/// fixes dans les générateurs : seul le rythme du spectacle se configure ici.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PhysicConfig {
    /// Nombre de feux lancés par le spectacle.
    pub firework_count: usize,
    /// Nombre de créneaux pendant lesquels un feu terminé reste affiché.
    pub look_behind: usize,
    /// Durée d'une image d'animation, en secondes.
    pub frame_interval: f32,
    /// Graine du générateur aléatoire ; `None` pour une graine système.
    pub seed: Option<u64>,
}

impl Default for PhysicConfig {
    fn default() -> Self {
        Self {
            firework_count: 10,
            look_behind: DEFAULT_LOOK_BEHIND,
            frame_interval: 1.0 / 30.0,
            seed: None,
        }
    }
}

impl PhysicConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
