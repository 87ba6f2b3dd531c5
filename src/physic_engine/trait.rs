use crate::physic_engine::config::PhysicConfig;
use crate::physic_engine::types::{Head, Segment, UpdateResult};

pub trait PhysicEngineIterator {
    /// Retourne un itérateur sur les segments visibles (montées et branches d'explosion).
    fn iter_segments<'a>(&'a self) -> Box<dyn Iterator<Item = Segment> + 'a>;

    /// Retourne un itérateur sur les pointes des tracés en cours.
    fn iter_heads<'a>(&'a self) -> Box<dyn Iterator<Item = Head> + 'a>;
}

/// 🔧 Trait `PhysicEngine`
///
/// Interface commune des moteurs de spectacle. Le simulateur et le renderer ne
/// connaissent que ce trait, ce qui permet de brancher un moteur factice dans
/// les tests.
///
/// Les itérateurs de `PhysicEngineIterator` sont retournés en `Box<dyn Iterator>` :
/// signatures simples, au prix d'une allocation par appel, négligeable ici.
pub trait PhysicEngine {
    /// Ajuste la taille de l'écran (utile si la fenêtre de rendu change de taille).
    fn set_window_size(&mut self, width: f32, height: f32);

    /// Fait avancer le spectacle de `dt` secondes.
    /// Retourne un `UpdateResult` contenant les événements.
    fn update(&mut self, dt: f32) -> UpdateResult;

    /// Vrai quand tous les feux ont été lancés puis effacés.
    fn is_show_over(&self) -> bool;

    /// Ferme / libère le moteur.
    fn close(&mut self) {} // Par défaut, fait rien.

    fn reload_config(&mut self, config: &PhysicConfig) -> bool;

    fn get_config(&self) -> &PhysicConfig;
}

pub trait PhysicEngineFull: PhysicEngine + PhysicEngineIterator {}

impl<T: PhysicEngine + PhysicEngineIterator> PhysicEngineFull for T {}
