#[cfg(debug_assertions)]
use log::debug;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::physic_engine::{
    config::PhysicConfig,
    display_queue::{AnimationEvent, DisplayQueue, FireworkAnimation, FireworkPhase},
    firework::Firework,
    types::{Head, Segment, UpdateResult},
    PhysicEngine, PhysicEngineIterator,
};

/// Au-delà de ce retard (en images), le temps accumulé est abandonné.
const MAX_PENDING_FRAMES: f32 = 3.0;

/// Moteur du spectacle : lance `firework_count` feux l'un après l'autre.
///
/// Chaque créneau de la `DisplayQueue` anime un feu complet (montée puis
/// explosion). Quand il se termine, le feu lancé `look_behind` créneaux plus tôt
/// est effacé. Les derniers créneaux sont vides et ne servent qu'à effacer la fin.
#[derive(Debug)]
pub struct PhysicEngineFireworks {
    config: PhysicConfig,
    rng: StdRng,
    window_width: u32,
    window_height: u32,

    queue: DisplayQueue<FireworkAnimation>,
    launched: usize,
    slot_open: bool,
    accumulator: f32,
    show_over: bool,
}

impl PhysicEngineFireworks {
    /// Crée le moteur avec un générateur aléatoire injecté (reproductible en test).
    pub fn new(config: &PhysicConfig, window_width: f32, window_height: f32, rng: StdRng) -> Self {
        Self {
            config: config.clone(),
            rng,
            window_width: window_width.max(0.0) as u32,
            window_height: window_height.max(0.0) as u32,
            queue: DisplayQueue::new(config.look_behind),
            launched: 0,
            slot_open: false,
            accumulator: 0.0,
            show_over: false,
        }
    }

    /// Graine issue de la configuration, ou du système à défaut.
    pub fn from_config(config: &PhysicConfig, window_width: f32, window_height: f32) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                info!("🎲 Seeded show (seed = {})", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        };
        Self::new(config, window_width, window_height, rng)
    }

    fn total_slots(&self) -> usize {
        self.queue.total_slots(self.config.firework_count)
    }

    /// Avance le spectacle d'une image.
    fn step_frame(&mut self, result: &mut UpdateResult) {
        if !self.slot_open {
            if self.queue.next_slot() >= self.total_slots() {
                self.finish_show(result);
                return;
            }
            self.open_slot(result);
            return;
        }

        let event = self
            .queue
            .current_mut()
            .map(FireworkAnimation::advance)
            .unwrap_or(AnimationEvent::Idle);

        match event {
            AnimationEvent::Advanced => {}
            AnimationEvent::Exploded => {
                result.exploded = self
                    .queue
                    .current_mut()
                    .map(|anim| anim.firework().explosion().origin());
            }
            AnimationEvent::Idle => self.close_slot(result),
        }
    }

    fn open_slot(&mut self, result: &mut UpdateResult) {
        let item = if self.launched < self.config.firework_count {
            let firework = Firework::random(&mut self.rng, self.window_width, self.window_height);
            result.launched = firework.trajectory().first();
            self.launched += 1;

            #[cfg(debug_assertions)]
            debug!(
                "🎆 Firework #{} ready: {} / {} lines / {} steps",
                self.launched,
                firework.color().name(),
                firework.lines(),
                firework.steps()
            );
            Some(FireworkAnimation::new(firework))
        } else {
            None
        };

        self.queue.open_slot(item);
        self.slot_open = true;
    }

    fn close_slot(&mut self, result: &mut UpdateResult) {
        if self.queue.close_slot().is_some() {
            result.retired += 1;
        }
        self.slot_open = false;

        if self.queue.next_slot() >= self.total_slots() {
            self.finish_show(result);
        }
    }

    fn finish_show(&mut self, result: &mut UpdateResult) {
        if !self.show_over {
            info!("🎇 Show over: {} fireworks launched", self.launched);
            self.show_over = true;
            result.show_finished = true;
        }
    }
}

impl PhysicEngine for PhysicEngineFireworks {
    fn set_window_size(&mut self, width: f32, height: f32) {
        self.window_width = width.max(0.0) as u32;
        self.window_height = height.max(0.0) as u32;
    }

    fn update(&mut self, dt: f32) -> UpdateResult {
        let mut result = UpdateResult::default();
        if self.show_over {
            return result;
        }

        let interval = self.config.frame_interval;
        if interval <= 0.0 {
            // Pas de rythme imposé : une image par mise à jour.
            self.step_frame(&mut result);
            return result;
        }

        self.accumulator = (self.accumulator + dt).min(interval * MAX_PENDING_FRAMES);
        while self.accumulator >= interval && !self.show_over {
            self.accumulator -= interval;
            self.step_frame(&mut result);
        }

        result
    }

    fn is_show_over(&self) -> bool {
        self.show_over
    }

    fn close(&mut self) {
        info!("🧹 Fermeture du moteur de spectacle");
        self.queue = DisplayQueue::new(self.config.look_behind);
    }

    fn reload_config(&mut self, config: &PhysicConfig) -> bool {
        // Une fois le spectacle commencé, nombre de feux et fenêtre de
        // rétention sont figés : seuls le rythme et la graine changent.
        if self.launched > 0 {
            self.config = PhysicConfig {
                firework_count: self.config.firework_count,
                look_behind: self.config.look_behind,
                ..config.clone()
            };
            return false;
        }

        let look_behind_updated = config.look_behind != self.config.look_behind;
        self.config = config.clone();
        if look_behind_updated {
            info!(
                "Reinitializing display queue: look_behind -> {}",
                config.look_behind
            );
            self.queue = DisplayQueue::new(config.look_behind);
        }
        look_behind_updated
    }

    fn get_config(&self) -> &PhysicConfig {
        &self.config
    }
}

impl PhysicEngineIterator for PhysicEngineFireworks {
    fn iter_segments<'a>(&'a self) -> Box<dyn Iterator<Item = Segment> + 'a> {
        Box::new(self.queue.iter().flat_map(FireworkAnimation::segments))
    }

    fn iter_heads<'a>(&'a self) -> Box<dyn Iterator<Item = Head> + 'a> {
        Box::new(self.queue.iter().flat_map(FireworkAnimation::heads))
    }
}

/// Accès en lecture réservés aux tests.
pub trait PhysicEngineTestHelpers {
    fn launched_count(&self) -> usize;
    fn visible_count(&self) -> usize;
    fn current_phase(&self) -> Option<FireworkPhase>;
    fn window_size(&self) -> (u32, u32);
}

impl PhysicEngineTestHelpers for PhysicEngineFireworks {
    fn launched_count(&self) -> usize {
        self.launched
    }

    fn visible_count(&self) -> usize {
        self.queue.len()
    }

    fn current_phase(&self) -> Option<FireworkPhase> {
        if !self.slot_open {
            return None;
        }
        self.queue.current().map(FireworkAnimation::phase)
    }

    fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
