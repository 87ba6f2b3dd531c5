//! Cycle de vie d'affichage des feux d'artifice.
//!
//! Un feu passe par trois phases :
//! - `Ascending` : la trajectoire de montée est révélée position par position
//! - `Exploding` : toutes les branches avancent au même index de pas
//! - `Retired`   : plus rien n'est dessiné
//!
//! Le passage à `Retired` n'est pas une transition interne : il est imposé de
//! l'extérieur (`retire`). Dans le spectacle, la `DisplayQueue` efface
//! directement le feu de la file, avec une fenêtre de rétention fixe : quand
//! le créneau `i` se termine, le feu du créneau `i - look_behind` disparaît.

use itertools::Itertools;
use std::collections::VecDeque;

use crate::physic_engine::firework::Firework;
use crate::physic_engine::types::{Head, Position, Segment};

/// Épaisseur de crayon de la montée et de départ des branches.
pub const BASE_PEN_WIDTH: f64 = 1.0;
/// Épaississement du crayon à chaque pas d'explosion.
pub const PEN_WIDTH_INCREMENT: f64 = 0.3;
/// Nombre de créneaux pendant lesquels un feu terminé reste visible.
pub const DEFAULT_LOOK_BEHIND: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireworkPhase {
    /// Index de la dernière position de montée affichée.
    Ascending { frame: usize },
    /// Index du dernier pas d'explosion affiché, commun à toutes les branches.
    Exploding { frame: usize },
    Retired,
}

/// Événement produit par `FireworkAnimation::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationEvent {
    Advanced,
    /// La montée est terminée, l'explosion démarre.
    Exploded,
    /// Dernier pas d'explosion déjà affiché : rien ne bouge plus.
    Idle,
}

/// État d'animation d'un feu, adossé à son enregistrement immuable.
#[derive(Debug, Clone)]
pub struct FireworkAnimation {
    firework: Firework,
    phase: FireworkPhase,
}

impl FireworkAnimation {
    pub fn new(firework: Firework) -> Self {
        Self {
            firework,
            phase: FireworkPhase::Ascending { frame: 0 },
        }
    }

    pub fn firework(&self) -> &Firework {
        &self.firework
    }

    pub fn phase(&self) -> FireworkPhase {
        self.phase
    }

    fn last_ascent_frame(&self) -> usize {
        self.firework.trajectory().len().saturating_sub(1)
    }

    fn last_explosion_frame(&self) -> usize {
        self.firework
            .explosion()
            .iter()
            .map(|arm| arm.len().saturating_sub(1))
            .max()
            .unwrap_or(0)
    }

    /// Avance d'une image.
    pub fn advance(&mut self) -> AnimationEvent {
        match self.phase {
            FireworkPhase::Ascending { frame } if frame < self.last_ascent_frame() => {
                self.phase = FireworkPhase::Ascending { frame: frame + 1 };
                AnimationEvent::Advanced
            }
            FireworkPhase::Ascending { .. } => {
                self.phase = FireworkPhase::Exploding { frame: 0 };
                AnimationEvent::Exploded
            }
            FireworkPhase::Exploding { frame } if frame < self.last_explosion_frame() => {
                self.phase = FireworkPhase::Exploding { frame: frame + 1 };
                AnimationEvent::Advanced
            }
            FireworkPhase::Exploding { .. } | FireworkPhase::Retired => AnimationEvent::Idle,
        }
    }

    /// Vrai quand l'explosion a atteint son dernier pas (ou que le feu est retiré).
    pub fn is_finished(&self) -> bool {
        match self.phase {
            FireworkPhase::Ascending { .. } => false,
            FireworkPhase::Exploding { frame } => frame >= self.last_explosion_frame(),
            FireworkPhase::Retired => true,
        }
    }

    pub fn retire(&mut self) {
        self.phase = FireworkPhase::Retired;
    }

    pub fn is_retired(&self) -> bool {
        self.phase == FireworkPhase::Retired
    }

    /// Segments actuellement visibles.
    ///
    /// Pendant l'explosion, le segment qui arrive au pas `j` est tracé avec
    /// l'épaisseur `BASE_PEN_WIDTH + PEN_WIDTH_INCREMENT * j`.
    pub fn segments(&self) -> Vec<Segment> {
        let color = self.firework.color();
        match self.phase {
            FireworkPhase::Ascending { frame } => stroke(
                &self.firework.trajectory().positions()[..=frame],
                |_| BASE_PEN_WIDTH,
            )
            .map(|(from, to, width)| Segment {
                from,
                to,
                color,
                width,
            })
            .collect(),
            FireworkPhase::Exploding { frame } => self
                .firework
                .explosion()
                .iter()
                .flat_map(|arm| {
                    let end = frame.min(arm.len().saturating_sub(1));
                    stroke(&arm.positions()[..=end], |j| {
                        BASE_PEN_WIDTH + PEN_WIDTH_INCREMENT * j as f64
                    })
                })
                .map(|(from, to, width)| Segment {
                    from,
                    to,
                    color,
                    width,
                })
                .collect(),
            FireworkPhase::Retired => Vec::new(),
        }
    }

    /// Pointes des tracés en cours d'animation.
    pub fn heads(&self) -> Vec<Head> {
        let color = self.firework.color();
        match self.phase {
            FireworkPhase::Ascending { frame } => self
                .firework
                .trajectory()
                .positions()
                .get(frame)
                .map(|&pos| Head { pos, color })
                .into_iter()
                .collect(),
            FireworkPhase::Exploding { frame } => self
                .firework
                .explosion()
                .iter()
                .filter_map(|arm| arm.positions().get(frame.min(arm.len().saturating_sub(1))))
                .map(|&pos| Head { pos, color })
                .collect(),
            FireworkPhase::Retired => Vec::new(),
        }
    }
}

/// Paires de positions consécutives, avec l'épaisseur associée à l'index d'arrivée.
fn stroke<'a>(
    positions: &'a [Position],
    width_at: impl Fn(usize) -> f64 + 'a,
) -> impl Iterator<Item = (Position, Position, f64)> + 'a {
    positions
        .iter()
        .copied()
        .tuple_windows()
        .enumerate()
        .map(move |(i, (from, to))| (from, to, width_at(i + 1)))
}

/// File d'affichage à fenêtre de rétention fixe.
///
/// Chaque créneau peut porter un élément (un feu lancé) ou rester vide (les
/// créneaux de fin, qui ne servent qu'à effacer les derniers feux).
#[derive(Debug, Clone)]
pub struct DisplayQueue<T> {
    look_behind: usize,
    entries: VecDeque<(usize, T)>,
    next_slot: usize,
}

impl<T> DisplayQueue<T> {
    pub fn new(look_behind: usize) -> Self {
        Self {
            look_behind,
            entries: VecDeque::new(),
            next_slot: 0,
        }
    }

    /// Nombre total de créneaux pour `launches` lancements.
    pub fn total_slots(&self, launches: usize) -> usize {
        if launches == 0 {
            0
        } else {
            launches + self.look_behind
        }
    }

    pub fn look_behind(&self) -> usize {
        self.look_behind
    }

    /// Index du prochain créneau à ouvrir.
    pub fn next_slot(&self) -> usize {
        self.next_slot
    }

    /// Ouvre un créneau, éventuellement avec un nouvel élément. Retourne son index.
    pub fn open_slot(&mut self, item: Option<T>) -> usize {
        let slot = self.next_slot;
        if let Some(item) = item {
            self.entries.push_back((slot, item));
        }
        slot
    }

    /// Ferme le créneau courant et retire l'élément ouvert `look_behind` créneaux plus tôt.
    pub fn close_slot(&mut self) -> Option<T> {
        let closing = self.next_slot;
        self.next_slot += 1;

        let expired = closing.checked_sub(self.look_behind)?;
        match self.entries.front() {
            Some((slot, _)) if *slot <= expired => self.entries.pop_front().map(|(_, item)| item),
            _ => None,
        }
    }

    /// Élément du créneau ouvert (non encore fermé), s'il existe.
    pub fn current(&self) -> Option<&T> {
        let current = self.next_slot;
        self.entries
            .back()
            .filter(|(slot, _)| *slot == current)
            .map(|(_, item)| item)
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        let current = self.next_slot;
        self.entries
            .back_mut()
            .filter(|(slot, _)| *slot == current)
            .map(|(_, item)| item)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, item)| item)
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().map(|(_, item)| item)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
