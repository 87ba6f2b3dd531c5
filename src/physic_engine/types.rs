use glam::DVec2;

/// Position dans le repère écran centré (origine au centre, y vers le haut).
pub type Position = DVec2;

/// Palette nommée des feux d'artifice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Blue,
    Red,
    Green,
    Yellow,
    Pink,
    Orange,
}

impl Color {
    pub const PALETTE: [Color; 6] = [
        Color::Blue,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Pink,
        Color::Orange,
    ];

    /// Composantes RGB normalisées (mêmes teintes que les couleurs nommées X11).
    pub fn rgb(self) -> [f32; 3] {
        match self {
            Color::Blue => [0.0, 0.0, 1.0],
            Color::Red => [1.0, 0.0, 0.0],
            Color::Green => [0.0, 1.0, 0.0],
            Color::Yellow => [1.0, 1.0, 0.0],
            Color::Pink => [1.0, 0.753, 0.796],
            Color::Orange => [1.0, 0.647, 0.0],
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Pink => "pink",
            Color::Orange => "orange",
        }
    }
}

/// Trait de crayon entre deux positions successives d'une trajectoire.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Position,
    pub to: Position,
    pub color: Color,
    pub width: f64,
}

/// Pointe d'un tracé en cours (la "tortue").
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Head {
    pub pos: Position,
    pub color: Color,
}

// ------------------------
// UpdateResult
// ------------------------
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateResult {
    /// Point de lancement d'une fusée partie pendant cette mise à jour.
    pub launched: Option<Position>,
    /// Origine d'une explosion déclenchée pendant cette mise à jour.
    pub exploded: Option<Position>,
    /// Nombre de feux effacés de l'écran.
    pub retired: usize,
    /// Vrai sur la mise à jour qui termine le spectacle.
    pub show_finished: bool,
}
