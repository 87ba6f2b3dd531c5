use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct RendererConfig {
    /// Opacité de la fenêtre plein écran (0 = invisible, 1 = opaque).
    pub overlay_opacity: f32,
    /// Couleur de fond du canevas.
    pub clear_color: [f32; 3],
    /// Facteur appliqué à l'épaisseur des tracés.
    pub pen_width_scale: f32,
    /// Taille (en pixels) des pointes de tracé.
    pub head_point_size: f32,
    /// Facteur d'agrandissement de la police de la légende.
    pub caption_scale: f32,
    pub caption_color: [f32; 4],
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            overlay_opacity: 0.3,
            clear_color: [1.0, 1.0, 1.0],
            pen_width_scale: 1.0,
            head_point_size: 3.0,
            caption_scale: 6.0,
            caption_color: [0.0, 0.0, 0.0, 1.0],
        }
    }
}

impl RendererConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
