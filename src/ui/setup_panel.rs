use imgui::{Condition, WindowFlags};
use log::{info, warn};

use crate::scheduler::{AlarmError, AlarmSettings};

const STATUS_OK_COLOR: [f32; 4] = [0.1, 0.5, 0.1, 1.0];
const STATUS_ERROR_COLOR: [f32; 4] = [0.8, 0.1, 0.1, 1.0];

/// Formulaire de réglage de l'alarme (saisie brute, validée à la mise à jour).
#[derive(Debug, Clone)]
pub struct SetupForm {
    pub hour: String,
    pub minute: String,
    pub caption: String,
    status: Result<String, String>,
}

impl SetupForm {
    /// Pré-remplit le formulaire avec les réglages actifs.
    pub fn new(settings: &AlarmSettings) -> Self {
        Self {
            hour: format!("{:02}", settings.hour()),
            minute: format!("{:02}", settings.minute()),
            caption: settings.caption().to_string(),
            status: Ok(describe(settings)),
        }
    }

    /// Ajoute `delta` heures, en bouclant sur 0..=23.
    pub fn step_hour(&mut self, delta: i64) {
        self.hour = format!("{:02}", wrap_field(&self.hour, delta, 24));
    }

    /// Ajoute `delta` minutes, en bouclant sur 0..=59.
    pub fn step_minute(&mut self, delta: i64) {
        self.minute = format!("{:02}", wrap_field(&self.minute, delta, 60));
    }

    /// Valide la saisie. En cas d'erreur, les réglages actifs ne changent pas.
    pub fn submit(&mut self) -> Result<AlarmSettings, AlarmError> {
        match AlarmSettings::parse(&self.hour, &self.minute, &self.caption) {
            Ok(settings) => {
                info!("⏰ Alarm updated: {}", describe(&settings));
                self.hour = format!("{:02}", settings.hour());
                self.minute = format!("{:02}", settings.minute());
                self.status = Ok(describe(&settings));
                Ok(settings)
            }
            Err(e) => {
                warn!("⚠️ Alarm update rejected: {}", e);
                self.status = Err(e.to_string());
                Err(e)
            }
        }
    }

    /// Ligne d'état : cible appliquée, ou dernière erreur de validation.
    pub fn status(&self) -> &Result<String, String> {
        &self.status
    }

    /// Dessine le panneau sur toute la fenêtre.
    /// Retourne les nouveaux réglages quand "Update" est validé.
    pub fn draw(&mut self, ui: &imgui::Ui) -> Option<AlarmSettings> {
        let display_size = ui.io().display_size;
        let flags = WindowFlags::NO_DECORATION | WindowFlags::NO_MOVE | WindowFlags::NO_RESIZE;

        ui.window("Fireworks Timer")
            .position([0.0, 0.0], Condition::Always)
            .size(display_size, Condition::Always)
            .flags(flags)
            .build(|| {
                ui.text("Launch the fireworks at:");
                ui.separator();

                let delta = draw_stepper(ui, "Hour", &mut self.hour);
                if delta != 0 {
                    self.step_hour(delta);
                }
                let delta = draw_stepper(ui, "Minute", &mut self.minute);
                if delta != 0 {
                    self.step_minute(delta);
                }

                ui.set_next_item_width(-1.0);
                ui.input_text("##caption", &mut self.caption)
                    .hint("Caption")
                    .build();

                ui.spacing();
                let submitted = ui.button("Update");

                match &self.status {
                    Ok(text) => ui.text_colored(STATUS_OK_COLOR, text),
                    Err(text) => ui.text_colored(STATUS_ERROR_COLOR, text),
                }

                if submitted {
                    self.submit().ok()
                } else {
                    None
                }
            })
            .flatten()
    }
}

/// Champ numérique encadré de boutons -/+. Retourne le pas demandé (-1, 0 ou 1).
fn draw_stepper(ui: &imgui::Ui, label: &str, field: &mut String) -> i64 {
    let _id = ui.push_id(label);
    let mut delta = 0;

    if ui.button("-") {
        delta = -1;
    }
    ui.same_line();
    ui.set_next_item_width(60.0);
    ui.input_text("##value", field).chars_decimal(true).build();
    ui.same_line();
    if ui.button("+") {
        delta = 1;
    }
    ui.same_line();
    ui.text(label);

    delta
}

fn describe(settings: &AlarmSettings) -> String {
    format!(
        "Alarm set for {:02}:{:02} ({})",
        settings.hour(),
        settings.minute(),
        settings.caption()
    )
}

/// Valeur suivante d'un champ numérique, bouclée sur `0..modulo`.
/// Une saisie non numérique repart de 0.
fn wrap_field(raw: &str, delta: i64, modulo: i64) -> i64 {
    let current = raw.trim().parse::<i64>().unwrap_or(0);
    (current + delta).rem_euclid(modulo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_field() {
        assert_eq!(wrap_field("23", 1, 24), 0);
        assert_eq!(wrap_field("0", -1, 60), 59);
        assert_eq!(wrap_field("abc", 1, 24), 1);
        assert_eq!(wrap_field(" 7 ", 0, 24), 7);
    }
}
