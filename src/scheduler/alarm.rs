use chrono::{NaiveTime, Timelike};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_HOUR: u32 = 17;
pub const DEFAULT_MINUTE: u32 = 0;
pub const DEFAULT_CAPTION: &str = "Home Time";

/// Saisie refusée au moment de la mise à jour de l'alarme.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlarmError {
    #[error("hour '{0}' is not a number")]
    InvalidHour(String),
    #[error("minute '{0}' is not a number")]
    InvalidMinute(String),
    #[error("hour {0} is out of range (0-23)")]
    HourOutOfRange(i64),
    #[error("minute {0} is out of range (0-59)")]
    MinuteOutOfRange(i64),
}

/// Heure cible du jour et légende affichée quand elle est atteinte.
///
/// Les deux champs sont toujours remplacés ensemble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlarmSettings {
    target: NaiveTime,
    caption: String,
}

impl Default for AlarmSettings {
    fn default() -> Self {
        Self {
            target: NaiveTime::from_hms_opt(DEFAULT_HOUR, DEFAULT_MINUTE, 0)
                .unwrap_or(NaiveTime::MIN),
            caption: DEFAULT_CAPTION.to_string(),
        }
    }
}

impl AlarmSettings {
    pub fn new(hour: u32, minute: u32, caption: impl Into<String>) -> Result<Self, AlarmError> {
        let target = validate(hour as i64, minute as i64)?;
        Ok(Self {
            target,
            caption: caption.into(),
        })
    }

    /// Valide la saisie brute du formulaire.
    pub fn parse(hour: &str, minute: &str, caption: &str) -> Result<Self, AlarmError> {
        let h = hour
            .trim()
            .parse::<i64>()
            .map_err(|_| AlarmError::InvalidHour(hour.trim().to_string()))?;
        let m = minute
            .trim()
            .parse::<i64>()
            .map_err(|_| AlarmError::InvalidMinute(minute.trim().to_string()))?;

        Ok(Self {
            target: validate(h, m)?,
            caption: caption.to_string(),
        })
    }

    pub fn target(&self) -> NaiveTime {
        self.target
    }

    pub fn hour(&self) -> u32 {
        self.target.hour()
    }

    pub fn minute(&self) -> u32 {
        self.target.minute()
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }
}

fn validate(hour: i64, minute: i64) -> Result<NaiveTime, AlarmError> {
    if !(0..=23).contains(&hour) {
        return Err(AlarmError::HourOutOfRange(hour));
    }
    if !(0..=59).contains(&minute) {
        return Err(AlarmError::MinuteOutOfRange(minute));
    }
    NaiveTime::from_hms_opt(hour as u32, minute as u32, 0).ok_or(AlarmError::HourOutOfRange(hour))
}

/// L'alarme se déclenche dès que l'heure du jour atteint ou dépasse la cible.
pub fn is_due(now: NaiveTime, target: NaiveTime) -> bool {
    now >= target
}

/// Temps restant avant la cible (nul si elle est déjà atteinte aujourd'hui).
pub fn duration_until(now: NaiveTime, target: NaiveTime) -> Duration {
    if is_due(now, target) {
        return Duration::ZERO;
    }
    (target - now).to_std().unwrap_or(Duration::ZERO)
}
