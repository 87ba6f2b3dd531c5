use chrono::{Local, NaiveTime};
use std::sync::{Arc, Mutex};

/// Source de l'heure du jour, injectée dans le thread d'alarme.
pub trait Clock: Send + 'static {
    fn now(&self) -> NaiveTime;
}

/// Horloge murale locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Horloge pilotée à la main, partagée entre le test et le thread d'alarme.
#[derive(Debug, Clone)]
pub struct ManualClock {
    time: Arc<Mutex<NaiveTime>>,
}

impl ManualClock {
    pub fn new(time: NaiveTime) -> Self {
        Self {
            time: Arc::new(Mutex::new(time)),
        }
    }

    pub fn set(&self, time: NaiveTime) {
        let mut guard = self.time.lock().unwrap_or_else(|e| e.into_inner());
        *guard = time;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveTime {
        *self.time.lock().unwrap_or_else(|e| e.into_inner())
    }
}
