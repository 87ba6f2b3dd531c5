use chrono::NaiveTime;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
use log::{info, warn};
use std::{thread, time::Duration};

use crate::scheduler::alarm::{duration_until, is_due, AlarmSettings};
use crate::scheduler::clock::Clock;

/// Sommeil maximal entre deux lectures de l'horloge murale
/// (rattrape les changements d'heure et les mises en veille).
pub const MAX_SLEEP: Duration = Duration::from_secs(60);

/// Commandes envoyées au thread d'alarme.
#[derive(Debug, Clone)]
pub enum AlarmCommand {
    /// Remplace atomiquement l'heure cible et la légende.
    Reschedule(AlarmSettings),
    Cancel,
}

/// Événement unique émis par le thread d'alarme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlarmEvent {
    Fired { target: NaiveTime, caption: String },
}

/// Poignée clonable permettant d'annuler l'alarme depuis n'importe où.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Sender<AlarmCommand>,
}

impl CancelHandle {
    /// Retourne `false` si le thread est déjà terminé.
    pub fn cancel(&self) -> bool {
        self.tx.send(AlarmCommand::Cancel).is_ok()
    }
}

/// Alarme en tâche de fond : dort jusqu'à l'heure cible puis se déclenche une fois.
///
/// Le thread ne touche à aucun état de rendu : il garde sa propre copie des
/// réglages et ne communique que par canaux.
pub struct AlarmClock {
    commands: Sender<AlarmCommand>,
    events: Receiver<AlarmEvent>,
    handle: Option<thread::JoinHandle<()>>,
}

impl AlarmClock {
    pub fn start(settings: AlarmSettings, clock: impl Clock) -> Self {
        Self::start_with_max_sleep(settings, clock, MAX_SLEEP)
    }

    /// Comme `start`, avec un sommeil maximal choisi (utile en test avec une horloge manuelle).
    pub fn start_with_max_sleep(
        settings: AlarmSettings,
        clock: impl Clock,
        max_sleep: Duration,
    ) -> Self {
        let (commands_tx, commands_rx) = unbounded();
        let (events_tx, events_rx) = unbounded();

        info!(
            "⏰ Alarm armed for {} (\"{}\")",
            settings.target().format("%H:%M"),
            settings.caption()
        );
        let handle = thread::Builder::new()
            .name("alarm-clock".into())
            .spawn(move || run_alarm(settings, clock, max_sleep, commands_rx, events_tx))
            .ok();

        if handle.is_none() {
            warn!("⚠️ Could not spawn the alarm thread");
        }

        Self {
            commands: commands_tx,
            events: events_rx,
            handle,
        }
    }

    /// Envoie de nouveaux réglages. Retourne `false` si l'alarme a déjà sonné ou a été annulée.
    pub fn reschedule(&self, settings: AlarmSettings) -> bool {
        let sent = self
            .commands
            .send(AlarmCommand::Reschedule(settings))
            .is_ok();
        if !sent {
            warn!("⚠️ Alarm thread is gone, update ignored");
        }
        sent
    }

    /// Lecture non bloquante de l'événement de déclenchement.
    pub fn try_fired(&self) -> Option<AlarmEvent> {
        self.events.try_recv().ok()
    }

    /// Attend le déclenchement au plus `timeout`.
    pub fn wait_fired(&self, timeout: Duration) -> Option<AlarmEvent> {
        self.events.recv_timeout(timeout).ok()
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            tx: self.commands.clone(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Annule l'alarme (si elle tourne encore) et attend la fin du thread.
    pub fn stop(&mut self) {
        let _ = self.commands.send(AlarmCommand::Cancel);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for AlarmClock {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_alarm(
    mut settings: AlarmSettings,
    clock: impl Clock,
    max_sleep: Duration,
    commands: Receiver<AlarmCommand>,
    events: Sender<AlarmEvent>,
) {
    loop {
        let now = clock.now();
        if is_due(now, settings.target()) {
            info!(
                "🎉 Alarm fired at {} (target {})",
                now.format("%H:%M:%S"),
                settings.target().format("%H:%M")
            );
            let _ = events.send(AlarmEvent::Fired {
                target: settings.target(),
                caption: settings.caption().to_string(),
            });
            return;
        }

        let wait = duration_until(now, settings.target()).min(max_sleep);
        match commands.recv_timeout(wait) {
            Ok(AlarmCommand::Reschedule(new_settings)) => {
                info!(
                    "⏰ Alarm rescheduled for {} (\"{}\")",
                    new_settings.target().format("%H:%M"),
                    new_settings.caption()
                );
                settings = new_settings;
            }
            Ok(AlarmCommand::Cancel) | Err(RecvTimeoutError::Disconnected) => {
                info!("🛑 Alarm cancelled");
                return;
            }
            Err(RecvTimeoutError::Timeout) => {}
        }
    }
}
