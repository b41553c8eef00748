//! Boot splash sequence
//!
//! The fixed-duration startup animation: seven lines of copy revealed on a
//! schedule, a progress bar tracking how many have appeared, and the four
//! stage indicators lighting up along the way. Purely time-driven; the
//! caller feeds elapsed time from the event loop and flips the session to
//! the desktop once the sequence reports completion.

use std::time::Duration;

/// A boot line and how long it stays before the next one.
#[derive(Debug, Clone, Copy)]
pub struct BootStep {
    pub text: &'static str,
    pub duration: Duration,
}

/// The boot schedule, line by line.
pub const BOOT_STEPS: &[BootStep] = &[
    BootStep { text: "Inicializando sistema...", duration: Duration::from_millis(2000) },
    BootStep { text: "Cargando perfil de desarrollador...", duration: Duration::from_millis(2500) },
    BootStep { text: "Daniel González Pascual", duration: Duration::from_millis(2800) },
    BootStep { text: "Desarrollador Backend Python", duration: Duration::from_millis(2200) },
    BootStep { text: "Pasión por la innovación", duration: Duration::from_millis(2200) },
    BootStep { text: "Transformando ideas en código eficiente", duration: Duration::from_millis(2500) },
    BootStep { text: "Sistema listo ✓", duration: Duration::from_millis(1500) },
];

/// Delay before the first line appears.
const INITIAL_DELAY: Duration = Duration::from_millis(800);

/// Hold on the finished screen before the desktop mounts.
const COMPLETE_DELAY: Duration = Duration::from_millis(2000);

/// Stage indicators under the progress bar; each lights once the given
/// number of lines has appeared.
pub const STAGES: &[(&str, usize)] = &[
    ("KERNEL", 1),
    ("USER", 3),
    ("SERVICES", 5),
    ("READY", 7),
];

/// Time-driven boot sequence state.
#[derive(Debug)]
pub struct BootSequence {
    /// Lines revealed so far.
    shown: usize,
    elapsed_in_step: Duration,
    complete: bool,
    /// Durations are divided by this (animation speed multiplier).
    speed: f64,
}

impl BootSequence {
    pub fn new(speed: f64) -> Self {
        Self {
            shown: 0,
            elapsed_in_step: Duration::ZERO,
            complete: false,
            speed: if speed > 0.0 { speed } else { 1.0 },
        }
    }

    /// Instantly-finished sequence for animation-less runs.
    pub fn skipped() -> Self {
        Self {
            shown: BOOT_STEPS.len(),
            elapsed_in_step: Duration::ZERO,
            complete: true,
            speed: 1.0,
        }
    }

    fn scaled(&self, d: Duration) -> Duration {
        d.div_f64(self.speed)
    }

    /// Delay before the next transition fires.
    fn next_delay(&self) -> Duration {
        if self.shown == 0 {
            self.scaled(INITIAL_DELAY)
        } else if self.shown < BOOT_STEPS.len() {
            self.scaled(BOOT_STEPS[self.shown - 1].duration)
        } else {
            self.scaled(COMPLETE_DELAY)
        }
    }

    /// Advance by a frame's worth of wall time.
    pub fn advance(&mut self, dt: Duration) {
        if self.complete {
            return;
        }
        self.elapsed_in_step += dt;
        while !self.complete && self.elapsed_in_step >= self.next_delay() {
            self.elapsed_in_step -= self.next_delay();
            if self.shown < BOOT_STEPS.len() {
                self.shown += 1;
            } else {
                self.complete = true;
            }
        }
    }

    /// The line currently on screen, if any has appeared yet.
    pub fn current_text(&self) -> Option<&'static str> {
        if self.shown == 0 {
            None
        } else {
            Some(BOOT_STEPS[self.shown.min(BOOT_STEPS.len()) - 1].text)
        }
    }

    /// Progress ratio for the bar (0.0 ..= 1.0).
    pub fn progress(&self) -> f64 {
        self.shown as f64 / BOOT_STEPS.len() as f64
    }

    /// Which stage indicators are lit.
    pub fn lit_stages(&self) -> Vec<(&'static str, bool)> {
        STAGES
            .iter()
            .map(|(name, threshold)| (*name, self.shown >= *threshold))
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Time spent on the current line, feeding the typewriter reveal.
    pub fn elapsed_in_step(&self) -> Duration {
        self.elapsed_in_step
    }
}
