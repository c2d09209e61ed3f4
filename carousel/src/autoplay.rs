/// Clock-driven auto-rotation timer.
///
/// The host feeds time through [`AutoRotation::tick`]. A freshly started timer schedules its
/// first deadline on the next tick; a due tick fires once and reschedules from `now_ms`, so a
/// host that stalls (or a backgrounded page) never gets a burst of catch-up ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AutoRotation {
    delay_ms: u64,
    phase: Phase,
    stopped_by_user: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Stopped,
    Armed,
    Scheduled { due_ms: u64 },
}

impl AutoRotation {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms: delay_ms.max(1),
            phase: Phase::Stopped,
            stopped_by_user: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.phase != Phase::Stopped
    }

    /// `true` once a user click has ended auto-rotation.
    pub fn is_stopped_by_user(&self) -> bool {
        self.stopped_by_user
    }

    /// Starts the timer. Starting a running timer keeps its current deadline.
    pub fn start(&mut self) {
        if self.phase == Phase::Stopped {
            self.phase = Phase::Armed;
        }
    }

    /// Stops the timer. Safe to call when it is not running.
    pub fn stop(&mut self) {
        self.phase = Phase::Stopped;
    }

    /// Stops the timer for good: focus changes no longer restart it.
    pub fn stop_by_user(&mut self) {
        self.stopped_by_user = true;
        self.stop();
    }

    /// Restarts after the host regained focus, unless a user click stopped rotation.
    pub fn resume(&mut self) {
        if !self.stopped_by_user {
            self.start();
        }
    }

    /// Advances the timer. Returns `true` when a rotation step is due.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match self.phase {
            Phase::Stopped => false,
            Phase::Armed => {
                self.phase = Phase::Scheduled {
                    due_ms: now_ms.saturating_add(self.delay_ms),
                };
                false
            }
            Phase::Scheduled { due_ms } if now_ms >= due_ms => {
                self.phase = Phase::Scheduled {
                    due_ms: now_ms.saturating_add(self.delay_ms),
                };
                true
            }
            Phase::Scheduled { .. } => false,
        }
    }
}
