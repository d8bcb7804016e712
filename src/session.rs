/// Timer transition requested by a session operation. The session machine
/// never touches the timer directly; the controller applies the command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerCommand {
    Start,
    Pause,
    Reset,
}

/// Side effects a session operation asks its caller to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// Index or completion flag changed: recompute progress, pulse haptics,
    /// persist a snapshot.
    pub changed: bool,
    /// Step to narrate, if any. Unchecking and restoring suppress narration.
    pub narrate_step: Option<usize>,
    /// Cancel any in-flight utterance (reset only).
    pub clear_narration: bool,
    pub timer: Option<TimerCommand>,
}

/// Step progression state machine for one cooking walkthrough.
///
/// `current` is `None` before the session begins. Each of the `step_count`
/// steps carries an independent completion flag owned by its checkbox; a
/// step renders as completed when its flag is set or it precedes the active
/// step. The begin/next/reset availability flags are part of the machine so
/// hosts can derive their controls without re-encoding the rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookingSession {
    step_count: usize,
    current: Option<usize>,
    checks: Vec<bool>,
    begin_enabled: bool,
    next_enabled: bool,
    reset_enabled: bool,
}

impl CookingSession {
    pub fn new(step_count: usize) -> Self {
        Self {
            step_count,
            current: None,
            checks: vec![false; step_count],
            begin_enabled: true,
            next_enabled: false,
            reset_enabled: false,
        }
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn current_step(&self) -> Option<usize> {
        self.current
    }

    pub fn checks(&self) -> &[bool] {
        &self.checks
    }

    pub fn begin_enabled(&self) -> bool {
        self.begin_enabled
    }

    pub fn next_enabled(&self) -> bool {
        self.next_enabled
    }

    pub fn reset_enabled(&self) -> bool {
        self.reset_enabled
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.current == Some(index)
    }

    /// Completed rendering: own flag set, or anywhere before the active step.
    pub fn is_completed(&self, index: usize) -> bool {
        self.checks.get(index).copied().unwrap_or(false)
            || self.current.is_some_and(|current| index < current)
    }

    /// Percentage of checked steps, rounded. Independent of the active index.
    pub fn progress_percent(&self) -> u32 {
        if self.step_count == 0 {
            return 0;
        }
        let completed = self.checks.iter().filter(|checked| **checked).count();
        (100.0 * completed as f64 / self.step_count as f64).round() as u32
    }

    /// Starts the walkthrough at step 0. No-op once started or when the
    /// recipe has no steps.
    pub fn begin(&mut self) -> StepOutcome {
        if self.current.is_some() || self.step_count == 0 {
            return StepOutcome::default();
        }
        self.current = Some(0);
        self.begin_enabled = false;
        self.next_enabled = true;
        self.reset_enabled = true;
        StepOutcome {
            changed: true,
            narrate_step: Some(0),
            clear_narration: false,
            timer: Some(TimerCommand::Start),
        }
    }

    /// Marks the active step complete and moves on. Before the session has
    /// begun this behaves as [`begin`](Self::begin); on the last step the
    /// index holds, next is disabled, begin returns, and the timer pauses.
    pub fn advance(&mut self) -> StepOutcome {
        let Some(index) = self.current else {
            return self.begin();
        };
        let newly_checked = !self.checks[index];
        self.checks[index] = true;

        if index + 1 < self.step_count {
            self.current = Some(index + 1);
            return StepOutcome {
                changed: true,
                narrate_step: Some(index + 1),
                clear_narration: false,
                timer: None,
            };
        }

        if !newly_checked && !self.next_enabled {
            // Already finished; further advances leave the index alone.
            return StepOutcome::default();
        }
        self.next_enabled = false;
        self.begin_enabled = true;
        StepOutcome {
            changed: true,
            narrate_step: Some(index),
            clear_narration: false,
            timer: Some(TimerCommand::Pause),
        }
    }

    /// Full return to the initial state. Completion flags stay as the user
    /// left them, so the progress bar keeps showing prior completion after a
    /// reset; only the active index and the controls revert.
    pub fn reset(&mut self) -> StepOutcome {
        self.current = None;
        self.begin_enabled = true;
        self.next_enabled = false;
        self.reset_enabled = false;
        StepOutcome {
            changed: true,
            narrate_step: None,
            clear_narration: true,
            timer: Some(TimerCommand::Reset),
        }
    }

    /// Applies a checkbox change. Checking pulls the active index up to at
    /// least `index`, then jumps to the lowest unchecked step after it; with
    /// none left the session counts as finished. Unchecking moves the active
    /// index back to `index` and re-enables next, without narration.
    pub fn set_check(&mut self, index: usize, checked: bool) -> StepOutcome {
        if index >= self.step_count {
            return StepOutcome::default();
        }
        self.checks[index] = checked;

        if checked {
            let landed = self.current.map_or(index, |current| current.max(index));
            self.current = Some(landed);
            let next_unchecked = (index + 1..self.step_count).find(|i| !self.checks[*i]);
            match next_unchecked {
                Some(next) => {
                    self.current = Some(next);
                    StepOutcome {
                        changed: true,
                        narrate_step: Some(next),
                        clear_narration: false,
                        timer: None,
                    }
                }
                None => {
                    self.next_enabled = false;
                    self.begin_enabled = true;
                    StepOutcome {
                        changed: true,
                        narrate_step: Some(landed),
                        clear_narration: false,
                        timer: Some(TimerCommand::Pause),
                    }
                }
            }
        } else {
            self.current = Some(index);
            self.next_enabled = true;
            StepOutcome {
                changed: true,
                narrate_step: None,
                clear_narration: false,
                timer: None,
            }
        }
    }

    /// Restores persisted completion flags and the active index, clamping an
    /// out-of-range index from a corrupt snapshot. Control availability is
    /// re-derived from the restored position so the card comes back
    /// consistent. Narration is the caller's concern and stays silent here.
    pub fn restore(&mut self, checks: &[bool], current_index: i32) {
        for (slot, value) in self.checks.iter_mut().zip(checks) {
            *slot = *value;
        }
        let max_index = self.step_count as i32 - 1;
        let clamped = current_index.clamp(-1, max_index.max(-1));
        self.current = usize::try_from(clamped).ok();

        match self.current {
            None => {
                self.begin_enabled = true;
                self.next_enabled = false;
                self.reset_enabled = false;
            }
            Some(current) => {
                let finished = (current + 1..self.step_count).all(|i| self.checks[i])
                    && self.checks[current];
                self.begin_enabled = finished;
                self.next_enabled = !finished;
                self.reset_enabled = true;
            }
        }
    }
}
