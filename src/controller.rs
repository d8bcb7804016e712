use crate::capabilities::{Haptics, Narrator, STEP_PULSE_MS};
use crate::cooking_timer::CookingTimer;
use crate::models::Recipe;
use crate::scaling::parse_servings;
use crate::session::{CookingSession, StepOutcome, TimerCommand};
use crate::snapshot::{CardSnapshot, TimerSnapshot};
use crate::store::SnapshotStore;
use chrono::Utc;

/// One discrete user input. Everything the card's surface can emit —
/// buttons, checkboxes, the servings stepper, panel and narration toggles,
/// keyboard shortcuts — funnels into this enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Begin,
    Advance,
    Reset,
    SetStepChecked { index: usize, checked: bool },
    SetServings(String),
    IncrementServings,
    DecrementServings,
    ToggleIngredients,
    ToggleSteps,
    ToggleNarration,
    Print,
}

/// Owns the whole card: recipe data, session state machine, timer, scaling
/// and visibility state, and the injected platform capabilities.
///
/// Every state-changing action ends in a snapshot save; step changes also
/// narrate the now-current step (when narration is on) and pulse haptics.
/// The host drives [`tick`](Self::tick) on a `TICK_INTERVAL_MS` cadence
/// while the timer runs to keep the display text fresh.
#[derive(Debug)]
pub struct RecipeCard<S, N, H> {
    recipe: Recipe,
    session: CookingSession,
    timer: CookingTimer,
    target_servings: u32,
    ingredients_hidden: bool,
    steps_hidden: bool,
    tts_enabled: bool,
    timer_display: String,
    store: S,
    narrator: N,
    haptics: H,
}

impl<S, N, H> RecipeCard<S, N, H>
where
    S: SnapshotStore,
    N: Narrator,
    H: Haptics,
{
    pub fn new(recipe: Recipe, store: S, narrator: N, haptics: H) -> Self {
        let step_count = recipe.step_count();
        let target_servings = recipe.base_servings.max(1);
        Self {
            recipe,
            session: CookingSession::new(step_count),
            timer: CookingTimer::new(),
            target_servings,
            ingredients_hidden: false,
            steps_hidden: false,
            tts_enabled: false,
            timer_display: "00:00".to_string(),
            store,
            narrator,
            haptics,
        }
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    pub fn session(&self) -> &CookingSession {
        &self.session
    }

    pub fn timer(&self) -> &CookingTimer {
        &self.timer
    }

    pub fn target_servings(&self) -> u32 {
        self.target_servings
    }

    pub fn ingredients_hidden(&self) -> bool {
        self.ingredients_hidden
    }

    pub fn steps_hidden(&self) -> bool {
        self.steps_hidden
    }

    pub fn tts_enabled(&self) -> bool {
        self.tts_enabled
    }

    pub fn timer_display(&self) -> &str {
        &self.timer_display
    }

    pub fn apply(&mut self, action: Action) {
        self.apply_at(action, Utc::now().timestamp_millis());
    }

    pub fn apply_at(&mut self, action: Action, now_ms: i64) {
        match action {
            Action::Begin => {
                let outcome = self.session.begin();
                self.finish_step(outcome, now_ms);
            }
            Action::Advance => {
                let outcome = self.session.advance();
                self.finish_step(outcome, now_ms);
            }
            Action::Reset => {
                let outcome = self.session.reset();
                self.finish_step(outcome, now_ms);
            }
            Action::SetStepChecked { index, checked } => {
                let outcome = self.session.set_check(index, checked);
                self.finish_step(outcome, now_ms);
            }
            Action::SetServings(input) => {
                self.target_servings = parse_servings(&input, self.recipe.base_servings);
                self.save();
            }
            Action::IncrementServings => {
                self.target_servings = self.target_servings.saturating_add(1);
                self.save();
            }
            Action::DecrementServings => {
                self.target_servings = self.target_servings.saturating_sub(1).max(1);
                self.save();
            }
            Action::ToggleIngredients => {
                self.ingredients_hidden = !self.ingredients_hidden;
                self.save();
            }
            Action::ToggleSteps => {
                self.steps_hidden = !self.steps_hidden;
                self.save();
            }
            Action::ToggleNarration => {
                self.tts_enabled = !self.tts_enabled;
                self.save();
            }
            // The print dialog belongs to the host shell; no card state moves.
            Action::Print => {}
        }
    }

    /// Display refresh only: recomputes the timer text. Carries no state and
    /// writes no snapshot.
    pub fn tick(&mut self, now_ms: i64) {
        self.timer_display = self.timer.display(now_ms);
    }

    /// Reads the persisted snapshot once at startup. Servings, visibility,
    /// narration flag and completion flags land before the step index so
    /// completed rendering comes back consistent; the timer restores last
    /// and resumes from its persisted start epoch when it was running.
    /// Nothing is narrated and nothing is re-saved.
    pub fn restore(&mut self) {
        let Some(snapshot) = self.store.load() else {
            return;
        };
        self.target_servings = snapshot.servings.max(1);
        self.ingredients_hidden = snapshot.ingredients_hidden;
        self.steps_hidden = snapshot.steps_hidden;
        self.tts_enabled = snapshot.tts;
        self.session
            .restore(&snapshot.checks, snapshot.current_step_index);
        self.timer = CookingTimer::from_snapshot(
            snapshot.timer.running,
            snapshot.timer.start_epoch,
            snapshot.timer.paused_elapsed,
        );
        self.timer_display = snapshot.timer.display;
    }

    fn finish_step(&mut self, outcome: StepOutcome, now_ms: i64) {
        if let Some(command) = outcome.timer {
            match command {
                TimerCommand::Start => self.timer.start(now_ms),
                TimerCommand::Pause => self.timer.pause(now_ms),
                TimerCommand::Reset => self.timer.reset(),
            }
            self.timer_display = self.timer.display(now_ms);
        }
        if outcome.clear_narration {
            self.narrator.cancel();
        }
        if !outcome.changed {
            return;
        }
        if self.tts_enabled {
            if let Some(text) = outcome
                .narrate_step
                .and_then(|index| self.recipe.step_text(index))
            {
                self.narrator.speak(text);
            }
        }
        self.haptics.vibrate(STEP_PULSE_MS);
        self.save();
    }

    fn save(&mut self) {
        let snapshot = self.snapshot();
        self.store.save(&snapshot);
    }

    /// Current state in its persisted form.
    pub fn snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            servings: self.target_servings,
            ingredients_hidden: self.ingredients_hidden,
            steps_hidden: self.steps_hidden,
            tts: self.tts_enabled,
            checks: self.session.checks().to_vec(),
            current_step_index: self
                .session
                .current_step()
                .map_or(-1, |index| index as i32),
            timer: TimerSnapshot {
                running: self.timer.is_running(),
                start_epoch: self.timer.start_epoch_ms(),
                paused_elapsed: self.timer.paused_elapsed_ms(),
                display: self.timer_display.clone(),
            },
        }
    }
}
