/// Haptic pulse length for a step change, in milliseconds.
pub const STEP_PULSE_MS: u32 = 15;

/// Synthesized speech read-out of step text.
///
/// Fire-and-forget: implementations must never fail observably or stall the
/// caller. `speak` must cancel any in-flight utterance first so at most one
/// is audible at a time.
pub trait Narrator {
    fn speak(&mut self, text: &str);
    fn cancel(&mut self);
}

/// Short vibration request. Platforms without vibration support no-op.
pub trait Haptics {
    fn vibrate(&mut self, duration_ms: u32);
}

/// Narrator for platforms without speech synthesis.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNarrator;

impl Narrator for SilentNarrator {
    fn speak(&mut self, _text: &str) {}

    fn cancel(&mut self) {}
}

/// Haptics for platforms without vibration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate(&mut self, _duration_ms: u32) {}
}
