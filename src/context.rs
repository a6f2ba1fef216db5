//! Application Context
//!
//! Shared state provided via Leptos Context API, including the motivational
//! feedback emitter.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a motivational message stays on screen.
pub const MOTIVATION_CLEAR_MS: u32 = 2_500;

/// Fixed message pool for completion feedback.
const MOTIVATIONAL_MESSAGES: &[&str] = &[
    "Great job! Keep up the good work!",
    "Another task down, you're on a roll!",
    "You're making awesome progress!",
    "Way to go! Every step counts.",
    "Fantastic! Keep crushing those tasks!",
    "Success is built one task at a time!",
    "You did it! Celebrate your wins!",
];

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed motivational message - read
    pub motivation: ReadSignal<Option<&'static str>>,
    /// Currently displayed motivational message - write
    set_motivation: WriteSignal<Option<&'static str>>,
    /// Generation counter so a stale clear timer never wipes a newer message
    epoch: StoredValue<u32>,
}

impl AppContext {
    pub fn new(
        motivation: (ReadSignal<Option<&'static str>>, WriteSignal<Option<&'static str>>),
    ) -> Self {
        Self {
            motivation: motivation.0,
            set_motivation: motivation.1,
            epoch: StoredValue::new(0),
        }
    }

    /// Show a random motivational message, self-clearing after a fixed delay.
    ///
    /// A new trigger while a message is showing replaces it and resets the
    /// timer; the superseded timer finds its generation stale and does
    /// nothing.
    pub fn celebrate(&self) {
        let message = pick_message(js_sys::Math::random());
        self.epoch.update_value(|e| *e = e.wrapping_add(1));
        let generation = self.epoch.get_value();
        self.set_motivation.set(Some(message));

        let set_motivation = self.set_motivation;
        let epoch = self.epoch;
        spawn_local(async move {
            TimeoutFuture::new(MOTIVATION_CLEAR_MS).await;
            if epoch.get_value() == generation {
                set_motivation.set(None);
            }
        });
    }
}

/// Map a unit-interval roll onto the message pool.
fn pick_message(roll: f64) -> &'static str {
    let count = MOTIVATIONAL_MESSAGES.len();
    let index = ((roll * count as f64) as usize).min(count - 1);
    MOTIVATIONAL_MESSAGES[index]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_stays_in_bounds_at_extremes() {
        assert_eq!(pick_message(0.0), MOTIVATIONAL_MESSAGES[0]);
        assert_eq!(
            pick_message(0.999_999),
            MOTIVATIONAL_MESSAGES[MOTIVATIONAL_MESSAGES.len() - 1]
        );
    }

    #[test]
    fn pick_covers_every_slot() {
        let count = MOTIVATIONAL_MESSAGES.len();
        for (i, expected) in MOTIVATIONAL_MESSAGES.iter().enumerate() {
            let roll = (i as f64 + 0.5) / count as f64;
            assert_eq!(pick_message(roll), *expected);
        }
    }
}
