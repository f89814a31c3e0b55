//! Motivational prompts shown alongside the timer

use rand::seq::SliceRandom;

pub const MOTIVATIONAL_PROMPTS: [&str; 8] = [
    "You're building incredible focus. Stay present.",
    "Each moment of concentration is strengthening your mind.",
    "Breathe deeply. You've got this.",
    "Your dedication to mindfulness is inspiring.",
    "Focus is a superpower. You're developing it right now.",
    "This quiet moment is a gift to your future self.",
    "You're creating space for creativity and clarity.",
    "Your mind is becoming calmer and more centered.",
];

/// Pick one prompt at random
pub fn random_prompt() -> &'static str {
    MOTIVATIONAL_PROMPTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(MOTIVATIONAL_PROMPTS[0])
}
