// ABOUTME: Hand-authored user-facing messages returned without any model involvement
// ABOUTME: Crisis hotline payload, degraded-mode reply, and structured-output fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Fixed messages.
//!
//! These strings are returned verbatim. The crisis payload in particular must never
//! depend on the generative service: it is served even when no credential is
//! configured and the upstream is down.

/// Safety payload returned whenever crisis language is detected
pub const CRISIS_RESPONSE: &str = "I'm really sorry you're going through this, and I'm \
glad you reached out. You don't have to face this alone. Please contact someone who \
can help right now:\n\
\n\
- United States: call or text 988 (Suicide & Crisis Lifeline)\n\
- United Kingdom & Ireland: call Samaritans at 116 123\n\
- India: call Tele-MANAS at 14416 or KIRAN at 1800-599-0019\n\
- Canada: call or text 988\n\
- Australia: call Lifeline at 13 11 14\n\
\n\
If you are in immediate danger, please call your local emergency number. \
If you can, reach out to someone you trust and let them know how you're feeling.";

/// Reply used whenever the generative service cannot produce a response
pub const DEGRADED_RESPONSE: &str =
    "I'm having trouble connecting right now. Please try again in a moment.";

/// Mood used when a mood analysis cannot be extracted
pub const FALLBACK_MOOD: &str = "calm";

/// Intensity used when a mood analysis cannot be extracted
pub const FALLBACK_INTENSITY: u8 = 5;

/// Advice used when insights cannot be extracted
pub const FALLBACK_ADVICE: &str = "Keep logging how you feel each day. Small, consistent \
check-ins make it easier to notice what lifts your mood and what drains it.";

/// Prediction used when insights cannot be extracted
pub const FALLBACK_PREDICTION: &str = "With steady self-care and regular reflection, \
the coming days are a good opportunity to build on the progress you've already made.";
