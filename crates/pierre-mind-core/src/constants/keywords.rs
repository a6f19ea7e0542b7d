// ABOUTME: Default keyword lists for crisis screening and coarse sentiment buckets
// ABOUTME: Plain versioned data consumed by the triage crate's detector and classifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Keyword defaults.
//!
//! All terms are lowercase; matching is a case-insensitive substring test. Bump the
//! matching `*_VERSION` whenever a list changes so logs and tests can tell which
//! revision produced a label.

/// Revision of [`CRISIS_PHRASES`]
pub const CRISIS_VERSION: u32 = 1;

/// Self-harm and suicide related phrases. Any match bypasses generation.
pub const CRISIS_PHRASES: &[&str] = &[
    "suicide",
    "suicidal",
    "kill myself",
    "killing myself",
    "end my life",
    "ending my life",
    "take my own life",
    "want to die",
    "wanna die",
    "better off dead",
    "no reason to live",
    "don't want to live",
    "dont want to live",
    "self harm",
    "self-harm",
    "hurt myself",
    "hurting myself",
    "cut myself",
    "cutting myself",
    "end it all",
];

/// Revision of the sentiment buckets
pub const SENTIMENT_VERSION: u32 = 1;

/// Anxiety bucket, checked first
pub const ANXIETY_TERMS: &[&str] = &[
    "anxious",
    "anxiety",
    "worried",
    "worry",
    "nervous",
    "panic",
    "stressed",
    "stress",
    "overwhelmed",
    "scared",
    "afraid",
    "fear",
    "restless",
    "on edge",
];

/// Sadness bucket, checked second
pub const SADNESS_TERMS: &[&str] = &[
    "sad",
    "depressed",
    "depression",
    "feeling down",
    "lonely",
    "alone",
    "unhappy",
    "hopeless",
    "crying",
    "cried",
    "miserable",
    "empty",
    "grief",
    "heartbroken",
    "upset",
];

/// Positivity bucket, checked last
pub const POSITIVE_TERMS: &[&str] = &[
    "happy",
    "great",
    "good",
    "grateful",
    "thankful",
    "excited",
    "calm",
    "relaxed",
    "joy",
    "proud",
    "better",
    "peaceful",
    "hopeful",
    "love",
];
