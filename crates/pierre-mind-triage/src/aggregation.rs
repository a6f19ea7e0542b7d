// ABOUTME: Reduces a bounded window of mood history into compact prompt-ready records
// ABOUTME: Token-budget control only; no statistics, no mutation of the input records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # History Aggregation
//!
//! Storage hands over records most-recent-first. [`summarize`] keeps the newest
//! `max_count`, projects each to a [`CompactRecord`] and returns them oldest-first so
//! the model reads the history chronologically.

use std::fmt::Write;

use pierre_mind_core::constants::limits;
use pierre_mind_core::models::{CompactRecord, MoodRecord};

/// Date format used in prompts, e.g. `Oct 12`
pub const PROMPT_DATE_FORMAT: &str = "%b %d";

/// Window and note budget for [`summarize_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryBudget {
    /// Maximum records kept
    pub max_count: usize,
    /// Maximum characters kept per note
    pub note_max_chars: usize,
}

impl Default for HistoryBudget {
    fn default() -> Self {
        Self {
            max_count: limits::DEFAULT_HISTORY_WINDOW,
            note_max_chars: limits::DEFAULT_NOTE_MAX_CHARS,
        }
    }
}

/// Compact the newest `max_count` records using the default note budget
#[must_use]
pub fn summarize(records: &[MoodRecord], max_count: usize) -> Vec<CompactRecord> {
    summarize_with(
        records,
        HistoryBudget {
            max_count,
            ..HistoryBudget::default()
        },
    )
}

/// Compact the newest records within `budget`
#[must_use]
pub fn summarize_with(records: &[MoodRecord], budget: HistoryBudget) -> Vec<CompactRecord> {
    records
        .iter()
        .take(budget.max_count)
        .rev()
        .map(|record| compact(record, budget.note_max_chars))
        .collect()
}

fn compact(record: &MoodRecord, note_max_chars: usize) -> CompactRecord {
    let notes = record
        .notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty())
        .map(|notes| truncate_chars(notes, note_max_chars));

    CompactRecord {
        date: record.created_at.format(PROMPT_DATE_FORMAT).to_string(),
        mood: record.mood.clone(),
        intensity: record.intensity,
        notes,
    }
}

/// Truncate on a character boundary, marking the cut with an ellipsis
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_owned(),
    }
}

/// Render compacted records as one line each for embedding in a prompt
///
/// Notes are written as JSON string literals so quotes and line breaks inside them
/// cannot split a record; mood labels have their whitespace collapsed.
#[must_use]
pub fn render_history(records: &[CompactRecord]) -> String {
    let mut out = String::new();
    for record in records {
        let mood = record.mood.split_whitespace().collect::<Vec<_>>().join(" ");
        let _ = write!(out, "- {}: {mood} ({}/10)", record.date, record.intensity);
        if let Some(quoted) = record
            .notes
            .as_deref()
            .and_then(|notes| serde_json::to_string(notes).ok())
        {
            let _ = write!(out, ", notes: {quoted}");
        }
        out.push('\n');
    }
    out
}
