// ABOUTME: Named and versioned keyword list used by crisis and sentiment matching
// ABOUTME: Terms and input share one normalization so matching is a plain substring scan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A named, versioned list of lowercase match terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    name: String,
    version: u32,
    terms: Vec<String>,
}

impl KeywordSet {
    /// Build a set from arbitrary terms. Terms are trimmed and lowercased; blanks and
    /// duplicates are dropped.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, version: u32, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self {
            name: name.into(),
            version,
            terms: Vec::new(),
        };
        set.extend(terms);
        set
    }

    /// Build a set from a static term list
    #[must_use]
    pub fn from_static(name: &str, version: u32, terms: &[&str]) -> Self {
        Self::new(name, version, terms.iter().copied())
    }

    /// Add more terms, keeping normalization and de-duplication
    pub fn extend<I, S>(&mut self, terms: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            let normalized = Self::normalize(term.as_ref());
            if !normalized.is_empty() && !self.terms.contains(&normalized) {
                self.terms.push(normalized);
            }
        }
    }

    /// Matching form of `text`: lowercase, typographic apostrophes folded to `'`,
    /// whitespace runs collapsed to one space and trimmed
    #[must_use]
    pub fn normalize(text: &str) -> String {
        text.split_whitespace()
            .map(|word| word.to_lowercase().replace(['\u{2018}', '\u{2019}'], "'"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Set name, used in logs
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set revision
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Normalized terms in insertion order
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Number of terms
    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Whether the set has no terms
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// First term contained in `normalized_text`, which must come from
    /// [`KeywordSet::normalize`]. The caller normalizes once and reuses the result
    /// across sets.
    #[must_use]
    pub fn first_match(&self, normalized_text: &str) -> Option<&str> {
        self.terms
            .iter()
            .find(|term| normalized_text.contains(term.as_str()))
            .map(String::as_str)
    }

    /// Whether any term is contained in `normalized_text`
    #[must_use]
    pub fn matches(&self, normalized_text: &str) -> bool {
        self.first_match(normalized_text).is_some()
    }
}
