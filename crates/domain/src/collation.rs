// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Locale-style string ordering and matching.
//!
//! Ordering is resolved in levels, the way a collator does:
//! 1. Base letters, ignoring accents and case (`é` = `E` = `e`)
//! 2. Accents (`e` < `é`)
//! 3. Case, lowercase first (`a` < `A`)
//! 4. Raw code points, so distinct strings never compare equal

use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

fn base_letters(s: &str) -> String {
    s.nfd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn accented_letters(s: &str) -> String {
    s.nfd().collect::<String>().to_lowercase()
}

fn case_pattern(s: &str) -> impl Iterator<Item = bool> + '_ {
    s.chars().map(char::is_uppercase)
}

/// Compares two strings the way a locale-aware collator would.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| accented_letters(a).cmp(&accented_letters(b)))
        .then_with(|| case_pattern(a).cmp(case_pattern(b)))
        .then_with(|| a.cmp(b))
}

/// Case-insensitive substring test.
///
/// An empty needle matches everything.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
