// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::FilterCommand;
use crate::state::FilterTransition;
use leadscope_domain::{FilterKey, FilterSet};
use time::Date;

/// Applies a filter command, producing the next filter set.
///
/// The input set is never modified. The transition carries both the
/// previous and the new set along with every key whose value changed,
/// including descendants cleared by a hierarchy cascade.
///
/// # Arguments
///
/// * `filters` - The current filter set (immutable)
/// * `command` - The change to apply
/// * `today` - The date used to recompute defaults on reset
#[must_use]
pub fn apply_filter_command(
    filters: &FilterSet,
    command: FilterCommand,
    today: Date,
) -> FilterTransition {
    let new_filters: FilterSet = match &command {
        FilterCommand::Update { key, value } => filters.with_filter(*key, value.as_str()),
        FilterCommand::UpdateMany(patch) => filters.merged(patch),
        FilterCommand::Reset => FilterSet::with_defaults(today),
    };

    let changed_keys: Vec<FilterKey> = filters.changed_keys(&new_filters);

    FilterTransition {
        command,
        previous: filters.clone(),
        new_filters,
        changed_keys,
    }
}
