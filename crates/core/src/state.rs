// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::apply::apply_filter_command;
use crate::clock::{Clock, SystemClock};
use crate::command::FilterCommand;
use leadscope_domain::{ActiveFilterMap, FilterKey, FilterPatch, FilterSet, QueryParams};
use tracing::{debug, info};

/// The result of applying a [`FilterCommand`].
///
/// Transitions are atomic: observers only ever see `previous` or
/// `new_filters`, never a half-cascaded set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTransition {
    /// The command that produced this transition.
    pub command: FilterCommand,
    /// The filter set before the command.
    pub previous: FilterSet,
    /// The filter set after the command.
    pub new_filters: FilterSet,
    /// Every key whose value changed, in canonical order.
    pub changed_keys: Vec<FilterKey>,
}

impl FilterTransition {
    /// Returns true if the command left every field as it was.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.changed_keys.is_empty()
    }
}

/// Handle returned by [`FilterState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&FilterTransition)>;

/// The session's report filters.
///
/// Holds the current [`FilterSet`] as an immutable value that is replaced
/// wholesale on every change. Subscribers are notified in registration
/// order after the new value is in place; commands that change nothing do
/// not notify.
pub struct FilterState<C: Clock = SystemClock> {
    filters: FilterSet,
    clock: C,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl FilterState<SystemClock> {
    /// Creates the session state with defaults for today's date.
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for FilterState<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FilterState<C> {
    /// Creates the session state with defaults taken from `clock`.
    #[must_use]
    pub fn with_clock(clock: C) -> Self {
        let filters: FilterSet = FilterSet::with_defaults(clock.today());
        Self {
            filters,
            clock,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current filter set.
    #[must_use]
    pub const fn filters(&self) -> &FilterSet {
        &self.filters
    }

    /// The current value of one field.
    #[must_use]
    pub fn get(&self, key: FilterKey) -> &str {
        self.filters.get(key)
    }

    /// The clock used for date-relative defaults.
    #[must_use]
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Applies a command and notifies subscribers if anything changed.
    pub fn apply(&mut self, command: FilterCommand) -> FilterTransition {
        let transition: FilterTransition =
            apply_filter_command(&self.filters, command, self.clock.today());

        if transition.is_noop() {
            debug!(command = transition.command.name(), "Filter command changed nothing");
            return transition;
        }

        info!(
            command = transition.command.name(),
            changed = ?transition.changed_keys,
            "Filters updated"
        );
        self.filters = transition.new_filters.clone();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&transition);
        }
        transition
    }

    /// Sets one field; hierarchy descendants are cleared in the same update.
    pub fn update_filter(&mut self, key: FilterKey, value: impl Into<String>) -> FilterTransition {
        self.apply(FilterCommand::Update {
            key,
            value: value.into(),
        })
    }

    /// Sets several fields verbatim. The hierarchy is not enforced.
    pub fn update_filters(&mut self, patch: FilterPatch) -> FilterTransition {
        self.apply(FilterCommand::UpdateMany(patch))
    }

    /// Restores the defaults for the clock's current date.
    pub fn reset_filters(&mut self) -> FilterTransition {
        self.apply(FilterCommand::Reset)
    }

    /// The fields that currently constrain the report.
    #[must_use]
    pub fn active_filters(&self) -> ActiveFilterMap {
        self.filters.active_filters()
    }

    /// The backend query parameters for the current filters.
    #[must_use]
    pub fn build_query_params(&self) -> QueryParams {
        self.filters.query_params()
    }

    /// Registers a callback invoked after every effective change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&FilterTransition) + 'static) -> SubscriptionId {
        let id: SubscriptionId = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before: usize = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of registered subscribers.
    #[must_use]
    pub const fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<C: Clock + std::fmt::Debug> std::fmt::Debug for FilterState<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterState")
            .field("filters", &self.filters)
            .field("clock", &self.clock)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
