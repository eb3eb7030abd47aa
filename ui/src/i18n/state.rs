//! Active-language holder with synchronous change notification.
//!
//! One `LocaleState` is created by the launcher and handed to the component tree
//! through context (see [`crate::core::context::use_locale`]). Nothing in the crate
//! reaches for a global language setting.

use std::fmt;

use super::locale::{Direction, InvalidLocaleError, Locale};

/// Handle returned by [`LocaleState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// What subscribers receive after every successful change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleChange {
    pub previous: Locale,
    pub current: Locale,
    pub direction: Direction,
}

type Subscriber = Box<dyn FnMut(LocaleChange)>;

pub struct LocaleState {
    active: Locale,
    direction: Direction,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_id: u64,
}

impl LocaleState {
    pub fn new(initial: Locale) -> Self {
        Self {
            active: initial,
            direction: initial.direction(),
            subscribers: Vec::new(),
            next_id: 0,
        }
    }

    pub fn active(&self) -> Locale {
        self.active
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Switch language and notify every subscriber in subscription order.
    ///
    /// Re-selecting the current language still notifies.
    pub fn set_active(&mut self, locale: Locale) {
        let previous = self.active;
        self.active = locale;
        self.direction = locale.direction();

        let change = LocaleChange {
            previous,
            current: locale,
            direction: self.direction,
        };
        tracing::debug!(from = %previous, to = %locale, dir = %self.direction, "locale changed");
        for (_, subscriber) in self.subscribers.iter_mut() {
            subscriber(change);
        }
    }

    /// Apply a raw language code (e.g. the value of a `<select>`). Only the exact
    /// codes `en`, `fr` and `ar` are accepted.
    ///
    /// Anything else leaves locale, direction and subscribers untouched.
    pub fn set_active_code(&mut self, code: &str) -> Result<Locale, InvalidLocaleError> {
        let locale: Locale = code.parse()?;
        self.set_active(locale);
        Ok(locale)
    }

    pub fn subscribe(&mut self, subscriber: impl FnMut(LocaleChange) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Returns `false` if `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for LocaleState {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl fmt::Debug for LocaleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleState")
            .field("active", &self.active)
            .field("direction", &self.direction)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
