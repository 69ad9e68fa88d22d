//! Profile Checker Registry
//!
//! Maps a validation kind (lowercase, e.g. "twitter") to a checker and an
//! optional default invalid message. Registration order matters: it is the
//! order in which a field's CSS classes are matched against kinds.

use std::sync::Arc;

use super::facebook::FacebookChecker;
use super::twitter::TwitterChecker;
use crate::config::SocialFieldsConfig;
use crate::remote::CachedFetcher;

/// Message used when neither the field nor the kind supplies one.
pub const GENERIC_INVALID_MESSAGE: &str = "The value for this field is invalid";

/// Prefix of the CSS class that tags a field for validation.
const CLASS_PREFIX: &str = "validate-";

/// Validates a submitted value for one kind of profile.
///
/// Closures `Fn(&str) -> bool` implement this too.
pub trait ProfileChecker: Send + Sync {
    /// Returns false only if the value is definitely not a valid profile.
    fn is_valid(&self, value: &str) -> bool;
}

impl<F> ProfileChecker for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_valid(&self, value: &str) -> bool {
        self(value)
    }
}

/// Returns true for empty or whitespace-only values.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

struct RegisteredKind {
    kind: String,
    checker: Arc<dyn ProfileChecker>,
    invalid_message: Option<String>,
}

/// Ordered registry of profile checkers.
#[derive(Default)]
pub struct CheckerRegistry {
    kinds: Vec<RegisteredKind>,
}

impl CheckerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the built-in "twitter" and "facebook" kinds,
    /// in that order.
    pub fn with_defaults(fetcher: Arc<CachedFetcher>, config: &SocialFieldsConfig) -> Self {
        let mut registry = Self::new();
        registry.register(
            "twitter",
            TwitterChecker::new(fetcher.clone(), config),
            Some("The Twitter account is not valid"),
        );
        registry.register(
            "facebook",
            FacebookChecker::new(fetcher, config),
            Some("This is not a valid Facebook page or account."),
        );
        registry
    }

    /// Registers a checker for a kind.
    ///
    /// Re-registering an existing kind replaces its checker and message but
    /// keeps its position.
    pub fn register<C>(&mut self, kind: &str, checker: C, invalid_message: Option<&str>)
    where
        C: ProfileChecker + 'static,
    {
        let entry = RegisteredKind {
            kind: kind.to_lowercase(),
            checker: Arc::new(checker),
            invalid_message: invalid_message.map(str::to_string),
        };

        match self.kinds.iter_mut().find(|k| k.kind == entry.kind) {
            Some(existing) => *existing = entry,
            None => self.kinds.push(entry),
        }
    }

    /// Removes a kind. Returns true if it was registered.
    pub fn remove(&mut self, kind: &str) -> bool {
        let kind = kind.to_lowercase();
        let before = self.kinds.len();
        self.kinds.retain(|k| k.kind != kind);
        self.kinds.len() != before
    }

    /// Returns true if the kind is registered.
    pub fn contains(&self, kind: &str) -> bool {
        self.find(kind).is_some()
    }

    /// Registered kinds, in registration order.
    pub fn kinds(&self) -> Vec<&str> {
        self.kinds.iter().map(|k| k.kind.as_str()).collect()
    }

    /// Returns the number of registered kinds.
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Returns true if no kind is registered.
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Checks a value against a kind.
    ///
    /// Blank values and unknown kinds are valid.
    pub fn check(&self, kind: &str, value: &str) -> bool {
        if is_blank(value) {
            return true;
        }

        match self.find(kind) {
            Some(registered) => registered.checker.is_valid(value),
            None => true,
        }
    }

    /// Default invalid message for a kind, or the generic one.
    pub fn invalid_message(&self, kind: &str) -> &str {
        self.find(kind)
            .and_then(|k| k.invalid_message.as_deref())
            .unwrap_or(GENERIC_INVALID_MESSAGE)
    }

    /// Finds the kind a space-separated CSS class list asks for.
    ///
    /// Kinds are tried in registration order and the first one whose
    /// `validate-<kind>` class is present wins, whatever order the classes
    /// appear in.
    pub fn kind_for_classes(&self, css_class: &str) -> Option<&str> {
        let classes: Vec<&str> = css_class.split_whitespace().collect();
        if classes.is_empty() {
            return None;
        }

        self.kinds
            .iter()
            .find(|k| {
                classes
                    .iter()
                    .any(|class| class.strip_prefix(CLASS_PREFIX) == Some(k.kind.as_str()))
            })
            .map(|k| k.kind.as_str())
    }

    fn find(&self, kind: &str) -> Option<&RegisteredKind> {
        let kind = kind.to_lowercase();
        self.kinds.iter().find(|k| k.kind == kind)
    }
}
