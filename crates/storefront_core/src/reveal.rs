//! One-way scroll reveal bookkeeping.

use std::collections::HashSet;

/// Slack below the threshold still counted as crossing it; browsers report ratios a hair under
/// the configured threshold on the callback that fires for the crossing.
const THRESHOLD_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Key of an element registered for reveal.
pub struct RevealKey(pub u32);

#[derive(Debug, Clone, Copy, PartialEq)]
/// One intersection observation for a registered element.
pub struct IntersectionSample {
    /// Element the sample belongs to.
    pub key: RevealKey,
    /// Whether the element intersects the viewport at all.
    pub is_intersecting: bool,
    /// Fraction of the element that is visible.
    pub ratio: f64,
}

#[derive(Debug, Clone, PartialEq)]
/// Tracks which registered elements have been revealed.
pub struct RevealRegistry {
    threshold: f64,
    next_key: u32,
    revealed: HashSet<RevealKey>,
}

impl RevealRegistry {
    /// Creates an empty registry for the given visible-ratio threshold.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            next_key: 0,
            revealed: HashSet::new(),
        }
    }

    /// Visible ratio the observer should be configured with.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Registers one more element and returns its key.
    pub fn register(&mut self) -> RevealKey {
        let key = RevealKey(self.next_key);
        self.next_key += 1;
        key
    }

    /// Number of registered elements.
    pub fn registered(&self) -> usize {
        self.next_key as usize
    }

    /// Whether `key` has already been revealed.
    pub fn is_revealed(&self, key: RevealKey) -> bool {
        self.revealed.contains(&key)
    }

    /// Records an observation. Returns `true` only the first time the element crosses the
    /// threshold; the caller then applies the visible state and stops observing it.
    pub fn observe(&mut self, sample: IntersectionSample) -> bool {
        if sample.key.0 >= self.next_key || !sample.is_intersecting {
            return false;
        }
        if sample.ratio + THRESHOLD_TOLERANCE < self.threshold {
            return false;
        }
        self.revealed.insert(sample.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(key: RevealKey, is_intersecting: bool, ratio: f64) -> IntersectionSample {
        IntersectionSample {
            key,
            is_intersecting,
            ratio,
        }
    }

    #[test]
    fn element_in_view_is_revealed_exactly_once() {
        let mut registry = RevealRegistry::new(0.12);
        let key = registry.register();

        assert!(registry.observe(sample(key, true, 0.5)));
        assert!(registry.is_revealed(key));
        assert!(!registry.observe(sample(key, true, 0.9)));
        assert!(!registry.observe(sample(key, false, 0.0)));
        assert!(registry.is_revealed(key));
    }

    #[test]
    fn below_threshold_or_not_intersecting_is_ignored() {
        let mut registry = RevealRegistry::new(0.12);
        let key = registry.register();

        assert!(!registry.observe(sample(key, true, 0.05)));
        assert!(!registry.observe(sample(key, false, 0.3)));
        assert!(!registry.is_revealed(key));
        assert!(registry.observe(sample(key, true, 0.12)));
    }

    #[test]
    fn ratio_just_under_threshold_still_reveals() {
        let mut registry = RevealRegistry::new(0.12);
        let near = registry.register();
        let close = registry.register();
        let far = registry.register();

        assert!(registry.observe(sample(near, true, 0.119_999_99)));
        assert!(registry.observe(sample(close, true, 0.111)));
        assert!(!registry.observe(sample(far, true, 0.05)));
        assert!(!registry.is_revealed(far));
    }

    #[test]
    fn unregistered_keys_are_ignored() {
        let mut registry = RevealRegistry::new(0.12);
        let first = registry.register();
        let second = registry.register();
        assert_eq!(registry.registered(), 2);
        assert_ne!(first, second);

        assert!(!registry.observe(sample(RevealKey(7), true, 1.0)));
        assert!(registry.observe(sample(second, true, 1.0)));
        assert!(!registry.is_revealed(first));
    }
}
