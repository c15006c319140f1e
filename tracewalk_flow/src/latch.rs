// Copyright 2026 the Tracewalk Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural-equality dedup for derived values.

/// Holds the last emitted value of a derivation and suppresses
/// re-emission of structurally equal results.
///
/// Derivations are pure and cheap to recompute, so they run on every
/// upstream change; the latch is what keeps unchanged results from
/// rippling into a redraw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Latch<T> {
    value: Option<T>,
}

impl<T: PartialEq> Latch<T> {
    /// An empty latch; the first update always emits.
    #[must_use]
    pub const fn new() -> Self {
        Self { value: None }
    }

    /// Offers a freshly derived value. Returns `true` when it differs
    /// from the held one (an emission); `false` means the value was
    /// swallowed and downstream work can be skipped.
    pub fn update(&mut self, next: T) -> bool {
        if self.value.as_ref() == Some(&next) {
            return false;
        }
        self.value = Some(next);
        true
    }

    /// The last emitted value, if any.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_update_emits() {
        let mut latch = Latch::new();
        assert!(latch.update(3));
        assert_eq!(latch.value(), Some(&3));
    }

    #[test]
    fn equal_values_are_swallowed() {
        let mut latch = Latch::new();
        assert!(latch.update(vec![1, 2, 3]));
        assert!(!latch.update(vec![1, 2, 3]), "structurally equal");
        assert!(latch.update(vec![1, 2]), "a real change emits again");
    }
}
