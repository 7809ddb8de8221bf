use std::num::NonZero;

/// The length of a non-empty list. An empty list has no contents at all, so zero is never stored.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    /// Returns the length after one more node, saturating at `usize::MAX` (which can never be
    /// reached by nodes that each occupy memory).
    pub const fn increment(self) -> Length {
        self.saturating_add(1)
    }

    pub const fn saturating_add(self, other: usize) -> Length {
        Length(self.0.saturating_add(other))
    }

    /// Returns the length after removing `other` nodes, or [`None`] if the list would be empty.
    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        match self.0.get().checked_sub(other) {
            Some(res) => match NonZero::new(res) {
                Some(non_zero) => Some(Length(non_zero)),
                None => None,
            },
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
