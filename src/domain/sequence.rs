use crate::domain::errors::{DomainError, DomainResult};

/// Monotonic id allocator for a store.
///
/// Starts after the largest seeded id and only ever moves forward, so an id
/// freed by a delete is never handed out again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
    exhausted: bool,
}

impl IdSequence {
    pub fn new() -> Self {
        Self {
            next: 1,
            exhausted: false,
        }
    }

    pub fn starting_after<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        match ids.into_iter().max() {
            None => Self::new(),
            Some(max) => match max.checked_add(1) {
                Some(next) => Self {
                    next,
                    exhausted: false,
                },
                None => Self {
                    next: max,
                    exhausted: true,
                },
            },
        }
    }

    pub fn peek(&self) -> u64 {
        self.next
    }

    /// Hands out the current value and advances. `u64::MAX` itself is still
    /// handed out; only the call after it fails.
    pub fn allocate(&mut self) -> DomainResult<u64> {
        if self.exhausted {
            return Err(DomainError::ValidationError(
                "Id sequence exhausted".to_string(),
            ));
        }

        let value = self.next;
        match value.checked_add(1) {
            Some(next) => self.next = next,
            None => self.exhausted = true,
        }
        Ok(value)
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_starts_at_one() {
        let mut seq = IdSequence::starting_after(Vec::new());
        assert_eq!(seq.allocate(), Ok(1));
        assert_eq!(seq.allocate(), Ok(2));
    }

    #[test]
    fn test_starts_after_max() {
        let mut seq = IdSequence::starting_after([3, 9, 4]);
        assert_eq!(seq.peek(), 10);
        assert_eq!(seq.allocate(), Ok(10));
        assert_eq!(seq.peek(), 11);
    }

    #[test]
    fn test_last_id_is_handed_out_before_exhaustion() {
        let mut seq = IdSequence::starting_after([u64::MAX - 1]);
        assert_eq!(seq.peek(), u64::MAX);
        assert_eq!(seq.allocate(), Ok(u64::MAX));
        assert_eq!(
            seq.allocate(),
            Err(DomainError::ValidationError("Id sequence exhausted".to_string()))
        );
        assert_eq!(
            seq.allocate(),
            Err(DomainError::ValidationError("Id sequence exhausted".to_string()))
        );
    }

    #[test]
    fn test_seed_at_max_is_exhausted() {
        let mut seq = IdSequence::starting_after([1, u64::MAX]);
        assert!(matches!(
            seq.allocate(),
            Err(DomainError::ValidationError(_))
        ));
    }
}
