/// Monotonic id allocator owned by a registry instance.
///
/// Ids are handed out in order and never reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u32,
}

impl IdSequence {
    pub fn starting_at(first: u32) -> Self {
        Self { next: first }
    }

    /// The id the next call to [`IdSequence::allocate`] will return
    pub fn peek(&self) -> u32 {
        self.next
    }

    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocation_is_sequential() {
        let mut sequence = IdSequence::starting_at(1000);
        assert_eq!(sequence.allocate(), 1000);
        assert_eq!(sequence.allocate(), 1001);
        assert_eq!(sequence.peek(), 1002);
    }
}
