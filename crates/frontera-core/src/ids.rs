//! Typed ids for model entities.

/// Identifier of a decision variable within a [`crate::Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct VariableId(u32);

impl VariableId {
    /// Create an id from a u32 value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the inner u32 value.
    pub fn inner(self) -> u32 {
        self.0
    }

    /// The id as a usize index into positional storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identifier of a constraint row within a [`crate::Model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct ConstraintId(u32);

impl ConstraintId {
    /// Create an id from a u32 value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the inner u32 value.
    pub fn inner(self) -> u32 {
        self.0
    }

    /// The id as a usize index into positional storage.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
