//! The parsed, comparable form of a CFI location fragment

use serde::{Deserialize, Serialize};

/// A structural address within a publication
///
/// Components are the `/`-step indices from the fragment's start
/// boundary, outermost first, with the character offset (if any) as the
/// final component. An empty address means "no structural position" and
/// orders before every non-empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Step indices, outermost first, offset last
    pub components: Vec<u32>,
}

impl Address {
    /// Create an address from its components
    pub fn new(components: Vec<u32>) -> Self {
        Self { components }
    }

    /// The "no position" address
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check whether this address carries any position at all
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Number of components (structural depth plus offset)
    pub fn depth(&self) -> usize {
        self.components.len()
    }
}

impl From<Vec<u32>> for Address {
    fn from(components: Vec<u32>) -> Self {
        Self::new(components)
    }
}
