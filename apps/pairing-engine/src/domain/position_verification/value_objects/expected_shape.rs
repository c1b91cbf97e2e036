//! Expected Shape Value Object

use serde::{Deserialize, Serialize};

use crate::domain::option_chain::OptionRight;

/// Signed per-side quantities a verified group must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpectedShape {
    /// Expected signed quantity of the call leg.
    pub call_quantity: i64,
    /// Expected signed quantity of the put leg.
    pub put_quantity: i64,
}

impl ExpectedShape {
    /// Create an expected shape.
    #[must_use]
    pub const fn new(call_quantity: i64, put_quantity: i64) -> Self {
        Self {
            call_quantity,
            put_quantity,
        }
    }

    /// Both legs long `quantity` contracts.
    #[must_use]
    pub const fn long(quantity: i64) -> Self {
        Self::new(quantity, quantity)
    }

    /// Both legs short `quantity` contracts.
    #[must_use]
    pub const fn short(quantity: i64) -> Self {
        Self::new(-quantity, -quantity)
    }

    /// Expected quantity for one side.
    #[must_use]
    pub const fn quantity_for(&self, right: OptionRight) -> i64 {
        match right {
            OptionRight::Call => self.call_quantity,
            OptionRight::Put => self.put_quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_and_short_shapes() {
        assert_eq!(ExpectedShape::long(2), ExpectedShape::new(2, 2));
        assert_eq!(ExpectedShape::short(2), ExpectedShape::new(-2, -2));
    }

    #[test]
    fn quantity_for_side() {
        let shape = ExpectedShape::new(2, 3);
        assert_eq!(shape.quantity_for(OptionRight::Call), 2);
        assert_eq!(shape.quantity_for(OptionRight::Put), 3);
    }
}
