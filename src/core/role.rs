//! The two roles.
//!
//! Chaos draws and places pieces; Order relocates them. A round is always
//! one Chaos half-move followed by one Order half-move.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Chaos,
    Order,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Chaos => f.write_str("Chaos"),
            Role::Order => f.write_str("Order"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Role::Chaos.to_string(), "Chaos");
        assert_eq!(Role::Order.to_string(), "Order");
    }
}
