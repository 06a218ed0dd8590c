//! Damage/recovery action kinds.

use serde::{Deserialize, Serialize};

/// Kind of a damage/recovery adjustment event.
///
/// `Damage` decreases effective stock; `Recover` increases it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Damage,
    Recover,
}

impl ActionKind {
    /// Parse a stored or submitted action label, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "damage" => Some(ActionKind::Damage),
            "recover" => Some(ActionKind::Recover),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Damage => "damage",
            ActionKind::Recover => "recover",
        }
    }

    /// Signed stock delta for a given quantity: negative for damage,
    /// positive for recovery.
    pub fn stock_delta(&self, quantity: i64) -> i64 {
        match self {
            ActionKind::Damage => -quantity,
            ActionKind::Recover => quantity,
        }
    }
}

impl core::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(ActionKind::parse("damage"), Some(ActionKind::Damage));
        assert_eq!(ActionKind::parse(" DAMAGE "), Some(ActionKind::Damage));
        assert_eq!(ActionKind::parse("Recover"), Some(ActionKind::Recover));
        assert_eq!(ActionKind::parse("restock"), None);
        assert_eq!(ActionKind::parse(""), None);
    }

    #[test]
    fn stock_delta_sign_follows_kind() {
        assert_eq!(ActionKind::Damage.stock_delta(4), -4);
        assert_eq!(ActionKind::Recover.stock_delta(4), 4);
    }
}
