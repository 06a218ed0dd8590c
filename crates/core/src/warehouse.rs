//! Warehouse identity: the closed set of warehouses, token resolution, and
//! label folding.
//!
//! Stored rows reference warehouses by free-text labels that accumulated
//! variants over time (`"Gurgaon"`, `"Gurgaon Warehouse"`, the legacy
//! misspelling `"Gurgon"`, lowercase forms). All matching and aggregation
//! goes through this module so the rest of the system only ever sees one
//! canonical name per warehouse.

use serde::{Deserialize, Serialize};

/// One of the five known warehouses.
///
/// The set is closed and operator-defined; there is no dynamic discovery.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Warehouse {
    Ahmedabad,
    Bangalore,
    Gurgaon,
    Hyderabad,
    Mumbai,
}

impl Warehouse {
    /// All warehouses, in the fixed order used for cross-warehouse scans.
    pub const ALL: [Warehouse; 5] = [
        Warehouse::Ahmedabad,
        Warehouse::Bangalore,
        Warehouse::Gurgaon,
        Warehouse::Hyderabad,
        Warehouse::Mumbai,
    ];

    /// Resolve a user-supplied token to a warehouse.
    ///
    /// Accepts any casing, surrounding whitespace, and the suffix variants
    /// `"X Warehouse"`, `"X_Warehouse"`, and `"x_inventory"`, as well as the
    /// known historical alias `"Gurgon"`. Returns `None` for anything outside
    /// the closed set.
    pub fn resolve(token: &str) -> Option<Self> {
        let norm = token.trim().to_ascii_lowercase();
        let base = norm
            .strip_suffix("_inventory")
            .or_else(|| norm.strip_suffix("_warehouse"))
            .or_else(|| norm.strip_suffix(" warehouse"))
            .unwrap_or(&norm)
            .trim();

        match base {
            "ahmedabad" => Some(Warehouse::Ahmedabad),
            "bangalore" => Some(Warehouse::Bangalore),
            "gurgaon" | "gurgon" => Some(Warehouse::Gurgaon),
            "hyderabad" => Some(Warehouse::Hyderabad),
            "mumbai" => Some(Warehouse::Mumbai),
            _ => None,
        }
    }

    /// Canonical display name, e.g. `"Gurgaon"`.
    pub fn canonical_name(&self) -> &'static str {
        match self {
            Warehouse::Ahmedabad => "Ahmedabad",
            Warehouse::Bangalore => "Bangalore",
            Warehouse::Gurgaon => "Gurgaon",
            Warehouse::Hyderabad => "Hyderabad",
            Warehouse::Mumbai => "Mumbai",
        }
    }

    /// Long-form name used on dispatch rows, e.g. `"Gurgaon Warehouse"`.
    pub fn display_name(&self) -> &'static str {
        match self {
            Warehouse::Ahmedabad => "Ahmedabad Warehouse",
            Warehouse::Bangalore => "Bangalore Warehouse",
            Warehouse::Gurgaon => "Gurgaon Warehouse",
            Warehouse::Hyderabad => "Hyderabad Warehouse",
            Warehouse::Mumbai => "Mumbai Warehouse",
        }
    }

    /// Name of this warehouse's dispatch table.
    pub fn dispatch_table(&self) -> &'static str {
        match self {
            Warehouse::Ahmedabad => "Ahmedabad_Warehouse",
            Warehouse::Bangalore => "Bangalore_Warehouse",
            Warehouse::Gurgaon => "Gurgaon_Warehouse",
            Warehouse::Hyderabad => "Hyderabad_Warehouse",
            Warehouse::Mumbai => "Mumbai_Warehouse",
        }
    }

    /// Name of this warehouse's inventory snapshot table.
    pub fn inventory_table(&self) -> &'static str {
        match self {
            Warehouse::Ahmedabad => "ahmedabad_inventory",
            Warehouse::Bangalore => "bangalore_inventory",
            Warehouse::Gurgaon => "gurgaon_inventory",
            Warehouse::Hyderabad => "hyderabad_inventory",
            Warehouse::Mumbai => "mumbai_inventory",
        }
    }

    /// Raw labels that may appear on persisted rows for this warehouse.
    ///
    /// Matching against stored data must accept every member of this set;
    /// output always uses [`Warehouse::canonical_name`]. Gurgaon carries the
    /// legacy misspelling `"Gurgon"` in old inventory rows.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Warehouse::Ahmedabad => &["Ahmedabad", "Ahmedabad Warehouse", "ahmedabad"],
            Warehouse::Bangalore => &["Bangalore", "Bangalore Warehouse", "bangalore"],
            Warehouse::Gurgaon => &["Gurgaon", "Gurgon", "Gurgaon Warehouse", "gurgaon"],
            Warehouse::Hyderabad => &["Hyderabad", "Hyderabad Warehouse", "hyderabad"],
            Warehouse::Mumbai => &["Mumbai", "Mumbai Warehouse", "mumbai"],
        }
    }

    /// The label stored on this warehouse's inventory rows, which write-side
    /// stock adjustments must key on. For Gurgaon this is the legacy
    /// `"Gurgon"`; for every other warehouse it is the canonical name.
    pub fn stored_label(&self) -> &'static str {
        match self {
            Warehouse::Gurgaon => "Gurgon",
            other => other.canonical_name(),
        }
    }

    /// Identify the warehouse a persisted raw label belongs to, if any.
    ///
    /// Accepts the same inputs as [`Warehouse::resolve`]; this is the hook
    /// used to fold stored labels back to canonical names.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::resolve(label)
    }

    /// Rewrite a persisted label to its canonical warehouse name.
    ///
    /// Unknown labels pass through unchanged, mirroring how the event log
    /// leaves unrecognized historical data as-is.
    pub fn fold_label(label: &str) -> String {
        match Self::from_label(label) {
            Some(w) => w.canonical_name().to_string(),
            None => label.to_string(),
        }
    }
}

impl core::fmt::Display for Warehouse {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn resolves_bare_names_case_insensitively() {
        assert_eq!(Warehouse::resolve("gurgaon"), Some(Warehouse::Gurgaon));
        assert_eq!(Warehouse::resolve("  GURGAON  "), Some(Warehouse::Gurgaon));
        assert_eq!(Warehouse::resolve("Mumbai"), Some(Warehouse::Mumbai));
    }

    #[test]
    fn resolves_suffix_variants() {
        assert_eq!(
            Warehouse::resolve("gurgaon_inventory"),
            Some(Warehouse::Gurgaon)
        );
        assert_eq!(
            Warehouse::resolve("Gurgaon Warehouse"),
            Some(Warehouse::Gurgaon)
        );
        assert_eq!(
            Warehouse::resolve("Hyderabad_Warehouse"),
            Some(Warehouse::Hyderabad)
        );
    }

    #[test]
    fn resolves_legacy_gurgon_alias() {
        assert_eq!(Warehouse::resolve("Gurgon"), Some(Warehouse::Gurgaon));
        assert_eq!(Warehouse::fold_label("Gurgon"), "Gurgaon");
    }

    #[test]
    fn rejects_unknown_tokens() {
        assert_eq!(Warehouse::resolve(""), None);
        assert_eq!(Warehouse::resolve("pune"), None);
        assert_eq!(Warehouse::resolve("warehouse"), None);
    }

    #[test]
    fn folding_is_idempotent() {
        for w in Warehouse::ALL {
            for alias in w.aliases() {
                let folded = Warehouse::fold_label(alias);
                assert_eq!(folded, w.canonical_name());
                assert_eq!(Warehouse::fold_label(&folded), folded);
            }
        }
    }

    #[test]
    fn unknown_labels_pass_through_fold() {
        assert_eq!(Warehouse::fold_label("Central Hub"), "Central Hub");
    }

    #[test]
    fn gurgaon_keys_writes_on_legacy_label() {
        assert_eq!(Warehouse::Gurgaon.stored_label(), "Gurgon");
        assert_eq!(Warehouse::Mumbai.stored_label(), "Mumbai");
    }

    proptest! {
        #[test]
        fn any_decorated_form_resolves_to_the_same_identity(
            idx in 0usize..5,
            form in 0usize..6,
            left in 0usize..3,
            right in 0usize..3,
        ) {
            let w = Warehouse::ALL[idx];
            let name = w.canonical_name();
            let token = match form {
                0 => name.to_string(),
                1 => name.to_lowercase(),
                2 => name.to_uppercase(),
                3 => format!("{name} Warehouse"),
                4 => format!("{}_inventory", name.to_lowercase()),
                _ => format!("{name}_Warehouse"),
            };
            let token = format!("{}{}{}", " ".repeat(left), token, " ".repeat(right));
            prop_assert_eq!(Warehouse::resolve(&token), Some(w));
            // Resolving the canonical output again yields the same identity.
            prop_assert_eq!(Warehouse::resolve(w.canonical_name()), Some(w));
            prop_assert_eq!(Warehouse::fold_label(w.canonical_name()), w.canonical_name());
        }
    }
}
