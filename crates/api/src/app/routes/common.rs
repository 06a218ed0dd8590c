use stockpilot_core::{DomainError, Warehouse};

use crate::app::errors;

/// Resolve a warehouse token from a request, or produce the 400 response.
pub fn resolve_warehouse(token: Option<&str>) -> Result<Warehouse, axum::response::Response> {
    resolve_warehouse_token(token).map_err(errors::domain_error_to_response)
}

fn resolve_warehouse_token(token: Option<&str>) -> Result<Warehouse, DomainError> {
    let token = token.map(str::trim).unwrap_or("");
    if token.is_empty() {
        return Err(DomainError::validation("warehouse parameter is required"));
    }
    Warehouse::resolve(token).ok_or_else(|| DomainError::unknown_warehouse(token))
}

/// Remove zero-width/non-breaking characters smuggled in by copy/paste.
pub fn strip_invisible(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '\u{200B}' | '\u{FEFF}' | '\u{00A0}'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_zero_width_and_nbsp() {
        assert_eq!(strip_invisible("HH\u{200B}-10\u{FEFF}01\u{00A0}"), "HH-1001");
        assert_eq!(strip_invisible("plain"), "plain");
    }

    #[test]
    fn resolver_rejects_missing_and_unknown_tokens() {
        assert!(resolve_warehouse(None).is_err());
        assert!(resolve_warehouse(Some("   ")).is_err());
        assert!(resolve_warehouse(Some("pune")).is_err());
        assert!(resolve_warehouse(Some("mumbai")).is_ok());
    }
}
