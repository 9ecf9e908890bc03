//! # Mock Electronic Invoicing
//!
//! Generates the DIAN-lookalike artifacts attached to every kiosk order:
//! a folio number, a CUFE-style fiscal code, and a QR image URL.
//!
//! ## What Gets Generated
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Mock Invoice Artifacts                                 │
//! │                                                                         │
//! │  Kiosk checkout (order #42, at t = 1756130400000 ms)                    │
//! │       │                                                                 │
//! │       ├── invoice_number ──► "FV-1756130400000-42"                      │
//! │       │                      (unique per millisecond + order number)    │
//! │       │                                                                 │
//! │       ├── mock_cufe ──────► "CUFE-K3N0PQ7XYZ12A"                        │
//! │       │                      (13 random chars from A-Z 0-9)             │
//! │       │                                                                 │
//! │       └── qr_code_url ────► "https://api.qrserver.com/v1/               │
//! │                              create-qr-code/?data=CUFE-...&size=300x300"│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of this is fiscally valid — a real DIAN integration would replace
//! this module wholesale. The shapes exist so tickets and the admin panel
//! render realistically.

use chrono::{DateTime, Utc};
use rand::Rng;

// =============================================================================
// Constants
// =============================================================================

/// State a freshly generated invoice starts in.
pub const INVOICE_STATUS_ISSUED: &str = "generada";

/// Characters a mock CUFE draws from.
const CUFE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Length of the random portion of a mock CUFE.
const CUFE_LEN: usize = 13;

// =============================================================================
// Generators
// =============================================================================

/// Builds the human-facing folio: `FV-<unix millis>-<order number>`.
///
/// Uniqueness rides on the millisecond timestamp; the invoices table also
/// carries a UNIQUE constraint as the backstop.
pub fn invoice_number(order_number: i64, at: DateTime<Utc>) -> String {
    format!("FV-{}-{}", at.timestamp_millis(), order_number)
}

/// Generates a CUFE-style mock fiscal code: `CUFE-` plus 13 random
/// uppercase alphanumerics.
pub fn mock_cufe() -> String {
    let mut rng = rand::thread_rng();
    let code: String = (0..CUFE_LEN)
        .map(|_| CUFE_CHARSET[rng.gen_range(0..CUFE_CHARSET.len())] as char)
        .collect();
    format!("CUFE-{code}")
}

/// URL of a QR image encoding the given CUFE, sized for the ticket screen.
pub fn qr_code_url(cufe: &str) -> String {
    format!("https://api.qrserver.com/v1/create-qr-code/?data={cufe}&size=300x300")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_number_format() {
        let at = DateTime::parse_from_rfc3339("2025-08-25T10:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let number = invoice_number(42, at);

        assert_eq!(number, format!("FV-{}-42", at.timestamp_millis()));

        let parts: Vec<&str> = number.split('-').collect();
        assert_eq!(parts[0], "FV");
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2], "42");
    }

    #[test]
    fn test_mock_cufe_shape() {
        let cufe = mock_cufe();

        assert!(cufe.starts_with("CUFE-"));
        let code = &cufe["CUFE-".len()..];
        assert_eq!(code.len(), CUFE_LEN);
        assert!(code
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
    }

    #[test]
    fn test_mock_cufe_varies() {
        // Collisions in 36^13 space would point at a broken RNG hookup
        let a = mock_cufe();
        let b = mock_cufe();
        assert_ne!(a, b);
    }

    #[test]
    fn test_qr_code_url_embeds_cufe() {
        let url = qr_code_url("CUFE-ABC123DEF4567");
        assert_eq!(
            url,
            "https://api.qrserver.com/v1/create-qr-code/?data=CUFE-ABC123DEF4567&size=300x300"
        );
    }
}
