//! # faktor
//!
//! Invoicing core for Iranian small businesses: invoice validation, Toman
//! totals, payment-card and IBAN checks, and bank detection from card BINs.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//! Amounts are whole Toman; every derived amount is rounded with one policy
//! (see [`core::round_toman`]).
//!
//! ## Quick Start
//!
//! ```rust
//! use faktor::core::*;
//! use rust_decimal_macros::dec;
//!
//! let invoice = InvoiceBuilder::new("INV-1403-001", "1403/07/22")
//!     .customer(CustomerBuilder::new("Sara Ahmadi").phone("09123456789").build())
//!     .add_service(ServiceBuilder::new(1, "Website design", dec!(2), dec!(500000)).build())
//!     .payment_info(PaymentInfoBuilder::new("6037-9912-3456-7893", "Ali Rezaei").build())
//!     .discount(dec!(10))
//!     .tax(dec!(9))
//!     .build()
//!     .unwrap();
//!
//! assert!(invoice.validate().is_valid());
//! assert_eq!(invoice.totals().unwrap().total, dec!(981000));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Invoice model, calculator, validator, numbering, statistics |
//! | `banks` (default) | Static BIN table and bank detection |
//! | `json` | `serde_json` encoding of stored invoice records |
//! | `all` | Everything |
//!
//! The identifier validators in [`identifiers`] are always available.

pub mod identifiers;

#[cfg(feature = "banks")]
pub mod banks;

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
