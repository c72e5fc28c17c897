//! # ship-quote
//!
//! Storefront shipping-fee quotation service.
//!
//! Brokers two external collaborators: a logistics provider (service lookup
//! and fee calculation) and a currency-rate source. The core is the
//! quotation pipeline: resolve an available shipping service between two
//! districts, request a fee quote, and best-effort re-denominate the two
//! monetary fields into the target currency, degrading to native-currency
//! values when the rate source is unavailable.
//!
//! # Layers
//!
//! - [`domain`]: value objects and business rules (selection policy,
//!   defaults, monetary rounding)
//! - [`application`]: the quotation orchestrator and error taxonomy
//! - [`infrastructure`]: ports and reqwest adapters for the two providers
//! - [`api`]: axum REST surface
//! - [`config`]: startup-time configuration

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
