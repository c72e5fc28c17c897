//! # API Layer
//!
//! Inbound interfaces. Only REST is exposed.

pub mod rest;
