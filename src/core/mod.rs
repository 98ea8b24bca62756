//! Core library components.
//!
//! This module contains the encoders, the document adapter that sits between
//! them and the process boundary, and the provisioning harness.

pub mod constants;
pub mod document;
pub mod domain;
pub mod encode;
pub mod terraform;
pub mod types;
