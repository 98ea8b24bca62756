//! Domain types.

mod named;

pub use named::{NamedSecretRef, NamedValue};
