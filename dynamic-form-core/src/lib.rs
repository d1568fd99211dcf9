//! Dynamic Form Core Library
//!
//! Schema-driven form engine, including:
//! - Schema parsing (`FormSchema` / `FieldSpec`)
//! - Field rendering into a headless widget tree (`FormView`)
//! - Draft state, option resolution and submission (`services`)
//! - The `FormEngine` state holder and the `FormHost` lifecycle adapter
//!
//! This library is frontend-independent: the terminal UI and any other host
//! draw the `FormView` and feed `FieldEvent`s back into the engine.

pub mod engine;
pub mod error;
pub mod host;
pub mod render;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use engine::FormEngine;
pub use error::{FormError, FormResult};
pub use host::{FormHost, HostOutputs};
pub use render::{Control, EditAction, FieldEvent, FormView, Widget};
pub use services::{CommittedState, DraftState, HttpOptionsFetcher, OptionsFetcher};
pub use types::{FieldKind, FieldSpec, FieldValue, FormSchema};
