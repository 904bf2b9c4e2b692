// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence backends for the service lifecycle engine.
//!
//! The engine talks to storage through the `corsa` port traits, so a
//! backend only has to honor the guard semantics of
//! [`corsa::ServiceStore`]. This crate ships the in-memory reference
//! backend used by the embedding application and by tests; failures
//! are reported through [`corsa::StoreError`].

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod memory;

#[cfg(test)]
mod tests;

pub use memory::MemoryStore;
