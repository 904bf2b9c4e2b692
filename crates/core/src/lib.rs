// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

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

mod command;
mod completion;
mod error;
mod gateway;
mod outcome;
mod ports;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use command::{Command, ServiceOrigin};
pub use completion::{
    CompletionFlow, CompletionStep, CompletionTerms, PendingSignature, ReadyCompletion,
    SignatureDecision,
};
pub use error::CoreError;
pub use gateway::Gateway;
pub use outcome::{MutationOutcome, NotificationDelivery, ReadScope};
pub use ports::{
    CompanyPolicy, NotificationKind, NotificationSink, NotifyError, PolicyError,
    ReadModelSubscriber, SaveGuard, ServiceStore, SignatureCapture, SignatureOutcome, StoreError,
};
