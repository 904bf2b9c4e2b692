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

mod completeness;
mod completion;
mod error;
mod inference;
mod payment_method;
mod service;
mod service_status;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use completeness::{is_complete, missing_fields};
pub use completion::{
    CompletionInput, DEFAULT_VAT_PERCENT, expected_total, validate_completion_input,
};
pub use inference::infer_status;
pub use payment_method::PaymentMethod;
pub use service::{Completion, Service, ServiceDraft, ServicePatch};
pub use service_status::ServiceStatus;

// Re-export public types
pub use error::DomainError;
pub use types::{
    Client, CompanyId, DriverId, ExternalDriver, OperatorId, Passenger, ServiceId, SignatureRef,
    VehicleId,
};
pub use validation::{validate_assignment, validate_service_fields, validate_service_record};
