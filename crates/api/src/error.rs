// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.
//!
//! Domain and core errors are translated into API errors at the boundary
//! so that callers receive stable rule identifiers and field names rather
//! than internal error shapes.

use corsa::CoreError;
use corsa_domain::DomainError;

/// Errors returned by API handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// A domain rule was violated.
    DomainRuleViolation {
        /// Identifier of the violated rule.
        rule: String,
        /// Human-readable explanation.
        message: String,
    },
    /// The input for a specific field was invalid.
    InvalidInput {
        /// The field that failed validation.
        field: String,
        /// Human-readable explanation.
        message: String,
    },
    /// A referenced resource does not exist.
    ResourceNotFound {
        /// The type of resource that was looked up.
        resource_type: String,
        /// Human-readable explanation.
        message: String,
    },
    /// The service was modified concurrently by another session.
    Conflict {
        /// Human-readable explanation.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// Human-readable explanation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { message } => {
                write!(f, "Concurrent modification: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// Each domain rule maps to a stable rule identifier or field name so
/// that clients can present the failure next to the offending input.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidServiceStatus { status } => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("'{status}' is not a recognized service status"),
        },
        DomainError::InvalidPaymentMethod { method } => ApiError::InvalidInput {
            field: String::from("payment_method"),
            message: format!("'{method}' is not a recognized payment method"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => {
            ApiError::DomainRuleViolation {
                rule: String::from("status_transition"),
                message: format!("Cannot move service from '{from}' to '{to}': {reason}"),
            }
        }
        DomainError::AmbiguousDriverAssignment => ApiError::DomainRuleViolation {
            rule: String::from("single_driver"),
            message: String::from(
                "A service can carry an internal driver or an external driver, not both",
            ),
        },
        DomainError::MissingDriverAssignment => ApiError::DomainRuleViolation {
            rule: String::from("driver_required"),
            message: String::from("Assignment requires an internal or an external driver"),
        },
        DomainError::MissingVehicleForInternalDriver => ApiError::DomainRuleViolation {
            rule: String::from("vehicle_required"),
            message: String::from("An internal driver cannot be assigned without a vehicle"),
        },
        DomainError::InvalidExternalDriverName(message) => ApiError::InvalidInput {
            field: String::from("external_driver_name"),
            message,
        },
        DomainError::InvalidPassengerName(message) => ApiError::InvalidInput {
            field: String::from("passenger_name"),
            message,
        },
        DomainError::InvalidVatPercent { value } => ApiError::InvalidInput {
            field: String::from("vat_percent"),
            message: format!("Invalid VAT percentage: {value}. Must be between 0 and 100"),
        },
        DomainError::NegativeNetAmount { amount } => ApiError::InvalidInput {
            field: String::from("net_amount"),
            message: format!("Net amount cannot be negative, got {amount}"),
        },
        DomainError::MissingPaymentMethod => ApiError::DomainRuleViolation {
            rule: String::from("payment_method_required"),
            message: String::from("No payment method is set for this service"),
        },
        DomainError::MissingReceivedAmount { method } => ApiError::InvalidInput {
            field: String::from("received_amount"),
            message: format!(
                "Payment method '{}' requires the received amount to be recorded",
                method.as_str()
            ),
        },
        DomainError::NegativeReceivedAmount { amount } => ApiError::InvalidInput {
            field: String::from("received_amount"),
            message: format!("Received amount cannot be negative, got {amount}"),
        },
        DomainError::NegativeHoursWorked { hours } => ApiError::InvalidInput {
            field: String::from("hours_worked"),
            message: format!("Hours worked cannot be negative, got {hours}"),
        },
        DomainError::CashRecipientWithoutCashPayment { method } => ApiError::InvalidInput {
            field: String::from("cash_recipient"),
            message: format!(
                "A cash recipient only applies to cash payments, not '{}'",
                method.as_str()
            ),
        },
        DomainError::SignatureRequired { company } => ApiError::DomainRuleViolation {
            rule: String::from("signature_mandate"),
            message: format!(
                "Company '{}' requires a digital signature before completion",
                company.value()
            ),
        },
    }
}

/// Translates a core error into an API error.
///
/// Domain errors are delegated to [`translate_domain_error`]; the
/// remaining variants cover lookup failures, storage failures and
/// concurrent modification.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::Validation(domain_error) => translate_domain_error(domain_error),
        CoreError::ServiceNotFound { service_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Service"),
            message: format!("No service with id '{}'", service_id.value()),
        },
        CoreError::CompanyNotFound { company_id } => ApiError::ResourceNotFound {
            resource_type: String::from("Company"),
            message: format!("No company with id '{}'", company_id.value()),
        },
        CoreError::Persistence { message } => ApiError::Internal {
            message: format!("Persistence failure: {message}"),
        },
        CoreError::Conflict {
            service_id,
            expected,
            actual,
        } => ApiError::Conflict {
            message: format!(
                "Service '{}' was modified concurrently: expected status '{}', found '{}'. Reload and retry",
                service_id.value(),
                expected.as_str(),
                actual.as_str()
            ),
        },
    }
}
