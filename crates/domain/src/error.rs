// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::payment_method::PaymentMethod;
use crate::types::CompanyId;
use rust_decimal::Decimal;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Service status string is not a recognized status.
    InvalidServiceStatus {
        /// The unrecognized status string.
        status: String,
    },
    /// Payment method string is not a recognized method.
    InvalidPaymentMethod {
        /// The unrecognized method string.
        method: String,
    },
    /// Status transition is not permitted by the lifecycle graph.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not allowed.
        reason: String,
    },
    /// Both an internal and an external driver reference were supplied.
    AmbiguousDriverAssignment,
    /// Neither an internal nor an external driver reference was supplied.
    MissingDriverAssignment,
    /// An internal driver assignment is missing its vehicle.
    MissingVehicleForInternalDriver,
    /// External driver name is empty or invalid.
    InvalidExternalDriverName(String),
    /// Passenger name is empty or invalid.
    InvalidPassengerName(String),
    /// VAT percentage is outside the accepted range.
    InvalidVatPercent {
        /// The rejected percentage.
        value: Decimal,
    },
    /// Net expected amount is negative.
    NegativeNetAmount {
        /// The rejected amount.
        amount: Decimal,
    },
    /// No payment method is available for completion.
    MissingPaymentMethod,
    /// The payment method requires a received amount and none was supplied.
    MissingReceivedAmount {
        /// The method that requires reconciliation.
        method: PaymentMethod,
    },
    /// Received amount is negative.
    NegativeReceivedAmount {
        /// The rejected amount.
        amount: Decimal,
    },
    /// Hours worked is negative.
    NegativeHoursWorked {
        /// The rejected hours value.
        hours: Decimal,
    },
    /// A cash handover recipient was supplied for a non-cash payment.
    CashRecipientWithoutCashPayment {
        /// The non-cash method that was supplied.
        method: PaymentMethod,
    },
    /// The client company mandates a signature and none was captured.
    SignatureRequired {
        /// The company with the signature mandate.
        company: CompanyId,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidServiceStatus { status } => {
                write!(f, "Invalid service status: {status}")
            }
            Self::InvalidPaymentMethod { method } => {
                write!(f, "Invalid payment method: {method}")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot move service from '{from}' to '{to}': {reason}")
            }
            Self::AmbiguousDriverAssignment => {
                write!(
                    f,
                    "Both an internal and an external driver were supplied. Exactly one must be set"
                )
            }
            Self::MissingDriverAssignment => {
                write!(
                    f,
                    "No driver was supplied. Exactly one of internal driver or external driver must be set"
                )
            }
            Self::MissingVehicleForInternalDriver => {
                write!(f, "A vehicle is required when assigning an internal driver")
            }
            Self::InvalidExternalDriverName(msg) => {
                write!(f, "Invalid external driver name: {msg}")
            }
            Self::InvalidPassengerName(msg) => write!(f, "Invalid passenger name: {msg}"),
            Self::InvalidVatPercent { value } => {
                write!(
                    f,
                    "Invalid VAT percentage: {value}. Must be between 0 and 100"
                )
            }
            Self::NegativeNetAmount { amount } => {
                write!(f, "Invalid net amount: {amount}. Must not be negative")
            }
            Self::MissingPaymentMethod => {
                write!(f, "No payment method is set for this service")
            }
            Self::MissingReceivedAmount { method } => {
                write!(
                    f,
                    "Payment method '{}' requires the received amount to be recorded",
                    method.as_str()
                )
            }
            Self::NegativeReceivedAmount { amount } => {
                write!(f, "Invalid received amount: {amount}. Must not be negative")
            }
            Self::NegativeHoursWorked { hours } => {
                write!(f, "Invalid hours worked: {hours}. Must not be negative")
            }
            Self::CashRecipientWithoutCashPayment { method } => {
                write!(
                    f,
                    "A cash handover recipient can only be recorded for cash payments, not '{}'",
                    method.as_str()
                )
            }
            Self::SignatureRequired { company } => {
                write!(
                    f,
                    "Company '{}' requires a digital signature before completion",
                    company.value()
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
