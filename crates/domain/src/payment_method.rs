// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Payment methods and their reconciliation rules.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How the client settles a service.
///
/// Cash and card are collected by the driver and must be reconciled at
/// completion; bank transfers and invoiced services settle outside the
/// application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash collected by the driver
    Cash,
    /// Card payment taken on the driver's terminal
    Card,
    /// Settled by bank transfer outside the application
    BankTransfer,
    /// Invoiced to the client company
    Invoice,
}

impl PaymentMethod {
    /// Returns the string representation of the method.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Cash => "cash",
            Self::Card => "card",
            Self::BankTransfer => "bank_transfer",
            Self::Invoice => "invoice",
        }
    }

    /// Parses a method from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPaymentMethod` if the string is not a
    /// valid method.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "cash" => Ok(Self::Cash),
            "card" => Ok(Self::Card),
            "bank_transfer" => Ok(Self::BankTransfer),
            "invoice" => Ok(Self::Invoice),
            _ => Err(DomainError::InvalidPaymentMethod {
                method: s.to_string(),
            }),
        }
    }

    /// Returns true if the method is collected by the driver and must be
    /// reconciled when the service is completed.
    #[must_use]
    pub const fn requires_cash_reconciliation(&self) -> bool {
        matches!(self, Self::Cash | Self::Card)
    }
}

impl FromStr for PaymentMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}
