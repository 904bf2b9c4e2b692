// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Completion arithmetic and reconciliation validation.
//!
//! All money values are decimal arithmetic; totals are exact and rounding
//! happens only at the presentation edge.

use crate::error::DomainError;
use crate::payment_method::PaymentMethod;
use crate::types::OperatorId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// VAT percentage applied when a service does not carry its own.
pub const DEFAULT_VAT_PERCENT: Decimal = Decimal::TEN;

/// The reconciliation payload submitted through the completion workflow.
///
/// A payment method supplied here overrides the one stored on the service
/// for this completion; when absent, the stored method is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionInput {
    /// Payment method for the completion, when changed on the form.
    pub payment_method: Option<PaymentMethod>,
    /// Amount the driver collected.
    pub received_amount: Option<Decimal>,
    /// Hours worked on the service.
    pub hours_worked: Option<Decimal>,
    /// The operator credited with receiving the collected cash.
    pub cash_recipient: Option<OperatorId>,
}

/// Computes the VAT-inclusive total expected for a service.
///
/// An unset net amount counts as zero; an unset VAT percentage falls back
/// to [`DEFAULT_VAT_PERCENT`].
#[must_use]
pub fn expected_total(net_amount: Option<Decimal>, vat_percent: Option<Decimal>) -> Decimal {
    let net: Decimal = net_amount.unwrap_or(Decimal::ZERO);
    let vat: Decimal = vat_percent.unwrap_or(DEFAULT_VAT_PERCENT);
    net * (Decimal::ONE + vat / Decimal::ONE_HUNDRED)
}

/// Validates a reconciliation payload against the resolved payment method.
///
/// Checks run in a fixed order: received amount first (required and
/// non-negative when the method reconciles, non-negative otherwise), then
/// hours worked, then the cash-handover recipient.
///
/// # Errors
///
/// Returns the first violated rule as a `DomainError`.
pub fn validate_completion_input(
    method: PaymentMethod,
    input: &CompletionInput,
) -> Result<(), DomainError> {
    if method.requires_cash_reconciliation() {
        match input.received_amount {
            None => return Err(DomainError::MissingReceivedAmount { method }),
            Some(amount) if amount < Decimal::ZERO => {
                return Err(DomainError::NegativeReceivedAmount { amount });
            }
            Some(_) => {}
        }
    } else if let Some(amount) = input.received_amount {
        if amount < Decimal::ZERO {
            return Err(DomainError::NegativeReceivedAmount { amount });
        }
    }

    if let Some(hours) = input.hours_worked {
        if hours < Decimal::ZERO {
            return Err(DomainError::NegativeHoursWorked { hours });
        }
    }

    if input.cash_recipient.is_some() && method != PaymentMethod::Cash {
        return Err(DomainError::CashRecipientWithoutCashPayment { method });
    }

    Ok(())
}
