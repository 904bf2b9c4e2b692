// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The staged completion dialog.
//!
//! Completing a service is the one mutation that pauses for human
//! input partway through: companies can mandate a client signature,
//! and the operator may abandon the dialog at any point. The stages
//! are modelled as consuming types so a completion that was never
//! finalized leaves no trace in the store. Dropping any stage value
//! abandons the completion with no writes.

use corsa_audit::{Actor, Cause};
use corsa_domain::{
    CompletionInput, DEFAULT_VAT_PERCENT, DomainError, PaymentMethod, Service, ServiceId,
    ServiceStatus, SignatureRef, expected_total, validate_completion_input,
};
use rust_decimal::Decimal;

use crate::command::Command;
use crate::error::CoreError;
use crate::gateway::{Gateway, mandating_company};
use crate::outcome::MutationOutcome;
use crate::ports::{CompanyPolicy, SignatureCapture, SignatureOutcome};

/// What the completion form shows before anything is entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionTerms {
    /// Whether the stored payment method settles on the spot and so
    /// needs a received amount reconciled against the expected total.
    pub requires_cash_reconciliation: bool,
    /// Net amount with VAT applied, for display next to the received
    /// amount field. Missing net is treated as zero.
    pub expected_total: Decimal,
    /// The VAT rate that will be frozen into the completion record.
    pub vat_percent: Decimal,
    /// Whether the client company mandates a captured signature.
    pub signature_required: bool,
}

/// An open completion dialog for one service.
#[derive(Debug, Clone)]
pub struct CompletionFlow {
    service: Service,
    terms: CompletionTerms,
}

impl CompletionFlow {
    /// Opens the dialog for a service.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is not in a status that can be
    /// completed, or if the company policy lookup fails.
    pub fn open(service: Service, policy: &dyn CompanyPolicy) -> Result<Self, CoreError> {
        // Opening is only meaningful where completing is reachable
        service.status.validate_transition(ServiceStatus::Completed)?;

        let signature_required: bool = mandating_company(policy, &service)?.is_some();
        let terms: CompletionTerms = CompletionTerms {
            requires_cash_reconciliation: service
                .payment_method
                .is_some_and(|method| method.requires_cash_reconciliation()),
            expected_total: expected_total(service.net_amount, service.vat_percent),
            vat_percent: service.vat_percent.unwrap_or(DEFAULT_VAT_PERCENT),
            signature_required,
        };

        Ok(Self { service, terms })
    }

    /// The display values for the open dialog.
    #[must_use]
    pub const fn terms(&self) -> &CompletionTerms {
        &self.terms
    }

    /// Submits the entered values, advancing to the signature stop or
    /// straight to the finalizable stage.
    ///
    /// # Errors
    ///
    /// Returns an error if no payment method is resolvable or the
    /// entered values fail validation.
    pub fn submit(self, input: CompletionInput) -> Result<CompletionStep, CoreError> {
        // The form value wins over the stored method
        let method: PaymentMethod = input
            .payment_method
            .or(self.service.payment_method)
            .ok_or(CoreError::Validation(DomainError::MissingPaymentMethod))?;

        validate_completion_input(method, &input)?;

        if self.terms.signature_required {
            Ok(CompletionStep::AwaitingSignature(PendingSignature {
                service_id: self.service.id,
                input,
            }))
        } else {
            Ok(CompletionStep::Ready(ReadyCompletion {
                service_id: self.service.id,
                input,
                signature: None,
            }))
        }
    }
}

/// Where the dialog stands after a successful submit.
#[derive(Debug, Clone)]
pub enum CompletionStep {
    /// The client must sign before the completion can be finalized.
    AwaitingSignature(PendingSignature),
    /// No signature is needed; the completion can be finalized.
    Ready(ReadyCompletion),
}

/// A submitted completion waiting on the client's signature.
///
/// Dropping this value abandons the completion; the service keeps its
/// current status and nothing is written.
#[derive(Debug, Clone)]
pub struct PendingSignature {
    service_id: ServiceId,
    input: CompletionInput,
}

impl PendingSignature {
    /// Runs the interactive capture. A declined or cancelled capture
    /// aborts the completion.
    pub fn capture(self, device: &mut dyn SignatureCapture) -> SignatureDecision {
        match device.capture_signature(&self.service_id) {
            SignatureOutcome::Signed(signature) => SignatureDecision::Ready(ReadyCompletion {
                service_id: self.service_id,
                input: self.input,
                signature: Some(signature),
            }),
            SignatureOutcome::Declined => SignatureDecision::Aborted,
        }
    }
}

/// What the signature stop produced.
#[derive(Debug, Clone)]
pub enum SignatureDecision {
    /// The client signed; the completion can be finalized.
    Ready(ReadyCompletion),
    /// The capture was declined or cancelled; nothing was written.
    Aborted,
}

/// A fully validated completion, one write away from done.
#[derive(Debug, Clone)]
pub struct ReadyCompletion {
    service_id: ServiceId,
    input: CompletionInput,
    signature: Option<SignatureRef>,
}

impl ReadyCompletion {
    /// Finalizes through the gateway: revalidates against the stored
    /// record and lands payload, payment method, and status in one
    /// guarded write.
    ///
    /// # Errors
    ///
    /// Returns an error if the service vanished, its status moved, the
    /// payload fails validation against the stored record, or the
    /// write fails.
    pub fn finalize(
        self,
        gateway: &mut Gateway<'_>,
        actor: Actor,
        cause: Cause,
    ) -> Result<MutationOutcome, CoreError> {
        gateway.apply(
            Command::CompleteService {
                service_id: self.service_id,
                input: self.input,
                signature: self.signature,
            },
            actor,
            cause,
        )
    }
}
