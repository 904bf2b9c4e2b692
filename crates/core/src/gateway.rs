// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use corsa_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use corsa_domain::{
    Client, CompanyId, Completion, CompletionInput, DEFAULT_VAT_PERCENT, DomainError, DriverId,
    ExternalDriver, PaymentMethod, Service, ServiceDraft, ServiceId, ServicePatch, ServiceStatus,
    SignatureRef, VehicleId, infer_status, validate_assignment, validate_completion_input,
    validate_service_record,
};
use rust_decimal::Decimal;

use crate::command::{Command, ServiceOrigin};
use crate::error::CoreError;
use crate::outcome::{MutationOutcome, NotificationDelivery, ReadScope};
use crate::ports::{
    CompanyPolicy, NotificationKind, NotificationSink, ReadModelSubscriber, SaveGuard,
    ServiceStore,
};

/// The single entry point for every service mutation.
///
/// Handlers construct a gateway over the collaborating ports and feed
/// it [`Command`]s. Nothing else writes services: status inference,
/// guarded persistence, audit capture, notification dispatch, and
/// read-model invalidation all happen here, so no call site can skip
/// one of them.
pub struct Gateway<'a> {
    store: &'a mut dyn ServiceStore,
    notifier: &'a dyn NotificationSink,
    policy: &'a dyn CompanyPolicy,
    read_models: &'a mut dyn ReadModelSubscriber,
}

impl<'a> Gateway<'a> {
    /// Creates a gateway over the given collaborators.
    #[must_use]
    pub fn new(
        store: &'a mut dyn ServiceStore,
        notifier: &'a dyn NotificationSink,
        policy: &'a dyn CompanyPolicy,
        read_models: &'a mut dyn ReadModelSubscriber,
    ) -> Self {
        Self {
            store,
            notifier,
            policy,
            read_models,
        }
    }

    /// Applies a command, producing the stored service and audit event.
    ///
    /// # Arguments
    ///
    /// * `command` - The command to apply
    /// * `actor` - The actor performing this action
    /// * `cause` - The cause or reason for this action
    ///
    /// # Returns
    ///
    /// * `Ok(MutationOutcome)` with the persisted result
    /// * `Err(CoreError)` if the command is invalid or the write fails
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The command violates domain rules
    /// - The referenced service or company does not exist
    /// - The guarded write detects a concurrent transition
    /// - The backing store fails
    pub fn apply(
        &mut self,
        command: Command,
        actor: Actor,
        cause: Cause,
    ) -> Result<MutationOutcome, CoreError> {
        match command {
            Command::CreateService { draft, origin } => {
                self.create_service(draft, origin, actor, cause)
            }
            Command::UpdateService { service_id, patch } => {
                self.update_service(&service_id, patch, actor, cause)
            }
            Command::AssignService {
                service_id,
                driver_id,
                external_driver,
                vehicle_id,
            } => self.assign_service(
                &service_id,
                driver_id,
                external_driver,
                vehicle_id,
                actor,
                cause,
            ),
            Command::UnassignService { service_id } => {
                self.unassign_service(&service_id, actor, cause)
            }
            Command::CompleteService {
                service_id,
                input,
                signature,
            } => self.complete_service(&service_id, input, signature, actor, cause),
            Command::CancelService { service_id } => {
                self.transition_service(&service_id, ServiceStatus::Cancelled, "Cancel", actor, cause)
            }
            Command::DeclineService { service_id } => self.transition_service(
                &service_id,
                ServiceStatus::NotAccepted,
                "Decline",
                actor,
                cause,
            ),
            Command::DeleteService { service_id } => self.delete_service(&service_id, actor, cause),
        }
    }

    fn create_service(
        &mut self,
        draft: ServiceDraft,
        origin: ServiceOrigin,
        actor: Actor,
        cause: Cause,
    ) -> Result<MutationOutcome, CoreError> {
        // Build the candidate record and validate field constraints
        let mut service: Service = Service::from_draft(draft, ServiceStatus::Draft);
        validate_service_record(&service)?;

        // Portal submissions are pinned for operator review; operator
        // creates take whatever status the field state implies
        service.status = match origin {
            ServiceOrigin::Operator => infer_status(&service, ServiceStatus::Draft),
            ServiceOrigin::ClientPortal => ServiceStatus::ClientRequested,
        };

        // Guarded insert: the id must be fresh
        self.store.save_service(&service, SaveGuard::NewRecord)?;

        // Create audit event
        let before: StateSnapshot = absent_snapshot();
        let after: StateSnapshot = snapshot_of(&service);
        let action: Action = Action::new(
            String::from("CreateService"),
            Some(format!(
                "Created service '{}' with status '{}'",
                service.id.value(),
                service.status.as_str()
            )),
        );
        let audit_event: AuditEvent =
            AuditEvent::new(actor, cause, action, service.id.clone(), before, after);

        Ok(self.finish(Some(service), audit_event, None))
    }

    fn update_service(
        &mut self,
        service_id: &ServiceId,
        patch: ServicePatch,
        actor: Actor,
        cause: Cause,
    ) -> Result<MutationOutcome, CoreError> {
        let current: Service = self.load_existing(service_id)?;

        // Merge the edited fields and validate the merged record
        let mut updated: Service = current.apply_patch(&patch);
        validate_service_record(&updated)?;

        // Re-run inference against the stored status, never the
        // caller's copy of it
        updated.status = infer_status(&updated, current.status);

        // Guarded write: reject if another writer moved the status
        self.store
            .save_service(&updated, SaveGuard::CurrentStatus(current.status))?;

        // Create audit event
        let before: StateSnapshot = snapshot_of(&current);
        let after: StateSnapshot = snapshot_of(&updated);
        let action: Action = Action::new(
            String::from("UpdateService"),
            Some(format!(
                "Updated service '{}', status '{}' -> '{}'",
                service_id.value(),
                current.status.as_str(),
                updated.status.as_str()
            )),
        );
        let audit_event: AuditEvent =
            AuditEvent::new(actor, cause, action, service_id.clone(), before, after);

        Ok(self.finish(Some(updated), audit_event, None))
    }

    fn assign_service(
        &mut self,
        service_id: &ServiceId,
        driver_id: Option<DriverId>,
        external_driver: Option<ExternalDriver>,
        vehicle_id: Option<VehicleId>,
        actor: Actor,
        cause: Cause,
    ) -> Result<MutationOutcome, CoreError> {
        let current: Service = self.load_existing(service_id)?;

        // Exactly one driver kind, with a vehicle for internal drivers
        validate_assignment(
            driver_id.as_ref(),
            external_driver.as_ref(),
            vehicle_id.as_ref(),
        )?;

        // The assignment must be reachable from the stored status
        current.status.validate_transition(ServiceStatus::Assigned)?;

        // Replace the assignment wholesale; switching from an internal
        // to an external driver also drops the old vehicle
        let mut updated: Service = current.clone();
        updated.driver_id = driver_id;
        updated.external_driver = external_driver;
        updated.vehicle_id = vehicle_id;
        updated.status = ServiceStatus::Assigned;

        self.store
            .save_service(&updated, SaveGuard::CurrentStatus(current.status))?;

        // One notification per successful assignment, never more
        let delivery: NotificationDelivery =
            match self.notifier.notify(service_id, NotificationKind::Assigned) {
                Ok(()) => NotificationDelivery::Delivered,
                Err(err) => NotificationDelivery::Failed {
                    message: err.message,
                },
            };

        // Create audit event
        let before: StateSnapshot = snapshot_of(&current);
        let after: StateSnapshot = snapshot_of(&updated);
        let action: Action = Action::new(
            String::from("AssignService"),
            Some(format!(
                "Assigned service '{}' to {}",
                service_id.value(),
                assignment_summary(&updated)
            )),
        );
        let audit_event: AuditEvent =
            AuditEvent::new(actor, cause, action, service_id.clone(), before, after);

        Ok(self.finish(Some(updated), audit_event, Some(delivery)))
    }

    fn unassign_service(
        &mut self,
        service_id: &ServiceId,
        actor: Actor,
        cause: Cause,
    ) -> Result<MutationOutcome, CoreError> {
        let current: Service = self.load_existing(service_id)?;

        // Only an assigned service has an assignment to clear
        if current.status != ServiceStatus::Assigned {
            return Err(CoreError::Validation(DomainError::InvalidStatusTransition {
                from: current.status.as_str().to_string(),
                to: ServiceStatus::AwaitingAssignment.as_str().to_string(),
                reason: String::from("only an assigned service can be unassigned"),
            }));
        }

        // Clear the assignment and requeue for dispatch, regardless of
        // how complete the remaining fields are
        let mut updated: Service = current.clone();
        updated.driver_id = None;
        updated.external_driver = None;
        updated.vehicle_id = None;
        updated.status = ServiceStatus::AwaitingAssignment;

        self.store
            .save_service(&updated, SaveGuard::CurrentStatus(current.status))?;

        // Create audit event; unassignment is silent, no notification
        let before: StateSnapshot = snapshot_of(&current);
        let after: StateSnapshot = snapshot_of(&updated);
        let action: Action = Action::new(
            String::from("UnassignService"),
            Some(format!(
                "Unassigned service '{}', returned to dispatch queue",
                service_id.value()
            )),
        );
        let audit_event: AuditEvent =
            AuditEvent::new(actor, cause, action, service_id.clone(), before, after);

        Ok(self.finish(Some(updated), audit_event, None))
    }

    fn complete_service(
        &mut self,
        service_id: &ServiceId,
        input: CompletionInput,
        signature: Option<SignatureRef>,
        actor: Actor,
        cause: Cause,
    ) -> Result<MutationOutcome, CoreError> {
        let current: Service = self.load_existing(service_id)?;

        // Only an assigned service can be completed
        current.status.validate_transition(ServiceStatus::Completed)?;

        // A payment method must be resolvable from the form or the record
        let method: PaymentMethod = input
            .payment_method
            .or(current.payment_method)
            .ok_or(CoreError::Validation(DomainError::MissingPaymentMethod))?;

        // Reconciliation amounts, hours, and the cash recipient
        validate_completion_input(method, &input)?;

        // Company clients may mandate a captured signature; the policy
        // is only consulted when none was collected
        let mandating: Option<CompanyId> = if signature.is_some() {
            None
        } else {
            mandating_company(self.policy, &current)?
        };
        if let Some(company) = mandating {
            return Err(CoreError::Validation(DomainError::SignatureRequired {
                company,
            }));
        }

        // Freeze the VAT rate in effect at completion time
        let vat_percent: Decimal = current.vat_percent.unwrap_or(DEFAULT_VAT_PERCENT);

        // Single write carrying the payload, the resolved method, and
        // the status flip together
        let mut updated: Service = current.clone();
        updated.payment_method = Some(method);
        updated.completion = Some(Completion::new(
            input.received_amount,
            input.hours_worked,
            input.cash_recipient,
            signature,
            vat_percent,
        ));
        updated.status = ServiceStatus::Completed;

        self.store
            .save_service(&updated, SaveGuard::CurrentStatus(current.status))?;

        // Create audit event
        let before: StateSnapshot = snapshot_of(&current);
        let after: StateSnapshot = snapshot_of(&updated);
        let action: Action = Action::new(
            String::from("CompleteService"),
            Some(format!(
                "Completed service '{}' with payment method '{}'",
                service_id.value(),
                method.as_str()
            )),
        );
        let audit_event: AuditEvent =
            AuditEvent::new(actor, cause, action, service_id.clone(), before, after);

        Ok(self.finish(Some(updated), audit_event, None))
    }

    fn transition_service(
        &mut self,
        service_id: &ServiceId,
        target: ServiceStatus,
        action_name: &str,
        actor: Actor,
        cause: Cause,
    ) -> Result<MutationOutcome, CoreError> {
        let current: Service = self.load_existing(service_id)?;

        // The transition table decides what is reachable from here
        current.status.validate_transition(target)?;

        let mut updated: Service = current.clone();
        updated.status = target;

        self.store
            .save_service(&updated, SaveGuard::CurrentStatus(current.status))?;

        // Create audit event
        let before: StateSnapshot = snapshot_of(&current);
        let after: StateSnapshot = snapshot_of(&updated);
        let action: Action = Action::new(
            format!("{action_name}Service"),
            Some(format!(
                "Moved service '{}' from '{}' to '{}'",
                service_id.value(),
                current.status.as_str(),
                target.as_str()
            )),
        );
        let audit_event: AuditEvent =
            AuditEvent::new(actor, cause, action, service_id.clone(), before, after);

        Ok(self.finish(Some(updated), audit_event, None))
    }

    fn delete_service(
        &mut self,
        service_id: &ServiceId,
        actor: Actor,
        cause: Cause,
    ) -> Result<MutationOutcome, CoreError> {
        let current: Service = self.load_existing(service_id)?;

        // Hard delete; the store removes owned passengers with the record
        let removed: bool = self.store.delete_service(service_id)?;
        if !removed {
            return Err(CoreError::ServiceNotFound {
                service_id: service_id.clone(),
            });
        }

        // Create audit event
        let before: StateSnapshot = snapshot_of(&current);
        let after: StateSnapshot = absent_snapshot();
        let action: Action = Action::new(
            String::from("DeleteService"),
            Some(format!(
                "Deleted service '{}' and its passengers",
                service_id.value()
            )),
        );
        let audit_event: AuditEvent =
            AuditEvent::new(actor, cause, action, service_id.clone(), before, after);

        Ok(self.finish(None, audit_event, None))
    }

    /// Loads a service, mapping an unresolved id to the not-found error.
    fn load_existing(&self, service_id: &ServiceId) -> Result<Service, CoreError> {
        self.store
            .load_service(service_id)?
            .ok_or_else(|| CoreError::ServiceNotFound {
                service_id: service_id.clone(),
            })
    }

    /// Publishes invalidations and assembles the outcome.
    fn finish(
        &mut self,
        service: Option<Service>,
        audit_event: AuditEvent,
        notification: Option<NotificationDelivery>,
    ) -> MutationOutcome {
        let invalidations: Vec<ReadScope> = invalidation_scopes(&audit_event.service_id);
        self.read_models.services_changed(&invalidations);
        MutationOutcome {
            service,
            audit_event,
            invalidations,
            notification,
        }
    }
}

/// Returns the company whose policy mandates a signature, when the
/// service's client is a company with that mandate.
pub(crate) fn mandating_company(
    policy: &dyn CompanyPolicy,
    service: &Service,
) -> Result<Option<CompanyId>, CoreError> {
    match &service.client {
        Some(Client::Company { company_id }) => {
            if policy.is_signature_mandatory(company_id)? {
                Ok(Some(company_id.clone()))
            } else {
                Ok(None)
            }
        }
        _ => Ok(None),
    }
}

/// Every mutation invalidates the same three read scopes.
fn invalidation_scopes(service_id: &ServiceId) -> Vec<ReadScope> {
    vec![
        ReadScope::AllServices,
        ReadScope::Service(service_id.clone()),
        ReadScope::ServicesWithPassengers,
    ]
}

fn snapshot_of(service: &Service) -> StateSnapshot {
    StateSnapshot::new(format!(
        "status={} driver={}",
        service.status.as_str(),
        assignment_summary(service)
    ))
}

fn absent_snapshot() -> StateSnapshot {
    StateSnapshot::new(String::from("absent"))
}

fn assignment_summary(service: &Service) -> String {
    service.driver_id.as_ref().map_or_else(
        || {
            service
                .external_driver
                .as_ref()
                .map_or_else(|| String::from("none"), |d| format!("external '{}'", d.name))
        },
        |driver| {
            service.vehicle_id.as_ref().map_or_else(
                || format!("driver '{}'", driver.value()),
                |vehicle| format!("driver '{}' with vehicle '{}'", driver.value(), vehicle.value()),
            )
        },
    )
}
