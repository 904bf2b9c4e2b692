// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers bridging API requests to the lifecycle gateway.
//!
//! Mutation handlers translate request strings into domain types, apply
//! one command through the gateway, and project the stored result back
//! into a response. Read handlers query the store directly; they never
//! write.

use std::time::{SystemTime, UNIX_EPOCH};

use corsa::{
    Command, CompanyPolicy, CompletionFlow, CompletionTerms, Gateway, MutationOutcome,
    NotificationDelivery, ReadScope, ServiceOrigin, ServiceStore,
};
use corsa_audit::{AuditEvent, Cause};
use corsa_domain::{
    Client, CompanyId, Completion, CompletionInput, DriverId, ExternalDriver, OperatorId,
    Passenger, PaymentMethod, Service, ServiceDraft, ServiceId, ServicePatch, SignatureRef,
    VehicleId, is_complete, missing_fields,
};
use corsa_persistence::MemoryStore;
use time::{Date, OffsetDateTime, Time};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::parse::{parse_date, parse_time};
use crate::request_response::{
    AssignServiceRequest, AssignServiceResponse, CancelServiceResponse, CompleteServiceRequest,
    CompleteServiceResponse, CompletionInfo, CompletionTermsInfo, CreateServiceRequest,
    CreateServiceResponse, DeclineServiceResponse, DeleteServiceResponse, GetServiceResponse,
    ListServicesResponse, ListServicesWithPassengersResponse, MissingFieldsResponse, PassengerInfo,
    PassengerInput, ServiceInfo, ServiceWithPassengersInfo, UnassignServiceResponse,
    UpdateServiceRequest, UpdateServiceResponse,
};
use crate::{ActorKind, AuthenticatedActor};

/// What a successful mutation hands back to the transport layer.
///
/// The transport serializes the response, records the audit event, and
/// drops the named read-model caches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The response body.
    pub response: T,
    /// The audit event recorded for the mutation.
    pub audit_event: AuditEvent,
    /// Read-model scopes whose cached data the mutation made stale.
    pub invalidations: Vec<ReadScope>,
}

/// Creates a new service from the create form.
///
/// This function:
/// 1. Translates the API request into domain types
/// 2. Mints a fresh service id
/// 3. Applies the create command through the lifecycle gateway
/// 4. Reports the stored status and any still-missing booking fields
///
/// Operator sessions create drafts whose status is inferred from the
/// field state; portal sessions create client requests pinned for
/// operator review.
///
/// # Arguments
///
/// * `gateway` - The lifecycle gateway over the collaborating ports
/// * `request` - The create form fields
/// * `authenticated_actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(ApiResult<CreateServiceResponse>)` with the stored result
/// * `Err(ApiError)` if translation or the mutation fails
///
/// # Errors
///
/// Returns an error if:
/// - A date, time, or payment method string does not parse
/// - Both a company id and a private client name are supplied
/// - The domain rejects the field values
/// - The write fails
pub fn create_service(
    gateway: &mut Gateway<'_>,
    request: CreateServiceRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<CreateServiceResponse>, ApiError> {
    // Translate API request into domain types
    let service_date: Option<Date> = request
        .service_date
        .map(|value| parse_date_field(&value, "service_date"))
        .transpose()?;
    let scheduled_time: Option<Time> = request
        .scheduled_time
        .map(|value| parse_time_field(&value, "scheduled_time"))
        .transpose()?;
    let client: Option<Client> =
        client_from_fields(request.client_company_id, request.client_name)?;
    let payment_method: Option<PaymentMethod> = request
        .payment_method
        .map(|value| parse_payment_method(&value))
        .transpose()?;
    let driver_id: Option<DriverId> = request.driver_id.map(|value| DriverId::new(&value));
    let vehicle_id: Option<VehicleId> = request.vehicle_id.map(|value| VehicleId::new(&value));
    let external_driver: Option<ExternalDriver> =
        external_driver_from_fields(request.external_driver_name, request.external_driver_email)?;
    let passengers: Vec<Passenger> = passengers_from_inputs(request.passengers)?;

    // Create core command
    let draft: ServiceDraft = ServiceDraft::new(
        mint_service_id(),
        service_date,
        scheduled_time,
        request.pickup_address.unwrap_or_default(),
        request.destination_address.unwrap_or_default(),
        client,
        payment_method,
        request.vat_percent,
        request.net_amount,
        request.order_number,
        driver_id,
        vehicle_id,
        external_driver,
        passengers,
        OperatorId::new(&authenticated_actor.id),
        OffsetDateTime::now_utc(),
    );
    let origin: ServiceOrigin = match authenticated_actor.kind {
        ActorKind::Operator => ServiceOrigin::Operator,
        ActorKind::ClientPortal => ServiceOrigin::ClientPortal,
    };

    // Apply command via core transition
    let outcome: MutationOutcome = gateway
        .apply(
            Command::CreateService { draft, origin },
            authenticated_actor.to_audit_actor(),
            cause,
        )
        .map_err(translate_core_error)?;

    let service: &Service = mutated_service(&outcome)?;
    let missing: Vec<String> = missing_fields(service)
        .into_iter()
        .map(String::from)
        .collect();
    let message: String = if missing.is_empty() {
        format!(
            "Created service '{}' with status '{}'",
            service.id.value(),
            service.status.as_str()
        )
    } else {
        format!(
            "Created service '{}' with status '{}'. Still missing: {}",
            service.id.value(),
            service.status.as_str(),
            missing.join(", ")
        )
    };
    let response: CreateServiceResponse = CreateServiceResponse {
        service_id: service.id.value().to_string(),
        status: service.status.as_str().to_string(),
        missing_fields: missing,
        message,
    };

    Ok(ApiResult {
        response,
        audit_event: outcome.audit_event,
        invalidations: outcome.invalidations,
    })
}

/// Merges edited fields into an existing service.
///
/// Absent request fields keep their stored values. The stored status is
/// re-inferred from the merged record; draft-like statuses may promote,
/// operational statuses never move here.
///
/// # Errors
///
/// Returns an error if:
/// - The service id is blank or does not resolve
/// - A date, time, or payment method string does not parse
/// - The domain rejects the merged record
/// - Another session moved the status since it was read
pub fn update_service(
    gateway: &mut Gateway<'_>,
    service_id: &str,
    request: UpdateServiceRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<UpdateServiceResponse>, ApiError> {
    let service_id: ServiceId = parse_service_id(service_id)?;

    // Translate API request into domain types
    let client: Option<Client> =
        client_from_fields(request.client_company_id, request.client_name)?;
    let patch: ServicePatch = ServicePatch {
        service_date: request
            .service_date
            .map(|value| parse_date_field(&value, "service_date"))
            .transpose()?,
        scheduled_time: request
            .scheduled_time
            .map(|value| parse_time_field(&value, "scheduled_time"))
            .transpose()?,
        pickup_address: request.pickup_address,
        destination_address: request.destination_address,
        client,
        payment_method: request
            .payment_method
            .map(|value| parse_payment_method(&value))
            .transpose()?,
        vat_percent: request.vat_percent,
        net_amount: request.net_amount,
        order_number: request.order_number,
        passengers: request.passengers.map(passengers_from_inputs).transpose()?,
    };

    // Apply command via core transition
    let outcome: MutationOutcome = gateway
        .apply(
            Command::UpdateService { service_id, patch },
            authenticated_actor.to_audit_actor(),
            cause,
        )
        .map_err(translate_core_error)?;

    let service: &Service = mutated_service(&outcome)?;
    let missing: Vec<String> = missing_fields(service)
        .into_iter()
        .map(String::from)
        .collect();
    let response: UpdateServiceResponse = UpdateServiceResponse {
        service_id: service.id.value().to_string(),
        status: service.status.as_str().to_string(),
        message: format!(
            "Updated service '{}', status '{}'",
            service.id.value(),
            service.status.as_str()
        ),
        missing_fields: missing,
    };

    Ok(ApiResult {
        response,
        audit_event: outcome.audit_event,
        invalidations: outcome.invalidations,
    })
}

/// Assigns a driver to a service.
///
/// This function:
/// 1. Translates the assignment into domain types
/// 2. Applies the assign command through the lifecycle gateway
/// 3. Reports whether the assignment notification was delivered
///
/// Exactly one of the internal driver id or the external driver name
/// must be supplied, and internal drivers need a vehicle. The mutation
/// stands even when the notification fails; the failure is reported on
/// the response instead.
///
/// # Arguments
///
/// * `gateway` - The lifecycle gateway over the collaborating ports
/// * `service_id` - The service to assign
/// * `request` - The assignment fields
/// * `authenticated_actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(ApiResult<AssignServiceResponse>)` with the stored result
/// * `Err(ApiError)` if translation or the mutation fails
///
/// # Errors
///
/// Returns an error if:
/// - The service id is blank or does not resolve
/// - Both or neither driver kind is supplied
/// - An internal driver is supplied without a vehicle
/// - The stored status cannot move to assigned
/// - Another session moved the status since it was read
pub fn assign_service(
    gateway: &mut Gateway<'_>,
    service_id: &str,
    request: AssignServiceRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<AssignServiceResponse>, ApiError> {
    let service_id: ServiceId = parse_service_id(service_id)?;

    // Translate API request into domain types
    let driver_id: Option<DriverId> = request.driver_id.map(|value| DriverId::new(&value));
    let vehicle_id: Option<VehicleId> = request.vehicle_id.map(|value| VehicleId::new(&value));
    let external_driver: Option<ExternalDriver> =
        external_driver_from_fields(request.external_driver_name, request.external_driver_email)?;

    // Apply command via core transition
    let outcome: MutationOutcome = gateway
        .apply(
            Command::AssignService {
                service_id,
                driver_id,
                external_driver,
                vehicle_id,
            },
            authenticated_actor.to_audit_actor(),
            cause,
        )
        .map_err(translate_core_error)?;

    let service: &Service = mutated_service(&outcome)?;
    let notification_delivered: bool = !matches!(
        outcome.notification,
        Some(NotificationDelivery::Failed { .. })
    );
    let message: String = if notification_delivered {
        format!(
            "Assigned service '{}' to {}",
            service.id.value(),
            assigned_driver_label(service)
        )
    } else {
        tracing::warn!(
            "Notification delivery failed for service '{}'",
            service.id.value()
        );
        format!(
            "Assigned service '{}' to {}, but the notification could not be delivered",
            service.id.value(),
            assigned_driver_label(service)
        )
    };
    let response: AssignServiceResponse = AssignServiceResponse {
        service_id: service.id.value().to_string(),
        status: service.status.as_str().to_string(),
        notification_delivered,
        message,
    };

    Ok(ApiResult {
        response,
        audit_event: outcome.audit_event,
        invalidations: outcome.invalidations,
    })
}

/// Clears a service's assignment and returns it to the dispatch queue.
///
/// No notification is sent for unassignment.
///
/// # Errors
///
/// Returns an error if the service id is blank, does not resolve, or
/// the stored status is not assigned.
pub fn unassign_service(
    gateway: &mut Gateway<'_>,
    service_id: &str,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<UnassignServiceResponse>, ApiError> {
    let service_id: ServiceId = parse_service_id(service_id)?;

    // Apply command via core transition
    let outcome: MutationOutcome = gateway
        .apply(
            Command::UnassignService { service_id },
            authenticated_actor.to_audit_actor(),
            cause,
        )
        .map_err(translate_core_error)?;

    let service: &Service = mutated_service(&outcome)?;
    let response: UnassignServiceResponse = UnassignServiceResponse {
        service_id: service.id.value().to_string(),
        status: service.status.as_str().to_string(),
        message: format!(
            "Returned service '{}' to the assignment queue",
            service.id.value()
        ),
    };

    Ok(ApiResult {
        response,
        audit_event: outcome.audit_event,
        invalidations: outcome.invalidations,
    })
}

/// Finalizes the completion of a service.
///
/// This function:
/// 1. Translates the completion form into domain types
/// 2. Applies the complete command through the lifecycle gateway
/// 3. Reports the stored status after the completion lands
///
/// The gateway revalidates everything against the stored record: the
/// resolved payment method, the reconciliation amounts, the hours
/// worked, and the company signature mandate. The payload, the resolved
/// method, and the status flip land in one guarded write.
///
/// # Arguments
///
/// * `gateway` - The lifecycle gateway over the collaborating ports
/// * `service_id` - The service to complete
/// * `request` - The completion form fields
/// * `authenticated_actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(ApiResult<CompleteServiceResponse>)` with the stored result
/// * `Err(ApiError)` if translation or the mutation fails
///
/// # Errors
///
/// Returns an error if:
/// - The service id is blank or does not resolve
/// - No payment method is resolvable from the form or the record
/// - The reconciliation values fail validation
/// - The client company mandates a signature and none was captured
/// - Another session moved the status since it was read
pub fn complete_service(
    gateway: &mut Gateway<'_>,
    service_id: &str,
    request: CompleteServiceRequest,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<CompleteServiceResponse>, ApiError> {
    let service_id: ServiceId = parse_service_id(service_id)?;

    // Translate API request into domain types
    let payment_method: Option<PaymentMethod> = request
        .payment_method
        .map(|value| parse_payment_method(&value))
        .transpose()?;
    let cash_recipient: Option<OperatorId> =
        request.cash_recipient.map(|value| OperatorId::new(&value));
    let signature: Option<SignatureRef> = match request.signature_ref {
        Some(value) if value.trim().is_empty() => {
            return Err(ApiError::InvalidInput {
                field: String::from("signature_ref"),
                message: String::from("A signature reference cannot be blank"),
            });
        }
        Some(value) => Some(SignatureRef::new(&value)),
        None => None,
    };
    let input: CompletionInput = CompletionInput {
        payment_method,
        received_amount: request.received_amount,
        hours_worked: request.hours_worked,
        cash_recipient,
    };

    // Apply command via core transition
    let outcome: MutationOutcome = gateway
        .apply(
            Command::CompleteService {
                service_id,
                input,
                signature,
            },
            authenticated_actor.to_audit_actor(),
            cause,
        )
        .map_err(translate_core_error)?;

    let service: &Service = mutated_service(&outcome)?;
    let response: CompleteServiceResponse = CompleteServiceResponse {
        service_id: service.id.value().to_string(),
        status: service.status.as_str().to_string(),
        message: format!("Completed service '{}'", service.id.value()),
    };

    Ok(ApiResult {
        response,
        audit_event: outcome.audit_event,
        invalidations: outcome.invalidations,
    })
}

/// Cancels a service.
///
/// # Errors
///
/// Returns an error if the service id is blank, does not resolve, or
/// the stored status is terminal.
pub fn cancel_service(
    gateway: &mut Gateway<'_>,
    service_id: &str,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<CancelServiceResponse>, ApiError> {
    let service_id: ServiceId = parse_service_id(service_id)?;

    // Apply command via core transition
    let outcome: MutationOutcome = gateway
        .apply(
            Command::CancelService { service_id },
            authenticated_actor.to_audit_actor(),
            cause,
        )
        .map_err(translate_core_error)?;

    let service: &Service = mutated_service(&outcome)?;
    let response: CancelServiceResponse = CancelServiceResponse {
        service_id: service.id.value().to_string(),
        status: service.status.as_str().to_string(),
        message: format!("Cancelled service '{}'", service.id.value()),
    };

    Ok(ApiResult {
        response,
        audit_event: outcome.audit_event,
        invalidations: outcome.invalidations,
    })
}

/// Turns down a client-requested service.
///
/// # Errors
///
/// Returns an error if the service id is blank, does not resolve, or
/// the stored status is not client requested.
pub fn decline_service(
    gateway: &mut Gateway<'_>,
    service_id: &str,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<DeclineServiceResponse>, ApiError> {
    let service_id: ServiceId = parse_service_id(service_id)?;

    // Apply command via core transition
    let outcome: MutationOutcome = gateway
        .apply(
            Command::DeclineService { service_id },
            authenticated_actor.to_audit_actor(),
            cause,
        )
        .map_err(translate_core_error)?;

    let service: &Service = mutated_service(&outcome)?;
    let response: DeclineServiceResponse = DeclineServiceResponse {
        service_id: service.id.value().to_string(),
        status: service.status.as_str().to_string(),
        message: format!("Declined service '{}'", service.id.value()),
    };

    Ok(ApiResult {
        response,
        audit_event: outcome.audit_event,
        invalidations: outcome.invalidations,
    })
}

/// Removes a service and its passengers permanently.
///
/// # Errors
///
/// Returns an error if the service id is blank, does not resolve, or
/// the delete fails.
pub fn delete_service(
    gateway: &mut Gateway<'_>,
    service_id: &str,
    authenticated_actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<DeleteServiceResponse>, ApiError> {
    let service_id: ServiceId = parse_service_id(service_id)?;

    // Apply command via core transition
    let outcome: MutationOutcome = gateway
        .apply(
            Command::DeleteService { service_id },
            authenticated_actor.to_audit_actor(),
            cause,
        )
        .map_err(translate_core_error)?;

    // A delete leaves no stored record; the audit event names the target
    let response: DeleteServiceResponse = DeleteServiceResponse {
        service_id: outcome.audit_event.service_id.value().to_string(),
        message: format!(
            "Deleted service '{}' and its passengers",
            outcome.audit_event.service_id.value()
        ),
    };

    Ok(ApiResult {
        response,
        audit_event: outcome.audit_event,
        invalidations: outcome.invalidations,
    })
}

/// Opens the completion dialog for a service and returns its terms.
///
/// The terms tell the form what to show before anything is entered:
/// whether the payment method settles on the spot, the VAT-inclusive
/// expected total, and whether the client company mandates a signature.
/// Nothing is written; abandoning the dialog leaves no trace.
///
/// # Errors
///
/// Returns an error if:
/// - The service id is blank or does not resolve
/// - The stored status cannot move to completed
/// - The company policy lookup fails
pub fn begin_completion(
    store: &MemoryStore,
    policy: &dyn CompanyPolicy,
    service_id: &str,
) -> Result<CompletionTermsInfo, ApiError> {
    let service_id: ServiceId = parse_service_id(service_id)?;
    let service: Service = load_service_record(store, &service_id)?;

    let flow: CompletionFlow =
        CompletionFlow::open(service, policy).map_err(translate_core_error)?;
    let terms: &CompletionTerms = flow.terms();

    Ok(CompletionTermsInfo {
        service_id: service_id.value().to_string(),
        requires_cash_reconciliation: terms.requires_cash_reconciliation,
        expected_total: terms.expected_total,
        vat_percent: terms.vat_percent,
        signature_required: terms.signature_required,
    })
}

/// Loads one service with its passengers.
///
/// # Errors
///
/// Returns an error if the service id is blank, does not resolve, or
/// the store fails.
pub fn get_service(store: &MemoryStore, service_id: &str) -> Result<GetServiceResponse, ApiError> {
    let service_id: ServiceId = parse_service_id(service_id)?;
    let service: Service = load_service_record(store, &service_id)?;
    let passengers: Vec<Passenger> =
        store
            .load_passengers(&service_id)
            .map_err(|e| ApiError::Internal {
                message: format!("Failed to load passengers: {e}"),
            })?;

    Ok(GetServiceResponse {
        service: service_info(&service),
        passengers: passengers.iter().map(passenger_info).collect(),
    })
}

/// Lists every stored service.
#[must_use]
pub fn list_services(store: &MemoryStore) -> ListServicesResponse {
    let services: Vec<ServiceInfo> = store.list_services().iter().map(service_info).collect();
    ListServicesResponse { services }
}

/// Lists every stored service joined with its passengers.
#[must_use]
pub fn list_services_with_passengers(store: &MemoryStore) -> ListServicesWithPassengersResponse {
    let services: Vec<ServiceWithPassengersInfo> = store
        .list_services_with_passengers()
        .iter()
        .map(|(service, passengers)| ServiceWithPassengersInfo {
            service: service_info(service),
            passengers: passengers.iter().map(passenger_info).collect(),
        })
        .collect();
    ListServicesWithPassengersResponse { services }
}

/// Reports which mandatory booking fields a service is still missing.
///
/// # Errors
///
/// Returns an error if the service id is blank or does not resolve.
pub fn service_missing_fields(
    store: &MemoryStore,
    service_id: &str,
) -> Result<MissingFieldsResponse, ApiError> {
    let service_id: ServiceId = parse_service_id(service_id)?;
    let service: Service = load_service_record(store, &service_id)?;

    Ok(MissingFieldsResponse {
        service_id: service.id.value().to_string(),
        status: service.status.as_str().to_string(),
        is_complete: is_complete(&service),
        missing_fields: missing_fields(&service)
            .into_iter()
            .map(String::from)
            .collect(),
    })
}

/// Mints an identifier for a newly created service.
fn mint_service_id() -> ServiceId {
    let timestamp: u128 = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0))
        .as_nanos();
    ServiceId::new(&format!("svc_{timestamp}_{}", rand::random::<u64>()))
}

fn parse_service_id(value: &str) -> Result<ServiceId, ApiError> {
    let id: ServiceId = ServiceId::new(value);
    if id.value().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("service_id"),
            message: String::from("A service id cannot be blank"),
        });
    }
    Ok(id)
}

fn parse_date_field(value: &str, field: &str) -> Result<Date, ApiError> {
    parse_date(value).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: e.to_string(),
    })
}

fn parse_time_field(value: &str, field: &str) -> Result<Time, ApiError> {
    parse_time(value).map_err(|e| ApiError::InvalidInput {
        field: field.to_string(),
        message: e.to_string(),
    })
}

fn parse_payment_method(value: &str) -> Result<PaymentMethod, ApiError> {
    value
        .trim()
        .parse::<PaymentMethod>()
        .map_err(translate_domain_error)
}

/// Resolves the client reference from the two request fields. A company
/// id and a private name are mutually exclusive.
fn client_from_fields(
    company_id: Option<String>,
    name: Option<String>,
) -> Result<Option<Client>, ApiError> {
    match (company_id, name) {
        (Some(_), Some(_)) => Err(ApiError::InvalidInput {
            field: String::from("client"),
            message: String::from(
                "Supply either a client company id or a private client name, not both",
            ),
        }),
        (Some(company_id), None) => Ok(Some(Client::Company {
            company_id: CompanyId::new(&company_id),
        })),
        (None, Some(name)) => Ok(Some(Client::Private { name })),
        (None, None) => Ok(None),
    }
}

fn external_driver_from_fields(
    name: Option<String>,
    email: Option<String>,
) -> Result<Option<ExternalDriver>, ApiError> {
    match (name, email) {
        (Some(name), email) => Ok(Some(ExternalDriver::new(name, email))),
        (None, Some(_)) => Err(ApiError::InvalidInput {
            field: String::from("external_driver_name"),
            message: String::from("An external driver email requires an external driver name"),
        }),
        (None, None) => Ok(None),
    }
}

fn passenger_from_input(input: PassengerInput) -> Result<Passenger, ApiError> {
    let pickup_time: Option<Time> = input
        .pickup_time
        .map(|value| parse_time_field(&value, "pickup_time"))
        .transpose()?;
    Ok(Passenger::new(
        input.name,
        input.contact,
        input.pickup_point,
        pickup_time,
        input.custom_pickup,
    ))
}

fn passengers_from_inputs(inputs: Vec<PassengerInput>) -> Result<Vec<Passenger>, ApiError> {
    inputs.into_iter().map(passenger_from_input).collect()
}

fn load_service_record(store: &MemoryStore, service_id: &ServiceId) -> Result<Service, ApiError> {
    store
        .load_service(service_id)
        .map_err(|e| ApiError::Internal {
            message: format!("Failed to load service: {e}"),
        })?
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Service"),
            message: format!("No service with id '{}'", service_id.value()),
        })
}

/// Every non-delete mutation stores a service; its absence is a bug in
/// the gateway, not a caller mistake.
fn mutated_service(outcome: &MutationOutcome) -> Result<&Service, ApiError> {
    outcome.service.as_ref().ok_or_else(|| ApiError::Internal {
        message: String::from("Mutation outcome carried no stored service"),
    })
}

fn assigned_driver_label(service: &Service) -> String {
    service.driver_id.as_ref().map_or_else(
        || {
            service.external_driver.as_ref().map_or_else(
                || String::from("no driver"),
                |driver| format!("external driver '{}'", driver.name),
            )
        },
        |driver| format!("driver '{}'", driver.value()),
    )
}

fn service_info(service: &Service) -> ServiceInfo {
    let (client_company_id, client_name): (Option<String>, Option<String>) = match &service.client {
        Some(Client::Company { company_id }) => (Some(company_id.value().to_string()), None),
        Some(Client::Private { name }) => (None, Some(name.clone())),
        None => (None, None),
    };

    ServiceInfo {
        service_id: service.id.value().to_string(),
        status: service.status.as_str().to_string(),
        service_date: service.service_date,
        scheduled_time: service.scheduled_time,
        pickup_address: non_empty(&service.pickup_address),
        destination_address: non_empty(&service.destination_address),
        client_company_id,
        client_name,
        payment_method: service
            .payment_method
            .map(|method| method.as_str().to_string()),
        vat_percent: service.vat_percent,
        net_amount: service.net_amount,
        order_number: service.order_number.clone(),
        driver_id: service.driver_id.as_ref().map(|id| id.value().to_string()),
        vehicle_id: service.vehicle_id.as_ref().map(|id| id.value().to_string()),
        external_driver_name: service
            .external_driver
            .as_ref()
            .map(|driver| driver.name.clone()),
        external_driver_email: service
            .external_driver
            .as_ref()
            .and_then(|driver| driver.email.clone()),
        passenger_count: service.passengers.len(),
        completion: service.completion.as_ref().map(completion_info),
    }
}

fn completion_info(completion: &Completion) -> CompletionInfo {
    CompletionInfo {
        received_amount: completion.received_amount,
        hours_worked: completion.hours_worked,
        cash_recipient: completion
            .cash_recipient
            .as_ref()
            .map(|id| id.value().to_string()),
        signature_ref: completion
            .signature
            .as_ref()
            .map(|signature| signature.value().to_string()),
        vat_percent: completion.vat_percent,
    }
}

fn passenger_info(passenger: &Passenger) -> PassengerInfo {
    PassengerInfo {
        name: passenger.name.clone(),
        contact: passenger.contact.clone(),
        pickup_point: passenger.pickup_point.clone(),
        pickup_time: passenger.pickup_time,
        custom_pickup: passenger.custom_pickup.clone(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
