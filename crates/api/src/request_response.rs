// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response types for the API layer.

use rust_decimal::Decimal;
use time::{Date, Time};

/// One passenger row submitted with a create or update request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerInput {
    /// The passenger's display name.
    pub name: String,
    /// Optional contact detail, free-form.
    pub contact: Option<String>,
    /// Optional pickup point when it differs from the service pickup.
    pub pickup_point: Option<String>,
    /// Optional pickup time as a 24-hour `hour:minute` string.
    pub pickup_time: Option<String>,
    /// Free-form pickup override note.
    pub custom_pickup: Option<String>,
}

/// Request to create a new service.
///
/// All booking fields are optional at creation time; the stored status
/// reflects which ones are still missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateServiceRequest {
    /// The date the service runs, as `year-month-day`.
    pub service_date: Option<String>,
    /// The scheduled departure time, as 24-hour `hour:minute`.
    pub scheduled_time: Option<String>,
    /// The pickup address.
    pub pickup_address: Option<String>,
    /// The destination address.
    pub destination_address: Option<String>,
    /// The client company id, for company clients.
    pub client_company_id: Option<String>,
    /// The private client name, for private clients.
    pub client_name: Option<String>,
    /// The payment method identifier.
    pub payment_method: Option<String>,
    /// VAT percentage applied to the net amount.
    pub vat_percent: Option<Decimal>,
    /// The agreed net amount.
    pub net_amount: Option<Decimal>,
    /// Optional client order number.
    pub order_number: Option<String>,
    /// Internal driver id, when the driver is already known.
    pub driver_id: Option<String>,
    /// Vehicle id, when the vehicle is already known.
    pub vehicle_id: Option<String>,
    /// External driver name, when an outside contractor runs the service.
    pub external_driver_name: Option<String>,
    /// External driver email.
    pub external_driver_email: Option<String>,
    /// Passengers travelling on this service.
    pub passengers: Vec<PassengerInput>,
}

/// Request to update an existing service.
///
/// Only the supplied fields change; absent fields keep their stored
/// values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateServiceRequest {
    /// The date the service runs, as `year-month-day`.
    pub service_date: Option<String>,
    /// The scheduled departure time, as 24-hour `hour:minute`.
    pub scheduled_time: Option<String>,
    /// The pickup address.
    pub pickup_address: Option<String>,
    /// The destination address.
    pub destination_address: Option<String>,
    /// The client company id, for company clients.
    pub client_company_id: Option<String>,
    /// The private client name, for private clients.
    pub client_name: Option<String>,
    /// The payment method identifier.
    pub payment_method: Option<String>,
    /// VAT percentage applied to the net amount.
    pub vat_percent: Option<Decimal>,
    /// The agreed net amount.
    pub net_amount: Option<Decimal>,
    /// Optional client order number.
    pub order_number: Option<String>,
    /// Replacement passenger list, when supplied.
    pub passengers: Option<Vec<PassengerInput>>,
}

/// Request to assign a driver to a service.
///
/// Exactly one of the internal driver id or the external driver name
/// must be supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignServiceRequest {
    /// Internal driver id.
    pub driver_id: Option<String>,
    /// Vehicle id, required for internal drivers.
    pub vehicle_id: Option<String>,
    /// External driver name.
    pub external_driver_name: Option<String>,
    /// External driver email.
    pub external_driver_email: Option<String>,
}

/// Request to finalize the completion of a service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompleteServiceRequest {
    /// The payment method identifier, when corrected during completion.
    pub payment_method: Option<String>,
    /// The amount actually received from the client.
    pub received_amount: Option<Decimal>,
    /// Hours worked on this service.
    pub hours_worked: Option<Decimal>,
    /// The operator who received the cash, for cash payments.
    pub cash_recipient: Option<String>,
    /// Reference to the captured digital signature.
    pub signature_ref: Option<String>,
}

/// Response after creating a service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateServiceResponse {
    /// The id of the created service.
    pub service_id: String,
    /// The stored status after creation.
    pub status: String,
    /// Booking fields still missing, in checklist order.
    pub missing_fields: Vec<String>,
    /// A human-readable result message.
    pub message: String,
}

/// Response after updating a service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateServiceResponse {
    /// The id of the updated service.
    pub service_id: String,
    /// The stored status after the update.
    pub status: String,
    /// Booking fields still missing, in checklist order.
    pub missing_fields: Vec<String>,
    /// A human-readable result message.
    pub message: String,
}

/// Response after assigning a driver to a service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignServiceResponse {
    /// The id of the assigned service.
    pub service_id: String,
    /// The stored status after assignment.
    pub status: String,
    /// Whether the assignment notification reached the client.
    pub notification_delivered: bool,
    /// A human-readable result message.
    pub message: String,
}

/// Response after returning a service to the assignment queue.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UnassignServiceResponse {
    /// The id of the service.
    pub service_id: String,
    /// The stored status after unassignment.
    pub status: String,
    /// A human-readable result message.
    pub message: String,
}

/// Response after completing a service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompleteServiceResponse {
    /// The id of the completed service.
    pub service_id: String,
    /// The stored status after completion.
    pub status: String,
    /// A human-readable result message.
    pub message: String,
}

/// Response after cancelling a service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelServiceResponse {
    /// The id of the cancelled service.
    pub service_id: String,
    /// The stored status after cancellation.
    pub status: String,
    /// A human-readable result message.
    pub message: String,
}

/// Response after declining a client-requested service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeclineServiceResponse {
    /// The id of the declined service.
    pub service_id: String,
    /// The stored status after the decline.
    pub status: String,
    /// A human-readable result message.
    pub message: String,
}

/// Response after deleting a service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DeleteServiceResponse {
    /// The id of the deleted service.
    pub service_id: String,
    /// A human-readable result message.
    pub message: String,
}

/// The completion terms shown before the completion form opens.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompletionTermsInfo {
    /// The id of the service being completed.
    pub service_id: String,
    /// Whether the payment method requires counting received money.
    pub requires_cash_reconciliation: bool,
    /// The expected gross total, net amount plus VAT.
    pub expected_total: Decimal,
    /// The VAT percentage used for the expected total.
    pub vat_percent: Decimal,
    /// Whether the client company mandates a digital signature.
    pub signature_required: bool,
}

/// Diagnostic view of a service's field completeness.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MissingFieldsResponse {
    /// The id of the inspected service.
    pub service_id: String,
    /// The stored status of the service.
    pub status: String,
    /// Whether every required booking field is filled.
    pub is_complete: bool,
    /// Booking fields still missing, in checklist order.
    pub missing_fields: Vec<String>,
}

/// Completion details recorded on a finalized service.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CompletionInfo {
    /// The amount actually received from the client.
    pub received_amount: Option<Decimal>,
    /// Hours worked on this service.
    pub hours_worked: Option<Decimal>,
    /// The operator who received the cash, for cash payments.
    pub cash_recipient: Option<String>,
    /// Reference to the captured digital signature.
    pub signature_ref: Option<String>,
    /// The VAT percentage frozen at completion time.
    pub vat_percent: Decimal,
}

/// A stored service projected for API consumers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ServiceInfo {
    /// The unique identifier of the service.
    pub service_id: String,
    /// The stored lifecycle status.
    pub status: String,
    /// The date the service runs.
    pub service_date: Option<Date>,
    /// The scheduled departure time.
    pub scheduled_time: Option<Time>,
    /// The pickup address.
    pub pickup_address: Option<String>,
    /// The destination address.
    pub destination_address: Option<String>,
    /// The client company id, for company clients.
    pub client_company_id: Option<String>,
    /// The private client name, for private clients.
    pub client_name: Option<String>,
    /// The payment method identifier.
    pub payment_method: Option<String>,
    /// VAT percentage applied to the net amount.
    pub vat_percent: Option<Decimal>,
    /// The agreed net amount.
    pub net_amount: Option<Decimal>,
    /// Optional client order number.
    pub order_number: Option<String>,
    /// Internal driver id, when assigned.
    pub driver_id: Option<String>,
    /// Vehicle id, when assigned.
    pub vehicle_id: Option<String>,
    /// External driver name, when assigned.
    pub external_driver_name: Option<String>,
    /// External driver email, when recorded.
    pub external_driver_email: Option<String>,
    /// Number of passengers travelling on this service.
    pub passenger_count: usize,
    /// Completion details, present once the service is completed.
    pub completion: Option<CompletionInfo>,
}

/// A stored passenger projected for API consumers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PassengerInfo {
    /// The passenger's display name.
    pub name: String,
    /// Optional contact detail.
    pub contact: Option<String>,
    /// Optional pickup point when it differs from the service pickup.
    pub pickup_point: Option<String>,
    /// Optional pickup time.
    pub pickup_time: Option<Time>,
    /// Free-form pickup override note.
    pub custom_pickup: Option<String>,
}

/// Detail view of a single service with its passengers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GetServiceResponse {
    /// The stored service.
    pub service: ServiceInfo,
    /// Passengers travelling on this service.
    pub passengers: Vec<PassengerInfo>,
}

/// Listing of all stored services.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListServicesResponse {
    /// All stored services.
    pub services: Vec<ServiceInfo>,
}

/// One service together with its passenger list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ServiceWithPassengersInfo {
    /// The stored service.
    pub service: ServiceInfo,
    /// Passengers travelling on this service.
    pub passengers: Vec<PassengerInfo>,
}

/// Listing of all stored services with their passengers.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListServicesWithPassengersResponse {
    /// All stored services with their passenger lists.
    pub services: Vec<ServiceWithPassengersInfo>,
}
