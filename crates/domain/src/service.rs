// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The service aggregate: one transport job from draft to completion.
//!
//! A `Service` owns its passengers and its completion record outright, and
//! references drivers, vehicles, and companies held by external systems.
//! The status field is never written directly by callers; the lifecycle
//! engine owns it.

use crate::payment_method::PaymentMethod;
use crate::service_status::ServiceStatus;
use crate::types::{
    Client, DriverId, ExternalDriver, OperatorId, Passenger, ServiceId, SignatureRef, VehicleId,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime, Time};

/// The reconciliation data recorded when a service is completed.
///
/// The VAT percentage is frozen here at completion time; later edits to the
/// service's own VAT field never touch a recorded completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    /// Amount collected by the driver, when the method requires
    /// reconciliation.
    pub received_amount: Option<Decimal>,
    /// Hours worked on the service, when recorded.
    pub hours_worked: Option<Decimal>,
    /// The internal operator credited with receiving collected cash.
    pub cash_recipient: Option<OperatorId>,
    /// Captured signature, when the client company mandates one.
    pub signature: Option<SignatureRef>,
    /// The VAT percentage applied to this completion.
    pub vat_percent: Decimal,
}

impl Completion {
    /// Creates a new `Completion` record.
    #[must_use]
    pub const fn new(
        received_amount: Option<Decimal>,
        hours_worked: Option<Decimal>,
        cash_recipient: Option<OperatorId>,
        signature: Option<SignatureRef>,
        vat_percent: Decimal,
    ) -> Self {
        Self {
            received_amount,
            hours_worked,
            cash_recipient,
            signature,
            vat_percent,
        }
    }
}

/// One transport job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    /// Opaque record identifier.
    pub id: ServiceId,
    /// The day the service runs.
    pub service_date: Option<Date>,
    /// The scheduled pickup time.
    pub scheduled_time: Option<Time>,
    /// Pickup address. Empty means not yet entered.
    pub pickup_address: String,
    /// Destination address. Empty means not yet entered.
    pub destination_address: String,
    /// The client the service is performed for.
    pub client: Option<Client>,
    /// How the client settles the service.
    pub payment_method: Option<PaymentMethod>,
    /// VAT percentage for this service. Unset falls back to the engine
    /// default at completion.
    pub vat_percent: Option<Decimal>,
    /// Net expected amount agreed with the client.
    pub net_amount: Option<Decimal>,
    /// Order or commission number, when the client supplied one.
    pub order_number: Option<String>,
    /// Assigned internal driver. Mutually exclusive with `external_driver`.
    pub driver_id: Option<DriverId>,
    /// Assigned vehicle. Required while an internal driver is assigned.
    pub vehicle_id: Option<VehicleId>,
    /// Assigned external driver. Mutually exclusive with `driver_id`.
    pub external_driver: Option<ExternalDriver>,
    /// Passengers owned by this service.
    pub passengers: Vec<Passenger>,
    /// Reconciliation data, present once the service is completed.
    pub completion: Option<Completion>,
    /// Current lifecycle status.
    pub status: ServiceStatus,
    /// The operator who created the record.
    pub created_by: OperatorId,
    /// When the record was created.
    pub created_at: OffsetDateTime,
}

impl Service {
    /// Builds a service from a draft with the given initial status.
    #[must_use]
    pub fn from_draft(draft: ServiceDraft, status: ServiceStatus) -> Self {
        Self {
            id: draft.id,
            service_date: draft.service_date,
            scheduled_time: draft.scheduled_time,
            pickup_address: draft.pickup_address,
            destination_address: draft.destination_address,
            client: draft.client,
            payment_method: draft.payment_method,
            vat_percent: draft.vat_percent,
            net_amount: draft.net_amount,
            order_number: draft.order_number,
            driver_id: draft.driver_id,
            vehicle_id: draft.vehicle_id,
            external_driver: draft.external_driver,
            passengers: draft.passengers,
            completion: None,
            status,
            created_by: draft.created_by,
            created_at: draft.created_at,
        }
    }

    /// Returns true if either an internal or an external driver is bound to
    /// the service.
    #[must_use]
    pub const fn has_driver(&self) -> bool {
        self.driver_id.is_some() || self.external_driver.is_some()
    }

    /// Returns the merge of this service with a patch.
    ///
    /// Patch fields that are `None` leave the stored value unchanged.
    /// Assignment and completion fields are not part of the patch surface;
    /// they move only through their dedicated operations.
    #[must_use]
    pub fn apply_patch(&self, patch: &ServicePatch) -> Self {
        let mut updated: Self = self.clone();

        if let Some(service_date) = patch.service_date {
            updated.service_date = Some(service_date);
        }
        if let Some(scheduled_time) = patch.scheduled_time {
            updated.scheduled_time = Some(scheduled_time);
        }
        if let Some(pickup_address) = &patch.pickup_address {
            updated.pickup_address = pickup_address.clone();
        }
        if let Some(destination_address) = &patch.destination_address {
            updated.destination_address = destination_address.clone();
        }
        if let Some(client) = &patch.client {
            updated.client = Some(client.clone());
        }
        if let Some(payment_method) = patch.payment_method {
            updated.payment_method = Some(payment_method);
        }
        if let Some(vat_percent) = patch.vat_percent {
            updated.vat_percent = Some(vat_percent);
        }
        if let Some(net_amount) = patch.net_amount {
            updated.net_amount = Some(net_amount);
        }
        if let Some(order_number) = &patch.order_number {
            updated.order_number = Some(order_number.clone());
        }
        if let Some(passengers) = &patch.passengers {
            updated.passengers = passengers.clone();
        }

        updated
    }
}

/// The payload for creating a service.
///
/// Drafts carry no status and no completion data; the lifecycle engine
/// decides the initial status when the record is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDraft {
    /// Identifier for the new record, supplied by the caller's id scheme.
    pub id: ServiceId,
    /// The day the service runs.
    pub service_date: Option<Date>,
    /// The scheduled pickup time.
    pub scheduled_time: Option<Time>,
    /// Pickup address. Empty means not yet entered.
    pub pickup_address: String,
    /// Destination address. Empty means not yet entered.
    pub destination_address: String,
    /// The client the service is performed for.
    pub client: Option<Client>,
    /// How the client settles the service.
    pub payment_method: Option<PaymentMethod>,
    /// VAT percentage for this service.
    pub vat_percent: Option<Decimal>,
    /// Net expected amount agreed with the client.
    pub net_amount: Option<Decimal>,
    /// Order or commission number.
    pub order_number: Option<String>,
    /// Internal driver chosen on the creation form, when any.
    pub driver_id: Option<DriverId>,
    /// Vehicle chosen on the creation form, when any.
    pub vehicle_id: Option<VehicleId>,
    /// External driver entered on the creation form, when any.
    pub external_driver: Option<ExternalDriver>,
    /// Passengers travelling on the service.
    pub passengers: Vec<Passenger>,
    /// The operator creating the record.
    pub created_by: OperatorId,
    /// Creation timestamp, stamped by the caller.
    pub created_at: OffsetDateTime,
}

impl ServiceDraft {
    /// Creates a new `ServiceDraft`.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        id: ServiceId,
        service_date: Option<Date>,
        scheduled_time: Option<Time>,
        pickup_address: String,
        destination_address: String,
        client: Option<Client>,
        payment_method: Option<PaymentMethod>,
        vat_percent: Option<Decimal>,
        net_amount: Option<Decimal>,
        order_number: Option<String>,
        driver_id: Option<DriverId>,
        vehicle_id: Option<VehicleId>,
        external_driver: Option<ExternalDriver>,
        passengers: Vec<Passenger>,
        created_by: OperatorId,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            id,
            service_date,
            scheduled_time,
            pickup_address,
            destination_address,
            client,
            payment_method,
            vat_percent,
            net_amount,
            order_number,
            driver_id,
            vehicle_id,
            external_driver,
            passengers,
            created_by,
            created_at,
        }
    }
}

/// A partial edit of a service's scheduling and commercial fields.
///
/// Fields that are `None` leave the stored value unchanged. Status,
/// assignment, and completion are deliberately absent: status is inferred,
/// assignment moves through assign/unassign, completion through the
/// completion workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePatch {
    /// New service date.
    pub service_date: Option<Date>,
    /// New scheduled time.
    pub scheduled_time: Option<Time>,
    /// New pickup address.
    pub pickup_address: Option<String>,
    /// New destination address.
    pub destination_address: Option<String>,
    /// New client reference.
    pub client: Option<Client>,
    /// New payment method.
    pub payment_method: Option<PaymentMethod>,
    /// New VAT percentage.
    pub vat_percent: Option<Decimal>,
    /// New net expected amount.
    pub net_amount: Option<Decimal>,
    /// New order or commission number.
    pub order_number: Option<String>,
    /// Replacement passenger list.
    pub passengers: Option<Vec<Passenger>>,
}
