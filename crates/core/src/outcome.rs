// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use corsa_audit::AuditEvent;
use corsa_domain::{Service, ServiceId};

/// A read-model scope whose cached data a mutation made stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadScope {
    /// The list of all services.
    AllServices,
    /// One service's detail view.
    Service(ServiceId),
    /// The joined services-with-passengers listing.
    ServicesWithPassengers,
}

/// Delivery result for the notification a mutation triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationDelivery {
    /// The sink accepted the event.
    Delivered,
    /// The sink failed; the mutation itself still stands.
    Failed {
        /// Why delivery failed.
        message: String,
    },
}

/// What a successful gateway mutation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    /// The stored service after the mutation. `None` after a delete.
    pub service: Option<Service>,
    /// The audit event recorded for the mutation.
    pub audit_event: AuditEvent,
    /// Read-model scopes invalidated by the mutation.
    pub invalidations: Vec<ReadScope>,
    /// Delivery result for the notification this mutation triggered,
    /// or `None` when the operation sends none.
    pub notification: Option<NotificationDelivery>,
}
