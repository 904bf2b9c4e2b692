// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Collaborator interfaces the lifecycle engine is written against.
//!
//! The engine never talks to a concrete database, notification
//! transport, signature pad, or company registry. Each of those is a
//! trait implemented by an adapter crate; tests substitute fakes.

use corsa_domain::{CompanyId, Passenger, Service, ServiceId, ServiceStatus, SignatureRef};

use crate::outcome::ReadScope;

/// Precondition a [`ServiceStore`] must enforce atomically with a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveGuard {
    /// The id must not exist yet; the save is an insert.
    NewRecord,
    /// The stored record must still carry this status.
    CurrentStatus(ServiceStatus),
}

/// Failures surfaced by a [`ServiceStore`] backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record with the requested id.
    NotFound {
        /// The id that failed to resolve.
        service_id: ServiceId,
    },
    /// An insert guarded by [`SaveGuard::NewRecord`] found the id taken.
    AlreadyExists {
        /// The id that was already present.
        service_id: ServiceId,
    },
    /// A write guarded by [`SaveGuard::CurrentStatus`] found another status.
    StatusConflict {
        /// The service whose write was rejected.
        service_id: ServiceId,
        /// The status the guard expected.
        expected: ServiceStatus,
        /// The status actually stored.
        actual: ServiceStatus,
    },
    /// The backend itself failed.
    Backend {
        /// Description of the failure.
        message: String,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { service_id } => {
                write!(f, "No stored service with id '{}'", service_id.value())
            }
            Self::AlreadyExists { service_id } => {
                write!(f, "A service with id '{}' already exists", service_id.value())
            }
            Self::StatusConflict {
                service_id,
                expected,
                actual,
            } => write!(
                f,
                "Guarded write on service '{}' expected status '{}', found '{}'",
                service_id.value(),
                expected.as_str(),
                actual.as_str()
            ),
            Self::Backend { message } => write!(f, "Storage backend failure: {message}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Persistence backend for services and their passengers.
pub trait ServiceStore {
    /// Loads a service by id. Returns `Ok(None)` when the id does not
    /// resolve.
    fn load_service(&self, service_id: &ServiceId) -> Result<Option<Service>, StoreError>;

    /// Persists a service. The guard is checked atomically with the
    /// write; a failed guard leaves the store untouched.
    fn save_service(&mut self, service: &Service, guard: SaveGuard) -> Result<(), StoreError>;

    /// Removes a service and every passenger it owns. Returns `false`
    /// when the id does not resolve.
    fn delete_service(&mut self, service_id: &ServiceId) -> Result<bool, StoreError>;

    /// Loads the passengers owned by a service.
    fn load_passengers(&self, service_id: &ServiceId) -> Result<Vec<Passenger>, StoreError>;
}

/// Lifecycle events delivered through a [`NotificationSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// A driver was assigned to the service.
    Assigned,
}

impl NotificationKind {
    /// Returns the event name used on the wire and in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Assigned => "assigned",
        }
    }
}

/// Delivery failure reported by a [`NotificationSink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyError {
    /// Why delivery failed.
    pub message: String,
}

impl std::fmt::Display for NotifyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Notification delivery failed: {}", self.message)
    }
}

impl std::error::Error for NotifyError {}

/// Outbound notification transport.
///
/// Delivery is best effort. A failed delivery is reported on the
/// mutation outcome and never rolls back the mutation itself.
pub trait NotificationSink {
    /// Delivers one lifecycle event for a service.
    fn notify(&self, service_id: &ServiceId, event: NotificationKind) -> Result<(), NotifyError>;
}

/// Result of an interactive signature capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureOutcome {
    /// The client signed; the reference points at the captured image.
    Signed(SignatureRef),
    /// The client declined or the capture was cancelled.
    Declined,
}

/// Interactive signature capture device or dialog.
pub trait SignatureCapture {
    /// Runs one capture for a service. Declining is not an error; it
    /// aborts the completion that requested the capture.
    fn capture_signature(&mut self, service_id: &ServiceId) -> SignatureOutcome;
}

/// Failures surfaced by a [`CompanyPolicy`] lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// No company with the requested id.
    CompanyNotFound {
        /// The id that failed to resolve.
        company_id: CompanyId,
    },
    /// The registry lookup itself failed.
    Lookup {
        /// Description of the failure.
        message: String,
    },
}

impl std::fmt::Display for PolicyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CompanyNotFound { company_id } => {
                write!(f, "No company with id '{}'", company_id.value())
            }
            Self::Lookup { message } => write!(f, "Company policy lookup failed: {message}"),
        }
    }
}

impl std::error::Error for PolicyError {}

/// Company-level completion policy.
pub trait CompanyPolicy {
    /// Whether the company requires a client signature before one of
    /// its services may be completed.
    fn is_signature_mandatory(&self, company_id: &CompanyId) -> Result<bool, PolicyError>;
}

/// Read-model cache notified after every successful mutation.
pub trait ReadModelSubscriber {
    /// Called once per successful mutation with the scopes whose
    /// cached data is now stale.
    fn services_changed(&mut self, scopes: &[ReadScope]);
}
