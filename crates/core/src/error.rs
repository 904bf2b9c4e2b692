// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use corsa_domain::{CompanyId, DomainError, ServiceId, ServiceStatus};

use crate::ports::{PolicyError, StoreError};

/// Errors surfaced by gateway operations and the completion flow.
///
/// Every failure falls into one of four kinds: a validation failure
/// (rejected input or an illegal transition), a missing resource, a
/// backing-store failure, or a concurrency conflict detected by a
/// guarded write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    Validation(DomainError),
    /// The referenced service does not exist in the store.
    ServiceNotFound {
        /// The id that failed to resolve.
        service_id: ServiceId,
    },
    /// The referenced company could not be resolved.
    CompanyNotFound {
        /// The id that failed to resolve.
        company_id: CompanyId,
    },
    /// The backing store or a policy lookup failed.
    Persistence {
        /// Description of the failure.
        message: String,
    },
    /// A guarded write found the stored status changed since it was read.
    Conflict {
        /// The service whose write was rejected.
        service_id: ServiceId,
        /// The status the write expected to find.
        expected: ServiceStatus,
        /// The status actually stored.
        actual: ServiceStatus,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "Validation failed: {err}"),
            Self::ServiceNotFound { service_id } => {
                write!(f, "Service '{}' not found", service_id.value())
            }
            Self::CompanyNotFound { company_id } => {
                write!(f, "Company '{}' not found", company_id.value())
            }
            Self::Persistence { message } => write!(f, "Persistence failure: {message}"),
            Self::Conflict {
                service_id,
                expected,
                actual,
            } => write!(
                f,
                "Service '{}' was modified concurrently: expected status '{}', found '{}'",
                service_id.value(),
                expected.as_str(),
                actual.as_str()
            ),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::Validation(err)
    }
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { service_id } => Self::ServiceNotFound { service_id },
            StoreError::StatusConflict {
                service_id,
                expected,
                actual,
            } => Self::Conflict {
                service_id,
                expected,
                actual,
            },
            StoreError::AlreadyExists { service_id } => Self::Persistence {
                message: format!("a record with id '{}' already exists", service_id.value()),
            },
            StoreError::Backend { message } => Self::Persistence { message },
        }
    }
}

impl From<PolicyError> for CoreError {
    fn from(err: PolicyError) -> Self {
        match err {
            PolicyError::CompanyNotFound { company_id } => Self::CompanyNotFound { company_id },
            PolicyError::Lookup { message } => Self::Persistence { message },
        }
    }
}
