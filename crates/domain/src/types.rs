// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Identifier newtypes and small value objects shared across the engine.
//!
//! Driver, vehicle, company, and operator records live in external systems;
//! this crate only carries opaque references to them.

use serde::{Deserialize, Serialize};
use time::Time;

/// Opaque identifier of a service record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId {
    /// The identifier value assigned by the backing store's id scheme.
    value: String,
}

impl ServiceId {
    /// Creates a new `ServiceId`.
    ///
    /// The value is treated as opaque; only surrounding whitespace is
    /// stripped.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Opaque reference to a client company record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CompanyId {
    value: String,
}

impl CompanyId {
    /// Creates a new `CompanyId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Opaque reference to an internal driver record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DriverId {
    value: String,
}

impl DriverId {
    /// Creates a new `DriverId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Opaque reference to a vehicle record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleId {
    value: String,
}

impl VehicleId {
    /// Creates a new `VehicleId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Opaque reference to an internal operator (back-office user) record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OperatorId {
    value: String,
}

impl OperatorId {
    /// Creates a new `OperatorId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Opaque reference to a captured signature document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignatureRef {
    value: String,
}

impl SignatureRef {
    /// Creates a new `SignatureRef`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_string(),
        }
    }

    /// Returns the reference value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The party a service is performed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Client {
    /// A company account; billing and signature policy live on the
    /// company record.
    Company {
        /// The referenced company record.
        company_id: CompanyId,
    },
    /// A private individual without a company account.
    Private {
        /// Free-form client name.
        name: String,
    },
}

impl Client {
    /// Returns the company reference, if this client is a company.
    #[must_use]
    pub const fn company_id(&self) -> Option<&CompanyId> {
        match self {
            Self::Company { company_id } => Some(company_id),
            Self::Private { .. } => None,
        }
    }

    /// Returns true if the reference is effectively unset (empty company id
    /// or blank private name).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Company { company_id } => company_id.value().is_empty(),
            Self::Private { name } => name.trim().is_empty(),
        }
    }
}

/// A driver outside the company's own workforce, referenced by contact
/// details rather than by an internal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalDriver {
    /// The external driver's name.
    pub name: String,
    /// Contact email, when known.
    pub email: Option<String>,
}

impl ExternalDriver {
    /// Creates a new `ExternalDriver`.
    #[must_use]
    pub const fn new(name: String, email: Option<String>) -> Self {
        Self { name, email }
    }
}

/// A passenger travelling on a service.
///
/// Passengers are owned by their service: they are written with it and
/// removed when it is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Passenger {
    /// The passenger's name.
    pub name: String,
    /// Phone number or other contact detail.
    pub contact: Option<String>,
    /// Pickup point, when it differs from the service pickup address.
    pub pickup_point: Option<String>,
    /// Pickup time, when it differs from the service scheduled time.
    pub pickup_time: Option<Time>,
    /// Free-form pickup override note.
    pub custom_pickup: Option<String>,
}

impl Passenger {
    /// Creates a new `Passenger`.
    #[must_use]
    pub const fn new(
        name: String,
        contact: Option<String>,
        pickup_point: Option<String>,
        pickup_time: Option<Time>,
        custom_pickup: Option<String>,
    ) -> Self {
        Self {
            name,
            contact,
            pickup_point,
            pickup_time,
            custom_pickup,
        }
    }
}
