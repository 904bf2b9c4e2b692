// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field and assignment validation.
//!
//! Validation rejects nonsense values, never incompleteness: a draft with
//! empty fields is a legitimate record (completeness only steers status
//! inference), but a negative amount or a contradictory driver pairing is
//! refused before any write.

use crate::error::DomainError;
use crate::service::Service;
use crate::types::{DriverId, ExternalDriver, VehicleId};
use rust_decimal::Decimal;

/// Validates the commercial and passenger fields of a service record.
///
/// # Errors
///
/// Returns a `DomainError` if the VAT percentage is outside 0..=100, the
/// net amount is negative, or a listed passenger has a blank name.
pub fn validate_service_fields(service: &Service) -> Result<(), DomainError> {
    if let Some(value) = service.vat_percent {
        if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
            return Err(DomainError::InvalidVatPercent { value });
        }
    }

    if let Some(amount) = service.net_amount {
        if amount < Decimal::ZERO {
            return Err(DomainError::NegativeNetAmount { amount });
        }
    }

    for passenger in &service.passengers {
        if passenger.name.trim().is_empty() {
            return Err(DomainError::InvalidPassengerName(String::from(
                "passenger name must not be empty",
            )));
        }
    }

    Ok(())
}

/// Validates a driver/vehicle pairing.
///
/// Exactly one of the internal and external driver references must be set,
/// and an internal driver always travels with a vehicle.
///
/// # Errors
///
/// Returns a `DomainError` describing the first violated pairing rule.
pub fn validate_assignment(
    driver_id: Option<&DriverId>,
    external_driver: Option<&ExternalDriver>,
    vehicle_id: Option<&VehicleId>,
) -> Result<(), DomainError> {
    match (driver_id, external_driver) {
        (Some(_), Some(_)) => Err(DomainError::AmbiguousDriverAssignment),
        (None, None) => Err(DomainError::MissingDriverAssignment),
        (Some(_), None) => {
            if vehicle_id.is_none() {
                return Err(DomainError::MissingVehicleForInternalDriver);
            }
            Ok(())
        }
        (None, Some(external)) => {
            if external.name.trim().is_empty() {
                return Err(DomainError::InvalidExternalDriverName(String::from(
                    "external driver name must not be empty",
                )));
            }
            Ok(())
        }
    }
}

/// Validates everything about a service record that must hold before it is
/// written: commercial fields, passengers, and the driver pairing when one
/// is present.
///
/// # Errors
///
/// Returns the first violated rule as a `DomainError`.
pub fn validate_service_record(service: &Service) -> Result<(), DomainError> {
    validate_service_fields(service)?;

    if service.has_driver() {
        validate_assignment(
            service.driver_id.as_ref(),
            service.external_driver.as_ref(),
            service.vehicle_id.as_ref(),
        )?;
    }

    Ok(())
}
