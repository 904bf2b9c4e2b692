// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use corsa_domain::{
    CompletionInput, DriverId, ExternalDriver, ServiceDraft, ServiceId, ServicePatch, SignatureRef,
    VehicleId,
};

/// Where a create request entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceOrigin {
    /// Created by an operator in the back office.
    Operator,
    /// Submitted by a client through the booking portal.
    ClientPortal,
}

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new service from a draft.
    CreateService {
        /// The field values captured on the create form.
        draft: ServiceDraft,
        /// Where the request entered the system.
        origin: ServiceOrigin,
    },
    /// Merge edited fields into an existing service.
    UpdateService {
        /// The service to update.
        service_id: ServiceId,
        /// The edited fields. Absent fields are left unchanged.
        patch: ServicePatch,
    },
    /// Assign a driver, replacing any previous assignment.
    AssignService {
        /// The service to assign.
        service_id: ServiceId,
        /// The internal driver, when assigning from the fleet.
        driver_id: Option<DriverId>,
        /// The external driver, when subcontracting.
        external_driver: Option<ExternalDriver>,
        /// The vehicle, required for internal drivers.
        vehicle_id: Option<VehicleId>,
    },
    /// Clear the assignment and return the service to the dispatch queue.
    UnassignService {
        /// The service to unassign.
        service_id: ServiceId,
    },
    /// Record the completion payload and mark the service completed.
    CompleteService {
        /// The service to complete.
        service_id: ServiceId,
        /// The reconciliation values entered on the completion form.
        input: CompletionInput,
        /// The captured client signature, when one was collected.
        signature: Option<SignatureRef>,
    },
    /// Cancel the service.
    CancelService {
        /// The service to cancel.
        service_id: ServiceId,
    },
    /// Turn down a client-requested service.
    DeclineService {
        /// The service to decline.
        service_id: ServiceId,
    },
    /// Remove the service and its passengers permanently.
    DeleteService {
        /// The service to delete.
        service_id: ServiceId,
    },
}
