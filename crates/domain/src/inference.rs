// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Status inference for draft-like services.
//!
//! A record promotes out of the draft phase on its own as soon as it is
//! unambiguously complete; no explicit submit action exists. Records that
//! have moved past the draft phase never change status as a side effect of
//! an unrelated edit.

use crate::completeness;
use crate::service::Service;
use crate::service_status::ServiceStatus;

/// Computes the status a service should have.
///
/// Rules, in precedence order:
/// 1. A status that is not draft-like is returned unchanged; such services
///    only move through explicit assignment, completion, cancellation, or
///    decline operations.
/// 2. A record missing any mandatory field is `draft`.
/// 3. A complete record without a driver is `awaiting_assignment`.
/// 4. A complete record with a driver is `assigned`.
#[must_use]
pub fn infer_status(candidate: &Service, current: ServiceStatus) -> ServiceStatus {
    if !current.is_draft_like() {
        return current;
    }
    if !completeness::is_complete(candidate) {
        return ServiceStatus::Draft;
    }
    if !candidate.has_driver() {
        return ServiceStatus::AwaitingAssignment;
    }
    ServiceStatus::Assigned
}
