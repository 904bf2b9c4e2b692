// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Service status tracking and transition logic.
//!
//! This module defines the lifecycle states of a transport service and the
//! valid transitions between them. Statuses move forward along the lifecycle
//! graph; the only backward edge is an explicit unassignment, and the only
//! sideways edges are explicit cancellation and decline.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle states of a transport service.
///
/// Status is tracked per service and is never set directly by callers;
/// it is inferred from field completeness while the record is draft-like,
/// and moved by explicit operations afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    /// Operator-created record still missing mandatory fields
    Draft,
    /// Submitted through the client portal, awaiting operator review
    ClientRequested,
    /// All mandatory fields present, no driver bound yet
    AwaitingAssignment,
    /// Driver (and vehicle, when internal) bound to the service
    Assigned,
    /// Payment reconciliation and hours recorded
    Completed,
    /// Accounting close-out performed outside this engine
    Finalized,
    /// Explicitly cancelled by an operator
    Cancelled,
    /// Client request declined by an operator
    NotAccepted,
}

impl ServiceStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::ClientRequested => "client_requested",
            Self::AwaitingAssignment => "awaiting_assignment",
            Self::Assigned => "assigned",
            Self::Completed => "completed",
            Self::Finalized => "finalized",
            Self::Cancelled => "cancelled",
            Self::NotAccepted => "not_accepted",
        }
    }

    /// Parses a status from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidServiceStatus` if the string is not a
    /// valid status.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "draft" => Ok(Self::Draft),
            "client_requested" => Ok(Self::ClientRequested),
            "awaiting_assignment" => Ok(Self::AwaitingAssignment),
            "assigned" => Ok(Self::Assigned),
            "completed" => Ok(Self::Completed),
            "finalized" => Ok(Self::Finalized),
            "cancelled" => Ok(Self::Cancelled),
            "not_accepted" => Ok(Self::NotAccepted),
            _ => Err(DomainError::InvalidServiceStatus {
                status: s.to_string(),
            }),
        }
    }

    /// Returns true if this status is terminal (cannot transition to another state).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Finalized | Self::Cancelled | Self::NotAccepted)
    }

    /// Returns true if status inference applies to this status.
    ///
    /// Once a service has moved past the draft-like states, its status only
    /// changes through explicit assignment, completion, cancellation, or
    /// decline operations.
    #[must_use]
    pub const fn is_draft_like(&self) -> bool {
        matches!(self, Self::Draft | Self::ClientRequested)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// # Errors
    ///
    /// Returns an error if the transition is not allowed.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        // Cannot transition from terminal states
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        // Valid transitions based on current state
        let valid = match self {
            Self::Draft => matches!(
                new_status,
                Self::AwaitingAssignment | Self::Assigned | Self::Cancelled
            ),
            Self::ClientRequested => matches!(
                new_status,
                Self::Draft
                    | Self::AwaitingAssignment
                    | Self::Assigned
                    | Self::NotAccepted
                    | Self::Cancelled
            ),
            Self::AwaitingAssignment => matches!(new_status, Self::Assigned | Self::Cancelled),
            // Assigned -> Assigned covers re-assignment to another driver;
            // Assigned -> AwaitingAssignment is the unassign edge.
            Self::Assigned => matches!(
                new_status,
                Self::Assigned | Self::AwaitingAssignment | Self::Completed | Self::Cancelled
            ),
            Self::Completed => matches!(new_status, Self::Finalized | Self::Cancelled),
            Self::Finalized | Self::Cancelled | Self::NotAccepted => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by the service lifecycle".to_string(),
            })
        }
    }
}

impl FromStr for ServiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}
