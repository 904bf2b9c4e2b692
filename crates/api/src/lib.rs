// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod error;
mod handlers;
mod parse;
mod request_response;

#[cfg(test)]
mod tests;

use corsa_audit::Actor;

/// Session kinds resolved by the authentication layer.
///
/// Authentication and session handling live outside this crate; handlers
/// receive an already-resolved actor. The kind decides how a created
/// service enters the lifecycle: operator sessions create drafts that run
/// status inference, portal sessions submit requests that wait for
/// operator review.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActorKind {
    /// A back-office operator working in the dispatch application.
    Operator,
    /// The client booking portal acting on behalf of a client.
    ClientPortal,
}

/// An actor whose session the authentication layer has already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The kind of session this actor holds.
    pub kind: ActorKind,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `kind` - The kind of session this actor holds
    #[must_use]
    pub const fn new(id: String, kind: ActorKind) -> Self {
        Self { id, kind }
    }

    /// Converts this authenticated actor into an audit Actor.
    ///
    /// This is used when recording audit events to attribute actions
    /// to the session that performed them.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        let actor_type: String = match self.kind {
            ActorKind::Operator => String::from("operator"),
            ActorKind::ClientPortal => String::from("client_portal"),
        };
        Actor::new(self.id.clone(), actor_type)
    }
}

// Re-export public types and functions
pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, assign_service, begin_completion, cancel_service, complete_service, create_service,
    decline_service, delete_service, get_service, list_services, list_services_with_passengers,
    service_missing_fields, unassign_service, update_service,
};
pub use request_response::{
    AssignServiceRequest, AssignServiceResponse, CancelServiceResponse, CompleteServiceRequest,
    CompleteServiceResponse, CompletionInfo, CompletionTermsInfo, CreateServiceRequest,
    CreateServiceResponse, DeclineServiceResponse, DeleteServiceResponse, GetServiceResponse,
    ListServicesResponse, ListServicesWithPassengersResponse, MissingFieldsResponse, PassengerInfo,
    PassengerInput, ServiceInfo, ServiceWithPassengersInfo, UnassignServiceResponse,
    UpdateServiceRequest, UpdateServiceResponse,
};
