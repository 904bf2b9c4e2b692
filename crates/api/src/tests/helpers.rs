// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::cell::RefCell;

use corsa::{
    CompanyPolicy, Gateway, NotificationKind, NotificationSink, NotifyError, PolicyError,
    ReadModelSubscriber, ReadScope,
};
use corsa_audit::Cause;
use corsa_domain::{CompanyId, ServiceId};
use corsa_persistence::MemoryStore;
use rust_decimal::Decimal;

use crate::{
    ActorKind, AssignServiceRequest, AuthenticatedActor, CreateServiceRequest, assign_service,
    create_service,
};

pub fn create_test_operator() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("op-123"), ActorKind::Operator)
}

pub fn create_portal_session() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("portal-9"), ActorKind::ClientPortal)
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("api-req-456"), String::from("API request"))
}

/// A create request with every checklist field filled and no driver.
pub fn create_complete_request() -> CreateServiceRequest {
    CreateServiceRequest {
        service_date: Some(String::from("2026-03-14")),
        scheduled_time: Some(String::from("09:30")),
        pickup_address: Some(String::from("Via Roma 1, Brescia")),
        destination_address: Some(String::from("Malpensa Airport, Terminal 1")),
        client_company_id: None,
        client_name: Some(String::from("Anna Moretti")),
        payment_method: Some(String::from("bank_transfer")),
        vat_percent: None,
        net_amount: Some(Decimal::new(100, 0)),
        order_number: None,
        driver_id: None,
        vehicle_id: None,
        external_driver_name: None,
        external_driver_email: None,
        passengers: Vec::new(),
    }
}

/// A create request for a company client settling in cash.
pub fn create_cash_company_request(company_id: &str) -> CreateServiceRequest {
    CreateServiceRequest {
        client_company_id: Some(String::from(company_id)),
        client_name: None,
        payment_method: Some(String::from("cash")),
        ..create_complete_request()
    }
}

/// Notification sink that records deliveries and can be set to fail.
pub struct RecordingNotifier {
    sent: RefCell<Vec<ServiceId>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.borrow().len()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, service_id: &ServiceId, _event: NotificationKind) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError {
                message: String::from("sink offline"),
            });
        }
        self.sent.borrow_mut().push(service_id.clone());
        Ok(())
    }
}

/// Company policy backed by a fixed list of mandating companies.
pub struct StubPolicy {
    mandating: Vec<CompanyId>,
}

impl StubPolicy {
    /// No company mandates a signature.
    pub fn lenient() -> Self {
        Self {
            mandating: Vec::new(),
        }
    }

    /// The given company mandates a signature.
    pub fn mandating(company_id: CompanyId) -> Self {
        Self {
            mandating: vec![company_id],
        }
    }
}

impl CompanyPolicy for StubPolicy {
    fn is_signature_mandatory(&self, company_id: &CompanyId) -> Result<bool, PolicyError> {
        Ok(self.mandating.contains(company_id))
    }
}

/// Read-model subscriber that ignores every invalidation.
pub struct NullSubscriber;

impl ReadModelSubscriber for NullSubscriber {
    fn services_changed(&mut self, _scopes: &[ReadScope]) {}
}

/// Creates a service through the create handler and returns its id.
pub fn seed_service(store: &mut MemoryStore, request: CreateServiceRequest) -> String {
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let policy: StubPolicy = StubPolicy::lenient();
    let mut subscriber: NullSubscriber = NullSubscriber;
    let mut gateway: Gateway<'_> = Gateway::new(store, &notifier, &policy, &mut subscriber);
    let result = create_service(
        &mut gateway,
        request,
        &create_test_operator(),
        create_test_cause(),
    )
    .expect("create_service should succeed");
    result.response.service_id
}

/// Assigns internal driver drv-7 with vehicle veh-3 through the assign
/// handler.
pub fn assign_internal(store: &mut MemoryStore, service_id: &str) {
    let notifier: RecordingNotifier = RecordingNotifier::new();
    let policy: StubPolicy = StubPolicy::lenient();
    let mut subscriber: NullSubscriber = NullSubscriber;
    let mut gateway: Gateway<'_> = Gateway::new(store, &notifier, &policy, &mut subscriber);
    let request: AssignServiceRequest = AssignServiceRequest {
        driver_id: Some(String::from("drv-7")),
        vehicle_id: Some(String::from("veh-3")),
        external_driver_name: None,
        external_driver_email: None,
    };
    assign_service(
        &mut gateway,
        service_id,
        request,
        &create_test_operator(),
        create_test_cause(),
    )
    .expect("assign_service should succeed");
}

/// Creates a complete service and assigns an internal driver to it.
pub fn seed_assigned_service(store: &mut MemoryStore) -> String {
    let service_id: String = seed_service(store, create_complete_request());
    assign_internal(store, &service_id);
    service_id
}
