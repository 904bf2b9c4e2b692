// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::cell::RefCell;
use std::collections::HashMap;

use corsa_audit::{Actor, Cause};
use corsa_domain::{
    Client, CompanyId, DriverId, OperatorId, Passenger, PaymentMethod, Service, ServiceDraft,
    ServiceId, ServiceStatus, SignatureRef, VehicleId,
};
use rust_decimal::Decimal;
use time::macros::{date, datetime, time};

use crate::command::Command;
use crate::completion::ReadyCompletion;
use crate::error::CoreError;
use crate::gateway::Gateway;
use crate::outcome::{MutationOutcome, ReadScope};
use crate::ports::{
    CompanyPolicy, NotificationKind, NotificationSink, NotifyError, PolicyError,
    ReadModelSubscriber, SaveGuard, ServiceStore, SignatureCapture, SignatureOutcome, StoreError,
};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("op-123"), String::from("operator"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Operator request"))
}

/// A draft with every checklist field filled and no driver.
pub fn create_test_draft(id: &str) -> ServiceDraft {
    ServiceDraft::new(
        ServiceId::new(id),
        Some(date!(2026 - 03 - 14)),
        Some(time!(09:30)),
        String::from("Via Roma 1, Brescia"),
        String::from("Malpensa Airport, Terminal 1"),
        Some(Client::Private {
            name: String::from("Anna Moretti"),
        }),
        Some(PaymentMethod::Cash),
        None, // vat_percent
        Some(Decimal::new(100, 0)),
        None, // order_number
        None, // driver_id
        None, // vehicle_id
        None, // external_driver
        Vec::new(),
        OperatorId::new("op-123"),
        datetime!(2026-03-01 08:00 UTC),
    )
}

/// A draft still missing its scheduled time and payment method.
pub fn create_incomplete_draft(id: &str) -> ServiceDraft {
    let mut draft: ServiceDraft = create_test_draft(id);
    draft.scheduled_time = None;
    draft.payment_method = None;
    draft
}

/// A stored service with an internal driver, ready to complete.
pub fn create_assigned_service(id: &str) -> Service {
    let mut service: Service =
        Service::from_draft(create_test_draft(id), ServiceStatus::Assigned);
    service.driver_id = Some(DriverId::new("drv-7"));
    service.vehicle_id = Some(VehicleId::new("veh-3"));
    service
}

/// A stored service in the given status with no driver.
pub fn create_service_with_status(id: &str, status: ServiceStatus) -> Service {
    Service::from_draft(create_test_draft(id), status)
}

/// In-memory store enforcing the same guard semantics a backend would.
pub struct TestStore {
    services: HashMap<ServiceId, Service>,
    interposed_status: Option<(ServiceId, ServiceStatus)>,
    fail_saves: bool,
}

impl TestStore {
    pub fn new() -> Self {
        Self {
            services: HashMap::new(),
            interposed_status: None,
            fail_saves: false,
        }
    }

    pub fn with_service(service: Service) -> Self {
        let mut store: Self = Self::new();
        store.seed(service);
        store
    }

    /// Inserts directly, bypassing guards, as test setup.
    pub fn seed(&mut self, service: Service) {
        self.services.insert(service.id.clone(), service);
    }

    pub fn get(&self, service_id: &ServiceId) -> Option<&Service> {
        self.services.get(service_id)
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Makes guarded writes on this id see the given status, as if a
    /// concurrent writer had moved the record after it was read.
    pub fn interpose_status(&mut self, service_id: ServiceId, status: ServiceStatus) {
        self.interposed_status = Some((service_id, status));
    }

    pub fn fail_saves(&mut self) {
        self.fail_saves = true;
    }
}

impl ServiceStore for TestStore {
    fn load_service(&self, service_id: &ServiceId) -> Result<Option<Service>, StoreError> {
        Ok(self.services.get(service_id).cloned())
    }

    fn save_service(&mut self, service: &Service, guard: SaveGuard) -> Result<(), StoreError> {
        if self.fail_saves {
            return Err(StoreError::Backend {
                message: String::from("disk full"),
            });
        }
        match guard {
            SaveGuard::NewRecord => {
                if self.services.contains_key(&service.id) {
                    return Err(StoreError::AlreadyExists {
                        service_id: service.id.clone(),
                    });
                }
            }
            SaveGuard::CurrentStatus(expected) => {
                let stored: &Service =
                    self.services
                        .get(&service.id)
                        .ok_or_else(|| StoreError::NotFound {
                            service_id: service.id.clone(),
                        })?;
                let mut actual: ServiceStatus = stored.status;
                if let Some((id, status)) = &self.interposed_status {
                    if id == &service.id {
                        actual = *status;
                    }
                }
                if actual != expected {
                    return Err(StoreError::StatusConflict {
                        service_id: service.id.clone(),
                        expected,
                        actual,
                    });
                }
            }
        }
        self.services.insert(service.id.clone(), service.clone());
        Ok(())
    }

    fn delete_service(&mut self, service_id: &ServiceId) -> Result<bool, StoreError> {
        Ok(self.services.remove(service_id).is_some())
    }

    fn load_passengers(&self, service_id: &ServiceId) -> Result<Vec<Passenger>, StoreError> {
        Ok(self
            .services
            .get(service_id)
            .map(|service| service.passengers.clone())
            .unwrap_or_default())
    }
}

/// Notification sink that records deliveries and can be set to fail.
pub struct RecordingNotifier {
    sent: RefCell<Vec<(ServiceId, NotificationKind)>>,
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

    pub fn last_sent(&self) -> Option<(ServiceId, NotificationKind)> {
        self.sent.borrow().last().cloned()
    }
}

impl NotificationSink for RecordingNotifier {
    fn notify(&self, service_id: &ServiceId, event: NotificationKind) -> Result<(), NotifyError> {
        if self.fail {
            return Err(NotifyError {
                message: String::from("sink offline"),
            });
        }
        self.sent.borrow_mut().push((service_id.clone(), event));
        Ok(())
    }
}

/// Company policy backed by a fixed list of mandating companies.
pub struct TestPolicy {
    mandating: Vec<CompanyId>,
    unknown: Vec<CompanyId>,
}

impl TestPolicy {
    /// No company mandates a signature.
    pub fn lenient() -> Self {
        Self {
            mandating: Vec::new(),
            unknown: Vec::new(),
        }
    }

    /// The given company mandates a signature.
    pub fn mandating(company_id: CompanyId) -> Self {
        Self {
            mandating: vec![company_id],
            unknown: Vec::new(),
        }
    }

    /// The given company id does not resolve.
    pub fn unknown_company(company_id: CompanyId) -> Self {
        Self {
            mandating: Vec::new(),
            unknown: vec![company_id],
        }
    }
}

impl CompanyPolicy for TestPolicy {
    fn is_signature_mandatory(&self, company_id: &CompanyId) -> Result<bool, PolicyError> {
        if self.unknown.contains(company_id) {
            return Err(PolicyError::CompanyNotFound {
                company_id: company_id.clone(),
            });
        }
        Ok(self.mandating.contains(company_id))
    }
}

/// Read-model subscriber that records every invalidation batch.
pub struct RecordingSubscriber {
    pub changes: Vec<Vec<ReadScope>>,
}

impl RecordingSubscriber {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }
}

impl ReadModelSubscriber for RecordingSubscriber {
    fn services_changed(&mut self, scopes: &[ReadScope]) {
        self.changes.push(scopes.to_vec());
    }
}

/// Signature pad scripted to sign or decline.
pub struct ScriptedPad {
    outcome: SignatureOutcome,
}

impl ScriptedPad {
    pub fn signing(reference: &str) -> Self {
        Self {
            outcome: SignatureOutcome::Signed(SignatureRef::new(reference)),
        }
    }

    pub fn declining() -> Self {
        Self {
            outcome: SignatureOutcome::Declined,
        }
    }
}

impl SignatureCapture for ScriptedPad {
    fn capture_signature(&mut self, _service_id: &ServiceId) -> SignatureOutcome {
        self.outcome.clone()
    }
}

/// Builds a gateway over the fakes and applies one command.
pub fn apply_one(
    store: &mut TestStore,
    notifier: &RecordingNotifier,
    policy: &TestPolicy,
    subscriber: &mut RecordingSubscriber,
    command: Command,
) -> Result<MutationOutcome, CoreError> {
    let mut gateway: Gateway<'_> = Gateway::new(store, notifier, policy, subscriber);
    gateway.apply(command, create_test_actor(), create_test_cause())
}

/// Builds a gateway over the fakes and finalizes a ready completion.
pub fn finalize_one(
    store: &mut TestStore,
    notifier: &RecordingNotifier,
    policy: &TestPolicy,
    subscriber: &mut RecordingSubscriber,
    ready: ReadyCompletion,
) -> Result<MutationOutcome, CoreError> {
    let mut gateway: Gateway<'_> = Gateway::new(store, notifier, policy, subscriber);
    ready.finalize(&mut gateway, create_test_actor(), create_test_cause())
}
