// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::MemoryStore;
use crate::tests::{create_test_passenger, create_test_service};
use corsa::{SaveGuard, ServiceStore, StoreError};
use corsa_domain::{Passenger, Service, ServiceId, ServiceStatus};

#[test]
fn test_save_and_load_round_trip() {
    let mut store: MemoryStore = MemoryStore::new();
    let service: Service = create_test_service("svc-1", ServiceStatus::Draft);

    store.save_service(&service, SaveGuard::NewRecord).unwrap();

    let loaded: Option<Service> = store.load_service(&ServiceId::new("svc-1")).unwrap();
    assert_eq!(loaded, Some(service));
}

#[test]
fn test_load_missing_service_is_none() {
    let store: MemoryStore = MemoryStore::new();

    let loaded: Option<Service> = store.load_service(&ServiceId::new("ghost")).unwrap();

    assert!(loaded.is_none());
}

#[test]
fn test_new_record_guard_rejects_duplicate_id() {
    let mut store: MemoryStore = MemoryStore::new();
    let service: Service = create_test_service("svc-1", ServiceStatus::Draft);
    store.save_service(&service, SaveGuard::NewRecord).unwrap();

    let result: Result<(), StoreError> = store.save_service(&service, SaveGuard::NewRecord);

    assert_eq!(
        result,
        Err(StoreError::AlreadyExists {
            service_id: ServiceId::new("svc-1"),
        })
    );
}

#[test]
fn test_status_guard_rejects_moved_record() {
    let mut store: MemoryStore = MemoryStore::new();
    let service: Service = create_test_service("svc-1", ServiceStatus::Assigned);
    store.save_service(&service, SaveGuard::NewRecord).unwrap();

    let mut updated: Service = service.clone();
    updated.status = ServiceStatus::Completed;
    let result: Result<(), StoreError> = store.save_service(
        &updated,
        SaveGuard::CurrentStatus(ServiceStatus::AwaitingAssignment),
    );

    assert_eq!(
        result,
        Err(StoreError::StatusConflict {
            service_id: ServiceId::new("svc-1"),
            expected: ServiceStatus::AwaitingAssignment,
            actual: ServiceStatus::Assigned,
        })
    );
    let stored: Option<Service> = store.load_service(&ServiceId::new("svc-1")).unwrap();
    assert_eq!(stored.unwrap().status, ServiceStatus::Assigned);
}

#[test]
fn test_status_guard_accepts_matching_record() {
    let mut store: MemoryStore = MemoryStore::new();
    let service: Service = create_test_service("svc-1", ServiceStatus::Assigned);
    store.save_service(&service, SaveGuard::NewRecord).unwrap();

    let mut updated: Service = service;
    updated.status = ServiceStatus::Completed;
    store
        .save_service(&updated, SaveGuard::CurrentStatus(ServiceStatus::Assigned))
        .unwrap();

    let stored: Option<Service> = store.load_service(&ServiceId::new("svc-1")).unwrap();
    assert_eq!(stored.unwrap().status, ServiceStatus::Completed);
}

#[test]
fn test_status_guard_on_missing_record_is_not_found() {
    let mut store: MemoryStore = MemoryStore::new();
    let service: Service = create_test_service("svc-1", ServiceStatus::Draft);

    let result: Result<(), StoreError> =
        store.save_service(&service, SaveGuard::CurrentStatus(ServiceStatus::Draft));

    assert_eq!(
        result,
        Err(StoreError::NotFound {
            service_id: ServiceId::new("svc-1"),
        })
    );
}

#[test]
fn test_delete_removes_service_and_passengers() {
    let mut store: MemoryStore = MemoryStore::new();
    let mut service: Service = create_test_service("svc-1", ServiceStatus::Draft);
    service.passengers.push(create_test_passenger("Luca Ferri"));
    store.save_service(&service, SaveGuard::NewRecord).unwrap();

    let removed: bool = store.delete_service(&ServiceId::new("svc-1")).unwrap();

    assert!(removed);
    assert_eq!(store.service_count(), 0);
    let passengers: Vec<Passenger> = store.load_passengers(&ServiceId::new("svc-1")).unwrap();
    assert!(passengers.is_empty());
}

#[test]
fn test_delete_missing_service_reports_false() {
    let mut store: MemoryStore = MemoryStore::new();

    let removed: bool = store.delete_service(&ServiceId::new("ghost")).unwrap();

    assert!(!removed);
}

#[test]
fn test_load_passengers_returns_stored_rows() {
    let mut store: MemoryStore = MemoryStore::new();
    let mut service: Service = create_test_service("svc-1", ServiceStatus::Draft);
    service.passengers.push(create_test_passenger("Luca Ferri"));
    service.passengers.push(create_test_passenger("Sara Galli"));
    store.save_service(&service, SaveGuard::NewRecord).unwrap();

    let passengers: Vec<Passenger> = store.load_passengers(&ServiceId::new("svc-1")).unwrap();

    assert_eq!(passengers.len(), 2);
    assert_eq!(passengers[0].name, "Luca Ferri");
    assert_eq!(passengers[1].name, "Sara Galli");
}
