// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use corsa::{SaveGuard, ServiceStore, StoreError};
use corsa_audit::AuditEvent;
use corsa_domain::{Passenger, Service, ServiceId, ServiceStatus};
use tracing::{debug, info};

/// In-memory reference backend.
///
/// Holds every service record in a map and every recorded audit event
/// in an append-only journal. Guard checks happen against the stored
/// record in the same call that writes, which is all the atomicity a
/// single-threaded owner needs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    services: HashMap<ServiceId, Service>,
    audit_log: Vec<AuditEvent>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an audit event to the journal.
    pub fn record_audit_event(&mut self, event: AuditEvent) {
        debug!(
            action = event.action.name.as_str(),
            service_id = event.service_id.value(),
            "Recorded audit event"
        );
        self.audit_log.push(event);
    }

    /// The recorded audit events, oldest first.
    #[must_use]
    pub fn audit_events(&self) -> &[AuditEvent] {
        &self.audit_log
    }

    /// The audit events recorded for one service, oldest first.
    #[must_use]
    pub fn audit_events_for(&self, service_id: &ServiceId) -> Vec<&AuditEvent> {
        self.audit_log
            .iter()
            .filter(|event| &event.service_id == service_id)
            .collect()
    }

    /// Every stored service, ordered by service date, scheduled time,
    /// then id. Map iteration order never leaks to callers.
    #[must_use]
    pub fn list_services(&self) -> Vec<Service> {
        let mut services: Vec<Service> = self.services.values().cloned().collect();
        services.sort_by_key(|service| {
            (
                service.service_date,
                service.scheduled_time,
                service.id.value().to_owned(),
            )
        });
        services
    }

    /// Every stored service paired with its passengers, in the same
    /// order as [`Self::list_services`].
    #[must_use]
    pub fn list_services_with_passengers(&self) -> Vec<(Service, Vec<Passenger>)> {
        self.list_services()
            .into_iter()
            .map(|service| {
                let passengers: Vec<Passenger> = service.passengers.clone();
                (service, passengers)
            })
            .collect()
    }

    /// Number of stored services.
    #[must_use]
    pub fn service_count(&self) -> usize {
        self.services.len()
    }
}

impl ServiceStore for MemoryStore {
    fn load_service(&self, service_id: &ServiceId) -> Result<Option<Service>, StoreError> {
        Ok(self.services.get(service_id).cloned())
    }

    fn save_service(&mut self, service: &Service, guard: SaveGuard) -> Result<(), StoreError> {
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
                let actual: ServiceStatus = stored.status;
                if actual != expected {
                    debug!(
                        service_id = service.id.value(),
                        expected = expected.as_str(),
                        actual = actual.as_str(),
                        "Guarded write rejected"
                    );
                    return Err(StoreError::StatusConflict {
                        service_id: service.id.clone(),
                        expected,
                        actual,
                    });
                }
            }
        }
        self.services.insert(service.id.clone(), service.clone());
        debug!(
            service_id = service.id.value(),
            status = service.status.as_str(),
            "Saved service"
        );
        Ok(())
    }

    fn delete_service(&mut self, service_id: &ServiceId) -> Result<bool, StoreError> {
        let removed: Option<Service> = self.services.remove(service_id);
        if let Some(service) = &removed {
            info!(
                service_id = service_id.value(),
                passenger_count = service.passengers.len(),
                "Deleted service and passengers"
            );
        }
        Ok(removed.is_some())
    }

    fn load_passengers(&self, service_id: &ServiceId) -> Result<Vec<Passenger>, StoreError> {
        // A missing service simply has no passenger rows
        Ok(self
            .services
            .get(service_id)
            .map(|service| service.passengers.clone())
            .unwrap_or_default())
    }
}
