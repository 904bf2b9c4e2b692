// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod store_tests;

use corsa_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use corsa_domain::{
    Client, OperatorId, Passenger, PaymentMethod, Service, ServiceDraft, ServiceId, ServiceStatus,
};
use rust_decimal::Decimal;
use time::macros::{date, datetime, time};
use time::{Date, Time};

pub fn create_test_draft(id: &str) -> ServiceDraft {
    create_dated_draft(id, date!(2026 - 03 - 14), time!(09:30))
}

pub fn create_dated_draft(id: &str, day: Date, at: Time) -> ServiceDraft {
    ServiceDraft::new(
        ServiceId::new(id),
        Some(day),
        Some(at),
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

pub fn create_test_service(id: &str, status: ServiceStatus) -> Service {
    Service::from_draft(create_test_draft(id), status)
}

pub fn create_dated_service(id: &str, status: ServiceStatus, day: Date, at: Time) -> Service {
    Service::from_draft(create_dated_draft(id, day, at), status)
}

pub fn create_test_passenger(name: &str) -> Passenger {
    Passenger::new(
        String::from(name),
        Some(String::from("+39 030 555 0101")),
        None, // pickup_point
        None, // pickup_time
        None, // custom_pickup
    )
}

pub fn create_test_audit_event(service_id: &str, action: &str) -> AuditEvent {
    AuditEvent::new(
        Actor::new(String::from("op-123"), String::from("operator")),
        Cause::new(String::from("req-456"), String::from("Operator request")),
        Action::new(String::from(action), None),
        ServiceId::new(service_id),
        StateSnapshot::new(String::from("status=draft driver=none")),
        StateSnapshot::new(String::from("status=awaiting_assignment driver=none")),
    )
}
