// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mandatory-field completeness evaluation.
//!
//! This module decides which mandatory business fields a service record is
//! still missing. Completeness is **computed**, not stored. It's a pure
//! function of the record, consumed by status inference and by diagnostic
//! messages; it never gates a transition by itself.

use crate::service::Service;
use crate::types::Client;

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Evaluates the mandatory-field checklist for a service.
///
/// The checklist is fixed, in this order: client, pickup address,
/// destination address, date, time, payment method. The returned labels are
/// the human-readable subset that is empty or unset, preserving checklist
/// order. Blank strings count as unset.
#[must_use]
pub fn missing_fields(service: &Service) -> Vec<&'static str> {
    let mut missing: Vec<&'static str> = Vec::new();

    if service.client.as_ref().is_none_or(Client::is_blank) {
        missing.push("client");
    }
    if is_blank(&service.pickup_address) {
        missing.push("pickup address");
    }
    if is_blank(&service.destination_address) {
        missing.push("destination address");
    }
    if service.service_date.is_none() {
        missing.push("date");
    }
    if service.scheduled_time.is_none() {
        missing.push("time");
    }
    if service.payment_method.is_none() {
        missing.push("payment method");
    }

    missing
}

/// Returns true if no mandatory field is missing.
#[must_use]
pub fn is_complete(service: &Service) -> bool {
    missing_fields(service).is_empty()
}
