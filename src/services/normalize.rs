// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Response normalization.
//!
//! Collection endpoints answer either with a bare JSON array or with a
//! paginated envelope `{"count": .., "next": .., "results": [..]}`. The
//! shape is classified once here; everything downstream only ever sees a
//! `Vec<Record>`.

use serde_json::Value;

use crate::models::Record;

/// Envelope field carrying the collection.
pub const RESULTS_FIELD: &str = "results";

/// Classified shape of a collection response.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseShape {
    /// The payload itself is the sequence.
    Bare(Vec<Value>),
    /// An object carrying the sequence under `results`.
    Envelope(Vec<Value>),
    /// Anything else: object without a `results` array, null, primitive.
    Unrecognized,
}

impl From<Value> for ResponseShape {
    fn from(payload: Value) -> Self {
        match payload {
            Value::Array(items) => ResponseShape::Bare(items),
            Value::Object(mut map) => match map.remove(RESULTS_FIELD) {
                Some(Value::Array(items)) => ResponseShape::Envelope(items),
                _ => ResponseShape::Unrecognized,
            },
            _ => ResponseShape::Unrecognized,
        }
    }
}

impl ResponseShape {
    /// Records carried by this response, in server order.
    ///
    /// Elements that are not JSON objects cannot be records and are
    /// dropped.
    pub fn into_records(self) -> Vec<Record> {
        let items = match self {
            ResponseShape::Bare(items) | ResponseShape::Envelope(items) => items,
            ResponseShape::Unrecognized => return Vec::new(),
        };

        let total = items.len();
        let records: Vec<Record> = items
            .into_iter()
            .filter_map(|item| Record::try_from(item).ok())
            .collect();

        if records.len() != total {
            tracing::warn!(
                dropped = total - records.len(),
                "Dropped non-object elements from collection response"
            );
        }
        records
    }
}

/// Normalize any collection payload into a sequence of records.
pub fn normalize(payload: Value) -> Vec<Record> {
    let shape = ResponseShape::from(payload);
    if shape == ResponseShape::Unrecognized {
        tracing::warn!("Unrecognized collection response shape, treating as empty");
    }
    shape.into_records()
}
