//! Result sinks.
//!
//! Every strategy pass forwards each per-element result to a sink whose
//! only job is to keep the computation observable. The sink is injected
//! rather than hardcoded so the measured passes stay independent of any
//! particular measurement library.

use std::hint::black_box;

use crate::dispatch::payload::Payload;
use crate::dispatch::value::Value;

/// Consumer of dispatch results, one method per result shape.
pub trait Sink {
    fn int(&mut self, v: i32);
    fn float(&mut self, v: f32);
    fn double(&mut self, v: f64);
    fn text(&mut self, v: &str);
    fn value(&mut self, v: &Value);
    fn payload(&mut self, v: &dyn Payload);
}

/// Sink used by the timed passes: routes everything through
/// `std::hint::black_box` so the optimizer cannot delete the dispatch.
pub struct Blackhole;

impl Sink for Blackhole {
    fn int(&mut self, v: i32) {
        black_box(v);
    }

    fn float(&mut self, v: f32) {
        black_box(v);
    }

    fn double(&mut self, v: f64) {
        black_box(v);
    }

    fn text(&mut self, v: &str) {
        black_box(v);
    }

    fn value(&mut self, v: &Value) {
        black_box(v);
    }

    fn payload(&mut self, v: &dyn Payload) {
        black_box(v);
    }
}

/// Sink used by verification: records every result as a `Value` so two
/// strategy passes can be compared element for element.
#[derive(Default)]
pub struct Recorder {
    pub seen: Vec<Value>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for Recorder {
    fn int(&mut self, v: i32) {
        self.seen.push(Value::Int(v));
    }

    fn float(&mut self, v: f32) {
        self.seen.push(Value::Float(v));
    }

    fn double(&mut self, v: f64) {
        self.seen.push(Value::Double(v));
    }

    fn text(&mut self, v: &str) {
        self.seen.push(Value::Text(v.to_string()));
    }

    fn value(&mut self, v: &Value) {
        self.seen.push(v.clone());
    }

    fn payload(&mut self, v: &dyn Payload) {
        self.seen.push(v.to_value());
    }
}
