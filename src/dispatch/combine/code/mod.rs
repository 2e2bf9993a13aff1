//! Strategy implementations for the combine comparison.
//!
//! Every strategy computes the same operation (combine two same-variant
//! payloads) over the same logical workload; only the mechanism selecting
//! the variant-specific behavior differs.

pub mod enum_match;
pub mod op_table;
pub mod type_test;
pub mod virtual_call;
