//! Strategy implementations for the accessor comparison.
//!
//! Every strategy walks an instruction sequence and forwards each
//! variant's trivial accessor result to the sink; only the mechanism that
//! reaches the accessor differs.

pub mod sealed;
pub mod tag_switch;
pub mod type_test;
pub mod virtual_call;
