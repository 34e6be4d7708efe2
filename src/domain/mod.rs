//! Domain layer containing the payment record model and its validation
//! rules.
//!
//! Everything here is a plain value object with pure validation; nothing in
//! this module performs IO or depends on a representation format.

pub mod entity;
pub mod payment;
