//! Boundary adapters: the external representations of payment records and
//! the streaming readers/writers that move batches of them.

pub mod json;
