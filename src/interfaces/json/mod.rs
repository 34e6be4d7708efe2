//! JSON representations of a payment.
//!
//! The same record has two serialized forms with different key sets: the
//! wire form exchanged with clients ([`wire::WirePayment`]) and the storage
//! document form kept by the persistence layer ([`document::PaymentDocument`]).
//! Readers and writers stream records one JSON object per line.

pub mod document;
pub mod document_writer;
pub mod payment_reader;
pub mod wire;
