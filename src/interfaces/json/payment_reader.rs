use crate::error::InputError;
use crate::interfaces::json::wire::WirePayment;
use std::io::{BufRead, BufReader, Read};

/// Reads wire payments from a JSON Lines source.
///
/// One payment object per line; blank lines are skipped. A malformed line
/// yields an error for that record only and the stream continues, so a
/// single bad record cannot poison a whole batch.
pub struct PaymentReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self {
            reader: BufReader::new(source),
        }
    }

    /// Returns an iterator that lazily reads and deserializes payments.
    ///
    /// This allows processing large batches in a streaming fashion without
    /// loading the entire input into memory.
    pub fn payments(self) -> impl Iterator<Item = Result<WirePayment, InputError>> {
        self.reader.lines().filter_map(|line| match line {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(serde_json::from_str(&line).map_err(InputError::from)),
            Err(err) => Some(Err(InputError::from(err))),
        })
    }
}
