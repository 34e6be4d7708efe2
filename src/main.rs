use clap::Parser;
use miette::{IntoDiagnostic, Result};
use payments::domain::payment::Payment;
use payments::interfaces::json::document::PaymentDocument;
use payments::interfaces::json::document_writer::DocumentWriter;
use payments::interfaces::json::payment_reader::PaymentReader;
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input payments file, one JSON object per line
    input: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = PaymentReader::new(file);

    let stdout = io::stdout();
    let mut writer = DocumentWriter::new(stdout.lock());

    let mut valid = 0usize;
    let mut invalid = 0usize;

    // Record numbers are 1-based so stderr lines match what an operator
    // counts in the input file.
    for (index, result) in reader.payments().enumerate() {
        let number = index + 1;
        match result {
            Ok(wire) => {
                let payment = Payment::from(wire);
                match payment.validate() {
                    Ok(()) => {
                        writer
                            .write_document(&PaymentDocument::from(payment))
                            .into_diagnostic()?;
                        valid += 1;
                    }
                    Err(e) => {
                        eprintln!("Payment {}: {}", number, e);
                        invalid += 1;
                    }
                }
            }
            Err(e) => {
                eprintln!("Error reading payment {}: {}", number, e);
                invalid += 1;
            }
        }
    }

    writer.flush().into_diagnostic()?;
    eprintln!(
        "Processed {} payments: {} valid, {} invalid",
        valid + invalid,
        valid,
        invalid
    );

    Ok(())
}
