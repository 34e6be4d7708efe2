use rand::Rng;
use serde_json::{Value, json};
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;

/// Builds one valid wire payment.
pub fn payment_value(amount: f64, currency: &str, description: &str) -> Value {
    json!({
        "beneficiary": {
            "account_number": "GB33BUKB20201555555555",
            "bank_id": "403000",
            "name": "Wilfred Jeremiah Owens"
        },
        "debtor": {
            "account_number": "GB29XABC10161234567801",
            "bank_id": "203301",
            "name": "Emelia Jane Brown"
        },
        "amount": amount,
        "currency": currency,
        "date": "2019-07-01T00:00:00Z",
        "description": description
    })
}

/// Builds one valid wire payment as a JSON line.
pub fn payment_line(amount: f64, currency: &str, description: &str) -> String {
    payment_value(amount, currency, description).to_string()
}

pub fn generate_payments(path: &Path, rows: usize) -> Result<(), Error> {
    let mut file = File::create(path)?;

    for i in 1..=rows {
        writeln!(
            file,
            "{}",
            payment_line(i as f64, "GBP", &format!("payment {}", i))
        )?;
    }

    file.flush()?;
    Ok(())
}

/// Writes `rows` payments, each randomly valid or broken in one field.
/// Returns the (valid, invalid) counts so callers can check totals.
pub fn generate_mixed_payments(path: &Path, rows: usize) -> Result<(usize, usize), Error> {
    let mut file = File::create(path)?;
    let mut rng = rand::thread_rng();

    let mut valid = 0;
    let mut invalid = 0;
    for i in 1..=rows {
        let amount = rng.gen_range(1..=100_000) as f64 / 100.0;
        let mut record = payment_value(amount, "GBP", &format!("payment {}", i));

        if rng.gen_bool(0.7) {
            valid += 1;
        } else {
            // Break exactly one field per invalid record.
            match rng.gen_range(0..4) {
                0 => record["amount"] = json!(-amount),
                1 => record["currency"] = json!(""),
                2 => record["date"] = json!(null),
                _ => record["description"] = json!(""),
            }
            invalid += 1;
        }

        writeln!(file, "{}", record)?;
    }

    file.flush()?;
    Ok((valid, invalid))
}
