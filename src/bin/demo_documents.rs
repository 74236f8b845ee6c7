//! Demonstration utility: runs a few sample documents through the pipeline
//! and prints each result as a JSON record.

use rust_doc_validator::process_document;

const SAMPLES: [&str; 4] = [
    "33.592.510/0001-54",
    "12345678000199",
    "AB123456",
    "12345678909",
];

/// Header line, an 80-column rule, then one JSON record per sample.
fn render_report(samples: &[&str]) -> anyhow::Result<Vec<String>> {
    let mut lines = vec![format!("{:<20} | JSON OUTPUT", "INPUT"), "-".repeat(80)];
    for sample in samples {
        lines.push(serde_json::to_string(&process_document(sample))?);
    }
    Ok(lines)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_doc_validator=info".into()),
        )
        .init();

    for line in render_report(&SAMPLES)? {
        println!("{}", line);
    }

    Ok(())
}
