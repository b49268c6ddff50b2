use std::process::ExitCode;

use anyhow::{Context, Result};
use num_bigint::BigInt;
use shamir_recover::{parse_document, reconstruct};

fn main() -> ExitCode {
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        eprintln!("usage: shamir-recover <input.json>...");
        return ExitCode::from(2);
    }

    // Each document is an independent job; one failure must not stop the rest.
    let mut failed = false;
    for path in &paths {
        match recover_file(path) {
            Ok(secret) => println!("Secret (constant term) for {path}: {secret}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn recover_file(path: &str) -> Result<BigInt> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let doc = parse_document(&text).with_context(|| format!("parsing {path}"))?;
    reconstruct(doc.k, &doc.shares).with_context(|| format!("reconstructing {path}"))
}
