//! Fuzz target for Terraform file parsing.
//!
//! Goal: `parse_terraform` should **never panic** on any input.
//! It may return `LoadError::Parse`, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_hcl_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = iacguard_repo::parse_terraform("fuzz.tf", text);
    }
});
