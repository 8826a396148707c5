//! Fuzz target for policy config parsing and resolution.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use arbitrary::Arbitrary;
use iacguard_settings::{ConfigFormat, Overrides};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct ConfigInput {
    toml: bool,
    text: String,
    profile: Option<String>,
}

fuzz_target!(|input: ConfigInput| {
    if input.text.len() > 64 * 1024 {
        return;
    }
    let format = if input.toml {
        ConfigFormat::Toml
    } else {
        ConfigFormat::Yaml
    };
    if let Ok(cfg) = iacguard_settings::parse_config(&input.text, format) {
        let overrides = Overrides {
            profile: input.profile,
            ..Overrides::default()
        };
        let _ = iacguard_settings::resolve_config(cfg, overrides);
    }
});
