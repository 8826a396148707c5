//! Property tests: the parser never panics and only yields resource/data blocks.

use iacguard_domain::model::BlockKind;
use iacguard_repo::parse_terraform;
use proptest::prelude::*;

fn arb_block() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("resource"), Just("data"), Just("variable"), Just("locals")],
        "[a-z][a-z0-9_]{0,10}",
        "[a-z][a-z0-9_]{0,10}",
        prop::collection::vec(("[a-z][a-z_]{0,8}", 0u32..5000), 0..4),
    )
        .prop_map(|(ident, kind, name, attrs)| {
            let body: String = attrs
                .into_iter()
                .map(|(k, v)| format!("  attr_{k} = {v}\n"))
                .collect();
            match ident {
                "locals" => format!("locals {{\n{body}}}\n"),
                "variable" => format!("variable \"{name}\" {{\n{body}}}\n"),
                _ => format!("{ident} \"{kind}\" \"{name}\" {{\n{body}}}\n"),
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn arbitrary_text_never_panics(text in ".{0,200}") {
        let _ = parse_terraform("fuzz.tf", &text);
    }

    #[test]
    fn generated_files_keep_block_count_and_lines(blocks in prop::collection::vec(arb_block(), 0..8)) {
        let text = blocks.concat();
        let expected = blocks
            .iter()
            .filter(|b| b.starts_with("resource ") || b.starts_with("data "))
            .count();

        let resources = parse_terraform("gen.tf", &text).expect("generated HCL parses");
        prop_assert_eq!(resources.len(), expected);
        for r in &resources {
            prop_assert!(matches!(r.block, BlockKind::Resource | BlockKind::Data));
            prop_assert!(r.location.line >= 1);
        }
    }
}
