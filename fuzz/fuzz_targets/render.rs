#![no_main]
use jsonnode::Node;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(node) = text.parse::<Node>() {
            let rendered = node.to_string();
            let reparsed: Node = rendered.parse().expect("Rendered JSON must parse");
            assert_eq!(reparsed, node);
            assert!(reparsed.eq_lexical(&node));
            assert_eq!(reparsed.to_string(), rendered);
            let value = serde_json::Value::from(&node);
            assert_eq!(node, value);
        }
    }
});
