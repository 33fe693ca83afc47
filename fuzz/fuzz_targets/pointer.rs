#![no_main]
use jsonnode::Node;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, &str)| {
    let (document, pointer) = data;
    if let Ok(node) = document.parse::<Node>() {
        match node.try_pointer(pointer) {
            Ok(found) => assert_eq!(node.pointer(pointer), Some(found)),
            Err(error) => {
                assert!(error.is_not_found() || error.is_type_mismatch());
                assert!(node.pointer(pointer).is_none());
            }
        }
    }
});
