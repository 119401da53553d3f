#![no_main]

use c2go_core::lang::shims::DEFAULT_MODULE_ROOT;
use c2go_core::parse_declaration;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = parse_declaration(s, DEFAULT_MODULE_ROOT);
    }
});
