#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use menu_mirror::infrastructure::{DocumentFormat, MenuDocument};
use menu_mirror::{clone_menu, ProxyMenu};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing either format and mirroring the result should never panic
    for format in [DocumentFormat::Toml, DocumentFormat::Json] {
        if let Ok((document, _)) = MenuDocument::parse(content, format, Path::new("fuzz")) {
            let target = ProxyMenu::new("fuzz");
            let _ = clone_menu(&document.build(), &target);
        }
    }
});
