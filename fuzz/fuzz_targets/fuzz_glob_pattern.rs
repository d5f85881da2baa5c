// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2026 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;
use repolist::scanner::{self, Pattern};
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let (_, tail) = scanner::split(text);
    assert!(tail.iter().all(|c| !c.is_empty()));

    // Parsing may reject the pattern but must never panic
    let resolved = scanner::resolve(text, Path::new("/nonexistent-fuzz-root"));
    let _ = Pattern::new(&resolved);
});
