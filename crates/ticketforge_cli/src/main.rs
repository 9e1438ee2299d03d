//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ticketforge_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use ticketforge_core::{MemoryStorage, TemplateStore};

fn main() {
    println!("ticketforge_core version={}", ticketforge_core::core_version());

    // Open an in-memory store to exercise the default-document path without
    // touching the user's template file.
    match TemplateStore::open(MemoryStorage::new()) {
        Ok(store) => {
            println!(
                "ticketforge_core store categories={}",
                store.category_names().join(",")
            );
        }
        Err(err) => {
            eprintln!("ticketforge_core store error={err}");
            std::process::exit(1);
        }
    }

    println!(
        "ticketforge_core preview={}",
        ticketforge_core::render_preview("Hi [name]!")
    );
}
