//! Icon gallery example.
//!
//! Renders every built-in icon in both variants and writes the SVG files
//! to a `gallery/` directory, useful for eyeballing glyphs after edits.
//!
//! Run with: cargo run -p solace-icons --example gallery

use std::fs;
use std::path::Path;

use solace_icons::{builtin, render, IconRequest};
use solace_theme::{IconSize, ThemeContext, Variant};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("Solace icon gallery");
    println!("===================");
    println!();

    let context = ThemeContext::standard();
    let registry = builtin();
    println!("Built-in registry: {} icons", registry.len());

    let out_dir = Path::new("gallery");
    fs::create_dir_all(out_dir).expect("Failed to create gallery directory");

    let mut written = 0usize;
    for name in registry.names() {
        let theme = registry
            .suggested_theme(&name)
            .expect("registered icons carry a suggested theme");

        for variant in [Variant::Outline, Variant::Filled] {
            let icon = render(
                &IconRequest::new(name.clone())
                    .with_theme(theme)
                    .with_variant(variant)
                    .with_size(IconSize::Xl),
                &context,
            );

            let path = out_dir.join(format!("{}-{}.svg", name, variant));
            fs::write(&path, icon.to_svg()).expect("Failed to write SVG");
            written += 1;
        }
    }

    println!("Wrote {} SVG files to {}/", written, out_dir.display());
    println!();
    println!("Done! Open the directory in a browser to browse the set.");
}
