//! Basic usage of the braces API

use braces_api::{expand, Config, Expander};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Convenience function with the default delimiter
    println!("=== Method 1: Convenience Function ===");
    println!("{}\n", expand("src/{lib,main}.rs"));

    // Method 2: Configuration preset
    println!("=== Method 2: Configuration Preset ===");
    let expander = Expander::with_config(Config::lines());
    let expansion = expander.expand("a{b,c{d,e}}f");
    println!("{} words:", expansion.len());
    println!("{expansion}\n");

    // Method 3: Configuration loaded from TOML
    println!("=== Method 3: TOML Configuration ===");
    let expander = Expander::from_toml_str(r#"delimiter = " | ""#)?;
    println!("{}", expander.expand_to_string("{red,green}-{small,large}"));

    Ok(())
}
