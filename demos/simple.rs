//! Converting field names between case styles.
//!
//! Run with: cargo run --example simple

use case_style::{convert, to_camel_case, Case, Value};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let fields = ["first name", "user_id", "SCREEN_NAME", "mobile-number", "someCamelCase"];

    println!("{:<16} {:<16} {:<18} {:<16}", "input", "camel", "kebab", "dot");
    for field in fields {
        println!(
            "{:<16} {:<16} {:<18} {:<16}",
            field,
            convert(field, Case::Camel),
            convert(field, Case::Kebab),
            convert(field, Case::Dot),
        );
    }

    // Pick the style by name, e.g. from a config file or command line
    let case: Case = "kebab-case".parse()?;
    println!("\n{} -> {}", case, case.apply("myVariableName"));

    // Values that are not strings convert to an empty string
    let missing = Value::Null;
    assert_eq!(to_camel_case(&missing), "");
    println!("✓ null converts to \"\"");

    Ok(())
}
