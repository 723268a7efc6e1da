//! Component registry listing.

use anyhow::Result;
use rfchain::{Category, ParamKind, by_category, registry};

pub fn list_types(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(registry())?);
        return Ok(());
    }

    for category in Category::ALL {
        println!("{}", category);
        println!("{}", "-".repeat(60));
        for info in by_category(category) {
            println!("  {:<24} {}", info.type_name, info.display_name);
            for p in info.parameters {
                match p.kind {
                    ParamKind::Numeric {
                        unit,
                        min,
                        min_exclusive,
                        max,
                        default,
                    } => println!(
                        "      {:<20} {} {}{}, {}] {} (default {})",
                        p.name,
                        p.label,
                        if min_exclusive { "(" } else { "[" },
                        min,
                        max,
                        unit,
                        default
                    ),
                    ParamKind::Text { default } => println!(
                        "      {:<20} {} (default \"{}\")",
                        p.name, p.label, default
                    ),
                }
            }
        }
        println!();
    }
    Ok(())
}
