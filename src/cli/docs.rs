//! Documentation content for the fql CLI, rendered from the catalog

use std::fmt::Write;

use super::CliError;
use crate::catalog::{self, Category};

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> String {
    let mut out = String::from(
        "FQL BUILDER DOCUMENTATION

Every query-language function has a builder in `fql_builder::q`. Builders
normalize their arguments and return an immutable expression that
serializes to the JSON wire format.

DOCUMENTATION CATEGORIES

",
    );

    for category in Category::ALL {
        let count = catalog::by_category(category).count();
        let _ = writeln!(
            out,
            "  {:<14}{:<58}{:>3}",
            category.name(),
            category.summary(),
            count
        );
    }

    out.push_str(
        "
CONVENTIONS

  name?             Optional parameter, left out of the node when None
  name...           Variadic parameter, at least one value required
  lambda            Expression or native function (see `func`)

Run 'fql doc <category>' for the functions in a category.
",
    );
    out
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<String, CliError> {
    let category =
        Category::from_name(name).ok_or_else(|| CliError::UnknownCategory(name.to_string()))?;

    let mut out = format!(
        "{} - {}\n\n",
        category.name().to_uppercase(),
        category.summary()
    );
    let _ = writeln!(out, "  {:<62}WIRE TAG", "BUILDER");
    for spec in catalog::by_category(category) {
        let _ = writeln!(out, "  {:<62}{}", spec.signature, spec.tag);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_lists_every_category() {
        let overview = get_docs_overview();
        for category in Category::ALL {
            assert!(overview.contains(category.name()));
        }
    }

    #[test]
    fn test_category_lists_wire_tags() {
        let doc = get_doc_category("strings").unwrap();
        assert!(doc.contains("contains_str(value, search)"));
        assert!(doc.contains("containsstr"));
    }

    #[test]
    fn test_unknown_category() {
        assert!(matches!(
            get_doc_category("nope"),
            Err(CliError::UnknownCategory(name)) if name == "nope"
        ));
    }
}
