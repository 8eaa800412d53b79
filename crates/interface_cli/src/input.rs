//! Loading cases from JSON

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use domain_inheritance::{InheritanceInput, LawSystem};
use serde_json::Value;

/// Reads a case file, or standard input when the path is `-`
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read case from standard input")?;
        Ok(buffer)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

/// Parses a case, filling in the law system when the document omits it
///
/// An explicit `law_override` always wins over the document and the default.
pub fn parse_case(
    source: &str,
    default_law: LawSystem,
    law_override: Option<LawSystem>,
) -> Result<InheritanceInput> {
    let mut document: Value = serde_json::from_str(source).context("Case is not valid JSON")?;

    let object = document
        .as_object_mut()
        .context("Case must be a JSON object")?;
    if let Some(law) = law_override {
        object.insert("lawSystem".to_string(), serde_json::to_value(law)?);
    } else if !object.contains_key("lawSystem") {
        object.insert("lawSystem".to_string(), serde_json::to_value(default_law)?);
    }

    let input: InheritanceInput =
        serde_json::from_value(document).context("Case does not match the expected shape")?;
    tracing::debug!(
        case_id = %input.case_id,
        heirs = input.heirs.len(),
        law_system = ?input.law_system,
        "Loaded case"
    );
    Ok(input)
}

/// Reads and parses a case in one step
pub fn load_case(
    path: &Path,
    default_law: LawSystem,
    law_override: Option<LawSystem>,
) -> Result<InheritanceInput> {
    let source = read_source(path)?;
    parse_case(&source, default_law, law_override)
        .with_context(|| format!("Invalid case in {}", path.display()))
}
