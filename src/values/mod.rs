//! Chart values: file merging and `--set` overlays.

mod merge;
mod set_parser;

pub use merge::merge_values;
pub use set_parser::parse_set;

use crate::shared::error::ResError;
use serde_yaml_ng::Mapping;

/// Merges value files left to right, then applies `--set` expressions in order.
pub fn compose_values(
    files: impl IntoIterator<Item = Mapping>,
    set_expressions: &[String],
) -> Result<Mapping, ResError> {
    let mut values = Mapping::new();
    for file in files {
        merge_values(&mut values, file);
    }
    for expression in set_expressions {
        parse_set(expression, &mut values)?;
    }
    Ok(values)
}

/// Renders merged values as a YAML document body
pub fn values_to_yaml(values: &Mapping) -> crate::shared::Result<String> {
    Ok(serde_yaml_ng::to_string(values)?)
}
