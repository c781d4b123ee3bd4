//! Bundled region dataset (province / city / district).

use std::sync::OnceLock;

use crate::error::Result;
use crate::option::{parse_tree, OptionList};

const AREA_JSON: &str = include_str!("../assets/area.json");

/// The bundled region tree, parsed once.
pub fn regions() -> Result<OptionList> {
    static REGIONS: OnceLock<OptionList> = OnceLock::new();
    if let Some(tree) = REGIONS.get() {
        return Ok(tree.clone());
    }
    let tree = parse_tree(AREA_JSON)?;
    Ok(REGIONS.get_or_init(|| tree).clone())
}
