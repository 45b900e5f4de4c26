use std::{fs, path::Path};

use super::Config;
use crate::{BridgeError, Result};

const HEADER: &str = "# media-bridge configuration file\n\n";

/// Writes a configuration file holding every default value.
pub fn create_default_config_file(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| BridgeError::io_at(e, parent))?;
    }

    let body = toml::to_string_pretty(&Config::default()).map_err(|e| {
        BridgeError::ConfigValidation {
            component: "defaults".to_string(),
            details: e.to_string(),
        }
    })?;

    fs::write(path, format!("{HEADER}{body}")).map_err(|e| BridgeError::io_at(e, path))?;

    Ok(())
}
