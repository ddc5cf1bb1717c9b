//! Init command implementation

use std::io::Write;
use std::path::PathBuf;

use marklint_core::config::CONFIG_FILE_NAMES;
use miette::{IntoDiagnostic, Result};
use tracing::info;

const STARTER_CONFIG: &str = r#"{
  "config": {
    // Rules not listed here use this setting.
    "default": true,
    "MD013": { "line_length": 80, "code_blocks": false, "tables": false }
  },
  "ignores": ["node_modules/**", "vendor/**"],
  "overrides": []
}
"#;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAMES[0]);

    loop {
        let mut options = std::fs::OpenOptions::new();
        options.write(true).create_new(true);

        match options.open(&config_path) {
            Ok(mut file) => {
                file.write_all(STARTER_CONFIG.as_bytes()).into_diagnostic()?;
                info!("Created {}", config_path.display());
                return Ok(());
            }
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                if !force {
                    return Err(miette::miette!(
                        "Config file already exists. Use --force to overwrite."
                    ));
                }

                match std::fs::remove_file(&config_path) {
                    Ok(()) => {}
                    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_diagnostic(),
                }
            }
            Err(e) => return Err(e).into_diagnostic(),
        }
    }
}
