use serde::Serialize;

use crate::cli::commands::{ConfigAction, ConfigCmd};
use crate::io::config_io::{init_config, read_config_document, set_value, write_config};
use crate::io::paths::config_path;

use super::CliError;

#[derive(Serialize)]
struct ConfigPathJson {
    path: String,
    exists: bool,
}

pub fn cmd_config(cmd: ConfigCmd, json: bool) -> Result<(), CliError> {
    let path = config_path();
    match cmd.action {
        ConfigAction::Path => {
            if json {
                let out = ConfigPathJson {
                    path: path.display().to_string(),
                    exists: path.exists(),
                };
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{}", path.display());
            }
        }
        ConfigAction::Init { force } => {
            init_config(&path, force)?;
            tracing::info!(path = %path.display(), "wrote config template");
            println!("Wrote {}", path.display());
        }
        ConfigAction::Set { key, value } => {
            let mut doc = read_config_document(&path)?;
            set_value(&mut doc, &key, &value)?;
            write_config(&path, &doc)?;
            println!("{} = {}", key, value.trim());
        }
    }
    Ok(())
}
