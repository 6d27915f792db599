use std::fs::File;
use std::io::{self, Read};

use log::debug;

use crate::core::GenericResult;
use crate::options::Options;

pub const DEFAULT_CONFIG_PATH: &str = "~/.pretty-ms.yaml";

/// Loads formatting options from the specified YAML file or from the default one if it exists.
pub fn load_options(path: Option<&str>) -> GenericResult<Options> {
    let (path, required) = match path {
        Some(path) => (path, true),
        None => (DEFAULT_CONFIG_PATH, false),
    };

    let path = shellexpand::tilde(path).to_string();
    let mut data = Vec::new();

    let mut file = match File::open(&path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
            debug!("{path} doesn't exist. Using default options.");
            return Ok(Options::default());
        },
        Err(e) => return Err!("Error while reading {path:?}: {e}"),
    };

    file.read_to_end(&mut data).map_err(|e| format!("Error while reading {path:?}: {e}"))?;

    if data.iter().all(u8::is_ascii_whitespace) {
        return Ok(Options::default());
    }

    let options: Options = serde_yaml::from_slice(&data).map_err(|e| format!(
        "Error while reading {path:?}: {e}"))?;

    debug!("Loaded options from {path}: {options:?}.");
    Ok(options)
}
