use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::errors::IconError;
use crate::models::{IconConfig, IconSummary};

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> IconError + '_ {
    move |source| IconError::Io { path: path.to_path_buf(), source }
}

/// Writes the whole buffer to a new file. The file is closed on every exit path.
pub fn write_file(data: &[u8], path: &Path) -> Result<(), IconError> {
    let mut file = File::create(path).map_err(io_error(path))?;
    file.write_all(data).map_err(io_error(path))?;
    file.flush().map_err(io_error(path))?;
    Ok(())
}

/// Loads icon settings from a JSON file.
pub fn load_config(path: &Path) -> Result<IconConfig, IconError> {
    let file = File::open(path).map_err(io_error(path))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|error| IconError::Config(format!("{}: {}", path.display(), error)))?;
    Ok(config)
}

/// Saves descriptions of generated icons to a JSON file.
pub fn save_manifest(summaries: &[IconSummary], path: &Path) -> Result<(), IconError> {
    let file = File::create(path).map_err(io_error(path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, summaries)
        .map_err(|error| IconError::Config(error.to_string()))?;
    writer.flush().map_err(io_error(path))?;
    Ok(())
}
