// config.rs - Trajectory parameters from JSON files
use std::path::Path;

use anyhow::{Context, Result};

use crate::trajectory::TrajectoryParameters;

/// Parse parameters from a JSON document; missing fields take their defaults
pub fn parse(json: &str) -> Result<TrajectoryParameters> {
    serde_json::from_str(json).context("Failed to parse trajectory parameters")
}

/// Load parameters from a JSON file
pub fn load<P: AsRef<Path>>(path: P) -> Result<TrajectoryParameters> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let params = parse(&text).with_context(|| format!("Invalid config file: {}", path.display()))?;

    log::info!("Loaded parameters from {}", path.display());
    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_default() {
        let params = parse(r#"{ "start_height": 2.0 }"#).unwrap();
        assert_eq!(params.start_height, 2.0);
        assert_eq!(params.restitution, TrajectoryParameters::default().restitution);
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(parse(r#"{ "bounciness": 0.5 }"#).is_err());
    }

    #[test]
    fn loads_file_from_disk() {
        let path = std::env::temp_dir().join(format!("bounce-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "start_height": 3.5, "sample_rate": 60.0 }"#).unwrap();

        let params = load(&path);
        std::fs::remove_file(&path).unwrap();
        let params = params.unwrap();

        assert_eq!(params.start_height, 3.5);
        assert_eq!(params.sample_rate, 60.0);
        assert_eq!(params.stop_height, TrajectoryParameters::default().stop_height);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load("does/not/exist.json").unwrap_err();
        assert!(format!("{:#}", err).contains("does/not/exist.json"));
    }
}
