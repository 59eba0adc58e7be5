use crate::cfr::SolverConfig;
use crate::kuhn::KuhnConfig;
use crate::rhodeisland::RhodeIslandConfig;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

/// Everything a solve run can be configured with, as read from a JSON
/// file. Missing sections and fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub solver: SolverConfig,
    pub kuhn: KuhnConfig,
    pub rhodeisland: RhodeIslandConfig,
}

impl Settings {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read settings from {}", path.display()))?;
        let settings = serde_json::from_str::<Self>(&text)
            .with_context(|| format!("parse settings from {}", path.display()))?;
        settings.validate()?;
        log::debug!("loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.solver.validate().context("solver settings")?;
        self.kuhn.validate().context("kuhn settings")?;
        self.rhodeisland.validate().context("rhode island settings")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(name: &str, text: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}.json", name, std::process::id()));
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn sections_are_optional() {
        let path = write("settings-partial", r#"{ "kuhn": { "bet": 2 } }"#);
        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(settings.kuhn.bet == 2);
        assert!(settings.kuhn.ante == crate::KUHN_ANTE);
        assert!(settings.solver == SolverConfig::default());
        assert!(settings.rhodeisland == RhodeIslandConfig::default());
    }

    #[test]
    fn invalid_values_are_rejected() {
        let path = write("settings-invalid", r#"{ "solver": { "workers": 0 } }"#);
        let result = Settings::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let path = write("settings-malformed", "{ solver: ");
        let result = Settings::load(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
