use anyhow::Context;
use serde::Deserialize;

/// Server configuration.
///
/// Loaded once at startup from an optional YAML file, with an environment
/// override for the listen address. The defaults give the zero-config
/// behavior: an OS-assigned port on the loopback interface, serving files
/// relative to the working directory with `index.html` as the root document.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the listener binds to. Port 0 asks the OS for a free port.
    pub listen_addr: String,
    /// File served for the root path `/`.
    pub index_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:0".to_string(),
            index_file: "index.html".to_string(),
        }
    }
}

impl Config {
    /// Loads the configuration.
    ///
    /// If `SIMPLESERVER_CONFIG` names a YAML file it is read and parsed;
    /// otherwise defaults apply. A `LISTEN` environment variable overrides
    /// the listen address either way.
    pub fn load() -> anyhow::Result<Self> {
        let mut cfg = match std::env::var("SIMPLESERVER_CONFIG") {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read config file {}", path))?;
                serde_yaml::from_str(&text)
                    .with_context(|| format!("Failed to parse config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(addr) = std::env::var("LISTEN") {
            cfg.listen_addr = addr;
        }

        Ok(cfg)
    }
}
