//! Configuration file loading and saving

use super::file::{ConfigFormat, ResourceConfig, CONFIG_FILE_NAMES};
use super::js_module;
use crate::error::ScriptSetError;
use crate::infra::{FileSystem, RealFileSystem};
use log::debug;
use std::io;
use std::path::{Path, PathBuf};

/// Subdirectory searched after the project root during discovery
pub const CONFIG_SUBDIR: &str = "configuration";

const UTF8_BOM: char = '\u{feff}';

/// Handles loading and saving configuration files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a declaration from an explicit path
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use scriptset::config::ConfigLoader;
    /// use std::path::Path;
    ///
    /// let config = ConfigLoader::load(Path::new("app/configuration/scripts.js"))?;
    /// println!("{} sets declared", config.sets.len());
    /// # Ok::<(), scriptset::error::ScriptSetError>(())
    /// ```
    pub fn load(path: &Path) -> Result<ResourceConfig, ScriptSetError> {
        Self::load_with_fs(path, &RealFileSystem)
    }

    /// Load a declaration with a custom filesystem implementation
    pub fn load_with_fs<FS: FileSystem>(
        path: &Path,
        fs: &FS,
    ) -> Result<ResourceConfig, ScriptSetError> {
        let format = ConfigFormat::from_path(path)?;

        let contents = fs.read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ScriptSetError::ConfigNotFound {
                path: path.to_path_buf(),
                source: e,
            },
            _ => ScriptSetError::Io {
                context: format!("reading {}", path.display()),
                source: e,
            },
        })?;

        debug!("parsing {} as {:?}", path.display(), format);
        let config = Self::parse(&contents, format).map_err(|message| ScriptSetError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })?;

        debug!(
            "loaded {} set(s) from {} (bundling={}, minification={})",
            config.sets.len(),
            path.display(),
            config.bundling,
            config.minification
        );
        Ok(config)
    }

    /// Parse declaration text in the given format
    ///
    /// A leading UTF-8 byte order mark is ignored.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<ResourceConfig, String> {
        let contents = contents.strip_prefix(UTF8_BOM).unwrap_or(contents);
        match format {
            ConfigFormat::Json => serde_json::from_str(contents).map_err(|e| e.to_string()),
            ConfigFormat::JsModule => {
                let payload = js_module::extract_payload(contents);
                serde_json::from_str(&payload).map_err(|e| e.to_string())
            }
            ConfigFormat::Toml => toml_edit::de::from_str(contents).map_err(|e| e.to_string()),
        }
    }

    /// Find the declaration file for a project directory
    ///
    /// Looks for `scripts.json`, `scripts.js` and `scripts.toml` in `dir`, then
    /// in `dir/configuration`.
    pub fn discover(dir: &Path) -> Result<PathBuf, ScriptSetError> {
        Self::discover_with_fs(dir, &RealFileSystem)
    }

    /// Discover with a custom filesystem implementation
    pub fn discover_with_fs<FS: FileSystem>(
        dir: &Path,
        fs: &FS,
    ) -> Result<PathBuf, ScriptSetError> {
        let candidates: Vec<PathBuf> = [dir.to_path_buf(), dir.join(CONFIG_SUBDIR)]
            .iter()
            .flat_map(|base| CONFIG_FILE_NAMES.iter().map(move |name| base.join(name)))
            .collect();

        for candidate in &candidates {
            if fs.is_file(candidate) {
                debug!("discovered configuration at {}", candidate.display());
                return Ok(candidate.clone());
            }
        }

        Err(ScriptSetError::ConfigMissing {
            dir: dir.to_path_buf(),
            tried: candidates
                .iter()
                .map(|c| {
                    c.strip_prefix(dir)
                        .unwrap_or(c)
                        .to_string_lossy()
                        .into_owned()
                })
                .collect(),
        })
    }

    /// Load from an explicit path if given, otherwise discover under `dir`
    pub fn resolve(
        explicit: Option<&Path>,
        dir: &Path,
    ) -> Result<(PathBuf, ResourceConfig), ScriptSetError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => Self::discover(dir)?,
        };
        let config = Self::load(&path)?;
        Ok((path, config))
    }

    /// Save a declaration as pretty JSON
    ///
    /// ```no_run
    /// use scriptset::config::{ConfigLoader, ResourceConfig};
    /// use std::path::Path;
    ///
    /// let config = ResourceConfig::default().with_set("public", ["scripts/index.js"]);
    /// ConfigLoader::save(&config, Path::new("scripts.json"))?;
    /// # Ok::<(), scriptset::error::ScriptSetError>(())
    /// ```
    pub fn save(config: &ResourceConfig, path: &Path) -> Result<(), ScriptSetError> {
        Self::save_with_fs(config, path, &RealFileSystem)
    }

    /// Save with a custom filesystem implementation
    pub fn save_with_fs<FS: FileSystem>(
        config: &ResourceConfig,
        path: &Path,
        fs: &FS,
    ) -> Result<(), ScriptSetError> {
        let mut contents = serde_json::to_string_pretty(config).map_err(|e| ScriptSetError::Io {
            context: format!("serializing {}", path.display()),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;
        contents.push('\n');

        fs.write(path, contents).map_err(|e| ScriptSetError::Io {
            context: format!("writing {}", path.display()),
            source: e,
        })
    }
}
