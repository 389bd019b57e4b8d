//! Load/save orchestration for one config file.
//!
//! `load` creates the file from defaults the first time and otherwise just
//! unmarshals it. `save` always marshals the value, then regenerates every
//! comment block from the value's field metadata.


use crate::annotate::write_commented;
use crate::comments::CommentMap;
use crate::error::{ConfigError, Result};
use crate::marshal;
use crate::schema::{ConfigValues, apply_creation_values};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Owns the path of a config file of type `T`.
///
/// Saves are not synchronized: two handlers writing the same file at once
/// can lose an update.
#[derive(Debug, Clone)]
pub struct ConfigHandler<T> {
    path: PathBuf,
    _config: PhantomData<fn() -> T>,
}

impl<T: ConfigValues> ConfigHandler<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _config: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the config, creating it from `T::default()` if the file is absent.
    pub fn load(&self) -> Result<T>
    where
        T: Default,
    {
        self.load_with(T::default)
    }

    /// Load the config, creating it from `factory` if the file is absent.
    ///
    /// A freshly created value gets its creation-time literals applied and is
    /// saved with comments before being returned.
    pub fn load_with(&self, factory: impl FnOnce() -> T) -> Result<T> {
        let exists = self
            .path
            .try_exists()
            .map_err(|e| ConfigError::io("check", &self.path, e))?;

        if exists {
            debug!(path = %self.path.display(), "loading existing config");
            return marshal::read_value(&self.path);
        }

        info!(path = %self.path.display(), "config file not found, creating it");
        let mut config = factory();
        apply_creation_values(&mut config)?;
        self.save(&config)?;
        Ok(config)
    }

    /// Marshal `config` into the file and regenerate its comments.
    pub fn save(&self, config: &T) -> Result<()> {
        let comments = CommentMap::build(config)?;
        let annotated = write_commented(&self.path, config, &comments)?;

        debug!(
            path = %self.path.display(),
            commented_paths = comments.len(),
            annotated_lines = annotated,
            "saved config"
        );
        Ok(())
    }
}
