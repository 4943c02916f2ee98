//! Fixture payload loading and placeholder expansion
//!
//! Fixtures are canned JSON request bodies named
//! `esb_<operation>_<variant>.json`. Before a payload is sent, every
//! `%s(key)` placeholder is replaced with the property bag entry for
//! `key`; an entry that is missing at send time is a hard error.

use std::path::{Path, PathBuf};

use log::trace;

use crate::error::HarnessError;
use crate::properties::PropertyBag;

pub struct FixtureStore {
    dir: PathBuf,
}

impl FixtureStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FixtureStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Fixture contents exactly as stored, placeholders intact.
    pub fn load_raw(&self, name: &str) -> Result<String, HarnessError> {
        std::fs::read_to_string(self.path_of(name)).map_err(|e| HarnessError::fixture_io(name, e))
    }

    /// Fixture contents with every `%s(key)` placeholder expanded from the
    /// property bag.
    #[tracing::instrument(level = "trace", skip(self, bag), fields(fixture = %name))]
    pub fn load(&self, name: &str, bag: &PropertyBag) -> Result<String, HarnessError> {
        let template = self.load_raw(name)?;
        let body = expand_placeholders(name, &template, bag)?;
        trace!("Loaded fixture '{name}' ({} bytes)", body.len());
        Ok(body)
    }
}

/// Replace `%s(key)` markers in `template` with values from `bag`.
pub fn expand_placeholders(
    fixture: &str,
    template: &str,
    bag: &PropertyBag,
) -> Result<String, HarnessError> {
    const OPEN: &str = "%s(";

    let mut expanded = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(OPEN) {
        expanded.push_str(&rest[..start]);
        let after_open = &rest[start + OPEN.len()..];
        let end = after_open.find(')').ok_or(HarnessError::Fixture {
            name: fixture.to_string(),
            reason: "unterminated '%s(' placeholder".to_string(),
        })?;
        let key = &after_open[..end];
        let value = bag
            .get(key)
            .ok_or_else(|| HarnessError::UnresolvedPlaceholder {
                fixture: fixture.to_string(),
                key: key.to_string(),
            })?;
        expanded.push_str(value);
        rest = &after_open[end + 1..];
    }
    expanded.push_str(rest);
    Ok(expanded)
}
