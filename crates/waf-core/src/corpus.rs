use crate::capability::Capability;
use crate::catalog::{Catalog, LensSpec, PillarSpec, SagaSpec};
use crate::error::Result;
use crate::io::{json_files, read_json};
use crate::paths;
use crate::practice::Practice;
use std::path::{Path, PathBuf};

/// Read-only view of the on-disk source corpus.
///
/// Every call reads from disk; nothing is cached between calls. Missing files
/// and directories contribute no records rather than failing.
#[derive(Debug, Clone)]
pub struct Corpus {
    data_dir: PathBuf,
    catalog: Catalog,
}

impl Corpus {
    pub fn new(data_dir: impl Into<PathBuf>, catalog: Catalog) -> Self {
        Self {
            data_dir: data_dir.into(),
            catalog,
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    // -----------------------------------------------------------------------
    // Practices
    // -----------------------------------------------------------------------

    /// Practices from one pillar file, or from every pillar file in table order.
    pub fn pillar_practices(&self, pillar: Option<&PillarSpec>) -> Result<Vec<Practice>> {
        let mut practices = Vec::new();
        for spec in selected(self.catalog.pillars(), pillar) {
            let path = paths::pillar_source(&self.data_dir, spec);
            if let Some(batch) = read_json::<Vec<Practice>>(&path)? {
                practices.extend(batch);
            }
        }
        Ok(practices)
    }

    /// Practices from a lens's pillar-named files: just `pillar`'s file when
    /// given, otherwise every pillar file in table order.
    pub fn lens_practices(
        &self,
        lens: &LensSpec,
        pillar: Option<&PillarSpec>,
    ) -> Result<Vec<Practice>> {
        if !paths::lens_source_dir(&self.data_dir, lens).is_dir() {
            return Ok(Vec::new());
        }
        let mut practices = Vec::new();
        for spec in selected(self.catalog.pillars(), pillar) {
            let path = paths::lens_pillar_source(&self.data_dir, lens, spec);
            if let Some(batch) = read_json::<Vec<Practice>>(&path)? {
                practices.extend(batch);
            }
        }
        Ok(practices)
    }

    /// Practices from every `*.json` file in a lens directory, in file-name order.
    pub fn lens_dir_practices(&self, lens: &LensSpec) -> Result<Vec<Practice>> {
        let mut practices = Vec::new();
        for path in json_files(&paths::lens_source_dir(&self.data_dir, lens))? {
            if let Some(batch) = read_json::<Vec<Practice>>(&path)? {
                practices.extend(batch);
            }
        }
        Ok(practices)
    }

    /// Every pillar practice followed by every lens practice.
    pub fn all_practices(&self) -> Result<Vec<Practice>> {
        let mut practices = self.pillar_practices(None)?;
        for lens in self.catalog.lenses() {
            practices.extend(self.lens_practices(lens, None)?);
        }
        Ok(practices)
    }

    // -----------------------------------------------------------------------
    // Capabilities
    // -----------------------------------------------------------------------

    /// Capabilities of one saga, one file each, in file-name order.
    pub fn saga_capabilities(&self, saga: &SagaSpec) -> Result<Vec<Capability>> {
        let mut capabilities = Vec::new();
        for path in json_files(&paths::saga_source_dir(&self.data_dir, saga))? {
            if let Some(cap) = read_json::<Capability>(&path)? {
                capabilities.push(cap);
            }
        }
        Ok(capabilities)
    }

    /// Capabilities of one saga, or of every saga in table order.
    pub fn capabilities(&self, saga: Option<&SagaSpec>) -> Result<Vec<Capability>> {
        let mut capabilities = Vec::new();
        for spec in selected(self.catalog.sagas(), saga) {
            capabilities.extend(self.saga_capabilities(spec)?);
        }
        Ok(capabilities)
    }
}

fn selected<'a, T>(all: &'a [T], one: Option<&'a T>) -> Vec<&'a T> {
    match one {
        Some(spec) => vec![spec],
        None => all.iter().collect(),
    }
}
