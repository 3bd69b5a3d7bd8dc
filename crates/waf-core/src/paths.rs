use crate::catalog::{LensSpec, PillarSpec, SagaSpec};
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

/// Default location of the source corpus, relative to the tool's home.
pub const DATA_SOURCE_DIR: &str = "data/source";

pub const LENS_DIR: &str = "lens";
pub const DEVOPS_DIR: &str = "lens/devops";

pub const PILLARS_OUT_DIR: &str = "pillars";
pub const LENSES_OUT_DIR: &str = "lenses";
pub const DEVOPS_OUT_DIR: &str = "devops";
pub const INDEX_MD: &str = "index.md";

// ---------------------------------------------------------------------------
// Source paths
// ---------------------------------------------------------------------------

pub fn pillar_source(data_dir: &Path, pillar: &PillarSpec) -> PathBuf {
    data_dir.join(pillar.file)
}

pub fn lens_source_dir(data_dir: &Path, lens: &LensSpec) -> PathBuf {
    data_dir.join(LENS_DIR).join(lens.dir)
}

pub fn lens_pillar_source(data_dir: &Path, lens: &LensSpec, pillar: &PillarSpec) -> PathBuf {
    lens_source_dir(data_dir, lens).join(pillar.file)
}

pub fn saga_source_dir(data_dir: &Path, saga: &SagaSpec) -> PathBuf {
    data_dir.join(DEVOPS_DIR).join(saga.dir)
}

// ---------------------------------------------------------------------------
// Output paths
// ---------------------------------------------------------------------------

pub fn pillar_output(out_dir: &Path, pillar: &PillarSpec) -> PathBuf {
    out_dir
        .join(PILLARS_OUT_DIR)
        .join(format!("{}.md", pillar.key))
}

pub fn lens_output(out_dir: &Path, lens: &LensSpec) -> PathBuf {
    out_dir.join(LENSES_OUT_DIR).join(format!("{}.md", lens.key))
}

pub fn saga_output(out_dir: &Path, saga: &SagaSpec) -> PathBuf {
    out_dir.join(DEVOPS_OUT_DIR).join(format!("{}.md", saga.dir))
}

pub fn devops_index_output(out_dir: &Path) -> PathBuf {
    out_dir.join(DEVOPS_OUT_DIR).join(INDEX_MD)
}

pub fn index_output(out_dir: &Path) -> PathBuf {
    out_dir.join(INDEX_MD)
}
