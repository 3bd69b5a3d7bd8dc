use crate::corpus::Corpus;
use crate::error::Result;
use crate::io::{atomic_write, ensure_dir};
use crate::markdown::line_count;
use crate::paths;
use crate::render;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    Pillar,
    Lens,
    Saga,
    DevopsIndex,
    Index,
}

/// One markdown file written by [`generate`]. `items` counts practices for
/// pillar/lens files and capabilities for saga files and the DevOps index.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub kind: OutputKind,
    pub path: PathBuf,
    pub items: usize,
    pub lines: usize,
}

impl GeneratedFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    pub files: Vec<GeneratedFile>,
}

impl GenerateReport {
    pub fn of_kind(&self, kind: OutputKind) -> impl Iterator<Item = &GeneratedFile> {
        self.files.iter().filter(move |f| f.kind == kind)
    }

    fn record(&mut self, kind: OutputKind, path: PathBuf, items: usize, content: &str) {
        self.files.push(GeneratedFile {
            kind,
            path,
            items,
            lines: line_count(content),
        });
    }
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Render every pillar, lens and saga document plus the two indexes under
/// `out_dir`, overwriting existing files.
///
/// Pillars with no source file, and lenses or sagas with no records, are
/// skipped. The DevOps index and the main index are always written.
pub fn generate(corpus: &Corpus, out_dir: &Path) -> Result<GenerateReport> {
    let catalog = corpus.catalog();
    let mut report = GenerateReport::default();

    ensure_dir(&out_dir.join(paths::PILLARS_OUT_DIR))?;
    ensure_dir(&out_dir.join(paths::LENSES_OUT_DIR))?;
    ensure_dir(&out_dir.join(paths::DEVOPS_OUT_DIR))?;

    for pillar in catalog.pillars() {
        if !paths::pillar_source(corpus.data_dir(), pillar).is_file() {
            tracing::debug!(pillar = pillar.key, "no source file, skipping pillar");
            continue;
        }
        let practices = corpus.pillar_practices(Some(pillar))?;
        let content = render::pillar_markdown(pillar, &practices);
        let path = paths::pillar_output(out_dir, pillar);
        atomic_write(&path, content.as_bytes())?;
        report.record(OutputKind::Pillar, path, practices.len(), &content);
    }

    for lens in catalog.lenses() {
        let practices = corpus.lens_dir_practices(lens)?;
        if practices.is_empty() {
            tracing::debug!(lens = lens.key, "no practices, skipping lens");
            continue;
        }
        let content = render::lens_markdown(lens, &practices);
        let path = paths::lens_output(out_dir, lens);
        atomic_write(&path, content.as_bytes())?;
        report.record(OutputKind::Lens, path, practices.len(), &content);
    }

    let mut all_capabilities = Vec::new();
    for saga in catalog.sagas() {
        let capabilities = corpus.saga_capabilities(saga)?;
        if capabilities.is_empty() {
            tracing::debug!(saga = saga.code, "no capabilities, skipping saga");
            continue;
        }
        let content = render::saga_markdown(saga, &capabilities);
        let path = paths::saga_output(out_dir, saga);
        atomic_write(&path, content.as_bytes())?;
        report.record(OutputKind::Saga, path, capabilities.len(), &content);
        all_capabilities.extend(capabilities);
    }

    let content = render::devops_index_markdown(catalog, &all_capabilities);
    let path = paths::devops_index_output(out_dir);
    atomic_write(&path, content.as_bytes())?;
    report.record(OutputKind::DevopsIndex, path, all_capabilities.len(), &content);

    let content = render::index_markdown(catalog);
    let path = paths::index_output(out_dir);
    atomic_write(&path, content.as_bytes())?;
    report.record(OutputKind::Index, path, 0, &content);

    tracing::info!(
        files = report.files.len(),
        out_dir = %out_dir.display(),
        "markdown generation complete"
    );
    Ok(report)
}
