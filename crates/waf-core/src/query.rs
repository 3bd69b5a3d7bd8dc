//! Read-only filtered views over the corpus backing the query CLI.

use crate::capability::Capability;
use crate::corpus::Corpus;
use crate::error::{Result, WafError};
use crate::practice::Practice;
use crate::types::Risk;
use std::str::FromStr;

const CONTEXT_CHARS: usize = 200;

// ---------------------------------------------------------------------------
// index
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default)]
pub struct IndexFilter<'a> {
    pub pillar: Option<&'a str>,
    pub lens: Option<&'a str>,
    pub risk: Option<Risk>,
}

/// Practices scoped by lens (and optionally that lens's pillar file) or by
/// pillar, then narrowed to an exact stored risk value.
pub fn index(corpus: &Corpus, filter: &IndexFilter<'_>) -> Result<Vec<Practice>> {
    let catalog = corpus.catalog();
    let pillar = filter.pillar.map(|k| catalog.pillar(k)).transpose()?;

    let practices = match filter.lens {
        Some(key) => corpus.lens_practices(catalog.lens(key)?, pillar)?,
        None => corpus.pillar_practices(pillar)?,
    };

    Ok(match &filter.risk {
        Some(risk) => practices.into_iter().filter(|p| &p.risk == risk).collect(),
        None => practices,
    })
}

// ---------------------------------------------------------------------------
// detail
// ---------------------------------------------------------------------------

/// First practice, across every pillar and then every lens, whose id equals
/// `id` upper-cased.
pub fn detail(corpus: &Corpus, id: &str) -> Result<Practice> {
    let wanted = id.to_uppercase();
    corpus
        .all_practices()?
        .into_iter()
        .find(|p| p.id == wanted)
        .ok_or(WafError::PracticeNotFound(wanted))
}

// ---------------------------------------------------------------------------
// search
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SearchHit {
    pub practice: Practice,
    pub title_matched: bool,
}

impl SearchHit {
    /// The title when the keyword hit it, otherwise the first 200 characters
    /// of the description followed by `...`.
    pub fn match_context(&self) -> String {
        if self.title_matched {
            self.practice.title.clone()
        } else {
            let head: String = self
                .practice
                .description
                .chars()
                .take(CONTEXT_CHARS)
                .collect();
            format!("{head}...")
        }
    }
}

/// Case-insensitive substring search over title, description and the
/// space-joined area list.
pub fn search_practices(practices: Vec<Practice>, keyword: &str) -> Vec<SearchHit> {
    let needle = keyword.to_lowercase();
    practices
        .into_iter()
        .filter_map(|p| {
            let title_matched = p.title.to_lowercase().contains(&needle);
            let matched = title_matched
                || p.description.to_lowercase().contains(&needle)
                || p.area.join(" ").to_lowercase().contains(&needle);
            matched.then_some(SearchHit {
                practice: p,
                title_matched,
            })
        })
        .collect()
}

/// Searches one pillar when given, otherwise every pillar and every lens.
pub fn search(corpus: &Corpus, keyword: &str, pillar: Option<&str>) -> Result<Vec<SearchHit>> {
    let practices = match pillar {
        Some(key) => corpus.pillar_practices(Some(corpus.catalog().pillar(key)?))?,
        None => corpus.all_practices()?,
    };
    Ok(search_practices(practices, keyword))
}

// ---------------------------------------------------------------------------
// devops
// ---------------------------------------------------------------------------

/// Capabilities of one saga or all sagas. An unknown saga code matches nothing.
pub fn devops_index(corpus: &Corpus, saga: Option<&str>) -> Result<Vec<Capability>> {
    match saga {
        Some(code) => match corpus.catalog().saga(code) {
            Some(spec) => corpus.saga_capabilities(spec),
            None => Ok(Vec::new()),
        },
        None => corpus.capabilities(None),
    }
}

/// `SAGA.CODE` or `SAGA_CODE`, upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapabilityId {
    pub saga: String,
    pub capability: String,
}

impl FromStr for CapabilityId {
    type Err = WafError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.replace('_', ".");
        match normalized.split('.').collect::<Vec<_>>().as_slice() {
            [saga, capability] => Ok(Self {
                saga: saga.to_uppercase(),
                capability: capability.to_uppercase(),
            }),
            _ => Err(WafError::InvalidCapabilityId(s.to_string())),
        }
    }
}

pub fn devops_detail(corpus: &Corpus, id: &str) -> Result<Capability> {
    let parsed: CapabilityId = id.parse()?;
    let not_found = || WafError::CapabilityNotFound(id.to_string());

    let saga = corpus.catalog().saga(&parsed.saga).ok_or_else(not_found)?;
    corpus
        .saga_capabilities(saga)?
        .into_iter()
        .find(|c| c.capability_code.to_uppercase() == parsed.capability)
        .ok_or_else(not_found)
}
