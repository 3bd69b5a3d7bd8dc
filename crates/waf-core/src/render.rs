//! Markdown documents written by the generator.

use crate::capability::{Capability, GuidanceItem};
use crate::catalog::{Catalog, LensSpec, PillarSpec, SagaSpec};
use crate::markdown::{anchor, truncate_with_ellipsis, Document, Table};
use crate::practice::Practice;
use crate::types::Risk;
use std::collections::BTreeMap;

const UNKNOWN_PILLAR: &str = "UNKNOWN";

// ---------------------------------------------------------------------------
// Grouping
// ---------------------------------------------------------------------------

/// Buckets practices by the three recognized risk levels, preserving input
/// order inside each bucket. Practices with an unrecognized risk land in none.
pub fn group_by_risk(practices: &[Practice]) -> [(Risk, Vec<&Practice>); 3] {
    Risk::levels().map(|level| {
        let members: Vec<&Practice> = practices.iter().filter(|p| p.risk == level).collect();
        (level, members)
    })
}

/// Buckets practices by their `pillar` tag (missing → `UNKNOWN`), keyed in
/// lexicographic order. Within a pillar HIGH-risk practices come first, then
/// the rest, each run ordered by id.
pub fn group_by_pillar(practices: &[Practice]) -> BTreeMap<&str, Vec<&Practice>> {
    let mut groups: BTreeMap<&str, Vec<&Practice>> = BTreeMap::new();
    for p in practices {
        let pillar = p.pillar.as_deref().unwrap_or(UNKNOWN_PILLAR);
        groups.entry(pillar).or_default().push(p);
    }
    for members in groups.values_mut() {
        members.sort_by(|a, b| {
            (a.risk != Risk::High, a.id.as_str()).cmp(&(b.risk != Risk::High, b.id.as_str()))
        });
    }
    groups
}

// ---------------------------------------------------------------------------
// Pillar
// ---------------------------------------------------------------------------

pub fn pillar_markdown(pillar: &PillarSpec, practices: &[Practice]) -> String {
    let mut doc = Document::new();
    doc.line(format!("# {} Pillar Best Practices", pillar.name))
        .blank()
        .line(pillar.description)
        .blank();

    doc.line("## Contents")
        .line("- [HIGH Risk Practices](#high-risk-practices)")
        .line("- [MEDIUM Risk Practices](#medium-risk-practices)")
        .line("- [LOW Risk Practices](#low-risk-practices)")
        .line("- [Practice Details](#practice-details)")
        .blank();

    for (level, members) in group_by_risk(practices) {
        doc.line(format!("## {level} Risk Practices")).blank();
        if members.is_empty() {
            doc.line("*No practices at this risk level.*");
        } else {
            let mut table = Table::new(&["ID", "Title", "Areas"]);
            for p in members {
                table.push_row(vec![p.id.clone(), p.title.clone(), p.leading_areas(2)]);
            }
            doc.table(&table);
        }
        doc.blank();
    }

    doc.line("## Practice Details").blank();
    for p in practices {
        doc.line(format!("### {}: {}", p.id, p.title))
            .line(format!("**Risk:** {}", p.risk))
            .line(format!("**Areas:** {}", p.area.join(", ")))
            .blank()
            .line(p.description.as_str())
            .blank();
        if let Some(outcome) = p.outcome() {
            doc.line(format!("**Outcome:** {outcome}")).blank();
        }
        if !p.related_ids.is_empty() {
            doc.line(format!("**Related:** {}", p.related_ids.join(", ")))
                .blank();
        }
        doc.line(format!("**Docs:** {}", p.href_or_na())).blank();
    }

    doc.render()
}

// ---------------------------------------------------------------------------
// Lens
// ---------------------------------------------------------------------------

pub fn lens_markdown(lens: &LensSpec, practices: &[Practice]) -> String {
    let mut doc = Document::new();
    doc.line(format!("# {} Lens Best Practices", lens.name))
        .blank()
        .line(lens.description)
        .blank();

    let groups = group_by_pillar(practices);

    doc.line("## Contents");
    for pillar in groups.keys() {
        doc.line(format!("- [{pillar}](#{})", anchor(pillar, '_')));
    }
    doc.blank();

    for (pillar, members) in &groups {
        doc.line(format!("## {pillar}")).blank();
        let mut table = Table::new(&["ID", "Title", "Risk"]);
        for p in members {
            table.push_row(vec![p.id.clone(), p.title.clone(), p.risk.to_string()]);
        }
        doc.table(&table).blank();
    }

    doc.render()
}

// ---------------------------------------------------------------------------
// DevOps saga
// ---------------------------------------------------------------------------

pub fn saga_markdown(saga: &SagaSpec, capabilities: &[Capability]) -> String {
    let mut doc = Document::new();
    doc.line(format!("# {} Saga", saga.name))
        .blank()
        .line(saga.description)
        .blank();

    doc.line("## Capabilities");
    for cap in capabilities {
        doc.line(format!(
            "- [{}](#{})",
            cap.capability,
            anchor(&cap.capability, ' ')
        ));
    }
    doc.blank();

    for cap in capabilities {
        doc.line(format!("## {}", cap.capability))
            .line(format!("**Code:** {}", cap.code()))
            .blank()
            .line(cap.description.as_str())
            .blank()
            .line(format!("**Docs:** {}", cap.href_or_na()))
            .blank();

        if !cap.indicators.is_empty() {
            let mut table = Table::new(&["ID", "Title", "Category"]);
            for ind in &cap.indicators {
                table.push_row(vec![
                    ind.id.clone(),
                    ind.title.clone(),
                    ind.category.clone().unwrap_or_default(),
                ]);
            }
            doc.line("### Indicators").table(&table).blank();
        }
        if !cap.anti_patterns.is_empty() {
            doc.line("### Anti-Patterns")
                .table(&id_title_table(&cap.anti_patterns))
                .blank();
        }
        if !cap.metrics.is_empty() {
            doc.line("### Metrics")
                .table(&id_title_table(&cap.metrics))
                .blank();
        }
    }

    doc.render()
}

fn id_title_table(items: &[GuidanceItem]) -> Table {
    let mut table = Table::new(&["ID", "Title"]);
    for item in items {
        table.push_row(vec![item.id.clone(), item.title.clone()]);
    }
    table
}

// ---------------------------------------------------------------------------
// Indexes
// ---------------------------------------------------------------------------

const PILLAR_DESC_CHARS: usize = 60;
const LENS_DESC_CHARS: usize = 50;
const SAGA_DESC_CHARS: usize = 40;

pub fn index_markdown(catalog: &Catalog) -> String {
    let mut doc = Document::new();
    doc.line("# AWS Well-Architected Framework Data Index")
        .blank()
        .line("This directory contains structured data for AWS Well-Architected Framework best practices,")
        .line("organized for progressive disclosure in Claude Code skills and agents.")
        .blank();

    let mut pillars = Table::new(&["Pillar", "File", "Description"]);
    for p in catalog.pillars() {
        pillars.push_row(vec![
            p.name.to_string(),
            format!("[pillars/{0}.md](pillars/{0}.md)", p.key),
            truncate_with_ellipsis(p.description, PILLAR_DESC_CHARS),
        ]);
    }
    doc.line("## Framework Pillars").blank().table(&pillars).blank();

    let mut lenses = Table::new(&["Lens", "File", "Description"]);
    for l in catalog.lenses() {
        lenses.push_row(vec![
            l.name.to_string(),
            format!("[lenses/{0}.md](lenses/{0}.md)", l.key),
            truncate_with_ellipsis(l.description, LENS_DESC_CHARS),
        ]);
    }
    doc.line("## Specialty Lenses").blank().table(&lenses).blank();

    let mut sagas = Table::new(&["Saga", "Code", "File", "Description"]);
    for s in catalog.sagas() {
        sagas.push_row(vec![
            s.name.to_string(),
            s.code.to_string(),
            format!("[devops/{0}.md](devops/{0}.md)", s.dir),
            truncate_with_ellipsis(s.description, SAGA_DESC_CHARS),
        ]);
    }
    doc.line("## DevOps Guidance").blank().table(&sagas).blank();

    doc.line("## Usage")
        .blank()
        .line("These files support progressive disclosure:")
        .line("1. **Level 1 (Index)**: Tables at the top of each file list practice IDs, titles, and risk levels")
        .line("2. **Level 2 (Summary)**: Practice Details sections provide descriptions, outcomes, and areas")
        .line("3. **Level 3 (Full)**: WebFetch the `href` URL for complete AWS documentation")
        .blank();

    doc.render()
}

pub fn devops_index_markdown(catalog: &Catalog, capabilities: &[Capability]) -> String {
    let mut doc = Document::new();
    doc.line("# DevOps Guidance Index")
        .blank()
        .line("AWS DevOps Guidance organized by Sagas (domains) and Capabilities.")
        .blank();

    let mut overview = Table::new(&["Code", "Saga", "Capabilities", "File"]);
    for s in catalog.sagas() {
        let count = capabilities.iter().filter(|c| c.saga_code == s.code).count();
        overview.push_row(vec![
            s.code.to_string(),
            s.name.to_string(),
            count.to_string(),
            format!("[{0}.md]({0}.md)", s.dir),
        ]);
    }
    doc.line("## Sagas Overview").blank().table(&overview).blank();

    let mut sorted: Vec<&Capability> = capabilities.iter().collect();
    sorted.sort_by_key(|c| c.code());

    let mut all = Table::new(&[
        "Code",
        "Capability",
        "Saga",
        "Indicators",
        "Anti-Patterns",
        "Metrics",
    ]);
    for c in sorted {
        all.push_row(vec![
            c.code(),
            c.capability.clone(),
            c.saga.clone(),
            c.indicators.len().to_string(),
            c.anti_patterns.len().to_string(),
            c.metrics.len().to_string(),
        ]);
    }
    doc.line("## All Capabilities").blank().table(&all).blank();

    doc.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn practice(id: &str, risk: Risk, pillar: Option<&str>) -> Practice {
        let mut p = Practice::new(id, format!("Title {id}"), risk);
        p.pillar = pillar.map(str::to_string);
        p.area = vec!["One".into(), "Two".into(), "Three".into()];
        p
    }

    fn summary_rows(md: &str, id: &str) -> usize {
        md.lines()
            .filter(|l| l.starts_with(&format!("| {id} |")))
            .count()
    }

    #[test]
    fn pillar_buckets_each_recognized_practice_once() {
        let catalog = Catalog::builtin();
        let practices = vec![
            practice("SEC01-BP01", Risk::High, None),
            practice("SEC02-BP01", Risk::Low, None),
            practice("SEC03-BP01", Risk::Medium, None),
            practice("SEC04-BP01", Risk::Unrecognized("CRITICAL".into()), None),
        ];
        let md = pillar_markdown(catalog.pillar("security").unwrap(), &practices);

        for id in ["SEC01-BP01", "SEC02-BP01", "SEC03-BP01"] {
            assert_eq!(summary_rows(&md, id), 1, "{id} should be in one bucket");
            assert!(md.contains(&format!("### {id}: Title {id}")));
        }
        assert_eq!(summary_rows(&md, "SEC04-BP01"), 0);
        assert!(md.contains("### SEC04-BP01: Title SEC04-BP01\n**Risk:** CRITICAL"));
        assert!(md.contains("| SEC01-BP01 | Title SEC01-BP01 | One, Two |"));
        assert!(md.contains("**Areas:** One, Two, Three"));
    }

    #[test]
    fn pillar_empty_bucket_placeholder() {
        let catalog = Catalog::builtin();
        let md = pillar_markdown(
            catalog.pillar("cost").unwrap(),
            &[practice("COST01-BP01", Risk::High, None)],
        );
        assert!(md.starts_with("# Cost Optimization Pillar Best Practices\n\n"));
        assert_eq!(md.matches("*No practices at this risk level.*").count(), 2);
        assert!(md.contains("**Docs:** N/A"));
        assert!(!md.contains("**Outcome:**"));
    }

    #[test]
    fn pillar_optional_sections() {
        let catalog = Catalog::builtin();
        let mut p = practice("REL01-BP01", Risk::High, None);
        p.outcome = Some("Quotas are known".into());
        p.related_ids = vec!["REL01-BP02".into(), "REL01-BP03".into()];
        p.href = Some("https://docs.aws.amazon.com/rel01".into());
        let md = pillar_markdown(catalog.pillar("reliability").unwrap(), &[p]);
        assert!(md.contains("**Outcome:** Quotas are known\n\n**Related:** REL01-BP02, REL01-BP03"));
        assert!(md.ends_with("**Docs:** https://docs.aws.amazon.com/rel01\n"));
    }

    #[test]
    fn lens_groups_sorted_with_high_first() {
        let catalog = Catalog::builtin();
        let practices = vec![
            practice("B-2", Risk::Low, Some("SECURITY")),
            practice("B-3", Risk::High, Some("SECURITY")),
            practice("A-1", Risk::Low, Some("SECURITY")),
            practice("C-1", Risk::Medium, Some("COST_OPTIMIZATION")),
            practice("Z-9", Risk::High, None),
        ];
        let md = lens_markdown(catalog.lens("serverless").unwrap(), &practices);

        let cost = md.find("## COST_OPTIMIZATION").unwrap();
        let sec = md.find("## SECURITY").unwrap();
        let unknown = md.find("## UNKNOWN").unwrap();
        assert!(cost < sec && sec < unknown);
        assert!(md.contains("- [COST_OPTIMIZATION](#cost-optimization)"));

        let b3 = md.find("| B-3 |").unwrap();
        let a1 = md.find("| A-1 |").unwrap();
        let b2 = md.find("| B-2 |").unwrap();
        assert!(b3 < a1 && a1 < b2);
    }

    fn capability(saga: &str, code: &str, name: &str) -> Capability {
        serde_json::from_value(serde_json::json!({
            "saga": "Development Lifecycle",
            "sagaCode": saga,
            "capability": name,
            "capabilityCode": code,
            "description": format!("{name} description"),
        }))
        .unwrap()
    }

    #[test]
    fn saga_optional_tables() {
        let catalog = Catalog::builtin();
        let mut ci = capability("DL", "CI", "Continuous Integration");
        ci.indicators = vec![GuidanceItem {
            id: "DL.CI.1".into(),
            title: "Commit daily".into(),
            category: Some("Foundational".into()),
            extra: Default::default(),
        }];
        let cd = capability("DL", "CD", "Continuous Delivery");
        let md = saga_markdown(catalog.saga("DL").unwrap(), &[ci, cd]);

        assert!(md.contains("- [Continuous Integration](#continuous-integration)"));
        assert!(md.contains("**Code:** DL.CI"));
        assert!(md.contains("### Indicators\n| ID | Title | Category |"));
        assert!(md.contains("| DL.CI.1 | Commit daily | Foundational |"));
        assert_eq!(md.matches("### Indicators").count(), 1);
        assert!(!md.contains("### Anti-Patterns"));
        assert!(!md.contains("### Metrics"));
        let ci_pos = md.find("## Continuous Integration").unwrap();
        let cd_pos = md.find("## Continuous Delivery").unwrap();
        assert!(ci_pos < cd_pos);
    }

    #[test]
    fn index_truncates_descriptions() {
        let md = index_markdown(&Catalog::builtin());
        assert!(md.contains(
            "| Security | [pillars/security.md](pillars/security.md) | Protect data, systems, and assets through risk assessments a... |"
        ));
        assert!(md.contains(
            "| IoT | [lenses/iot.md](lenses/iot.md) | Best practices for Internet of Things workloads.... |"
        ));
        assert!(md.contains(
            "| Observability | OB | [devops/observability.md](devops/observability.md) | Practices for monitoring, logging, and o... |"
        ));
    }

    #[test]
    fn index_intro_and_usage_text() {
        let md = index_markdown(&Catalog::builtin());
        assert!(md.starts_with(
            "# AWS Well-Architected Framework Data Index\n\n\
             This directory contains structured data for AWS Well-Architected Framework best practices,\n\
             organized for progressive disclosure in Claude Code skills and agents.\n\n"
        ));
        assert!(md.ends_with(
            "3. **Level 3 (Full)**: WebFetch the `href` URL for complete AWS documentation\n"
        ));
    }

    #[test]
    fn devops_index_counts_and_sorts() {
        let catalog = Catalog::builtin();
        let caps = vec![
            capability("OB", "TEL", "Telemetry"),
            capability("DL", "CI", "Continuous Integration"),
            capability("DL", "CD", "Continuous Delivery"),
        ];
        let md = devops_index_markdown(&catalog, &caps);
        assert!(md.contains("| DL | Development Lifecycle | 2 | [development-lifecycle.md](development-lifecycle.md) |"));
        assert!(md.contains("| QA | Quality Assurance | 0 |"));
        let cd = md.find("| DL.CD |").unwrap();
        let ci = md.find("| DL.CI |").unwrap();
        let tel = md.find("| OB.TEL |").unwrap();
        assert!(cd < ci && ci < tel);
    }
}
