use crate::error::{Result, WafError};

// ---------------------------------------------------------------------------
// Collection descriptors
// ---------------------------------------------------------------------------

/// A framework pillar and the source file holding its practices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillarSpec {
    pub key: &'static str,
    pub file: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// A specialty lens and the directory holding its per-pillar files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LensSpec {
    pub key: &'static str,
    pub dir: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// A DevOps saga and the directory holding one file per capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SagaSpec {
    pub code: &'static str,
    pub dir: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

// ---------------------------------------------------------------------------
// Built-in tables
// ---------------------------------------------------------------------------

pub const PILLAR_KEYS: [&str; 6] = [
    "security",
    "reliability",
    "performance",
    "cost",
    "ops",
    "sustainability",
];

pub const LENS_KEYS: [&str; 14] = [
    "serverless",
    "iot",
    "genai",
    "data-analytics",
    "container",
    "ml",
    "saas",
    "financial",
    "healthcare",
    "government",
    "sap",
    "migration",
    "connected-mobility",
    "mergers-acquisitions",
];

pub const SAGA_CODES: [&str; 5] = ["DL", "QA", "OB", "AG", "OA"];

static PILLARS: [PillarSpec; 6] = [
    PillarSpec {
        key: "security",
        file: "security.json",
        name: "Security",
        description: "Protect data, systems, and assets through risk assessments and mitigation strategies.",
    },
    PillarSpec {
        key: "reliability",
        file: "reliability.json",
        name: "Reliability",
        description: "Ensure workloads perform intended functions correctly and consistently.",
    },
    PillarSpec {
        key: "performance",
        file: "performance_efficiency.json",
        name: "Performance Efficiency",
        description: "Use computing resources efficiently to meet requirements and maintain efficiency.",
    },
    PillarSpec {
        key: "cost",
        file: "cost_optimization.json",
        name: "Cost Optimization",
        description: "Avoid unnecessary costs and optimize spending for business value.",
    },
    PillarSpec {
        key: "ops",
        file: "operational_excellence.json",
        name: "Operational Excellence",
        description: "Support development, run workloads effectively, and continuously improve.",
    },
    PillarSpec {
        key: "sustainability",
        file: "sustainability.json",
        name: "Sustainability",
        description: "Minimize environmental impacts of running cloud workloads.",
    },
];

static LENSES: [LensSpec; 14] = [
    LensSpec {
        key: "serverless",
        dir: "serverless",
        name: "Serverless",
        description: "Best practices for serverless applications using Lambda, API Gateway, etc.",
    },
    LensSpec {
        key: "iot",
        dir: "iot",
        name: "IoT",
        description: "Best practices for Internet of Things workloads.",
    },
    LensSpec {
        key: "genai",
        dir: "generative-ai",
        name: "Generative AI",
        description: "Best practices for generative AI and foundation model workloads.",
    },
    LensSpec {
        key: "data-analytics",
        dir: "data-analytics",
        name: "Data Analytics",
        description: "Best practices for data analytics workloads.",
    },
    LensSpec {
        key: "container",
        dir: "container-build",
        name: "Container Build",
        description: "Best practices for containerized applications.",
    },
    LensSpec {
        key: "ml",
        dir: "machine-learning",
        name: "Machine Learning",
        description: "Best practices for machine learning workloads.",
    },
    LensSpec {
        key: "saas",
        dir: "saas",
        name: "SaaS",
        description: "Best practices for Software-as-a-Service applications.",
    },
    LensSpec {
        key: "financial",
        dir: "financial-services",
        name: "Financial Services",
        description: "Best practices for financial services workloads.",
    },
    LensSpec {
        key: "healthcare",
        dir: "healthcare",
        name: "Healthcare",
        description: "Best practices for healthcare workloads.",
    },
    LensSpec {
        key: "government",
        dir: "government",
        name: "Government",
        description: "Best practices for government workloads.",
    },
    LensSpec {
        key: "sap",
        dir: "sap",
        name: "SAP",
        description: "Best practices for SAP workloads on AWS.",
    },
    LensSpec {
        key: "migration",
        dir: "migration",
        name: "Migration",
        description: "Best practices for cloud migration projects.",
    },
    LensSpec {
        key: "connected-mobility",
        dir: "connected-mobility",
        name: "Connected Mobility",
        description: "Best practices for connected vehicle and mobility workloads.",
    },
    LensSpec {
        key: "mergers-acquisitions",
        dir: "mergers-acquisitions",
        name: "Mergers & Acquisitions",
        description: "Best practices for M&A technology integration.",
    },
];

static SAGAS: [SagaSpec; 5] = [
    SagaSpec {
        code: "DL",
        dir: "development-lifecycle",
        name: "Development Lifecycle",
        description: "Practices for software development, CI/CD, and deployment.",
    },
    SagaSpec {
        code: "QA",
        dir: "quality-assurance",
        name: "Quality Assurance",
        description: "Practices for testing, validation, and quality management.",
    },
    SagaSpec {
        code: "OB",
        dir: "observability",
        name: "Observability",
        description: "Practices for monitoring, logging, and operational visibility.",
    },
    SagaSpec {
        code: "AG",
        dir: "automated-governance",
        name: "Automated Governance",
        description: "Practices for compliance, security, and policy automation.",
    },
    SagaSpec {
        code: "OA",
        dir: "organizational-adoption",
        name: "Organizational Adoption",
        description: "Practices for team culture, skills, and organizational change.",
    },
];

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The fixed pillar, lens and saga tables. Built once at startup and handed
/// to the loader and renderers; table order is the iteration order everywhere.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pillars: &'static [PillarSpec],
    lenses: &'static [LensSpec],
    sagas: &'static [SagaSpec],
}

impl Catalog {
    pub fn builtin() -> Self {
        Self {
            pillars: &PILLARS,
            lenses: &LENSES,
            sagas: &SAGAS,
        }
    }

    pub fn pillars(&self) -> &'static [PillarSpec] {
        self.pillars
    }

    pub fn lenses(&self) -> &'static [LensSpec] {
        self.lenses
    }

    pub fn sagas(&self) -> &'static [SagaSpec] {
        self.sagas
    }

    pub fn pillar(&self, key: &str) -> Result<&'static PillarSpec> {
        self.pillars
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| WafError::UnknownPillar(key.to_string()))
    }

    pub fn lens(&self, key: &str) -> Result<&'static LensSpec> {
        self.lenses
            .iter()
            .find(|l| l.key == key)
            .ok_or_else(|| WafError::UnknownLens(key.to_string()))
    }

    /// Saga codes are matched case-insensitively; unknown codes yield `None`.
    pub fn saga(&self, code: &str) -> Option<&'static SagaSpec> {
        self.sagas.iter().find(|s| s.code.eq_ignore_ascii_case(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_lists_match_tables() {
        let catalog = Catalog::builtin();
        let pillar_keys: Vec<_> = catalog.pillars().iter().map(|p| p.key).collect();
        let lens_keys: Vec<_> = catalog.lenses().iter().map(|l| l.key).collect();
        let saga_codes: Vec<_> = catalog.sagas().iter().map(|s| s.code).collect();
        assert_eq!(pillar_keys, PILLAR_KEYS);
        assert_eq!(lens_keys, LENS_KEYS);
        assert_eq!(saga_codes, SAGA_CODES);
    }

    #[test]
    fn lookups() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.pillar("cost").unwrap().file, "cost_optimization.json");
        assert_eq!(catalog.lens("genai").unwrap().dir, "generative-ai");
        assert_eq!(catalog.saga("ob").unwrap().dir, "observability");
        assert!(catalog.saga("ZZ").is_none());
        assert!(matches!(
            catalog.pillar("compute"),
            Err(WafError::UnknownPillar(k)) if k == "compute"
        ));
        assert!(matches!(catalog.lens("edge"), Err(WafError::UnknownLens(_))));
    }
}
