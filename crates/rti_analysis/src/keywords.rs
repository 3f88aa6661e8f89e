//! Static rule tables for the relevance scorer.
//!
//! Matching is plain substring containment on lower-cased text, so `"exam"`
//! also hits `"examination"` and `"example"`. Query and authority selection
//! rely on the same loose matching.

use rti_core::RtiCategory;

/// A keyword group that contributes `weight` once if any keyword is present.
#[derive(Debug, Clone, Copy)]
pub struct RuleGroup {
    pub category: RtiCategory,
    pub weight: f64,
    pub keywords: &'static [&'static str],
}

impl RuleGroup {
    /// Every keyword of the group found in `text`, in table order.
    pub fn matches(&self, text: &str) -> Vec<String> {
        self.keywords
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .map(|keyword| keyword.to_string())
            .collect()
    }
}

/// Extra weight for context phrases outside the four keyword groups.
#[derive(Debug, Clone, Copy)]
pub struct Boost {
    pub category: RtiCategory,
    pub weight: f64,
    pub triggers: &'static [&'static str],
}

impl Boost {
    pub fn applies(&self, text: &str) -> bool {
        contains_any(text, self.triggers)
    }
}

pub const GOVERNMENT_ENTITY: RuleGroup = RuleGroup {
    category: RtiCategory::GovernmentEntity,
    weight: 0.3,
    keywords: &[
        "government",
        "ministry",
        "department",
        "authority",
        "administration",
        "public",
        "civic",
        "municipal",
        "state",
        "central",
        "bureau",
        "commission",
    ],
};

pub const SERVICE_ISSUES: RuleGroup = RuleGroup {
    category: RtiCategory::ServiceIssues,
    weight: 0.2,
    keywords: &[
        "delay",
        "problem",
        "issue",
        "glitch",
        "failure",
        "shortage",
        "complaint",
        "dispute",
        "concern",
        "difficulty",
        "challenge",
        "error",
        "fault",
    ],
};

pub const PUBLIC_SERVICES: RuleGroup = RuleGroup {
    category: RtiCategory::PublicServices,
    weight: 0.25,
    keywords: &[
        "exam",
        "test",
        "application",
        "service",
        "facility",
        "infrastructure",
        "project",
        "scheme",
        "program",
        "contract",
        "tender",
        "allocation",
    ],
};

pub const TRANSPARENCY: RuleGroup = RuleGroup {
    category: RtiCategory::Transparency,
    weight: 0.35,
    keywords: &[
        "audit",
        "investigation",
        "review",
        "inquiry",
        "report",
        "disclosure",
        "accountability",
        "transparency",
        "compliance",
        "verification",
    ],
};

pub const RTI_MENTIONED: Boost = Boost {
    category: RtiCategory::RtiMentioned,
    weight: 0.4,
    triggers: &["rti", "right to information"],
};

pub const CITIZEN_INTEREST: Boost = Boost {
    category: RtiCategory::CitizenInterest,
    weight: 0.1,
    triggers: &["citizen", "public interest"],
};

/// Queries appended when any trigger is present; blocks are evaluated in order.
pub struct QueryRule {
    pub triggers: &'static [&'static str],
    pub queries: &'static [&'static str],
}

pub const QUERY_RULES: [QueryRule; 4] = [
    QueryRule {
        triggers: &["exam", "test"],
        queries: &[
            "Provide details of technical issues reported during the examination",
            "Share the investigation report on examination center glitches",
            "Provide vendor contract details for examination technology services",
            "Share the action taken report regarding examination disruptions",
        ],
    },
    QueryRule {
        triggers: &["delay", "project"],
        queries: &[
            "Provide project timeline and milestone completion status",
            "Share details of reasons for project delays",
            "Provide contractor performance evaluation reports",
            "Share details of cost escalation and budget revisions",
        ],
    },
    QueryRule {
        triggers: &["hospital", "medicine"],
        queries: &[
            "Provide inventory details of essential medicines",
            "Share procurement records for medical supplies",
            "Provide details of supplier contracts and delivery schedules",
            "Share patient complaint records regarding medicine shortage",
        ],
    },
    QueryRule {
        triggers: &["road", "infrastructure"],
        queries: &[
            "Provide details of approved road repair projects",
            "Share contractor selection and tender documents",
            "Provide project execution timeline and completion status",
            "Share quality control and supervision reports",
        ],
    },
];

/// Appended after the topic blocks when a government entity was detected.
pub const GENERIC_GOVERNMENT_QUERIES: &[&str] = &[
    "Provide details of standard operating procedures for this service",
    "Share performance metrics and service delivery standards",
];

pub const MAX_SUGGESTED_QUERIES: usize = 6;

/// Ordered decision list; the first rule with a present trigger wins.
pub const AUTHORITY_RULES: &[(&[&str], &str)] = &[
    (&["ssc", "staff selection commission"], "Staff Selection Commission (SSC)"),
    (&["upsc", "civil services"], "Union Public Service Commission (UPSC)"),
    (&["municipal", "corporation"], "Municipal Corporation"),
    (&["hospital", "health"], "Department of Health and Family Welfare"),
    (&["road", "transport"], "Public Works Department (PWD)"),
    (&["school", "education"], "Department of Education"),
    (&["railway", "train"], "Indian Railways"),
];

pub const FALLBACK_AUTHORITY: &str = "Relevant Government Department";

pub fn contains_any(text: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| text.contains(needle))
}
