use rti_core::{KeywordMatches, RelevanceAnalysis, RtiCategory};

use crate::keywords::{
    contains_any, RuleGroup, AUTHORITY_RULES, CITIZEN_INTEREST, FALLBACK_AUTHORITY,
    GENERIC_GOVERNMENT_QUERIES, GOVERNMENT_ENTITY, MAX_SUGGESTED_QUERIES, PUBLIC_SERVICES,
    QUERY_RULES, RTI_MENTIONED, SERVICE_ISSUES, TRANSPARENCY,
};

/// Score free text for RTI relevance.
///
/// Total over all inputs: empty or unrelated text yields a zero score, no
/// categories and the generic authority.
pub fn analyze(article_text: &str) -> RelevanceAnalysis {
    let text = article_text.to_lowercase();

    let analysis = KeywordMatches {
        government_entities: GOVERNMENT_ENTITY.matches(&text),
        issues: SERVICE_ISSUES.matches(&text),
        services: PUBLIC_SERVICES.matches(&text),
        transparency_indicators: TRANSPARENCY.matches(&text),
    };

    let mut score = 0.0;
    let mut categories = Vec::new();

    let groups: [(&RuleGroup, &Vec<String>); 4] = [
        (&GOVERNMENT_ENTITY, &analysis.government_entities),
        (&SERVICE_ISSUES, &analysis.issues),
        (&PUBLIC_SERVICES, &analysis.services),
        (&TRANSPARENCY, &analysis.transparency_indicators),
    ];
    for (group, matched) in groups {
        if !matched.is_empty() {
            score += group.weight;
            categories.push(group.category);
        }
    }

    for boost in [&RTI_MENTIONED, &CITIZEN_INTEREST] {
        if boost.applies(&text) {
            score += boost.weight;
            categories.push(boost.category);
        }
    }

    let suggested_queries = suggest_queries(&text, &categories);
    let public_authority = suggest_authority(&text).to_string();

    RelevanceAnalysis {
        rti_relevance: clamp_score(score),
        categories,
        suggested_queries,
        public_authority,
        analysis,
    }
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 1.0)
}

/// Topic-conditioned request queries for already lower-cased text.
pub fn suggest_queries(text: &str, categories: &[RtiCategory]) -> Vec<String> {
    let mut queries: Vec<&str> = Vec::new();

    for rule in &QUERY_RULES {
        if contains_any(text, rule.triggers) {
            queries.extend_from_slice(rule.queries);
        }
    }

    if categories.contains(&RtiCategory::GovernmentEntity) {
        queries.extend_from_slice(GENERIC_GOVERNMENT_QUERIES);
    }

    queries
        .into_iter()
        .take(MAX_SUGGESTED_QUERIES)
        .map(str::to_string)
        .collect()
}

/// First matching authority for already lower-cased text.
pub fn suggest_authority(text: &str) -> &'static str {
    AUTHORITY_RULES
        .iter()
        .find(|(triggers, _)| contains_any(text, triggers))
        .map(|(_, authority)| *authority)
        .unwrap_or(FALLBACK_AUTHORITY)
}
