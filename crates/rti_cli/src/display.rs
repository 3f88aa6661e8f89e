//! Terminal rendering for analysis and generated content.

use rti_core::{GeneratedContent, RelevanceAnalysis, RelevanceBand};

pub fn print_analysis(analysis: &RelevanceAnalysis) {
    let band = RelevanceBand::from_score(analysis.rti_relevance);
    println!(
        "RTI relevance: {:.0}% ({})",
        analysis.rti_relevance * 100.0,
        band
    );

    if analysis.categories.is_empty() {
        println!("Categories:    none");
    } else {
        let labels: Vec<&str> = analysis.categories.iter().map(|c| c.label()).collect();
        println!("Categories:    {}", labels.join(", "));
    }
    println!("Authority:     {}", analysis.public_authority);

    if !analysis.suggested_queries.is_empty() {
        println!();
        println!("Suggested RTI queries:");
        for (i, query) in analysis.suggested_queries.iter().enumerate() {
            println!("  {}. {}", i + 1, query);
        }
    }

    let groups = [
        ("Government", &analysis.analysis.government_entities),
        ("Issues", &analysis.analysis.issues),
        ("Services", &analysis.analysis.services),
        ("Transparency", &analysis.analysis.transparency_indicators),
    ];
    if groups.iter().any(|(_, matched)| !matched.is_empty()) {
        println!();
        println!("Matched keywords:");
        for (name, matched) in groups {
            if !matched.is_empty() {
                println!("  {:<13} {}", name, matched.join(", "));
            }
        }
    }
}

pub fn print_content(content: &GeneratedContent) {
    let blog = &content.blog;
    println!("━━ Blog ━━");
    println!("{}", blog.title);
    println!();
    println!("{}", blog.intro);
    println!();
    println!("What happened: {}", blog.what_happened);
    println!();
    println!("How RTI helps: {}", blog.how_rti_helps);
    println!();
    println!("RTI queries:");
    for (i, query) in blog.rti_queries.iter().enumerate() {
        println!("  {}. {}", i + 1, query);
    }
    println!();
    println!("Public authority: {}", blog.public_authority);
    println!();
    println!("{}", blog.cta);
    println!();
    println!("━━ Twitter ━━");
    println!("{}", content.social.twitter);
    println!();
    println!("━━ LinkedIn ━━");
    println!("{}", content.social.linkedin);
    println!();
    println!("━━ Instagram ━━");
    println!("{}", content.social.instagram);
}
