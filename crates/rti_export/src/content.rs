use rti_core::{ArticleBrief, GeneratedContent};

/// Blog post followed by the three social variants, as one Markdown document.
pub fn content_to_markdown(article: &ArticleBrief, content: &GeneratedContent) -> String {
    let blog = &content.blog;
    let queries = blog
        .rti_queries
        .iter()
        .enumerate()
        .map(|(i, q)| format!("{}. {}", i + 1, q))
        .collect::<Vec<_>>()
        .join("\n");

    [
        format!("# {}", blog.title),
        format!("_Source headline: {}_", article.title),
        blog.intro.clone(),
        "## What Happened".to_string(),
        blog.what_happened.clone(),
        "## How RTI Helps".to_string(),
        blog.how_rti_helps.clone(),
        "## Sample RTI Queries".to_string(),
        queries,
        "## Public Authority".to_string(),
        blog.public_authority.clone(),
        "---".to_string(),
        blog.cta.clone(),
        "# Social Media".to_string(),
        "## Twitter".to_string(),
        content.social.twitter.clone(),
        "## LinkedIn".to_string(),
        content.social.linkedin.clone(),
        "## Instagram".to_string(),
        content.social.instagram.clone(),
    ]
    .join("\n\n")
}
