//! Blog and social post templates for a scored article.
//!
//! Output is a pure function of the article's title and summary, except for
//! the blog title and call-to-action which are picked uniformly from fixed
//! sets using the supplied RNG. Pass a seeded `StdRng` for reproducible text.

use rand::Rng;
use rti_core::{ArticleBrief, BlogContent, GeneratedContent, SocialContent};

use crate::topic::Topic;

pub const CALLS_TO_ACTION: [&str; 4] = [
    "Need help drafting your RTI application? FileMyRTI provides expert assistance in preparing and filing RTI requests. Visit our website to get started with professional RTI services.",
    "Don't let bureaucratic delays go unchallenged. Use FileMyRTI's platform to file effective RTI applications and demand transparency. Get expert guidance for your RTI journey.",
    "Ready to seek answers through RTI? FileMyRTI offers comprehensive support for filing RTI applications. Access our services to ensure your right to information is protected.",
    "Transform your concerns into actionable RTI requests with FileMyRTI's professional assistance. Visit our platform to access expert RTI filing services and consultation.",
];

pub const HOW_RTI_HELPS: &str = "The Right to Information Act empowers citizens to seek detailed information about government processes, decisions, and actions. By filing RTI applications, you can obtain official records, understand the causes of service disruptions, and hold authorities accountable for their performance.";

const BASE_HASHTAGS: [&str; 4] = [
    "#RTI",
    "#Transparency",
    "#RightToInformation",
    "#Accountability",
];

/// Hashtags emitted in a tweet. Topic tags are appended after the base set
/// and therefore never survive the cut.
pub const TWEET_HASHTAG_LIMIT: usize = 4;

/// Every title the blog generator can pick for `topic`.
pub fn blog_title_options(topic: Topic) -> [String; 5] {
    let topic = topic.label();
    [
        format!("{}: How RTI Can Bring Clarity", topic),
        format!("Seeking Answers on {} Through RTI", topic),
        format!("{}: Your Right to Information Guide", topic),
        format!("RTI Help: Getting Transparency on {}", topic),
        format!("{} Issues? RTI Can Help", topic),
    ]
}

pub fn generate_blog_content(article: &ArticleBrief) -> BlogContent {
    generate_blog_content_with(article, &mut rand::thread_rng())
}

pub fn generate_blog_content_with<R: Rng + ?Sized>(
    article: &ArticleBrief,
    rng: &mut R,
) -> BlogContent {
    let topic = Topic::from_title(&article.title);
    let topic_lower = topic.label().to_lowercase();

    let titles = blog_title_options(topic);
    let title = titles[rng.gen_range(0..titles.len())].clone();

    let intro = format!(
        "Citizens affected by recent {} can use the Right to Information Act to seek transparency and accountability. Here's how RTI can help you get the answers you deserve.",
        topic_lower
    );
    let what_happened = format!(
        "Recent reports indicate issues with {}. {} Such situations highlight the need for greater transparency in public service delivery and accountability from concerned authorities.",
        topic_lower, article.summary
    );

    let cta = CALLS_TO_ACTION[rng.gen_range(0..CALLS_TO_ACTION.len())].to_string();

    BlogContent {
        title,
        intro,
        what_happened,
        how_rti_helps: HOW_RTI_HELPS.to_string(),
        rti_queries: topic.rti_queries().iter().map(|q| q.to_string()).collect(),
        public_authority: topic.public_authority().to_string(),
        cta,
    }
}

pub fn generate_social_content(article: &ArticleBrief) -> SocialContent {
    let topic = Topic::from_title(&article.title);

    SocialContent {
        twitter: twitter_post(topic),
        linkedin: linkedin_post(topic),
        instagram: instagram_post(topic),
    }
}

pub fn generate_content(article: &ArticleBrief) -> GeneratedContent {
    generate_content_with(article, &mut rand::thread_rng())
}

pub fn generate_content_with<R: Rng + ?Sized>(
    article: &ArticleBrief,
    rng: &mut R,
) -> GeneratedContent {
    GeneratedContent {
        blog: generate_blog_content_with(article, rng),
        social: generate_social_content(article),
    }
}

fn hashtags(topic: Topic) -> Vec<&'static str> {
    let label = topic.label();
    let mut tags = BASE_HASHTAGS.to_vec();

    if label.contains("Exam") {
        tags.extend(["#ExamTransparency", "#SSC", "#UPSC"]);
    }
    if label.contains("Municipal") {
        tags.extend(["#MunicipalServices", "#CivicIssues"]);
    }
    if label.contains("Healthcare") {
        tags.extend(["#HealthcareTransparency", "#PublicHealth"]);
    }

    tags.truncate(TWEET_HASHTAG_LIMIT);
    tags
}

fn twitter_post(topic: Topic) -> String {
    format!(
        "Facing issues with {}? 🏛️ Use RTI to demand transparency! Get official records, investigation reports & accountability from authorities. Expert help available → filemyrti.com {}",
        topic.label().to_lowercase(),
        hashtags(topic).join(" ")
    )
}

fn linkedin_post(topic: Topic) -> String {
    [
        format!("🏛️ Citizens' Right to Information: Addressing {}", topic.label()).as_str(),
        "",
        "Recent developments highlight the importance of transparency in public service delivery. When government services face disruptions or delays, the Right to Information Act serves as a powerful tool for citizens to:",
        "",
        "✅ Obtain official records and investigation reports",
        "✅ Understand the root causes of service issues  ",
        "✅ Hold authorities accountable for their actions",
        "✅ Ensure corrective measures are implemented",
        "",
        "Remember: Transparency isn't just a right—it's essential for good governance.",
        "",
        "Need expert assistance with RTI applications? Visit FileMyRTI for professional guidance.",
        "",
        "#RightToInformation #Transparency #GoodGovernance #CitizenRights #Accountability",
    ]
    .join("\n")
}

fn instagram_post(topic: Topic) -> String {
    [
        format!("🏛️ Your Right to Know: {} Transparency Guide", topic.label()).as_str(),
        "",
        "Facing government service issues? RTI is your answer! 💪",
        "",
        "What you can demand through RTI:",
        "📋 Official investigation reports",
        "📊 Performance data & metrics  ",
        "💰 Budget allocation details",
        "⏰ Timeline & accountability measures",
        "📝 Internal correspondence records",
        "",
        "Don't let bureaucratic opacity continue. Exercise your right to information and demand the transparency you deserve as a citizen.",
        "",
        "Expert RTI assistance available at FileMyRTI 🔗",
        "",
        "#RTI #RightToInformation #Transparency #CitizenRights #Accountability #GoodGovernance",
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ssc_article() -> ArticleBrief {
        ArticleBrief::new(
            "SSC CGL Exam Faces Technical Glitches Across Multiple Centers",
            "Several examination centers reported server issues and login problems during the SSC CGL examination.",
        )
        .with_relevance(0.85)
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let article = ssc_article();
        let first = generate_blog_content_with(&article, &mut StdRng::seed_from_u64(42));
        let second = generate_blog_content_with(&article, &mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_fields_come_from_fixed_sets() {
        let article = ssc_article();
        let titles = blog_title_options(Topic::SscExamIssues);
        for seed in 0..32 {
            let blog = generate_blog_content_with(&article, &mut StdRng::seed_from_u64(seed));
            assert!(titles.contains(&blog.title), "unexpected title {}", blog.title);
            assert!(CALLS_TO_ACTION.contains(&blog.cta.as_str()));
        }
    }

    #[test]
    fn test_what_happened_embeds_summary() {
        let blog = generate_blog_content(&ssc_article());
        assert_eq!(
            blog.what_happened,
            "Recent reports indicate issues with ssc exam issues. Several examination centers reported server issues and login problems during the SSC CGL examination. Such situations highlight the need for greater transparency in public service delivery and accountability from concerned authorities."
        );
        assert!(blog.intro.starts_with("Citizens affected by recent ssc exam issues can use"));
        assert_eq!(blog.how_rti_helps, HOW_RTI_HELPS);
    }

    #[test]
    fn test_hashtags_capped_at_four() {
        for topic in [Topic::SscExamIssues, Topic::MunicipalServices, Topic::HealthcareServices, Topic::GovernmentServices] {
            assert_eq!(hashtags(topic), BASE_HASHTAGS.to_vec());
        }
    }

    #[test]
    fn test_twitter_template() {
        let social = generate_social_content(&ArticleBrief::new(
            "Water Supply Issues Plague Residential Areas",
            "Taps ran dry for a week.",
        ));
        assert_eq!(
            social.twitter,
            "Facing issues with water supply issues? 🏛️ Use RTI to demand transparency! Get official records, investigation reports & accountability from authorities. Expert help available → filemyrti.com #RTI #Transparency #RightToInformation #Accountability"
        );
    }

    #[test]
    fn test_long_form_posts_interpolate_topic() {
        let social = generate_social_content(&ArticleBrief::new(
            "Government Hospital Shortage of Essential Medicines Reported",
            "Patients face difficulties.",
        ));
        assert!(social
            .linkedin
            .starts_with("🏛️ Citizens' Right to Information: Addressing Healthcare Services\n\n"));
        assert!(social.linkedin.contains("✅ Understand the root causes of service issues  \n"));
        assert!(social
            .instagram
            .starts_with("🏛️ Your Right to Know: Healthcare Services Transparency Guide\n\n"));
        assert!(social.instagram.ends_with("#Accountability #GoodGovernance"));
    }

    #[test]
    fn test_empty_fields_still_produce_content() {
        let blog = generate_blog_content(&ArticleBrief::new("Water Supply Issues Plague Residential Areas", ""));
        assert_eq!(
            blog.what_happened,
            "Recent reports indicate issues with water supply issues.  Such situations highlight the need for greater transparency in public service delivery and accountability from concerned authorities."
        );

        let content = generate_content(&ArticleBrief::new("", "Something happened."));
        assert_eq!(content.blog.public_authority, Topic::GovernmentServices.public_authority());
        assert!(content.social.twitter.starts_with("Facing issues with government services?"));
    }
}
