//! Simulated news feed for demos and tests.
//!
//! Headlines cycle through a fixed list of civic stories; source, publication
//! time and pipeline status are randomized. Seed the feed for reproducible
//! batches.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rti_core::{Article, ArticleSource, ArticleStatus, Result};

use super::Feed;

pub const DEFAULT_ARTICLE_COUNT: usize = 25;

/// Articles are spread over this many days before "now".
pub const PUBLISHED_WITHIN_DAYS: i64 = 7;

/// Headline and summary pairs the feed cycles through.
pub const SAMPLE_STORIES: [(&str, &str); 15] = [
    (
        "SSC CGL Exam Faces Technical Glitches Across Multiple Centers",
        "Several examination centers reported server issues and login problems during the SSC CGL examination.",
    ),
    (
        "Municipal Corporation Delays Road Repair Project for Six Months",
        "Citizens complain about deteriorating road conditions as civic body fails to meet promised deadlines.",
    ),
    (
        "Government Hospital Shortage of Essential Medicines Reported",
        "Patients face difficulties due to unavailability of critical medications in public healthcare facilities.",
    ),
    (
        "UPSC Exam Results Delayed Due to Administrative Issues",
        "Candidates await results as the commission cites evaluation backlogs and administrative hurdles.",
    ),
    (
        "Public Transport Services Disrupted in Major Cities",
        "Commuters were stranded after bus and metro services were suspended without prior notice.",
    ),
    (
        "School Building Construction Project Behind Schedule",
        "Parents question the education department over a school block that remains unfinished two years on.",
    ),
    (
        "Water Supply Issues Plague Residential Areas",
        "Residents of several wards report irregular water supply and contaminated taps for over a week.",
    ),
    (
        "Government Employee Pension Disbursement Delayed",
        "Retired employees say pension payments are pending for three months amid a records migration.",
    ),
    (
        "Public Park Maintenance Contract Under Review",
        "The civic administration has ordered a review of the park maintenance contract after complaints.",
    ),
    (
        "Railway Station Renovation Project Faces Cost Overruns",
        "The station upgrade has exceeded its sanctioned budget while work on platforms remains incomplete.",
    ),
    (
        "Health Department Audit Reveals Equipment Shortages",
        "An internal audit found ventilators and diagnostic equipment missing from district hospitals.",
    ),
    (
        "Educational Board Exam Paper Leak Investigation Ongoing",
        "Police and board officials are investigating how the question paper circulated before the exam.",
    ),
    (
        "Municipal Waste Management System Faces Challenges",
        "Garbage collection has stalled in several neighbourhoods as the new waste contract runs into disputes.",
    ),
    (
        "Government Housing Scheme Applications Processing Delays",
        "Applicants say their housing scheme applications have not moved for months despite repeated follow-ups.",
    ),
    (
        "Public Library Digitization Project Timeline Extended",
        "The digitization of the city library archive has been pushed back by a year, officials said.",
    ),
];

/// Closing paragraphs appended to each generated body.
const FOLLOW_UPS: [&str; 6] = [
    "Officials said a detailed statement would be issued after an internal meeting.",
    "Local residents have demanded a time-bound plan and regular public updates.",
    "Opposition members raised the matter and sought an explanation from the concerned minister.",
    "Activists pointed out that similar problems were flagged last year without any follow-up.",
    "The department did not respond to requests for comment by the time of publication.",
    "Experts say clearer disclosure of timelines and budgets would help restore public trust.",
];

#[derive(Debug)]
pub struct MockFeed {
    rng: StdRng,
    count: usize,
}

impl Default for MockFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFeed {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            count: DEFAULT_ARTICLE_COUNT,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            count: DEFAULT_ARTICLE_COUNT,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// Generate one batch relative to `now`.
    pub fn generate(&mut self, now: DateTime<Utc>) -> Vec<Article> {
        (0..self.count)
            .map(|index| {
                let (title, summary) = SAMPLE_STORIES[index % SAMPLE_STORIES.len()];
                let source = ArticleSource::ALL[self.rng.gen_range(0..ArticleSource::ALL.len())];
                let age = self.rng.gen_range(0..PUBLISHED_WITHIN_DAYS * 24 * 60 * 60);
                let status = ArticleStatus::ALL[self.rng.gen_range(0..ArticleStatus::ALL.len())];

                Article {
                    id: index as u64 + 1,
                    title: title.to_string(),
                    summary: summary.to_string(),
                    content: self.body(summary),
                    source,
                    published_at: now - Duration::seconds(age),
                    rti_relevance: 0.0,
                    rti_categories: Vec::new(),
                    rti_queries: Vec::new(),
                    status,
                }
            })
            .collect()
    }

    fn body(&mut self, summary: &str) -> String {
        let first = self.rng.gen_range(0..FOLLOW_UPS.len());
        let second = (first + self.rng.gen_range(1..FOLLOW_UPS.len())) % FOLLOW_UPS.len();
        [summary, FOLLOW_UPS[first], FOLLOW_UPS[second]].join("\n\n")
    }
}

#[async_trait]
impl Feed for MockFeed {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch_articles(&mut self) -> Result<Vec<Article>> {
        Ok(self.generate(Utc::now()))
    }

    fn cli_names(&self) -> Vec<&str> {
        vec!["mock", "demo"]
    }
}
