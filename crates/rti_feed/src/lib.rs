pub mod cli;
pub mod feeds;
pub mod logging;

pub use cli::{handle_command, FeedArgs, FeedCommands};
pub use feeds::{Feed, FeedManager, IngestStatus};
pub use feeds::mock::MockFeed;

pub mod prelude {
    pub use super::feeds::{Feed, FeedManager};
    pub use rti_core::{Article, Error, Result};
}
