pub mod embed;
pub mod error;
pub mod fs;
pub mod stock;

pub use error::{Result, SpiderError};

/// Shortcut for required API elements.
pub mod http {
    pub use dotenv::var;
    pub use reqwest::Client as HttpClient;
}

/// Format the elapsed time since `time`, for trace & debug lines.
pub(crate) fn time_elapsed(time: std::time::Instant) -> String {
    format!("time elapsed: {:?}", time.elapsed())
}
