pub mod finding;
pub mod report;

pub use finding::{Severity, ThreatCategory, ThreatFinding};
pub use report::{AccountInfo, AnalysisReport, AuthorInfo, RepositoryInfo};
