mod component_filter;
mod dashboard_session;
mod report_metadata_generator;
mod statistics_calculator;
mod vulnerability_index;
mod vulnerability_matcher;

pub use component_filter::ComponentFilter;
pub use dashboard_session::DashboardSession;
pub use report_metadata_generator::ReportMetadataGenerator;
pub use statistics_calculator::StatisticsCalculator;
pub use vulnerability_index::VulnerabilityIndex;
pub use vulnerability_matcher::VulnerabilityMatcher;
