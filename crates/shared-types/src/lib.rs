pub mod types;

pub use types::{AnalysisReport, AnalysisSections, AnalyzeRequest, FileSelection};
