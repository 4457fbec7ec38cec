use super::error::AnalysisError;

pub type AnalysisResult<T> = Result<T, AnalysisError>;
