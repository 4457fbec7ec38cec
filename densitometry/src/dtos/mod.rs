pub mod analysis_report;
