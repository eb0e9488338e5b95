pub mod report;
pub mod yaml;

pub use report::write_report_json;
pub use yaml::write_file;
