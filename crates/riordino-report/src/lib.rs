pub mod kpi_report;
pub mod money;
pub mod results_csv;

pub use kpi_report::write_reorder_report_json;
pub use money::{format_money, format_numeric};
pub use results_csv::{RESULTS_COLUMNS, write_results_csv};
