pub mod dashboard;
pub mod data_table;
