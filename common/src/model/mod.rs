pub mod filters;
pub mod lead;
