pub mod filters;
pub mod health;
pub mod users;
