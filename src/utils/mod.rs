pub mod database;
pub mod pagination;
pub mod password;
pub mod validation;
