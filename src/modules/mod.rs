pub mod admin;
pub mod auth;
pub mod cart;
pub mod contact;
pub mod dashboard;
pub mod feedback;
pub mod menu;
pub mod order;
pub mod user;

mod router;
pub use router::get_router;
