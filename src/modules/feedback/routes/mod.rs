mod admin_list;
mod create;

pub use admin_list::get_router as get_admin_router;
pub use create::get_router;
