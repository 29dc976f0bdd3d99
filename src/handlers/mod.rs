pub mod health;
pub mod demo;
pub mod list;
pub mod get;
pub mod create;
pub mod update;
pub mod delete;

pub use health::health_handler;
pub use demo::{
    create_demo_user_handler, delete_demo_user_handler, fallback_handler, get_demo_user_handler,
    update_demo_user_handler,
};
pub use list::list_handler;
pub use get::get_handler;
pub use create::create_handler;
pub use update::update_handler;
pub use delete::delete_handler;
