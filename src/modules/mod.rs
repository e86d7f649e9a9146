pub mod auth;
pub mod services;
pub mod users;

pub use self::users::model::User;
