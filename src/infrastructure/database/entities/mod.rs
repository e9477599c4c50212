//! Database entities module

pub mod order;
pub mod user;
pub mod user_role;

pub use order::Entity as Order;
pub use user::Entity as User;
pub use user_role::Entity as UserRole;
