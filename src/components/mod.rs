//! Reusable UI components.

pub mod logout_button;
pub mod role_badge;
pub mod route_guard;
