//! Page components, one per routed view.

pub mod admin;
pub mod course;
pub mod denied;
pub mod employee;
pub mod login;
pub mod portal_admin;
