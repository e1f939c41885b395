//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page wraps its body in `Layout` and delegates repeated elements to
//! `components`. Pages take no input; output depends only on `content`.

pub mod about;
pub mod home;
pub mod not_found;
pub mod projects;
