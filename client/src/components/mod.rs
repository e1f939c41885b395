//! Reusable UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are stateless renders of `'static` content. Pages compose
//! them inside `Layout`.

pub mod badge;
pub mod icon;
pub mod layout;
pub mod project_card;
pub mod skill_block;
pub mod strength_card;
pub mod tech_grid;
