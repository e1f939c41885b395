//! Static site content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every string and list the pages display lives here as a `'static`
//! constant. Pages are the only readers; nothing mutates these values.

pub mod icon;
pub mod profile;
pub mod projects;
pub mod site;
