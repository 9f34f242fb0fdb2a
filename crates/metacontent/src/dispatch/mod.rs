//! Native dispatch over content modules.
//!
//! Rust has the open interface Elm lacks: each content module implements
//! [`Content`], and [`MetaContent`] holds them as trait objects. Tagged
//! [`MultiModel`] / [`MultiMsg`] values play the role of the generated
//! unions, and the same sort order as [`crate::discover`] keeps both views
//! of the registry aligned.

mod content;
mod meta;

pub use content::{Content, Effect, MenuOption, Position, Subscription, View};
pub use meta::{MetaContent, MultiModel, MultiMsg, MISMATCH_ERROR};
