//! Text and HTML helpers shared by the builder.

pub mod html;
pub mod text;
