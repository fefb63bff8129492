//! Desktop catalog of tree data structures (B-Tree, B+-Tree, B*-Tree and
//! Red-Black Tree) with a navigation header that follows the scroll position.

pub mod app;
pub mod catalog;
pub mod config;
pub mod locale;
pub mod message;
pub mod model;
pub mod state;
pub mod style;
pub mod subscription;
pub mod tracker;
pub mod video;
pub mod view;
