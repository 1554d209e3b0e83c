//! Content model for scrollytelling articles.
//!
//! An [`Article`] owns its pages, a [`Page`] owns its frames and a [`Frame`]
//! owns its components. The model is built once from a request payload and
//! is read-only afterwards; the compiler never mutates it.

mod article;
mod component;
mod page;

pub use article::Article;
pub use component::{Animation, Component, ComponentType, Image, Position};
pub use page::{Frame, Layout, LayoutTemplate, Page};
