//! Article payload parsing and schema validation.

mod article_parser;
mod options;
mod validate;

pub use article_parser::ArticleParser;
pub use options::{IdConvention, ParseOptions};
pub use validate::{is_css_length, is_dom_identifier};
