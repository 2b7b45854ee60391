pub mod error;
pub mod parser;
pub mod template;

pub use error::TemplateError;
pub use template::{build_templates, GroupKey, TemplateRecord, TemplateStore};
