mod aggregator;
mod store;

pub use aggregator::{add_record, build_templates};
pub use store::{GroupKey, TemplateRecord, TemplateStore, KEY_DELIMITER};
