pub mod dataset_writer;
pub mod field_extractor;
pub mod selectors;
pub mod variant_expander;

pub use dataset_writer::DatasetWriter;
pub use field_extractor::FieldExtractor;
pub use variant_expander::{SettlePolicy, VariantExpander};
