pub mod category_selector;
pub mod enricher;
pub mod exporter;
pub mod id_generator;

pub use category_selector::CategorySelector;
pub use enricher::Enricher;
pub use exporter::Exporter;
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidIdGenerator};
