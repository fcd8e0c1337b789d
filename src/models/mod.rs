pub mod category;
pub mod loaders;
pub mod question;

pub use category::Category;
pub use loaders::{load_questions, parse_questions, ParseOutcome};
pub use question::{EnrichedQuestion, ExportEnvelope, ExportInfo, RawQuestion};
