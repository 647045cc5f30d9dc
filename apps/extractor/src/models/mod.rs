pub mod record;

pub use record::ExtractionResult;
