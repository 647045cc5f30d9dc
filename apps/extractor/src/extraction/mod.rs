// Field extractors: each maps the full resume text to one output field.
// Contact fields use patterns, list fields use the keyword vocabulary,
// the name comes from the entity recognizer.

pub mod contact;
pub mod keywords;
pub mod name;
pub mod vocabulary;

pub use contact::{extract_email, extract_phone};
pub use keywords::{extract_education, extract_skills, extract_work_summary};
pub use name::extract_name;
pub use vocabulary::Vocabulary;
