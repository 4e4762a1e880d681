//! Resume aggregate root
//!
//! A resume encapsulates the candidate's profile together with its owned
//! Education, WorkExperience and LanguageSkill entities. Child entries are
//! added and removed individually through the aggregate; duplicates and
//! absent entries are reported failures, never silent no-ops.

mod education;
mod language_skill;
mod resume;
mod work_experience;

pub use education::Education;
pub use language_skill::LanguageSkill;
pub use resume::Resume;
pub use work_experience::WorkExperience;
