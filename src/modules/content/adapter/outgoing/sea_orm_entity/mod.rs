pub mod certifications;
pub mod education;
pub mod experience;
pub mod experience_skills;
pub mod milestones;
pub mod profile;
pub mod project_skills;
pub mod projects;
pub mod specializations;
pub mod tech_stack;
