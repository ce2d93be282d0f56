mod content_query;
mod snapshot_cache;

pub use content_query::{
    CertificationRecord, ContentQuery, ContentQueryError, EducationRecord, ExperienceRecord,
    ExperienceSkillRecord, MilestoneRecord, ProfileRecord, ProjectRecord, SpecializationRecord,
    TechStackRecord,
};
pub use snapshot_cache::{SnapshotCache, SnapshotCacheError};
