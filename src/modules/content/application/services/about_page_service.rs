use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use super::take_pending;
use crate::content::application::{
    domain::{
        tag_parsing::clean_skill_names,
        tool_category::ToolCategory,
        views::{
            AboutPageView, AboutProfileView, AboutStatsView, CertificationView, EducationView,
            ExperienceView, SectionLink, SpecializationView, ToolGroupView,
        },
    },
    ports::incoming::use_cases::GetAboutPageUseCase,
    ports::outgoing::{
        ContentQuery, ContentQueryError, ExperienceSkillRecord, MilestoneRecord, SnapshotCache,
        TechStackRecord,
    },
};
use crate::signal::application::{
    domain::entities::{SignalChannel, VisitorId},
    ports::incoming::use_cases::TakePendingSelectionUseCase,
};

pub const ABOUT_PAGE_SNAPSHOT: &str = "about_page_cache_v1";

const CERTIFICATION_LIMIT: u64 = 3;
const SPECIALIZATION_LIMIT: u64 = 3;
const SKILLS_PER_EXPERIENCE: usize = 4;

pub const SECTIONS: [(&str, &str); 5] = [
    ("profile", "Profile"),
    ("credentials", "Credentials"),
    ("experience", "Experience"),
    ("tech-stacks", "Tech Stacks"),
    ("specializations", "Specializations"),
];

#[derive(Clone)]
pub struct AboutPageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
    snapshots: Arc<dyn SnapshotCache + Send + Sync>,
    pending: Arc<dyn TakePendingSelectionUseCase + Send + Sync>,
}

/// Unwraps one read, counting failures so the caller can tell whether
/// anything at all came back.
struct Reads {
    failed: usize,
    total: usize,
}

impl Reads {
    fn new() -> Self {
        Self {
            failed: 0,
            total: 0,
        }
    }

    fn take<T: Default>(&mut self, read: &str, result: Result<T, ContentQueryError>) -> T {
        self.total += 1;
        result.unwrap_or_else(|e| {
            self.failed += 1;
            warn!(read, error = %e, "Content read failed, rendering empty");
            T::default()
        })
    }

    fn all_failed(&self) -> bool {
        self.total > 0 && self.failed == self.total
    }
}

impl<Q> AboutPageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        snapshots: Arc<dyn SnapshotCache + Send + Sync>,
        pending: Arc<dyn TakePendingSelectionUseCase + Send + Sync>,
    ) -> Self {
        Self {
            query,
            snapshots,
            pending,
        }
    }

    /// Runs every read concurrently. `None` when all of them failed.
    async fn load_fresh(&self) -> Option<AboutPageView> {
        let (
            profile,
            education,
            certifications,
            experience,
            tech_stack,
            experience_skills,
            specializations,
            project_count,
            milestones,
        ) = futures::join!(
            self.query.find_profile(),
            self.query.find_education(),
            self.query.list_certifications(CERTIFICATION_LIMIT),
            self.query.list_experience(),
            self.query.list_tech_stack(),
            self.query.list_experience_skills(),
            self.query.list_active_specializations(SPECIALIZATION_LIMIT),
            self.query.count_projects(),
            self.query.list_milestones(None),
        );

        let mut reads = Reads::new();
        let profile = reads.take("profile", profile);
        let education = reads.take("education", education);
        let certifications = reads.take("certifications", certifications);
        let experience = reads.take("experience", experience);
        let tech_stack = reads.take("tech_stack", tech_stack);
        let experience_skills = reads.take("experience_skills", experience_skills);
        let specializations = reads.take("specializations", specializations);
        let project_count = reads.take("project_count", project_count);
        let milestones = reads.take("milestones", milestones);

        if reads.all_failed() {
            return None;
        }

        let skills = skills_by_experience(&experience_skills);
        let stats = AboutStatsView {
            experience_value: milestone_value(&milestones, "experience")
                .unwrap_or_else(|| experience.len().to_string()),
            projects_value: milestone_value(&milestones, "project")
                .unwrap_or_else(|| project_count.to_string()),
        };

        Some(AboutPageView {
            profile: AboutProfileView::from_record(profile.as_ref()),
            education: education.map(|e| EducationView {
                degree: e.degree.unwrap_or_default(),
                school: e.school.unwrap_or_default(),
                period: e.period.unwrap_or_default(),
                elective: e.elective.unwrap_or_default(),
            }),
            certifications: certifications
                .into_iter()
                .map(|c| CertificationView {
                    name: c.name.unwrap_or_default(),
                    issuer: c.issuer.unwrap_or_default(),
                    date_earned: c.date_earned.unwrap_or_default(),
                    credential_url: c.credential_url,
                })
                .collect(),
            experience: experience
                .into_iter()
                .map(|e| ExperienceView {
                    skills: skills.get(&e.id).cloned().unwrap_or_default(),
                    id: e.id,
                    role: e.role.unwrap_or_default(),
                    company: e.company.unwrap_or_default(),
                    location: e.location.unwrap_or_default(),
                    date: e.period.unwrap_or_default(),
                    summary: e.description.unwrap_or_default(),
                    proof_url: e.proof_url,
                })
                .collect(),
            tool_groups: group_tools(&tech_stack),
            specializations: specializations.iter().map(SpecializationView::from).collect(),
            stats,
            sections: section_links(),
            initial_section: None,
            from_cache: false,
        })
    }

    async fn remember(&self, view: &AboutPageView) {
        let blob = match serde_json::to_string(view) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "Could not serialize about snapshot");
                return;
            }
        };

        if let Err(e) = self.snapshots.store(ABOUT_PAGE_SNAPSHOT, blob).await {
            warn!(error = %e, "Could not store about snapshot");
        }
    }

    async fn last_known(&self) -> Option<AboutPageView> {
        match self.snapshots.load(ABOUT_PAGE_SNAPSHOT).await {
            Ok(Some(blob)) => serde_json::from_str(&blob).ok(),
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Could not load about snapshot");
                None
            }
        }
    }
}

#[async_trait]
impl<Q> GetAboutPageUseCase for AboutPageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self, visitor: Option<VisitorId>) -> AboutPageView {
        let (fresh, pending_section) = futures::join!(
            self.load_fresh(),
            take_pending(&self.pending, visitor.as_ref(), SignalChannel::AboutSection),
        );

        let mut view = match fresh {
            Some(view) => {
                self.remember(&view).await;
                view
            }
            None => match self.last_known().await {
                Some(cached) => {
                    info!("Serving about page from snapshot");
                    AboutPageView {
                        from_cache: true,
                        ..cached
                    }
                }
                None => empty_about_page(),
            },
        };

        view.initial_section = pending_section.filter(|s| is_known_section(s));
        view
    }
}

fn empty_about_page() -> AboutPageView {
    AboutPageView {
        profile: AboutProfileView::from_record(None),
        education: None,
        certifications: Vec::new(),
        experience: Vec::new(),
        tool_groups: group_tools(&[]),
        specializations: Vec::new(),
        stats: AboutStatsView {
            experience_value: "0".to_string(),
            projects_value: "0".to_string(),
        },
        sections: section_links(),
        initial_section: None,
        from_cache: false,
    }
}

fn section_links() -> Vec<SectionLink> {
    SECTIONS
        .iter()
        .map(|(id, label)| SectionLink {
            id: id.to_string(),
            label: label.to_string(),
        })
        .collect()
}

fn is_known_section(id: &str) -> bool {
    SECTIONS.iter().any(|(known, _)| *known == id)
}

/// First milestone whose label mentions `needle`, case-insensitively.
fn milestone_value(milestones: &[MilestoneRecord], needle: &str) -> Option<String> {
    milestones
        .iter()
        .find(|m| {
            m.label
                .as_deref()
                .unwrap_or_default()
                .to_lowercase()
                .contains(needle)
        })
        .and_then(|m| m.value.clone())
        .filter(|v| !v.is_empty())
}

fn skills_by_experience(rows: &[ExperienceSkillRecord]) -> HashMap<Uuid, Vec<String>> {
    let mut grouped: HashMap<Uuid, Vec<String>> = HashMap::new();
    for row in rows {
        if let Some(name) = clean_skill_names(row.skill_name.as_deref()).pop() {
            grouped.entry(row.experience_id).or_default().push(name);
        }
    }

    for skills in grouped.values_mut() {
        skills.truncate(SKILLS_PER_EXPERIENCE);
    }
    grouped
}

/// One group per display bucket, always all four, in display order.
fn group_tools(tech_stack: &[TechStackRecord]) -> Vec<ToolGroupView> {
    ToolCategory::DISPLAY_ORDER
        .iter()
        .map(|category| ToolGroupView {
            category: *category,
            title: category.heading(),
            dark: category.is_dark(),
            items: clean_skill_names(
                tech_stack
                    .iter()
                    .filter(|t| ToolCategory::from_raw(t.category.as_deref()) == *category)
                    .filter_map(|t| t.skill_name.as_deref()),
            ),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::ports::outgoing::{
        CertificationRecord, EducationRecord, ExperienceRecord,
    };
    use crate::signal::adapter::outgoing::InMemorySlotStore;
    use crate::signal::application::{
        ports::incoming::use_cases::QueueSelectionUseCase, services::SelectionMailboxService,
    };
    use crate::tests::support::content_fixtures::{
        in_memory_snapshots, milestone, sample_profile, sample_project, skill,
        FixtureContentQuery,
    };

    fn mailbox() -> SelectionMailboxService {
        SelectionMailboxService::new(Arc::new(InMemorySlotStore::new()))
    }

    fn experience(role: &str, sort_order: i32) -> ExperienceRecord {
        ExperienceRecord {
            id: Uuid::new_v4(),
            role: Some(role.into()),
            company: Some("Acme".into()),
            location: None,
            period: Some("2020 - 2024".into()),
            description: Some("Did things".into()),
            sort_order: Some(sort_order),
            proof_url: None,
        }
    }

    fn fixture() -> FixtureContentQuery {
        let senior = experience("Senior Engineer", 1);
        let junior = experience("Junior Engineer", 2);

        let experience_skills = ["Rust", " ", "Go", "SQL", "Docker", "K8s"]
            .into_iter()
            .map(|name| ExperienceSkillRecord {
                experience_id: senior.id,
                skill_name: Some(name.into()),
            })
            .collect();

        FixtureContentQuery {
            profile: Some(sample_profile()),
            projects: vec![
                sample_project("A", "Web", 1),
                sample_project("B", "Web", 2),
            ],
            education: Some(EducationRecord {
                degree: Some("BSc Computer Science".into()),
                school: Some("State University".into()),
                period: None,
                elective: None,
            }),
            certifications: (1..=5)
                .map(|i| CertificationRecord {
                    name: Some(format!("Cert {i}")),
                    ..Default::default()
                })
                .collect(),
            experience: vec![junior, senior],
            experience_skills,
            tech_stack: vec![
                skill("Backend", "Rust"),
                skill("Frontend Framework", "React"),
                skill("UI Design", "Figma"),
                skill("DevOps", "Docker"),
                skill("programming language", "Python"),
            ],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn about_maps_every_section() {
        let service = AboutPageService::new(fixture(), in_memory_snapshots(), Arc::new(mailbox()));

        let view = service.execute(None).await;

        assert_eq!(view.profile.name, "Jane Doe");
        assert_eq!(
            view.education.as_ref().map(|e| e.degree.as_str()),
            Some("BSc Computer Science")
        );
        assert_eq!(view.certifications.len(), 3);
        assert_eq!(view.experience[0].role, "Senior Engineer");
        assert_eq!(view.experience[0].skills, vec!["Rust", "Go", "SQL", "Docker"]);
        assert!(view.experience[1].skills.is_empty());
        assert_eq!(view.sections.len(), 5);
        assert!(!view.from_cache);
    }

    #[tokio::test]
    async fn about_groups_tools_in_display_order() {
        let service = AboutPageService::new(fixture(), in_memory_snapshots(), Arc::new(mailbox()));

        let view = service.execute(None).await;

        let groups: Vec<(&str, Vec<&str>)> = view
            .tool_groups
            .iter()
            .map(|g| (g.title.as_str(), g.items.iter().map(String::as_str).collect()))
            .collect();
        assert_eq!(
            groups,
            vec![
                ("PROGRAMMING", vec!["Rust", "Python"]),
                ("FRAMEWORK & LIBRARIES", vec!["React"]),
                ("DESIGN", vec!["Figma"]),
                ("TOOLS", vec!["Docker"]),
            ]
        );
    }

    #[tokio::test]
    async fn about_stats_prefer_milestones() {
        let mut query = fixture();
        query.milestones = vec![
            milestone("Years of Experience", "6+"),
            milestone("Projects shipped", "40"),
        ];
        let service = AboutPageService::new(query, in_memory_snapshots(), Arc::new(mailbox()));

        let view = service.execute(None).await;

        assert_eq!(view.stats.experience_value, "6+");
        assert_eq!(view.stats.projects_value, "40");
    }

    #[tokio::test]
    async fn about_stats_fall_back_to_counts() {
        let service = AboutPageService::new(fixture(), in_memory_snapshots(), Arc::new(mailbox()));

        let view = service.execute(None).await;

        assert_eq!(view.stats.experience_value, "2");
        assert_eq!(view.stats.projects_value, "2");
    }

    #[tokio::test]
    async fn about_partial_failure_keeps_other_sections() {
        let query = fixture().failing_on("list_experience");
        let service = AboutPageService::new(query, in_memory_snapshots(), Arc::new(mailbox()));

        let view = service.execute(None).await;

        assert!(view.experience.is_empty());
        assert_eq!(view.profile.name, "Jane Doe");
        assert_eq!(view.stats.experience_value, "0");
    }

    #[tokio::test]
    async fn about_serves_snapshot_when_every_read_fails() {
        let snapshots = in_memory_snapshots();
        let online =
            AboutPageService::new(fixture(), snapshots.clone(), Arc::new(mailbox()));
        let fresh = online.execute(None).await;

        let offline = AboutPageService::new(
            FixtureContentQuery::failing_everywhere(),
            snapshots,
            Arc::new(mailbox()),
        );
        let view = offline.execute(None).await;

        assert!(view.from_cache);
        assert_eq!(view.profile, fresh.profile);
        assert_eq!(view.experience, fresh.experience);
    }

    #[tokio::test]
    async fn about_without_data_or_snapshot_renders_defaults() {
        let service = AboutPageService::new(
            FixtureContentQuery::failing_everywhere(),
            in_memory_snapshots(),
            Arc::new(mailbox()),
        );

        let view = service.execute(None).await;

        assert_eq!(view.profile.summary, "No about summary yet.");
        assert_eq!(view.tool_groups.len(), 4);
        assert!(!view.from_cache);
    }

    #[tokio::test]
    async fn pending_section_is_consumed_once() {
        let mailbox = mailbox();
        let visitor = VisitorId::parse("v1").unwrap();
        QueueSelectionUseCase::execute(
            &mailbox,
            visitor.clone(),
            SignalChannel::AboutSection,
            "experience",
        )
        .await
        .unwrap();
        let service = AboutPageService::new(fixture(), in_memory_snapshots(), Arc::new(mailbox));

        let first = service.execute(Some(visitor.clone())).await;
        let second = service.execute(Some(visitor)).await;

        assert_eq!(first.initial_section.as_deref(), Some("experience"));
        assert_eq!(second.initial_section, None);
    }

    #[tokio::test]
    async fn unknown_pending_section_is_dropped() {
        let mailbox = mailbox();
        let visitor = VisitorId::parse("v1").unwrap();
        QueueSelectionUseCase::execute(&mailbox, visitor.clone(), SignalChannel::AboutSection, "hobbies")
            .await
            .unwrap();
        let service = AboutPageService::new(fixture(), in_memory_snapshots(), Arc::new(mailbox));

        let view = service.execute(Some(visitor)).await;

        assert_eq!(view.initial_section, None);
    }
}
