use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

use super::read_or_default;
use crate::content::application::{
    domain::views::{HeroProfileView, HomePageView, MilestoneView, ProjectCardView, SpecializationView},
    ports::incoming::use_cases::GetHomePageUseCase,
    ports::outgoing::{ContentQuery, SnapshotCache},
};

pub const HOME_PROFILE_SNAPSHOT: &str = "home_profile_cache_v1";

const LATEST_PROJECTS: u64 = 8;
const MILESTONE_LIMIT: u64 = 2;
const SPECIALIZATION_LIMIT: u64 = 3;

#[derive(Clone)]
pub struct HomePageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
    snapshots: Arc<dyn SnapshotCache + Send + Sync>,
}

impl<Q> HomePageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q, snapshots: Arc<dyn SnapshotCache + Send + Sync>) -> Self {
        Self { query, snapshots }
    }

    async fn remember_profile(&self, profile: &HeroProfileView) {
        let blob = match serde_json::to_string(profile) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(error = %e, "Could not serialize profile snapshot");
                return;
            }
        };

        if let Err(e) = self.snapshots.store(HOME_PROFILE_SNAPSHOT, blob).await {
            warn!(error = %e, "Could not store profile snapshot");
        }
    }

    async fn last_known_profile(&self) -> Option<HeroProfileView> {
        let blob = match self.snapshots.load(HOME_PROFILE_SNAPSHOT).await {
            Ok(blob) => blob?,
            Err(e) => {
                warn!(error = %e, "Could not load profile snapshot");
                return None;
            }
        };

        // A corrupt snapshot is treated as absent.
        serde_json::from_str(&blob).ok()
    }
}

#[async_trait]
impl<Q> GetHomePageUseCase for HomePageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> HomePageView {
        let (profile, projects, milestones, specializations) = futures::join!(
            self.query.find_profile(),
            self.query.list_projects(Some(LATEST_PROJECTS)),
            self.query.list_milestones(Some(MILESTONE_LIMIT)),
            self.query.list_active_specializations(SPECIALIZATION_LIMIT),
        );

        let (profile, profile_from_cache) = match read_or_default("profile", profile) {
            Some(record) => {
                let view = HeroProfileView::from(record);
                self.remember_profile(&view).await;
                (Some(view), false)
            }
            None => match self.last_known_profile().await {
                Some(cached) => (Some(cached), true),
                None => (None, false),
            },
        };

        let featured_projects = read_or_default("projects", projects)
            .iter()
            .filter(|p| p.is_featured)
            .map(ProjectCardView::from)
            .collect();

        let milestones = read_or_default("milestones", milestones)
            .into_iter()
            .map(|m| MilestoneView {
                label: m.label.unwrap_or_default(),
                value: m.value.unwrap_or_default(),
            })
            .collect();

        let specializations = read_or_default("specializations", specializations)
            .iter()
            .map(SpecializationView::from)
            .collect();

        HomePageView {
            profile,
            profile_from_cache,
            featured_projects,
            milestones,
            specializations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::ports::outgoing::SpecializationRecord;
    use crate::tests::support::content_fixtures::{
        in_memory_snapshots, milestone, sample_profile, sample_project, FixtureContentQuery,
    };
    use serde_json::json;
    use uuid::Uuid;

    #[tokio::test]
    async fn home_shows_featured_projects_among_latest_eight() {
        let mut projects: Vec<_> = (0..10)
            .map(|i| sample_project(&format!("P{i}"), "Web", i))
            .collect();
        projects[0].is_featured = true;
        projects[3].is_featured = true;
        // Featured but too old to be among the latest eight
        projects[9].is_featured = true;

        let query = FixtureContentQuery {
            projects,
            ..Default::default()
        };
        let service = HomePageService::new(query, in_memory_snapshots());

        let view = service.execute().await;

        let titles: Vec<_> = view.featured_projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["P0", "P3"]);
    }

    #[tokio::test]
    async fn home_maps_milestones_and_specializations() {
        let query = FixtureContentQuery {
            milestones: vec![
                milestone("Years experience", "5+"),
                milestone("Projects", "30"),
                milestone("Clients", "12"),
            ],
            specializations: vec![SpecializationRecord {
                id: Uuid::new_v4(),
                title: Some("Backend".into()),
                description: Some("APIs".into()),
                bullets: Some(json!(["Rust", "Postgres"])),
                sort_order: Some(1),
            }],
            ..Default::default()
        };
        let service = HomePageService::new(query, in_memory_snapshots());

        let view = service.execute().await;

        assert_eq!(view.milestones.len(), 2);
        assert_eq!(view.milestones[0].value, "5+");
        assert_eq!(view.specializations[0].bullets, vec!["Rust", "Postgres"]);
    }

    #[tokio::test]
    async fn home_falls_back_to_profile_snapshot() {
        let snapshots = in_memory_snapshots();

        let online = HomePageService::new(
            FixtureContentQuery {
                profile: Some(sample_profile()),
                ..Default::default()
            },
            snapshots.clone(),
        );
        let fresh = online.execute().await;
        assert!(!fresh.profile_from_cache);

        let offline = HomePageService::new(FixtureContentQuery::failing_everywhere(), snapshots);
        let view = offline.execute().await;

        assert!(view.profile_from_cache);
        assert_eq!(view.profile, fresh.profile);
        assert!(view.featured_projects.is_empty());
        assert!(view.milestones.is_empty());
    }

    #[tokio::test]
    async fn home_without_profile_or_snapshot_is_empty() {
        let service = HomePageService::new(FixtureContentQuery::default(), in_memory_snapshots());

        let view = service.execute().await;

        assert_eq!(view.profile, None);
        assert!(!view.profile_from_cache);
    }
}
