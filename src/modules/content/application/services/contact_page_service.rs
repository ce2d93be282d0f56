use async_trait::async_trait;

use super::read_or_default;
use crate::content::application::{
    domain::{
        links::{mailto_href, non_blank, tel_href},
        views::{ContactItemView, ContactPageView},
    },
    ports::incoming::use_cases::GetContactPageUseCase,
    ports::outgoing::{ContentQuery, ProfileRecord},
};

pub const DEFAULT_CONTACT_TITLE: &str = "Let’s Talk";

#[derive(Clone)]
pub struct ContactPageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ContactPageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn contact_items(profile: &ProfileRecord) -> Vec<ContactItemView> {
    let mobile = profile
        .phone_number
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .or(profile.viber_number.as_deref());

    [
        ("email", "Email", mailto_href(profile.email.as_deref())),
        ("mobile", "Mobile", tel_href(mobile)),
        ("github", "GitHub", non_blank(profile.github_url.as_deref())),
        ("linkedin", "LinkedIn", non_blank(profile.linkedin_url.as_deref())),
        ("facebook", "Facebook", non_blank(profile.facebook_url.as_deref())),
        ("instagram", "Instagram", non_blank(profile.instagram_url.as_deref())),
    ]
    .into_iter()
    .filter_map(|(id, label, href)| {
        href.map(|href| ContactItemView {
            id: id.to_string(),
            label: label.to_string(),
            href,
        })
    })
    .collect()
}

#[async_trait]
impl<Q> GetContactPageUseCase for ContactPageService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> ContactPageView {
        let profile = read_or_default("profile", self.query.find_profile().await).unwrap_or_default();

        let title = non_blank(profile.contact_title.as_deref())
            .or_else(|| non_blank(profile.contact_subtitle.as_deref()))
            .unwrap_or_else(|| DEFAULT_CONTACT_TITLE.to_string());

        ContactPageView {
            title,
            intro: non_blank(profile.contact_intro.as_deref()),
            location: non_blank(profile.location.as_deref()),
            items: contact_items(&profile),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::content_fixtures::{sample_profile, FixtureContentQuery};

    fn with_profile(profile: ProfileRecord) -> ContactPageService<FixtureContentQuery> {
        ContactPageService::new(FixtureContentQuery {
            profile: Some(profile),
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn title_prefers_contact_title_then_subtitle() {
        let titled = with_profile(ProfileRecord {
            contact_title: Some("Say hi".into()),
            contact_subtitle: Some("Or not".into()),
            ..sample_profile()
        });
        let subtitled = with_profile(ProfileRecord {
            contact_title: Some(" ".into()),
            contact_subtitle: Some("Or not".into()),
            ..sample_profile()
        });

        assert_eq!(titled.execute().await.title, "Say hi");
        assert_eq!(subtitled.execute().await.title, "Or not");
        assert_eq!(with_profile(sample_profile()).execute().await.title, DEFAULT_CONTACT_TITLE);
    }

    #[tokio::test]
    async fn items_normalize_links_and_drop_blanks() {
        let view = with_profile(sample_profile()).execute().await;

        let items: Vec<(&str, &str)> = view
            .items
            .iter()
            .map(|i| (i.id.as_str(), i.href.as_str()))
            .collect();
        assert_eq!(
            items,
            vec![
                ("email", "mailto:jane@example.com"),
                ("mobile", "tel:+639175550101"),
                ("github", "https://github.com/jane"),
                ("linkedin", "https://linkedin.com/in/jane"),
            ]
        );
        assert_eq!(view.location.as_deref(), Some("Cebu, PH"));
    }

    #[tokio::test]
    async fn mobile_falls_back_to_viber_number() {
        let view = with_profile(ProfileRecord {
            phone_number: None,
            viber_number: Some("+1 555 0100".into()),
            ..sample_profile()
        })
        .execute()
        .await;

        let mobile = view.items.iter().find(|i| i.id == "mobile").unwrap();
        assert_eq!(mobile.href, "tel:+15550100");
    }

    #[tokio::test]
    async fn failed_read_renders_default_title_only() {
        let view = ContactPageService::new(FixtureContentQuery::failing_everywhere())
            .execute()
            .await;

        assert_eq!(view.title, DEFAULT_CONTACT_TITLE);
        assert!(view.items.is_empty());
        assert_eq!(view.intro, None);
    }
}
