use async_trait::async_trait;

use super::read_or_default;
use crate::content::application::{
    domain::{
        links::{collect_links, mailto_href, non_blank, to_slug, viber_href, LinkView},
        tag_parsing::split_categories,
        views::{NavPage, SiteShellView},
    },
    ports::incoming::use_cases::GetSiteShellUseCase,
    ports::outgoing::{ContentQuery, ProfileRecord},
};

pub const NAV_PAGES: [(&str, &str); 4] = [
    ("home", "Home"),
    ("works", "Works"),
    ("about", "About"),
    ("contact", "Contact"),
];

/// Footer works links, in display order.
pub const WORKS_LINK_ORDER: [&str; 6] = [
    "UI/UX Design",
    "Website",
    "Mobile",
    "Software",
    "Personal Projects",
    "Client Projects",
];

pub const ABOUT_LINKS: [&str; 7] = [
    "Personal Profile",
    "Educational Experience",
    "Work Experience",
    "Resume and CV",
    "Technical Skills",
    "Tools and Platform",
    "Programming Skills",
];

/// Navbar and footer data.
#[derive(Clone)]
pub struct SiteShellService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    query: Q,
}

impl<Q> SiteShellService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

fn contact_links(profile: Option<&ProfileRecord>) -> Vec<LinkView> {
    let Some(p) = profile else {
        return Vec::new();
    };

    collect_links([
        ("Email", mailto_href(p.email.as_deref())),
        ("Viber", viber_href(p.viber_number.as_deref())),
        ("Facebook", non_blank(p.facebook_url.as_deref())),
        ("GitHub", non_blank(p.github_url.as_deref())),
        ("LinkedIn", non_blank(p.linkedin_url.as_deref())),
        ("Instagram", non_blank(p.instagram_url.as_deref())),
    ])
}

/// A link is kept when any comma-split category equals its label,
/// case-insensitively.
fn works_links(categories: &[String]) -> Vec<LinkView> {
    let present: Vec<String> = categories
        .iter()
        .flat_map(|c| split_categories(c))
        .map(|c| c.to_lowercase())
        .collect();

    WORKS_LINK_ORDER
        .iter()
        .filter(|label| present.contains(&label.to_lowercase()))
        .map(|label| {
            LinkView::new(
                label,
                format!("/?page=works&category={}", to_slug(label)),
            )
        })
        .collect()
}

#[async_trait]
impl<Q> GetSiteShellUseCase for SiteShellService<Q>
where
    Q: ContentQuery + Send + Sync,
{
    async fn execute(&self) -> SiteShellView {
        let (profile, categories) = futures::join!(
            self.query.find_profile(),
            self.query.list_project_categories(),
        );

        let profile = read_or_default("profile", profile);
        let categories = read_or_default("project_categories", categories);

        SiteShellView {
            owner_name: non_blank(profile.as_ref().and_then(|p| p.name.as_deref())),
            nav_pages: NAV_PAGES
                .iter()
                .map(|(page, label)| NavPage {
                    page: page.to_string(),
                    label: label.to_string(),
                })
                .collect(),
            contact_links: contact_links(profile.as_ref()),
            works_links: works_links(&categories),
            about_links: ABOUT_LINKS.iter().map(|l| LinkView::text(l)).collect(),
        }
    }
}
