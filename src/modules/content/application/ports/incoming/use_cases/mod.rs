mod get_about_page;
mod get_contact_page;
mod get_home_page;
mod get_project_details;
mod get_site_shell;
mod get_works_page;

pub use get_about_page::GetAboutPageUseCase;
pub use get_contact_page::GetContactPageUseCase;
pub use get_home_page::GetHomePageUseCase;
pub use get_project_details::{GetProjectDetailsError, GetProjectDetailsUseCase};
pub use get_site_shell::GetSiteShellUseCase;
pub use get_works_page::{GetWorksPageUseCase, WorksPageQuery};
