//! Resource clients, one per family of remote endpoints.

pub mod admin;
pub mod hooks;
pub mod issues;
pub mod markdown;
pub mod orgs;
pub mod repos;
pub mod statuses;
pub mod users;

// Re-exports
pub use admin::AdminClient;
pub use hooks::HooksClient;
pub use issues::IssuesClient;
pub use markdown::MarkdownClient;
pub use orgs::OrgsClient;
pub use repos::ReposClient;
pub use statuses::StatusesClient;
pub use users::UsersClient;
