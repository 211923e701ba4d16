//! Typed client for the Gogs REST API.
//!
//! Covers users, organizations, repositories, webhooks, issues, commit
//! statuses, administrative operations and markdown rendering against a
//! self-hosted Gogs instance.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use gogs_client::{Credential, GogsClient};
//!
//! let client = GogsClient::new(
//!     "https://try.gogs.io/api/v1",
//!     Some(Credential::token("0123456789abcdef")),
//!     None,
//! )?;
//!
//! let me = client.users().current().await?;
//! for repo in client.repos().list().await? {
//!     println!("{}", repo.full_name);
//! }
//! ```

pub mod client;
pub mod clients;
pub mod credential;
pub mod error;
pub mod response;
pub mod transport;
pub mod types;

// Re-exports
pub use client::GogsClient;
pub use clients::{
    AdminClient, HooksClient, IssuesClient, MarkdownClient, OrgsClient, ReposClient,
    StatusesClient, UsersClient,
};
pub use credential::Credential;
pub use error::Error;
pub use transport::{Transport, DEFAULT_TIMEOUT_SECS};
pub use types::{
    AccessToken, Branch, BranchCommit, BuildStatus, Comment, CreateComment, CreateIssue,
    CreateLabel, CreateMilestone, CreateOrganization, CreateRepository, CreateStatus, CreateTeam,
    CreateUser, CreateWebHook, Email, Issue, Label, MarkdownOptions, MigrateRepository, Milestone,
    Organization, Permissions, PublicKey, Repository, SearchResult, Team, UpdateIssue, UpdateLabel,
    UpdateMilestone, UpdateOrganization, UpdateUser, UpdateWebHook, User, WebHook,
};
