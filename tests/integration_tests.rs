//! Integration tests against a live Gogs instance.
//!
//! These tests exercise end-to-end workflows and need a reachable
//! instance plus an account with admin rights.
//!
//! To run these tests:
//! ```bash
//! GOGS_INTEGRATION_TESTS=1 \
//! GOGS_BASE_URL=http://localhost:3000/api/v1 \
//! GOGS_USERNAME=gogs-admin GOGS_PASSWORD=... \
//! cargo test --test integration_tests -- --ignored
//! ```

use std::env;

use gogs_client::{
    Credential, CreateIssue, CreateRepository, CreateStatus, CreateWebHook, GogsClient,
    MarkdownOptions, UpdateIssue,
};
use uuid::Uuid;

/// Check if integration tests should run.
fn should_run_integration_tests() -> bool {
    env::var("GOGS_INTEGRATION_TESTS").map_or(false, |v| v == "1")
}

/// Generate a unique name for test resources.
fn generate_unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, &Uuid::new_v4().to_string()[..8])
}

/// Create a client from the GOGS_* environment variables.
fn create_client() -> GogsClient {
    GogsClient::from_env().expect("GOGS_BASE_URL and credentials must be set")
}

mod repository_lifecycle {
    use super::*;

    /// Test: create repository → get → list branches → delete
    #[tokio::test]
    #[ignore = "Integration test requires GOGS_INTEGRATION_TESTS=1 and a running instance"]
    async fn test_create_get_delete_repository() {
        if !should_run_integration_tests() {
            return;
        }

        let client = create_client();
        let name = generate_unique_name("test-repo");

        let mut create = CreateRepository::new(&name);
        create.auto_init = true;
        create.private = true;

        let repo = client
            .repos()
            .create(&create)
            .await
            .expect("Repository creation should succeed");
        assert_eq!(repo.name, name);
        assert!(repo.private);

        let owner = repo.owner.username.clone();

        let fetched = client
            .repos()
            .get(&owner, &name)
            .await
            .expect("Get repository should succeed")
            .expect("Repository should exist");
        assert_eq!(fetched.id, repo.id);

        let branches = client
            .repos()
            .list_branches(&owner, &name)
            .await
            .expect("List branches should succeed");
        assert!(!branches.is_empty(), "auto_init should create a branch");

        let deleted = client
            .repos()
            .delete(&owner, &name)
            .await
            .expect("Delete repository should succeed");
        assert!(deleted);

        let gone = client
            .repos()
            .get(&owner, &name)
            .await
            .expect("Get after delete should succeed");
        assert!(gone.is_none());
    }

    /// Test: search finds a freshly created repository
    #[tokio::test]
    #[ignore = "Integration test requires GOGS_INTEGRATION_TESTS=1 and a running instance"]
    async fn test_search_finds_created_repository() {
        if !should_run_integration_tests() {
            return;
        }

        let client = create_client();
        let name = generate_unique_name("test-search");

        let repo = client
            .repos()
            .create(&CreateRepository::new(&name))
            .await
            .expect("Repository creation should succeed");
        let owner = repo.owner.username.clone();

        let result = client
            .repos()
            .search(&name, repo.owner.id, None)
            .await
            .expect("Search should succeed");
        assert!(result.ok);
        assert!(result.data.iter().any(|r| r.name == name));

        client
            .repos()
            .delete(&owner, &name)
            .await
            .expect("Cleanup should succeed");
    }
}

mod organization_workflow {
    use super::*;
    use gogs_client::CreateOrganization;

    /// Test: create organization → get organization. Needs admin rights.
    #[tokio::test]
    #[ignore = "Integration test requires GOGS_INTEGRATION_TESTS=1 and a running instance"]
    async fn test_create_and_get_organization() {
        if !should_run_integration_tests() {
            return;
        }

        let client = create_client();
        let name = generate_unique_name("test-org");

        let me = client
            .users()
            .current()
            .await
            .expect("Current user should succeed");

        let mut create = CreateOrganization::new(&name);
        create.full_name = Some("Integration Test Org".to_string());
        create.description = Some("created by the test suite".to_string());

        let org = client
            .admin()
            .create_org(&me.username, &create)
            .await
            .expect("Organization creation should succeed")
            .expect("Owner should exist");
        assert_eq!(org.username, name);

        let fetched = client
            .orgs()
            .get(&name)
            .await
            .expect("Get organization should succeed")
            .expect("Organization should exist");
        assert_eq!(fetched.id, org.id);
        assert_eq!(fetched.full_name, "Integration Test Org");
        assert_eq!(fetched.description, "created by the test suite");

        let mine = client
            .orgs()
            .current()
            .await
            .expect("List own organizations should succeed");
        assert!(mine.iter().any(|o| o.username == name));
    }
}

mod issue_workflow {
    use super::*;

    /// Test: create issue → comment → close
    #[tokio::test]
    #[ignore = "Integration test requires GOGS_INTEGRATION_TESTS=1 and a running instance"]
    async fn test_issue_comment_and_close() {
        if !should_run_integration_tests() {
            return;
        }

        let client = create_client();
        let name = generate_unique_name("test-issues");

        let mut create = CreateRepository::new(&name);
        create.auto_init = true;
        let repo = client
            .repos()
            .create(&create)
            .await
            .expect("Repository creation should succeed");
        let owner = repo.owner.username.clone();

        let mut new_issue = CreateIssue::new("something is wrong");
        new_issue.body = Some("steps to reproduce: run it".to_string());
        let issue = client
            .issues()
            .create(&owner, &name, &new_issue)
            .await
            .expect("Issue creation should succeed");
        assert_eq!(issue.state, "open");

        let comment = client
            .issues()
            .create_comment(&owner, &name, issue.number, "on it")
            .await
            .expect("Comment creation should succeed");
        assert_eq!(comment.body, "on it");

        let patch = UpdateIssue {
            state: Some("closed".to_string()),
            ..Default::default()
        };
        let closed = client
            .issues()
            .update(&owner, &name, issue.number, &patch)
            .await
            .expect("Issue update should succeed");
        assert_eq!(closed.state, "closed");

        client
            .repos()
            .delete(&owner, &name)
            .await
            .expect("Cleanup should succeed");
    }
}

mod webhook_workflow {
    use super::*;

    /// Test: create webhook → update → delete
    #[tokio::test]
    #[ignore = "Integration test requires GOGS_INTEGRATION_TESTS=1 and a running instance"]
    async fn test_webhook_lifecycle() {
        if !should_run_integration_tests() {
            return;
        }

        let client = create_client();
        let name = generate_unique_name("test-hooks");

        let repo = client
            .repos()
            .create(&CreateRepository::new(&name))
            .await
            .expect("Repository creation should succeed");
        let owner = repo.owner.username.clone();

        let hook = client
            .hooks()
            .create(
                &owner,
                &name,
                &CreateWebHook::new("gogs", "http://localhost:9999/hook", "json"),
            )
            .await
            .expect("Hook creation should succeed")
            .expect("Repository should exist");
        assert!(hook.active);

        let patch = gogs_client::UpdateWebHook {
            active: Some(false),
            ..Default::default()
        };
        let updated = client
            .hooks()
            .update(&owner, &name, hook.id, &patch)
            .await
            .expect("Hook update should succeed")
            .expect("Hook should exist");
        assert!(!updated.active);

        let deleted = client
            .hooks()
            .delete(&owner, &name, hook.id)
            .await
            .expect("Hook deletion should succeed");
        assert!(deleted);

        client
            .repos()
            .delete(&owner, &name)
            .await
            .expect("Cleanup should succeed");
    }
}

mod status_workflow {
    use super::*;

    /// Test: attach a build status to the tip commit
    #[tokio::test]
    #[ignore = "Integration test requires GOGS_INTEGRATION_TESTS=1 and a running instance"]
    async fn test_attach_build_status() {
        if !should_run_integration_tests() {
            return;
        }

        let client = create_client();
        let name = generate_unique_name("test-status");

        let mut create = CreateRepository::new(&name);
        create.auto_init = true;
        let repo = client
            .repos()
            .create(&create)
            .await
            .expect("Repository creation should succeed");
        let owner = repo.owner.username.clone();

        let branches = client
            .repos()
            .list_branches(&owner, &name)
            .await
            .expect("List branches should succeed");
        let sha = &branches[0].commit.id;

        let mut options = CreateStatus::new("success");
        options.context = Some("ci/smoke".to_string());
        let status = client
            .statuses()
            .create(&owner, &name, sha, &options)
            .await
            .expect("Status creation should succeed")
            .expect("Commit should exist");
        assert_eq!(status.status, "success");

        client
            .repos()
            .delete(&owner, &name)
            .await
            .expect("Cleanup should succeed");
    }
}

mod markdown_rendering {
    use super::*;

    /// Test: server-side markdown rendering produces HTML
    #[tokio::test]
    #[ignore = "Integration test requires GOGS_INTEGRATION_TESTS=1 and a running instance"]
    async fn test_render_markdown() {
        if !should_run_integration_tests() {
            return;
        }

        let client = create_client();

        let html = client
            .markdown()
            .render(&MarkdownOptions::new("# heading"))
            .await
            .expect("Markdown rendering should succeed");
        assert!(html.contains("heading"));

        let raw = client
            .markdown()
            .render_raw("**bold**")
            .await
            .expect("Raw markdown rendering should succeed");
        assert!(raw.contains("bold"));
    }
}

mod account_workflow {
    use super::*;

    /// Test: current user → email listing → follow self is rejected by server
    #[tokio::test]
    #[ignore = "Integration test requires GOGS_INTEGRATION_TESTS=1 and a running instance"]
    async fn test_current_user_and_emails() {
        if !should_run_integration_tests() {
            return;
        }

        let client = create_client();

        let me = client
            .users()
            .current()
            .await
            .expect("Current user should succeed");
        assert!(!me.username.is_empty());

        let fetched = client
            .users()
            .get(&me.username)
            .await
            .expect("Get user should succeed");
        assert_eq!(fetched.id, me.id);

        let emails = client
            .users()
            .list_emails()
            .await
            .expect("List emails should succeed");
        assert!(!emails.is_empty(), "an account always has a primary email");
    }

    /// Test: token management under basic auth. Needs GOGS_USERNAME/GOGS_PASSWORD.
    #[tokio::test]
    #[ignore = "Integration test requires GOGS_INTEGRATION_TESTS=1 and a running instance"]
    async fn test_token_management() {
        if !should_run_integration_tests() {
            return;
        }

        let base_url = env::var("GOGS_BASE_URL").expect("GOGS_BASE_URL must be set");
        let username = env::var("GOGS_USERNAME").expect("GOGS_USERNAME must be set");
        let password = env::var("GOGS_PASSWORD").expect("GOGS_PASSWORD must be set");

        let client = GogsClient::new(
            &base_url,
            Some(Credential::basic(&username, &password)),
            None,
        )
        .expect("Client creation should succeed");

        let token_name = generate_unique_name("test-token");
        let token = client
            .users()
            .create_token(&username, &token_name)
            .await
            .expect("Token creation should succeed");
        assert!(!token.sha1.is_empty());

        let tokens = client
            .users()
            .list_tokens(&username)
            .await
            .expect("Token listing should succeed");
        assert!(tokens.iter().any(|t| t.name == token_name));
    }
}
