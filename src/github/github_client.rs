use super::{
    commit::Commit,
    pull_request::PullRequest,
    query::{Page, PullRequestQuery},
    repository::Repository,
    response::{BranchResponse, CommitResponse, PullRequestResponse, RepositoryResponse},
    Error, RepositoryHost,
};
use crate::{
    get,
    http::{response::JsonResponse, Credentials, HttpClient},
};

pub struct GithubClient {
    pub(super) http: HttpClient,
    api_url: String,
    user: String,
    token: String,
    repositories_page_size: u32,
}

impl GithubClient {
    pub fn new(
        api_url: impl Into<String>,
        user: impl Into<String>,
        token: impl Into<String>,
        repositories_page_size: u32,
    ) -> Self {
        GithubClient {
            http: HttpClient::new(),
            api_url: api_url.into(),
            user: user.into(),
            token: token.into(),
            repositories_page_size,
        }
    }

    pub(super) fn credentials(&self) -> Credentials<'_> {
        Credentials {
            user: &self.user,
            token: &self.token,
        }
    }

    fn uri(&self, path: &str) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), path)
    }
}

impl RepositoryHost for GithubClient {
    async fn list_repositories(&self, page: u32) -> Result<Page<Repository>, Error> {
        let uri = self.uri("/user/repos");

        let response: JsonResponse<Vec<RepositoryResponse>> = get!(
            self,
            &uri,
            &[("per_page", self.repositories_page_size), ("page", page)]
        )?;

        Ok(Page::new(
            response.payload.into_iter().map(Into::into).collect(),
            response.next_page,
        ))
    }

    async fn get_branch_head(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Commit, Error> {
        let uri = self.uri(&format!("/repos/{}/{}/branches/{}", owner, repo, branch));

        let response: JsonResponse<BranchResponse> = get!(self, &uri)?;
        log::debug!(
            "branch {} is at {}",
            response.payload.name,
            response.payload.commit.sha
        );

        Ok(response.payload.commit.into())
    }

    async fn get_commit(&self, owner: &str, repo: &str, sha: &str) -> Result<Commit, Error> {
        let uri = self.uri(&format!("/repos/{}/{}/commits/{}", owner, repo, sha));

        let response: JsonResponse<CommitResponse> = get!(self, &uri)?;

        Ok(response.payload.into())
    }

    async fn list_pull_requests(
        &self,
        owner: &str,
        repo: &str,
        query: &PullRequestQuery,
    ) -> Result<Page<PullRequest>, Error> {
        let uri = self.uri(&format!("/repos/{}/{}/pulls", owner, repo));

        let response: JsonResponse<Vec<PullRequestResponse>> = get!(self, &uri, query)?;

        Ok(Page::new(
            response.payload.into_iter().map(Into::into).collect(),
            response.next_page,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::query::PullRequestState;
    use anyhow::Result;
    use mockito::{Matcher, Server};

    const COMMIT_BODY: &str = r#"{
        "sha": "m2",
        "commit": { "message": "Merge pull request #2 from acme/feature" },
        "parents": [{ "sha": "m1" }, { "sha": "f1" }]
    }"#;

    fn client(server: &Server) -> GithubClient {
        GithubClient::new(server.url(), "octocat", "token", 100)
    }

    #[tokio::test]
    async fn should_get_the_branch_head() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/acme/widgets/branches/master")
            .match_header("authorization", "Bearer token")
            .with_body(format!(r#"{{ "name": "master", "commit": {} }}"#, COMMIT_BODY))
            .create_async()
            .await;

        let head = client(&server)
            .get_branch_head("acme", "widgets", "master")
            .await?;

        mock.assert_async().await;
        assert_eq!(head.sha, "m2");
        assert_eq!(head.parents, vec!["m1".to_owned(), "f1".to_owned()]);
        assert!(head.is_pull_request_merge());

        Ok(())
    }

    #[tokio::test]
    async fn should_get_a_commit() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/acme/widgets/commits/m2")
            .with_body(COMMIT_BODY)
            .create_async()
            .await;

        let commit = client(&server).get_commit("acme", "widgets", "m2").await?;

        mock.assert_async().await;
        assert_eq!(commit.message, "Merge pull request #2 from acme/feature");
        assert_eq!(commit.parents.len(), 2);

        Ok(())
    }

    #[tokio::test]
    async fn should_list_pull_requests_with_the_query() -> Result<()> {
        let mut server = Server::new_async().await;
        let next = format!(
            r#"<{}/repos/acme/widgets/pulls?state=all&page=3>; rel="next""#,
            server.url()
        );
        let mock = server
            .mock("GET", "/repos/acme/widgets/pulls")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("state".into(), "all".into()),
                Matcher::UrlEncoded("sort".into(), "updated".into()),
                Matcher::UrlEncoded("direction".into(), "desc".into()),
                Matcher::UrlEncoded("page".into(), "2".into()),
                Matcher::UrlEncoded("per_page".into(), "20".into()),
            ]))
            .with_header("link", &next)
            .with_body(
                r#"[
                    {
                        "number": 12,
                        "state": "closed",
                        "title": "Fix race",
                        "body": "```release-note\nFixes race condition\n```",
                        "merged_at": "2019-05-02T10:00:00Z",
                        "merge_commit_sha": "m2"
                    },
                    {
                        "number": 13,
                        "state": "open",
                        "title": "WIP",
                        "body": null,
                        "merged_at": null,
                        "merge_commit_sha": null
                    }
                ]"#,
            )
            .create_async()
            .await;

        let page = client(&server)
            .list_pull_requests("acme", "widgets", &PullRequestQuery::recently_updated(2, 20))
            .await?;

        mock.assert_async().await;
        assert_eq!(page.next_page, 3);
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].merge_commit(), Some("m2"));
        assert_eq!(page.items[1].state, PullRequestState::Open);
        assert_eq!(page.items[1].body, "");
        assert_eq!(page.items[1].merge_commit(), None);

        Ok(())
    }

    #[tokio::test]
    async fn should_list_repositories() -> Result<()> {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/user/repos")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("per_page".into(), "100".into()),
                Matcher::UrlEncoded("page".into(), "1".into()),
            ]))
            .with_body(r#"[{ "name": "widgets", "owner": { "login": "acme" } }]"#)
            .create_async()
            .await;

        let page = client(&server).list_repositories(1).await?;

        mock.assert_async().await;
        assert_eq!(page.items, vec![Repository::new("acme", "widgets")]);
        assert_eq!(page.next_page, 0);

        Ok(())
    }

    #[tokio::test]
    async fn should_surface_host_failures() -> Result<()> {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/repos/acme/widgets/commits/missing")
            .with_status(422)
            .with_body(r#"{ "message": "No commit found for SHA: missing" }"#)
            .create_async()
            .await;

        let result = client(&server).get_commit("acme", "widgets", "missing").await;

        assert!(matches!(
            result,
            Err(Error::Http(crate::http::Error::StatusError { status: 422, .. }))
        ));

        Ok(())
    }
}
