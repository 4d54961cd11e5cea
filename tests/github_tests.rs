use chrono::{DateTime, Utc};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use skillsafe::provider::{GithubClient, ProviderError, SkillHost};

#[tokio::test]
async fn test_get_repository_maps_counts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/weather-skill"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "weather-skill",
            "stargazers_count": 42,
            "forks_count": 7
        })))
        .mount(&server)
        .await;

    let client = GithubClient::with_base_url(server.uri(), None);
    let repo = client.get_repository("octocat", "weather-skill").await.unwrap();

    assert_eq!(repo.stars, 42);
    assert_eq!(repo.forks, 7);
}

#[tokio::test]
async fn test_missing_repository_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/ghost"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = GithubClient::with_base_url(server.uri(), None);
    let result = client.get_repository("octocat", "ghost").await;

    assert!(matches!(result, Err(ProviderError::NotFound)));
}

#[tokio::test]
async fn test_other_statuses_are_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/limited"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = GithubClient::with_base_url(server.uri(), None);
    let result = client.get_repository("octocat", "limited").await;

    assert!(matches!(
        result,
        Err(ProviderError::Status(reqwest::StatusCode::FORBIDDEN))
    ));
}

#[tokio::test]
async fn test_get_file_content_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/weather-skill/contents/SKILL.md"))
        .and(header("Accept", "application/vnd.github.raw+json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Weather Skill\nForecasts.\n"))
        .mount(&server)
        .await;

    let client = GithubClient::with_base_url(server.uri(), None);
    let content = client
        .get_file_content("octocat", "weather-skill", "SKILL.md")
        .await
        .unwrap();

    assert_eq!(content, "# Weather Skill\nForecasts.\n");
}

#[tokio::test]
async fn test_get_user_parses_account() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "login": "octocat",
            "created_at": "2020-01-01T00:00:00Z",
            "public_repos": 12,
            "followers": 34
        })))
        .mount(&server)
        .await;

    let client = GithubClient::with_base_url(server.uri(), None);
    let account = client.get_user("octocat").await.unwrap();

    let expected: DateTime<Utc> = "2020-01-01T00:00:00Z".parse().unwrap();
    assert_eq!(account.created_at, expected);
    assert_eq!(account.public_repos, 12);
    assert_eq!(account.followers, 34);
}

#[tokio::test]
async fn test_token_is_sent_as_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .and(header("Authorization", "Bearer sekrit"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "created_at": "2020-01-01T00:00:00Z",
            "public_repos": 0,
            "followers": 0
        })))
        .mount(&server)
        .await;

    let client = GithubClient::with_base_url(server.uri(), Some("sekrit".to_string()));
    assert!(client.get_user("octocat").await.is_ok());
}
