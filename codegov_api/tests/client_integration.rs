use std::time::Duration;

use codegov_api::{Client, ClientOptions, Error, Query, RepoQuery, TaskQuery};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_repos_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("repos.json");

    Mock::given(method("GET"))
        .and(path("/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.get_repos(&RepoQuery::default()).await.unwrap();

    assert_eq!(resp.total, Some(3));
    assert_eq!(resp.repos.len(), 3);
    assert_eq!(resp.repos[0].name.as_deref(), Some("open-gsa"));
}

#[tokio::test]
async fn get_repos_normalizes_languages() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("repos.json");

    Mock::given(method("GET"))
        .and(path("/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.get_repos(&RepoQuery::default()).await.unwrap();

    // Fixture declares ["Ruby", "ruby", " JavaScript "].
    assert_eq!(resp.repos[0].languages, ["ruby", "javascript"]);
}

#[tokio::test]
async fn get_repos_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_repos(&RepoQuery::default()).await;
    match result {
        Err(Error::HttpStatus { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected HttpStatus error, got {:?}", other.map(|r| r.total)),
    }
}

#[tokio::test]
async fn get_repos_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.get_repos(&RepoQuery::default()).await;
    assert!(matches!(result, Err(Error::Json(_))));
}

#[tokio::test]
async fn license_filter_keeps_only_matching_repos() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("repos.json");

    Mock::given(method("GET"))
        .and(path("/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = RepoQuery::default().with_license("MIT");
    let resp = client.get_repos(&query).await.unwrap();

    // The Apache-2.0 repo and the repo without permissions are dropped;
    // the server-side total is untouched.
    assert_eq!(resp.repos.len(), 1);
    assert_eq!(resp.repos[0].name.as_deref(), Some("open-gsa"));
    assert_eq!(resp.total, Some(3));
}

#[tokio::test]
async fn license_filter_may_empty_the_page() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("repos.json");

    Mock::given(method("GET"))
        .and(path("/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = RepoQuery::default().with_license("GPL-3.0");
    let resp = client.get_repos(&query).await.unwrap();
    assert!(resp.repos.is_empty());
}

#[tokio::test]
async fn cache_deduplicates_concurrent_requests() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("repos.json");

    Mock::given(method("GET"))
        .and(path("/repos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(&body)
                .set_delay(Duration::from_millis(50)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = ClientOptions::default()
        .with_base(&mock_server.uri())
        .with_remember(true);
    let client = Client::new(options);

    let query = RepoQuery::default();
    let (a, b) = tokio::join!(client.get_repos(&query), client.get_repos(&query));
    assert_eq!(a.unwrap().repos.len(), 3);
    assert_eq!(b.unwrap().repos.len(), 3);

    // A later identical call is served from the cache too.
    let c = client.get_repos(&query).await.unwrap();
    assert_eq!(c.repos.len(), 3);
}

#[tokio::test]
async fn cache_disabled_issues_one_request_per_call() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("repos.json");

    Mock::given(method("GET"))
        .and(path("/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(2)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = RepoQuery::default();
    client.get_repos(&query).await.unwrap();
    client.get_repos(&query).await.unwrap();
}

#[tokio::test]
async fn suggest_short_circuits_below_three_characters() {
    // No mock is mounted: a request would fail loudly.
    let mock_server = MockServer::start().await;
    let client = Client::with_base_url(&mock_server.uri());

    let terms = client.suggest("a", 10).await.unwrap();
    assert!(terms.is_empty());
    let terms = client.suggest("na", 10).await.unwrap();
    assert!(terms.is_empty());
}

#[tokio::test]
async fn suggest_fetches_at_three_characters() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("terms.json");

    Mock::given(method("GET"))
        .and(path("/terms"))
        .and(query_param("term", "nat"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let terms = client.suggest("nat", 10).await.unwrap();
    assert_eq!(terms.len(), 2);
    assert_eq!(terms[0].term, "national");
}

#[tokio::test]
async fn get_agencies_sorted_by_display_name() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("agencies.json");

    Mock::given(method("GET"))
        .and(path("/agencies"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let agencies = client.get_agencies(100).await.unwrap();

    // "general services administration" comes from the `term` fallback and
    // sorts case-insensitively among the proper names.
    let acronyms: Vec<_> = agencies
        .iter()
        .map(|a| a.acronym.as_deref().unwrap())
        .collect();
    assert_eq!(acronyms, ["DOE", "GSA", "NASA", "SSA"]);
}

#[tokio::test]
async fn get_repo_by_id_returns_single_object() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("repo.json");

    Mock::given(method("GET"))
        .and(path("/repos/gsa_open_gsa"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let repo = client.get_repo_by_id("gsa_open_gsa").await.unwrap().unwrap();
    assert_eq!(repo.name.as_deref(), Some("open-gsa"));
}

#[tokio::test]
async fn get_repo_by_id_unwraps_array_responses() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("repo_array.json");

    Mock::given(method("GET"))
        .and(path("/repos/nasa_worldwind"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let repo = client.get_repo_by_id("nasa_worldwind").await.unwrap().unwrap();
    assert_eq!(repo.name.as_deref(), Some("worldwind"));
}

#[tokio::test]
async fn tasks_filtering_and_pagination() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("tasks.json");

    Mock::given(method("GET"))
        .and(path("/open-tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    // 5 of the 15 feed tasks belong to NASA. Page 2 at size 3 covers
    // filtered indexes 3..5.
    let query = TaskQuery::default()
        .with_agency("NASA")
        .with_size(3)
        .with_page(2);
    let page = client.get_tasks(&query).await.unwrap();

    assert_eq!(page.total, 5);
    let titles: Vec<_> = page
        .tasks
        .iter()
        .map(|t| t.title.as_deref().unwrap())
        .collect();
    assert_eq!(titles, ["nasa-4", "nasa-5"]);
}

#[tokio::test]
async fn tasks_filters_stack() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("tasks.json");

    Mock::given(method("GET"))
        .and(path("/open-tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = TaskQuery::default()
        .with_agency("nasa")
        .with_skill_level("Beginner");
    let page = client.get_tasks(&query).await.unwrap();

    assert_eq!(page.total, 3);
    let titles: Vec<_> = page
        .tasks
        .iter()
        .map(|t| t.title.as_deref().unwrap())
        .collect();
    assert_eq!(titles, ["nasa-1", "nasa-2", "nasa-3"]);
}

#[tokio::test]
async fn tasks_without_filters_return_first_page() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("tasks.json");

    Mock::given(method("GET"))
        .and(path("/open-tasks"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let page = client.get_tasks(&TaskQuery::default()).await.unwrap();

    assert_eq!(page.total, 15);
    assert_eq!(page.tasks.len(), 10);
}

#[tokio::test]
async fn request_ceiling_is_enforced() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("repos.json");

    Mock::given(method("GET"))
        .and(path("/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let options = ClientOptions::default()
        .with_base(&mock_server.uri())
        .with_max_requests(1);
    let client = Client::new(options);

    let query = RepoQuery::default();
    client.get_repos(&query).await.unwrap();
    let second = client.get_repos(&query).await;
    assert!(matches!(second, Err(Error::RequestCeiling(1))));
}

#[tokio::test]
async fn search_short_circuits_empty_text() {
    let mock_server = MockServer::start().await;
    let client = Client::with_base_url(&mock_server.uri());

    let result = client.search("  ", &RepoQuery::default()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn search_sets_free_text_query() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("repos.json");

    Mock::given(method("GET"))
        .and(path("/repos"))
        .and(query_param("q", "space"))
        .and(query_param("size", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.search("space", &RepoQuery::default()).await.unwrap();
    assert!(resp.is_some());
}
