use crate::{mount_page, mount_status, page_with_anchors};
use url_extractor::config::FetcherConfig;
use url_extractor::crawler::fetch_page;
use url_extractor::{ExtractorError, LinkExtractor};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn extractor() -> LinkExtractor {
    LinkExtractor::new(&FetcherConfig::default()).expect("Failed to build extractor")
}

#[tokio::test]
async fn test_extraction_returns_links_from_html() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let one = format!("{}/1", base_url);
    let two = format!("{}/2", base_url);
    let body = page_with_anchors(&[one.as_str(), two.as_str()]);
    mount_page(&mock_server, "/", &body).await;

    let links = extractor().extract_links(&base_url).await.unwrap();

    assert_eq!(links, vec![one, two]);
}

#[tokio::test]
async fn test_extraction_filters_out_links_unrelated_to_url() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let own = format!("{}/1", base_url);
    let body = page_with_anchors(&[
        own.as_str(),
        "https://external.com/1",
        "mailto:contact@example.com",
    ]);
    mount_page(&mock_server, "/", &body).await;

    let links = extractor().extract_links(&base_url).await.unwrap();

    assert_eq!(links, vec![own]);
}

#[tokio::test]
async fn test_extraction_keeps_relative_links() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let own = format!("{}/1", base_url);
    let body = page_with_anchors(&[own.as_str(), "home", "/about"]);
    mount_page(&mock_server, "/", &body).await;

    let links = extractor().extract_links(&base_url).await.unwrap();

    assert_eq!(
        links,
        vec![
            own,
            format!("{}/home", base_url),
            format!("{}/about", base_url)
        ]
    );
}

#[tokio::test]
async fn test_relative_links_resolve_against_requested_path() {
    let mock_server = MockServer::start().await;
    let page_url = format!("{}/docs", mock_server.uri());

    mount_page(&mock_server, "/docs", &page_with_anchors(&["intro", "/setup"])).await;

    let links = extractor().extract_links(&page_url).await.unwrap();

    assert_eq!(
        links,
        vec![format!("{}/intro", page_url), format!("{}/setup", page_url)]
    );
}

#[tokio::test]
async fn test_duplicates_and_order_preserved() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    let body = page_with_anchors(&["/b", "https://external.com", "/a", "/b"]);
    mount_page(&mock_server, "/", &body).await;

    let links = extractor().extract_links(&base_url).await.unwrap();

    assert_eq!(
        links,
        vec![
            format!("{}/b", base_url),
            format!("{}/a", base_url),
            format!("{}/b", base_url)
        ]
    );
}

#[tokio::test]
async fn test_page_without_anchors_is_empty() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        "<html><body><p>No links here</p></body></html>",
    )
    .await;

    let links = extractor().extract_links(&mock_server.uri()).await.unwrap();

    assert!(links.is_empty());
}

#[tokio::test]
async fn test_malformed_page_still_extracts() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        "<div><a href='/one'>one</a><li><a href=two>two</table>",
    )
    .await;

    let base_url = mock_server.uri();
    let links = extractor().extract_links(&base_url).await.unwrap();

    assert_eq!(
        links,
        vec![format!("{}/one", base_url), format!("{}/two", base_url)]
    );
}

#[tokio::test]
async fn test_no_content_response_is_success() {
    let mock_server = MockServer::start().await;
    mount_status(&mock_server, "/", 204).await;

    let links = extractor().extract_links(&mock_server.uri()).await.unwrap();

    assert!(links.is_empty());
}

#[tokio::test]
async fn test_extraction_fails_if_status_code_is_above_299() {
    for status in [300u16, 301, 404, 500, 503] {
        let mock_server = MockServer::start().await;
        mount_status(&mock_server, "/", status).await;
        let base_url = mock_server.uri();

        let err = extractor().extract_links(&base_url).await.unwrap_err();

        match &err {
            ExtractorError::Fetch { url, status: got } => {
                assert_eq!(url, &base_url);
                assert_eq!(*got, status);
            }
            other => panic!("Expected fetch error for {}, got {:?}", status, other),
        }
        assert!(err.to_string().contains(&base_url));
    }
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(
            ResponseTemplate::new(302).insert_header("location", format!("{}/new", base_url).as_str()),
        )
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/new", &page_with_anchors(&["page"])).await;

    let requested = format!("{}/old", base_url);
    let links = extractor().extract_links(&requested).await.unwrap();

    // Resolution uses the requested URL, not the redirect target
    assert_eq!(links, vec![format!("{}/page", requested)]);
}

#[tokio::test]
async fn test_connection_failure_is_http_error() {
    // Grab a free port and release it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let err = extractor().extract_links(&base_url).await.unwrap_err();

    assert!(matches!(err, ExtractorError::Http { .. }));
    assert_eq!(err.url(), Some(base_url.as_str()));
}

#[tokio::test]
async fn test_fetch_page_returns_status_and_body() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", "<p>hello</p>").await;

    let client = url_extractor::crawler::build_http_client(&FetcherConfig::default()).unwrap();
    let page = fetch_page(&client, &mock_server.uri()).await.unwrap();

    assert_eq!(page.status_code, 200);
    assert_eq!(page.body, "<p>hello</p>");
    assert_eq!(page.url, mock_server.uri());
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "TestExtractor/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_with_anchors(&["x"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = FetcherConfig {
        user_agent: "TestExtractor/1.0".to_string(),
        ..FetcherConfig::default()
    };
    let extractor = LinkExtractor::new(&config).unwrap();
    let links = extractor.extract_links(&mock_server.uri()).await.unwrap();

    assert_eq!(links, vec![format!("{}/x", mock_server.uri())]);
}

#[tokio::test]
async fn test_timeout_surfaces_as_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<a href='/late'>late</a>")
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = FetcherConfig {
        timeout_secs: Some(1),
        ..FetcherConfig::default()
    };
    let extractor = LinkExtractor::new(&config).unwrap();
    let err = extractor.extract_links(&mock_server.uri()).await.unwrap_err();

    assert!(matches!(err, ExtractorError::Http { .. }));
}
