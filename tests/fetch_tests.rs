use std::time::{Duration, Instant};
use trendcolors::config::Config;
use trendcolors::errors::{Error, ScrapeError};
use trendcolors::fetch::{HttpFetcher, PageFetcher};
use trendcolors::scrape::ColorScraper;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config::default()
        .with_base_url(&server.uri())
        .with_request_delay(Duration::ZERO)
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let fetcher = HttpFetcher::new(&config).unwrap();
    let body = fetcher.fetch(&config.trending_url).await.unwrap();

    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn test_fetch_sends_user_agent() {
    let server = MockServer::start().await;
    let config = config_for(&server);
    Mock::given(method("GET"))
        .and(header("user-agent", config.user_agent.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string("hi"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&config).unwrap();

    assert_eq!(fetcher.fetch(&config.trending_url).await.unwrap(), "hi");
}

#[tokio::test]
async fn test_fetch_waits_before_each_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(2)
        .mount(&server)
        .await;

    let config = config_for(&server).with_request_delay(Duration::from_millis(50));
    let fetcher = HttpFetcher::new(&config).unwrap();

    for _ in 0..2 {
        let start = Instant::now();
        fetcher.fetch(&config.trending_url).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(50));
    }
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let fetcher = HttpFetcher::new(&config).unwrap();
    let result = fetcher.fetch(&config.trending_url).await;

    match result {
        Err(Error::Scrape(ScrapeError::HttpStatus { url, status })) => {
            assert_eq!(url, config.trending_url);
            assert_eq!(status, 429);
        }
        other => panic!("Expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_connection_refused() {
    let config = Config::default()
        .with_base_url("http://127.0.0.1:1")
        .with_request_delay(Duration::ZERO);
    let fetcher = HttpFetcher::new(&config).unwrap();

    let result = fetcher.fetch(&config.trending_url).await;

    assert!(matches!(result, Err(Error::Network(_))));
}

#[tokio::test]
async fn test_scraper_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/trending"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<div class="select-menu-list"><div data-filterable-for="f">
               <div class="select-menu-item"><a href="/trending?l=rust">Rust</a></div>
               </div></div>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "language:\"Rust\""))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<h3 class="repolist-name"><a href="/rust-lang/rust">rust-lang/rust</a></h3>"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rust-lang/rust"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<span class="language-color" style="background-color:#dea584;">Rust</span>"#,
        ))
        .mount(&server)
        .await;

    let config = config_for(&server);
    let fetcher = HttpFetcher::new(&config).unwrap();
    let colors = ColorScraper::new(config, fetcher).run().await.unwrap();

    assert_eq!(
        colors.to_pretty_json().unwrap(),
        "{\n\t\"Rust\": \"#dea584\"\n}"
    );
}
