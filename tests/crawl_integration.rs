//! Integration tests for the page crawl path: fetch, extract, filter,
//! verify, store. All network traffic goes through wiremock.

mod support;

use picstream_core::{ImageStore, PageFetcher, SiteCrawler, client, storage_filename};
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use support::{noise_png, page_html, tiny_png};

fn crawler_for(dir: &TempDir) -> SiteCrawler {
    let http = client::browser_client();
    SiteCrawler::new(
        PageFetcher::new(http.clone()),
        ImageStore::new(http, dir.path()),
    )
}

async fn mount_page(server: &MockServer, page_path: &str, img_tags: &str) {
    Mock::given(method("GET"))
        .and(path(page_path.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(page_html(img_tags)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_crawl_downloads_capped_number_of_verified_images() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    let mut img_tags = String::new();
    for i in 0..5 {
        img_tags.push_str(&format!(r#"<img src="/photos/p{i}.png" alt="photo {i}">"#));
    }
    mount_page(&mock_server, "/gallery", &img_tags).await;
    for i in 0..5 {
        Mock::given(method("GET"))
            .and(path(format!("/photos/p{i}.png")))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(noise_png()))
            .mount(&mock_server)
            .await;
    }

    let records = crawler_for(&temp_dir)
        .crawl_page(&format!("{}/gallery", mock_server.uri()), 3, None)
        .await;

    assert_eq!(records.len(), 3);
    for record in &records {
        assert!(record.storage_path.is_file());
        assert_eq!(record.resolution, Some((96, 96)));
    }
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 3);
}

#[tokio::test]
async fn test_crawl_skips_failures_and_fills_cap_from_later_candidates() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    // A failing download, an undersized image, an undecodable body, then two
    // good images. The cap of 2 must be met by the good ones.
    let img_tags = concat!(
        r#"<img src="/a.png">"#,
        r#"<img src="/b.png">"#,
        r#"<img src="/c.png">"#,
        r#"<img src="/d.png">"#,
        r#"<img src="/e.png">"#,
    );
    mount_page(&mock_server, "/mixed", img_tags).await;

    Mock::given(method("GET"))
        .and(path("/a.png"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/b.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(tiny_png()))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/c.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x41; 4096]))
        .mount(&mock_server)
        .await;
    for name in ["/d.png", "/e.png"] {
        Mock::given(method("GET"))
            .and(path(name))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(noise_png()))
            .mount(&mock_server)
            .await;
    }

    let records = crawler_for(&temp_dir)
        .crawl_page(&format!("{}/mixed", mock_server.uri()), 2, None)
        .await;

    assert_eq!(records.len(), 2);
    assert!(records[0].source_url.ends_with("/d.png"));
    assert!(records[1].source_url.ends_with("/e.png"));
    // Rejected payloads must leave nothing on disk.
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 2);
}

#[tokio::test]
async fn test_recrawl_does_not_refetch_stored_images() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    mount_page(&mock_server, "/page", r#"<img src="/pic.png">"#).await;
    Mock::given(method("GET"))
        .and(path("/pic.png"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(noise_png()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let crawler = crawler_for(&temp_dir);
    let page = format!("{}/page", mock_server.uri());

    let first = crawler.crawl_page(&page, 5, None).await;
    let second = crawler.crawl_page(&page, 5, None).await;

    assert_eq!(first.len(), 1);
    assert_eq!(second.len(), 1);
    assert_eq!(first[0].storage_path, second[0].storage_path);

    let image_url = Url::parse(&format!("{}/pic.png", mock_server.uri())).unwrap();
    assert_eq!(first[0].filename, storage_filename(&image_url));
    // MockServer verifies the single-fetch expectation on drop.
}

#[tokio::test]
async fn test_unreachable_page_produces_no_records() {
    let temp_dir = TempDir::new().unwrap();

    // Port 1 refuses connections.
    let records = crawler_for(&temp_dir)
        .crawl_page("http://127.0.0.1:1/gallery", 5, None)
        .await;

    assert!(records.is_empty());
    assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_keyword_limits_crawl_to_matching_candidates() {
    let mock_server = MockServer::start().await;
    let temp_dir = TempDir::new().unwrap();

    let img_tags = concat!(
        r#"<img src="/owl-wing.png" alt="">"#,
        r#"<img src="/dsc_0001.png" alt="Snowy owl hunting">"#,
        r#"<img src="/tractor.png" alt="red tractor">"#,
    );
    mount_page(&mock_server, "/birds", img_tags).await;
    for name in ["/owl-wing.png", "/dsc_0001.png"] {
        Mock::given(method("GET"))
            .and(path(name))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(noise_png()))
            .mount(&mock_server)
            .await;
    }
    // /tractor.png stays unmocked; a request to it would 404 into a failure,
    // but the filter must prevent the request entirely.

    let records = crawler_for(&temp_dir)
        .crawl_page(&format!("{}/birds", mock_server.uri()), 10, Some("owl"))
        .await;

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| !r.source_url.contains("tractor")));
}
