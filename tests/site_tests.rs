
use reqwest::{header, StatusCode};
use serde_json::Value;
use showcase_backend::catalog::seed_projects;
use test_utils::*;

#[actix_rt::test]
async fn home_lists_featured_projects() {
    let app = TestApp::spawn().await;

    let response = app.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    let featured = body["featured"].as_array().unwrap();

    // test_config caps the featured list at two.
    assert_eq!(featured.len(), 2);
    assert_eq!(featured[0]["id"], "republic-of-gaming");
    assert_eq!(featured[1]["path"], "/projects/sam");
    assert_eq!(body["site"]["author"], "Kaine");

    let seo = &body["seo"];
    assert_eq!(seo["metadata"]["title"], "Kaine's Project Showcase - Full Stack Developer Portfolio");
    assert_eq!(seo["metadata"]["alternates"]["canonical"], app.base_url());
    assert_eq!(seo["structuredData"]["mainEntity"]["numberOfItems"], 2);
    assert_eq!(seo["structuredData"]["mainEntity"]["name"], "Featured Projects");
}

#[actix_rt::test]
async fn structured_data_is_served_as_json_ld() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/projects/republic-of-gaming/structured-data").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/ld+json"
    );

    let doc: Value = response.json().await.unwrap();
    assert_eq!(doc["@context"], "https://schema.org");
    assert_eq!(doc["headline"], "Republic of Gaming");
    assert_eq!(doc["workExample"]["url"], "https://republicofgaming.xyz");
    assert_eq!(doc["programmingLanguage"], serde_json::json!(["PHP", "JavaScript"]));
    assert_eq!(doc["datePublished"], "2017-7-05");
    assert_eq!(doc["image"].as_array().unwrap().len(), 6);
}

#[actix_rt::test]
async fn metadata_is_deterministic_across_requests() {
    let app = TestApp::spawn().await;

    let first = app.get_json("/api/v1/projects/sam/metadata").await;
    let second = app.get_json("/api/v1/projects/sam/metadata").await;

    assert_eq!(first, second);
    assert_eq!(first["keywords"], serde_json::json!(["Lua", "PHP", "MySQL"]));
    assert_eq!(first["twitter"]["card"], "summary_large_image");
    assert_eq!(first["other"]["theme-color"], "#000000");
}

#[actix_rt::test]
async fn sitemap_lists_every_page() {
    let app = TestApp::spawn().await;

    let response = app.get("/sitemap.xml").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("application/xml"));

    let xml = response.text().await.unwrap();
    assert_eq!(xml.matches("<url>").count(), 5);
    assert!(xml.contains(&format!("<loc>{}/projects/btchat</loc>", app.base_url())));
    assert!(xml.contains("<lastmod>2025-03-22</lastmod>"));
}

#[actix_rt::test]
async fn health_reports_catalog_size() {
    let app = TestApp::spawn().await;

    let body = app.get_json("/api/v1/system/health").await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["projects"], app.state.project_handler.all_projects().len());
}

#[actix_rt::test]
async fn health_cache_is_per_app() {
    let full = TestApp::spawn().await;
    let single = TestApp::spawn_with_projects(seed_projects().into_iter().take(1).collect()).await;

    let full_body = full.get_json("/api/v1/system/health").await;
    let single_body = single.get_json("/api/v1/system/health").await;

    assert_eq!(full_body["projects"], 3);
    assert_eq!(single_body["projects"], 1);
    assert_eq!(single_body["categories"], 1);
}

#[actix_rt::test]
async fn cors_allows_configured_origins() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(format!("{}/api/v1/projects", app.address))
        .header(header::ORIGIN, "https://frontend.example")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[actix_rt::test]
async fn malformed_query_is_a_json_bad_request() {
    let app = TestApp::spawn().await;

    let response = app.get("/api/v1/projects?category=a&category=b").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().starts_with("Query string error"));
}
