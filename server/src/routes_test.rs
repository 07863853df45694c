use super::*;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
    format!("http://{addr}")
}

#[tokio::test]
async fn healthz_is_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn api_config_echoes_public_settings() {
    let backend = BackendConfig::new("https://abcd.backend.test", "anon");
    let Json(body) = api_config(State(backend.clone())).await;
    assert_eq!(body, backend);
}

#[tokio::test]
async fn api_routes_serve_health_and_config() {
    let base = serve(api_routes(BackendConfig::new("https://abcd.backend.test/", "anon"))).await;

    let health = reqwest::get(format!("{base}/healthz")).await.unwrap();
    assert_eq!(health.status().as_u16(), 200);

    let config: serde_json::Value = reqwest::get(format!("{base}/api/config")).await.unwrap().json().await.unwrap();
    assert_eq!(config, serde_json::json!({ "url": "https://abcd.backend.test", "anon_key": "anon" }));

    let missing = reqwest::get(format!("{base}/api/nope")).await.unwrap();
    assert_eq!(missing.status().as_u16(), 404);
}
