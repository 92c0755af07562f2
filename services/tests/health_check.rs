use axum::http::StatusCode;
use axum_test::TestServer;

mod common;

#[tokio::test]
async fn test_health_check_integration() {
    let server = TestServer::new(common::app(common::MockEmailSender::accepting())).unwrap();

    let response = server.get("/is-health").await;
    response.assert_status(StatusCode::OK);
    response.assert_text("OK");

    assert_eq!(response.header("x-service-env"), "test");
    assert!(
        response
            .header("x-service-version")
            .to_str()
            .unwrap()
            .starts_with("dev:")
    );
    assert_eq!(response.header("access-control-allow-origin"), "*");
}
