use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{
    api::{AppState, error::ApiError},
    gateway::{OrderGateway, OrderRequest},
};

/// Creates the placeholder order on the gateway and relays it as JSON.
/// The inbound method, headers and body are ignored.
#[tracing::instrument(skip_all)]
pub async fn create<G: OrderGateway>(
    State(state): State<AppState<G>>,
) -> Result<Response, ApiError> {
    let request = OrderRequest::placeholder();

    let order = state
        .gateway
        .create_order(&request)
        .await
        .map_err(ApiError::CreateOrder)?;

    let body = serde_json::to_vec(&order).map_err(ApiError::MarshalOrder)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;

    use crate::{
        api::{AppState, router},
        gateway::{
            Credentials, OrderGateway, OrderRequest, RazorpayClient,
            testing::{MockGateway, spawn_gateway},
        },
    };

    async fn call<G: OrderGateway>(
        gateway: G,
        request: Request<Body>,
    ) -> (StatusCode, Option<String>, Vec<u8>) {
        let res = router(AppState::new(gateway, "app.html"))
            .oneshot(request)
            .await
            .expect("response");

        let status = res.status();
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = res.into_body().collect().await.expect("body").to_bytes();

        (status, content_type, body.to_vec())
    }

    fn post(body: &'static str) -> Request<Body> {
        Request::post("/createOrder")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("request")
    }

    #[tokio::test]
    async fn relays_order_as_json() {
        let order = json!({
            "id": "order_EKwxwAgItmmXdp",
            "entity": "order",
            "amount": 1000,
            "currency": "INR",
            "receipt": "receipt#1",
            "status": "created",
            "notes": [],
            "created_at": 1582628071
        });
        let gateway = MockGateway::ok(order.clone());

        let (status, content_type, body) = call(gateway, post("")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(content_type.as_deref(), Some("application/json"));
        assert_eq!(body, serde_json::to_vec(&order).expect("serialize"));
    }

    #[tokio::test]
    async fn get_is_accepted() {
        let gateway = MockGateway::ok(json!({"id": "order_1"}));
        let request = Request::get("/createOrder").body(Body::empty()).expect("request");

        let (status, _, body) = call(gateway, request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, br#"{"id":"order_1"}"#);
    }

    #[tokio::test]
    async fn gateway_error_is_500() {
        let gateway = MockGateway::err("BAD_REQUEST_ERROR", "Authentication failed");

        let (status, content_type, body) = call(gateway, post("")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(content_type.is_some_and(|ct| ct.starts_with("text/plain")));

        let body = String::from_utf8(body).expect("utf8");
        assert!(body.starts_with("Error creating order: "));
        assert!(body.contains("Authentication failed"));
    }

    #[tokio::test]
    async fn payload_ignores_inbound_request() {
        let gateway = MockGateway::ok(json!({"id": "order_1"}));

        let requests = [
            post(r#"{"amount": 5, "currency": "USD", "receipt": "mine"}"#),
            Request::get("/createOrder?amount=99")
                .header("x-receipt", "other")
                .body(Body::empty())
                .expect("request"),
        ];

        for request in requests {
            let (status, _, _) = call(gateway.clone(), request).await;
            assert_eq!(status, StatusCode::OK);
        }

        let seen = gateway.requests();
        assert_eq!(seen.len(), 2);

        for request in seen {
            assert_eq!(request, OrderRequest::placeholder());
            assert_eq!(request.amount, 1000);
            assert_eq!(request.currency, "INR");
            assert_eq!(request.receipt, "receipt#1");
        }
    }

    #[tokio::test]
    async fn empty_credentials_still_reach_gateway() {
        let reply = r#"{"error":{"code":"BAD_REQUEST_ERROR","description":"Authentication failed","source":"NA","step":"NA","reason":"NA","metadata":{}}}"#;
        let (url, received) = spawn_gateway(StatusCode::UNAUTHORIZED, reply).await;

        let gateway = RazorpayClient::new(Credentials::new(String::new(), String::new()), url);

        let (status, _, body) = call(gateway, post("")).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(String::from_utf8_lossy(&body).contains("Authentication failed"));
        assert_eq!(received.lock().expect("lock").len(), 1);
    }
}
