//! Razorpay order creation.

mod error;

pub use error::{ErrorBody, GatewayError};

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Payload of `POST /orders`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct OrderRequest {
    /// Minor currency units (paise for INR).
    pub amount: u64,
    pub currency: String,
    pub receipt: String,
}

impl OrderRequest {
    pub const AMOUNT: u64 = 1000;
    pub const CURRENCY: &'static str = "INR";
    pub const RECEIPT: &'static str = "receipt#1";

    /// The fixed order sent for every checkout, whatever the caller asked for.
    pub fn placeholder() -> Self {
        Self {
            amount: Self::AMOUNT,
            currency: Self::CURRENCY.to_string(),
            receipt: Self::RECEIPT.to_string(),
        }
    }
}

/// Order document as returned by the gateway. Kept verbatim.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Order(serde_json::Value);

impl Order {
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(serde_json::Value::as_str)
    }
}

impl From<serde_json::Value> for Order {
    fn from(value: serde_json::Value) -> Self {
        Self(value)
    }
}

#[derive(Clone)]
pub struct Credentials {
    key_id: String,
    key_secret: String,
}

impl Credentials {
    pub fn new(key_id: String, key_secret: String) -> Self {
        Self { key_id, key_secret }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key_id", &self.key_id)
            .field("key_secret", &"***")
            .finish()
    }
}

pub trait OrderGateway: Clone + Send + Sync + 'static {
    fn create_order(&self, request: &OrderRequest) -> impl Future<Output = Result<Order>> + Send;
}

#[derive(Debug, Clone)]
pub struct RazorpayClient {
    client: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl RazorpayClient {
    pub const BASE_URL: &'static str = "https://api.razorpay.com/v1";

    pub fn new(credentials: Credentials, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client: reqwest::Client::new(),
            credentials,
            base_url,
        }
    }
}

impl OrderGateway for RazorpayClient {
    #[tracing::instrument(skip_all, fields(receipt = %request.receipt))]
    async fn create_order(&self, request: &OrderRequest) -> Result<Order> {
        let url = format!("{}/orders", self.base_url);

        tracing::debug!(%url, amount = request.amount, currency = %request.currency, "orders_req");

        let res = self
            .client
            .post(&url)
            .basic_auth(&self.credentials.key_id, Some(&self.credentials.key_secret))
            .json(request)
            .send()
            .await?;

        let status = res.status();

        tracing::debug!(orders_status = ?status);

        let body = res.bytes().await?;

        if !status.is_success() {
            return Err(match serde_json::from_slice::<ErrorBody>(&body) {
                Ok(envelope) => envelope.into(),
                Err(_) => GatewayError::Status {
                    status,
                    body: String::from_utf8_lossy(&body).into_owned(),
                },
            });
        }

        let order: Order = serde_json::from_slice(&body)?;

        tracing::info!(order_id = ?order.id(), "order_created");

        Ok(order)
    }
}
