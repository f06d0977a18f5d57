use std::path::PathBuf;

use clap::Parser;

use crate::gateway::{Credentials, RazorpayClient};

/// Serves a checkout page and creates Razorpay orders.
#[derive(Parser)]
#[command(version, about)]
pub struct Config {
    /// TCP port to listen on (all interfaces)
    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Checkout page template, read on every request
    #[arg(long, env = "TEMPLATE_PATH", default_value = "app.html")]
    pub template: PathBuf,

    /// Razorpay key id, sent as the Basic auth user
    #[arg(long, env = "RAZORPAY_KEY_ID", default_value = "", hide_env_values = true)]
    pub key_id: String,

    /// Razorpay key secret, sent as the Basic auth password
    #[arg(long, env = "RAZORPAY_KEY_SECRET", default_value = "", hide_env_values = true)]
    pub key_secret: String,

    /// Base url of the Razorpay REST API
    #[arg(long, env = "RAZORPAY_BASE_URL", default_value = RazorpayClient::BASE_URL)]
    pub gateway_url: String,

    /// Emit logs as JSON lines
    #[arg(long, env = "LOG_JSON")]
    pub log_json: bool,
}

impl Config {
    pub fn credentials(&self) -> Credentials {
        Credentials::new(self.key_id.clone(), self.key_secret.clone())
    }
}
