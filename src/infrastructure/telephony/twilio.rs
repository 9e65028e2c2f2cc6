//! Twilio REST API client
//!
//! Implements both telephony ports: outbound calls via `Calls.json` and the
//! fallback SMS via `Messages.json`.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::TwilioSettings;
use crate::domain::call_status::CallStatus;
use crate::domain::telephony::{Caller, Notifier, PlacedCall, TelephonyError, FALLBACK_SMS_BODY};

/// Twilio REST API base URL
pub const DEFAULT_API_BASE_URL: &str = "https://api.twilio.com";

const API_VERSION: &str = "2010-04-01";

#[derive(Debug, Deserialize)]
struct ResourceResponse {
    sid: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    message: String,
    code: Option<i64>,
}

/// Twilio client
pub struct TwilioClient {
    account_sid: String,
    auth_token: String,
    from_number: String,
    api_base_url: String,
    /// Public base URL of this service, used for TwiML and status callbacks
    public_url: String,
    client: reqwest::Client,
}

impl TwilioClient {
    pub fn new(settings: &TwilioSettings, public_url: impl Into<String>) -> Self {
        Self {
            account_sid: settings.account_sid.clone(),
            auth_token: settings.auth_token.clone(),
            from_number: settings.from_number.clone(),
            api_base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            public_url: public_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn resource_url(&self, resource: &str) -> String {
        format!(
            "{}/{}/Accounts/{}/{}.json",
            self.api_base_url, API_VERSION, self.account_sid, resource
        )
    }

    /// Form parameters for a reminder call
    fn call_params(&self, to: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("Url", format!("{}/api/voice", self.public_url)),
            ("To", to.to_string()),
            ("From", self.from_number.clone()),
            ("Record", "true".to_string()),
            ("StatusCallback", format!("{}/api/call-status", self.public_url)),
            ("StatusCallbackMethod", "POST".to_string()),
        ];
        params.extend(
            CallStatus::callback_events()
                .iter()
                .map(|status| ("StatusCallbackEvent", status.as_str().to_string())),
        );
        params
    }

    fn message_params(&self, to: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Body", FALLBACK_SMS_BODY.to_string()),
            ("From", self.from_number.clone()),
            ("To", to.to_string()),
        ]
    }

    /// POST a form to a resource and return the created resource's sid
    async fn create(&self, resource: &str, params: &[(&str, String)]) -> Result<String, TelephonyError> {
        let url = self.resource_url(resource);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(params)
            .send()
            .await
            .map_err(|e| TelephonyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(err) => match err.code {
                    Some(code) => format!("{} (code {})", err.message, code),
                    None => err.message,
                },
                Err(_) => body,
            };
            return Err(TelephonyError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let created: ResourceResponse = response
            .json()
            .await
            .map_err(|e| TelephonyError::InvalidResponse(e.to_string()))?;
        Ok(created.sid)
    }
}

#[async_trait]
impl Caller for TwilioClient {
    async fn place_call(&self, phone_number: &str) -> Result<PlacedCall, TelephonyError> {
        let sid = self.create("Calls", &self.call_params(phone_number)).await?;
        Ok(PlacedCall {
            sid,
            to: phone_number.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for TwilioClient {
    async fn send_fallback_message(&self, phone_number: &str) -> Result<(), TelephonyError> {
        let sid = self.create("Messages", &self.message_params(phone_number)).await?;
        info!("SMS {} sent to {}", sid, phone_number);
        Ok(())
    }
}
