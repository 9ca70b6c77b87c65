//! Utility operations: server info, passwords, email.

use forcewrap_soap::{CallParams, SoapBinding};
use serde_json::{json, Value};
use tracing::instrument;

use crate::error::Result;

use super::Session;

impl<B: SoapBinding> Session<B> {
    /// The server's current timestamp.
    #[instrument(skip(self))]
    pub async fn get_server_timestamp(&mut self) -> Result<Option<Value>> {
        self.invoke("getServerTimestamp", CallParams::None).await
    }

    /// Information about the logged-in user.
    #[instrument(skip(self))]
    pub async fn get_user_info(&mut self) -> Result<Option<Value>> {
        self.invoke("getUserInfo", CallParams::None).await
    }

    /// Reset a user's password to a server-generated value.
    #[instrument(skip(self))]
    pub async fn reset_password(&mut self, user_id: &str) -> Result<Option<Value>> {
        self.invoke("resetPassword", CallParams::named([("userId", user_id)]))
            .await
    }

    /// Set a user's password to the given value.
    #[instrument(skip(self, password))]
    pub async fn set_password(&mut self, user_id: &str, password: &str) -> Result<Option<Value>> {
        self.invoke(
            "setPassword",
            CallParams::named([("userId", json!(user_id)), ("password", json!(password))]),
        )
        .await
    }

    /// Send single email messages.
    #[instrument(skip_all)]
    pub async fn send_email(&mut self, messages: Vec<Value>) -> Result<Option<Value>> {
        self.invoke("sendEmail", CallParams::named([("messages", messages)]))
            .await
    }
}
