use crate::modules::registration::core::request::RegistrationRequest;
use crate::modules::registration::use_cases::submit_registration::ports::{
    GatewayError, RegistrationGateway,
};
use async_trait::async_trait;
use reqwest::{Client, Url};

/// Where the registration endpoint lives.
pub const REGISTER_PATH: &str = "/register";

/// Posts registrations to `{base_url}/register` as JSON.
#[derive(Debug, Clone)]
pub struct HttpRegistrationGateway {
    client: Client,
    endpoint: Url,
}

impl HttpRegistrationGateway {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Result<Self, GatewayError> {
        let endpoint = Url::parse(base_url)
            .and_then(|base| base.join(REGISTER_PATH))
            .map_err(|e| GatewayError::InvalidEndpoint(format!("{base_url}: {e}")))?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RegistrationGateway for HttpRegistrationGateway {
    async fn post_registration(&self, request: &RegistrationRequest) -> Result<Vec<u8>, GatewayError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| GatewayError::Unreachable(e.to_string()))?;

        // The body is decoded whatever the status; the server reports failures in it.
        let status = response.status();
        tracing::debug!(%status, endpoint = %self.endpoint, "registration endpoint answered");

        let body = response
            .bytes()
            .await
            .map_err(|e| GatewayError::Body(e.to_string()))?;
        Ok(body.to_vec())
    }
}
