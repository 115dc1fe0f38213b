use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

/// Thin client for fal.ai's synchronous run endpoint: one POST per user
/// action, blocking that panel until the provider answers or errors. No
/// retries and no error classification; failures bubble up as the provider's
/// status + body text.
#[derive(Debug, Clone)]
pub struct FalClient {
    http: reqwest::Client,
    api_key: String,
}

pub fn endpoint_url(model_id: &str) -> String {
    format!("https://fal.run/{}", model_id.trim_matches('/'))
}

impl FalClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
        }
    }

    pub async fn run<Req, Resp>(&self, model_id: &str, request: &Req) -> Result<Resp>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = endpoint_url(model_id);
        log::info!("[fal] POST {url}");
        let resp = self
            .http
            .post(&url)
            .header("Authorization", format!("Key {}", self.api_key))
            .json(request)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            anyhow::bail!("provider error {status}: {text}");
        }
        Ok(resp.json::<Resp>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_model_id() {
        assert_eq!(
            endpoint_url("fal-ai/flux-pro/v1.1"),
            "https://fal.run/fal-ai/flux-pro/v1.1"
        );
        // Stray slashes on the model id must not produce a double slash.
        assert_eq!(
            endpoint_url("/fal-ai/flux-schnell/"),
            "https://fal.run/fal-ai/flux-schnell"
        );
    }
}
