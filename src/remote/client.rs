use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::avatar::AvatarSelection;
use crate::config::Endpoints;

use super::error::RemoteError;
use super::types::{
    PendingSave, SaveResponse, ToggleResponse, FIELD_AVATAR_IMAGE, FIELD_CSRF, FIELD_PRESET,
    HEADER_CSRF, HEADER_REQUESTED_WITH, XML_HTTP_REQUEST,
};
use super::ProfileApi;

/// `ProfileApi` over HTTP.
///
/// No timeout and no retry: a request runs until the transport resolves it.
pub struct HttpProfileApi {
    client: Client,
    base_url: Url,
    save_url: Url,
}

impl HttpProfileApi {
    pub fn new(endpoints: &Endpoints) -> Result<Self, RemoteError> {
        let client = Client::builder().build().map_err(RemoteError::Client)?;
        Self::with_client(client, endpoints)
    }

    pub fn with_client(client: Client, endpoints: &Endpoints) -> Result<Self, RemoteError> {
        let base_url = Url::parse(&endpoints.base_url).map_err(|e| RemoteError::InvalidUrl {
            url: endpoints.base_url.clone(),
            reason: e.to_string(),
        })?;
        let save_url = join(&base_url, &endpoints.save_path)?;
        Ok(Self {
            client,
            base_url,
            save_url,
        })
    }

    pub fn save_url(&self) -> &Url {
        &self.save_url
    }

    /// Resolve a server-assigned URL, which may be relative to the page origin.
    pub fn resolve(&self, url: &str) -> Result<Url, RemoteError> {
        join(&self.base_url, url)
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    async fn save_avatar(&self, save: PendingSave) -> Result<SaveResponse, RemoteError> {
        let form = build_form(&save)?;
        let url = self.save_url.clone();
        debug!(url = %url, "POST avatar");

        let response = self
            .client
            .post(url.clone())
            .header(HEADER_CSRF, save.csrf_token.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(|e| RemoteError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        read_json(&url, response).await
    }

    async fn toggle_status(
        &self,
        url: &str,
        csrf_token: &str,
    ) -> Result<ToggleResponse, RemoteError> {
        let url = self.resolve(url)?;
        debug!(url = %url, "POST toggle");

        let response = self
            .client
            .post(url.clone())
            .header(HEADER_CSRF, csrf_token)
            .header(HEADER_REQUESTED_WITH, XML_HTTP_REQUEST)
            .send()
            .await
            .map_err(|e| RemoteError::Transport {
                url: url.to_string(),
                source: e,
            })?;

        read_json(&url, response).await
    }
}

fn join(base: &Url, url: &str) -> Result<Url, RemoteError> {
    base.join(url).map_err(|e| RemoteError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Multipart body: the file or the preset, plus the token.
pub(crate) fn build_form(save: &PendingSave) -> Result<Form, RemoteError> {
    let form = Form::new().text(FIELD_CSRF, save.csrf_token.clone());

    let form = match &save.selection {
        Some(AvatarSelection::Upload(upload)) => {
            let mut part = Part::bytes(upload.bytes.clone()).file_name(upload.file_name.clone());
            if !upload.content_type.is_empty() {
                part = part
                    .mime_str(&upload.content_type)
                    .map_err(|e| RemoteError::Encoding {
                        reason: format!("content type '{}': {}", upload.content_type, e),
                    })?;
            }
            form.part(FIELD_AVATAR_IMAGE, part)
        }
        Some(AvatarSelection::Preset(preset)) => {
            form.text(FIELD_PRESET, preset.as_str().to_string())
        }
        None => form,
    };

    Ok(form)
}

/// Parse the body as JSON whatever the HTTP status; error pages that are
/// not JSON surface as `InvalidResponse`.
async fn read_json<T: DeserializeOwned>(url: &Url, response: Response) -> Result<T, RemoteError> {
    let status = response.status().as_u16();
    let bytes = response.bytes().await.map_err(|e| RemoteError::Transport {
        url: url.to_string(),
        source: e,
    })?;

    serde_json::from_slice(&bytes).map_err(|e| RemoteError::InvalidResponse {
        url: url.to_string(),
        status,
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::{PresetId, Upload};

    fn endpoints() -> Endpoints {
        Endpoints {
            base_url: "http://127.0.0.1:8000".into(),
            save_path: "/profile/".into(),
            media_prefix: "/media/".into(),
        }
    }

    #[test]
    fn save_url_joins_base() {
        let api = HttpProfileApi::new(&endpoints()).unwrap();
        assert_eq!(api.save_url().as_str(), "http://127.0.0.1:8000/profile/");
    }

    #[test]
    fn relative_toggle_url_resolves_against_origin() {
        let api = HttpProfileApi::new(&endpoints()).unwrap();
        let url = api.resolve("/labs/7/toggle/").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/labs/7/toggle/");
    }

    #[test]
    fn absolute_toggle_url_is_kept() {
        let api = HttpProfileApi::new(&endpoints()).unwrap();
        let url = api.resolve("https://example.org/labs/7/toggle/").unwrap();
        assert_eq!(url.host_str(), Some("example.org"));
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let mut endpoints = endpoints();
        endpoints.base_url = "not a url".into();
        assert!(matches!(
            HttpProfileApi::new(&endpoints),
            Err(RemoteError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn bad_content_type_fails_encoding() {
        let save = PendingSave {
            selection: Some(AvatarSelection::Upload(Upload {
                file_name: "a.png".into(),
                content_type: "not a mime".into(),
                bytes: vec![1],
            })),
            csrf_token: "t".into(),
        };
        assert!(matches!(build_form(&save), Err(RemoteError::Encoding { .. })));
    }

    #[test]
    fn preset_form_builds() {
        let save = PendingSave {
            selection: Some(AvatarSelection::Preset(PresetId::new("cat.png"))),
            csrf_token: "t".into(),
        };
        assert!(build_form(&save).is_ok());
    }
}
