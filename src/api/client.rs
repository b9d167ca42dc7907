// api/client.rs
use crate::api::models::{
    Credentials, Listing, ListingUpdate, LoginResponse, NewAccount, NewListing, PhotoUpload,
    SearchQuery,
};
use crate::api::{ApiError, KitnetApi};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const USER_AGENT: &str = concat!("kitnets-web/", env!("CARGO_PKG_VERSION"));

pub struct HttpKitnetApi {
    client: Client,
    base_url: Url,
}

impl HttpKitnetApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ApiError::Network(format!("invalid backend url {base_url}: {e}")))?;
        // Relative joins keep a path prefix such as `http://host/kitnets/`.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// `path` is relative to the backend base, without a leading slash.
    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Network(format!("bad path {path}: {e}")))
    }

    /// `api/kitnets/{id}`, with `id` escaped as a single path segment.
    fn listing_url(&self, id: &str) -> Result<Url, ApiError> {
        let mut url = self.url("api/kitnets/")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::Network("backend url cannot be a base".into()))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    fn send(&self, req: RequestBuilder, what: &str) -> Result<Response, ApiError> {
        let resp = req.send().map_err(|e| {
            tracing::warn!(error = %e, "{what}: backend unreachable");
            ApiError::Network(e.to_string())
        })?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let reason = status.canonical_reason().unwrap_or("").to_string();
        let body = resp.text().unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "{what}: backend rejected request");
        Err(ApiError::from_status(status.as_u16(), &reason, &body))
    }

    fn json<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>().map_err(|e| ApiError::Decode(e.to_string()))
    }
}

impl KitnetApi for HttpKitnetApi {
    fn search(&self, query: &SearchQuery) -> Result<Vec<Listing>, ApiError> {
        let mut url = self.url("api/kitnets/search")?;
        let params = query.params();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }

        let resp = self.send(self.client.get(url), "search")?;
        Self::json(resp)
    }

    fn get_listing(&self, id: &str) -> Result<Listing, ApiError> {
        let url = self.listing_url(id)?;

        let resp = self.send(self.client.get(url), "get listing")?;
        Self::json(resp)
    }

    fn my_listings(&self, token: &str) -> Result<Vec<Listing>, ApiError> {
        let url = self.url("api/kitnets/my-kitnets")?;
        let resp = self.send(self.client.get(url).bearer_auth(token), "my listings")?;
        Self::json(resp)
    }

    fn create_listing(
        &self,
        token: &str,
        listing: &NewListing,
        photos: Vec<PhotoUpload>,
    ) -> Result<(), ApiError> {
        let url = self.url("api/kitnets")?;

        let json = serde_json::to_vec(listing).map_err(|e| ApiError::Decode(e.to_string()))?;
        let kitnet = Part::bytes(json)
            .file_name("kitnet.json")
            .mime_str("application/json")
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let mut form = Form::new().part("kitnet", kitnet);
        for photo in photos {
            let part = Part::bytes(photo.bytes)
                .file_name(photo.file_name)
                .mime_str(&photo.content_type)
                .map_err(|e| ApiError::Network(e.to_string()))?;
            form = form.part("files", part);
        }

        self.send(
            self.client.post(url).bearer_auth(token).multipart(form),
            "create listing",
        )?;
        Ok(())
    }

    fn update_listing(
        &self,
        token: &str,
        id: &str,
        update: &ListingUpdate,
    ) -> Result<(), ApiError> {
        let url = self.listing_url(id)?;

        self.send(
            self.client.put(url).bearer_auth(token).json(update),
            "update listing",
        )?;
        Ok(())
    }

    fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let url = self.url("auth/login")?;
        let resp = self.send(self.client.post(url).json(credentials), "login")?;
        Self::json(resp)
    }

    fn register(&self, account: &NewAccount) -> Result<(), ApiError> {
        let url = self.url("auth/register")?;
        self.send(self.client.post(url).json(account), "register")?;
        Ok(())
    }
}
