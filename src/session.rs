// src/session.rs
//
// The session lives entirely in the browser: the bearer token and the
// `{name, role}` user record are kept in two cookies. Nothing here
// validates the token; the backend does that on every authorized call.
use base64::Engine;
use cookie::{Cookie, SameSite};
use http::header::{HeaderMap, COOKIE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub const TOKEN_COOKIE: &str = "token";
pub const USER_COOKIE: &str = "user";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Landlord,
    Tenant,
    Other(String),
}

impl Role {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "LANDLORD" => Role::Landlord,
            "TENANT" => Role::Tenant,
            other => Role::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Landlord => "LANDLORD",
            Role::Tenant => "TENANT",
            Role::Other(s) => s,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        Ok(Role::parse(&String::deserialize(d)?))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub role: Role,
}

impl SessionUser {
    pub fn is_landlord(&self) -> bool {
        self.role == Role::Landlord
    }
}

/// What the browser currently holds. Either half may be missing on its own
/// (old cookies, manual tampering), so pages check what they need.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<SessionUser>,
}

impl Session {
    pub fn new(token: String, user: SessionUser) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn from_headers(headers: &HeaderMap) -> Self {
        let cookies = parse_cookies(headers);

        let token = cookies
            .get(TOKEN_COOKIE)
            .filter(|t| !t.is_empty())
            .cloned();
        let user = cookies.get(USER_COOKIE).and_then(|raw| decode_user(raw));

        Self { token, user }
    }

    pub fn is_landlord(&self) -> bool {
        self.user.as_ref().is_some_and(SessionUser::is_landlord)
    }

    /// `Set-Cookie` values that store this session in the browser.
    pub fn set_cookie_headers(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(2);
        if let Some(token) = &self.token {
            out.push(set_cookie(TOKEN_COOKIE, token));
        }
        if let Some(user) = &self.user {
            out.push(set_cookie(USER_COOKIE, &encode_user(user)));
        }
        out
    }
}

/// `Set-Cookie` values that wipe the session.
pub fn clear_cookie_headers() -> Vec<String> {
    [TOKEN_COOKIE, USER_COOKIE]
        .into_iter()
        .map(|name| {
            let mut c = session_cookie(name, String::new());
            c.make_removal();
            c.encoded().to_string()
        })
        .collect()
}

// Session cookies: no Max-Age, gone when the browser closes.
fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

fn set_cookie(name: &'static str, value: &str) -> String {
    session_cookie(name, value.to_string()).encoded().to_string()
}

fn encode_user(user: &SessionUser) -> String {
    // Serializing a struct of strings cannot fail.
    let json = serde_json::to_vec(user).unwrap_or_default();
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json)
}

fn decode_user(raw: &str) -> Option<SessionUser> {
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(raw.trim())
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}

fn parse_cookies(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(Cookie::split_parse_encoded)
        .filter_map(Result::ok)
        .map(|c| (c.name().to_string(), c.value_trimmed().to_string()))
        .collect()
}
