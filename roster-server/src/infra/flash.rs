//! One-shot flash messages surviving exactly one redirect.
//!
//! The Express-style session flash is modeled as an explicit server-side
//! value: redirecting handlers `put` a message into the [`FlashStore`]
//! under the caller's session id, and the next page render `take`s it,
//! removing it in the same step. Session identity rides on a plain
//! `roster_session` cookie; a request without one is handed a fresh id and
//! the response sets the cookie.

use std::{collections::HashMap, convert::Infallible, sync::Arc};

use axum::{
    extract::FromRequestParts,
    http::{HeaderValue, header, request::Parts},
    response::Response,
};
use tokio::sync::Mutex;
use uuid::Uuid;

const SESSION_COOKIE: &str = "roster_session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Danger,
}

impl FlashKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashMessage {
    pub kind: FlashKind,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Danger,
            message: message.into(),
        }
    }
}

/// Per-session pending flash messages, at most one per session.
#[derive(Debug, Clone, Default)]
pub struct FlashStore {
    inner: Arc<Mutex<HashMap<Uuid, FlashMessage>>>,
}

impl FlashStore {
    pub async fn put(&self, session: Uuid, message: FlashMessage) {
        self.inner.lock().await.insert(session, message);
    }

    /// Remove-on-read: a message is shown once, then gone.
    pub async fn take(&self, session: Uuid) -> Option<FlashMessage> {
        self.inner.lock().await.remove(&session)
    }
}

/// Session identity extracted from the `roster_session` cookie.
///
/// Requests without the cookie get a freshly minted id; pass the response
/// through [`SessionId::attach`] so the client learns it.
#[derive(Debug, Clone, Copy)]
pub struct SessionId {
    id: Uuid,
    fresh: bool,
}

impl SessionId {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Append the session cookie to `response` when this id was minted for
    /// the current request.
    pub fn attach(&self, mut response: Response) -> Response {
        if self.fresh
            && let Ok(value) = HeaderValue::from_str(&format!(
                "{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax",
                self.id
            ))
        {
            response.headers_mut().append(header::SET_COOKIE, value);
        }
        response
    }
}

impl<S> FromRequestParts<S> for SessionId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let existing = parts
            .headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .and_then(parse_session_cookie);

        Ok(match existing {
            Some(id) => Self { id, fresh: false },
            None => Self {
                id: Uuid::new_v4(),
                fresh: true,
            },
        })
    }
}

fn parse_session_cookie(cookies: &str) -> Option<Uuid> {
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name == SESSION_COOKIE {
            Uuid::parse_str(value.trim()).ok()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn take_is_remove_on_read() {
        let store = FlashStore::default();
        let session = Uuid::new_v4();

        store
            .put(session, FlashMessage::success("User added successfully"))
            .await;

        let first = store.take(session).await;
        assert_eq!(
            first,
            Some(FlashMessage::success("User added successfully"))
        );
        assert!(store.take(session).await.is_none());
    }

    #[tokio::test]
    async fn sessions_do_not_share_messages() {
        let store = FlashStore::default();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();

        store.put(a, FlashMessage::danger("User not found!")).await;
        assert!(store.take(b).await.is_none());
        assert!(store.take(a).await.is_some());
    }

    #[test]
    fn session_cookie_parsing_picks_our_cookie() {
        let id = Uuid::new_v4();
        let header = format!("theme=dark; roster_session={id}; lang=en");
        assert_eq!(parse_session_cookie(&header), Some(id));

        assert_eq!(parse_session_cookie("theme=dark"), None);
        assert_eq!(parse_session_cookie("roster_session=not-a-uuid"), None);
    }
}
