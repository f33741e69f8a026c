// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The credentials seam used by the transport.
//!
//! The Sheets service accepts requests authorized with an OAuth2 bearer
//! token, or (for public data) identified only by an API key. Token
//! acquisition and refresh is outside the scope of this client library:
//! applications either configure a static bearer token, anonymous
//! credentials plus an API key, or plug in their own
//! [CredentialsProvider] implementation backed by their token source.

use crate::Result;
use crate::error::{CredentialsError, Error};
use http::header::{AUTHORIZATION, HeaderName, HeaderValue};
use std::sync::Arc;

/// Produces the authentication headers attached to each request.
///
/// `Credentials` are shared across threads and cloned into each client, so
/// the implementation is held behind an [Arc].
///
/// # Example
/// ```
/// use google_sheets_gax::credentials::Credentials;
/// let credentials = Credentials::bearer_token("ya29.test-only");
/// ```
#[derive(Clone, Debug)]
pub struct Credentials {
    inner: Arc<dyn dynamic::CredentialsProvider>,
}

impl<T> std::convert::From<T> for Credentials
where
    T: CredentialsProvider + Send + Sync + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl Credentials {
    /// Credentials that attach no headers.
    ///
    /// Use these to access public spreadsheets, typically in combination
    /// with an API key configured on the client.
    pub fn anonymous() -> Self {
        Anonymous.into()
    }

    /// Credentials sending a fixed `Authorization: Bearer <token>` header.
    ///
    /// The token is used as-is and never refreshed; applications that need
    /// refresh implement [CredentialsProvider] over their token source.
    pub fn bearer_token<T: Into<String>>(token: T) -> Self {
        BearerToken {
            token: token.into(),
        }
        .into()
    }

    /// The headers to attach to a request.
    pub async fn headers(&self) -> Result<Vec<(HeaderName, HeaderValue)>> {
        self.inner.headers().await.map_err(Error::authentication)
    }
}

/// The result type used by credential providers.
pub type CredentialsResult<T> = std::result::Result<T, CredentialsError>;

/// Implementations of this trait produce authentication headers.
///
/// Implement this trait to connect the client to an application-owned token
/// source, e.g. an OAuth2 refresher.
pub trait CredentialsProvider: std::fmt::Debug {
    /// Asynchronously constructs the auth headers.
    ///
    /// The implementation refreshes any underlying token as needed.
    fn headers(
        &self,
    ) -> impl Future<Output = CredentialsResult<Vec<(HeaderName, HeaderValue)>>> + Send;
}

pub mod dynamic {
    use super::{CredentialsResult, HeaderName, HeaderValue};

    /// A dyn-compatible version of `CredentialsProvider`.
    #[async_trait::async_trait]
    pub trait CredentialsProvider: Send + Sync + std::fmt::Debug {
        /// Asynchronously constructs the auth headers.
        async fn headers(&self) -> CredentialsResult<Vec<(HeaderName, HeaderValue)>>;
    }

    #[async_trait::async_trait]
    impl<T> CredentialsProvider for T
    where
        T: super::CredentialsProvider + Send + Sync,
    {
        async fn headers(&self) -> CredentialsResult<Vec<(HeaderName, HeaderValue)>> {
            T::headers(self).await
        }
    }
}

#[derive(Debug)]
struct Anonymous;

impl CredentialsProvider for Anonymous {
    async fn headers(&self) -> CredentialsResult<Vec<(HeaderName, HeaderValue)>> {
        Ok(Vec::new())
    }
}

#[derive(Debug)]
struct BearerToken {
    token: String,
}

impl CredentialsProvider for BearerToken {
    async fn headers(&self) -> CredentialsResult<Vec<(HeaderName, HeaderValue)>> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|e| CredentialsError::from_source(false, e))?;
        value.set_sensitive(true);
        Ok(vec![(AUTHORIZATION, value)])
    }
}

/// Test helpers.
///
/// These are intended for the client library's own tests and for
/// applications mocking the transport.
pub mod testing {
    use super::*;

    /// Credentials that attach no headers and never fail.
    pub fn test_credentials() -> Credentials {
        Credentials::anonymous()
    }

    /// Credentials that always fail, with the given transience.
    pub fn error_credentials(is_transient: bool) -> Credentials {
        ErrorCredentials { is_transient }.into()
    }

    #[derive(Debug)]
    struct ErrorCredentials {
        is_transient: bool,
    }

    impl CredentialsProvider for ErrorCredentials {
        async fn headers(&self) -> CredentialsResult<Vec<(HeaderName, HeaderValue)>> {
            Err(CredentialsError::from_msg(
                self.is_transient,
                "test-only credentials always fail",
            ))
        }
    }
}
