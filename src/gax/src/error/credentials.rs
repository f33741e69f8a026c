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

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// An error trying to create authentication headers.
///
/// Credential providers may fail for transient reasons, e.g. the token
/// exchange endpoint is briefly unreachable, or for permanent ones, e.g. the
/// configured token is malformed. The retry loop uses the transience flag to
/// decide whether another attempt may succeed.
#[derive(Debug)]
pub struct CredentialsError {
    is_transient: bool,
    message: Option<String>,
    source: Option<BoxError>,
}

impl CredentialsError {
    /// Creates a new error from a source error.
    ///
    /// # Parameters
    /// * `is_transient` - if `true` the operation may succeed in future
    ///   attempts.
    /// * `source` - the underlying failure.
    pub fn from_source<T: Into<BoxError>>(is_transient: bool, source: T) -> Self {
        Self {
            is_transient,
            message: None,
            source: Some(source.into()),
        }
    }

    /// Creates a new error from a message string.
    pub fn from_msg<T: Into<String>>(is_transient: bool, message: T) -> Self {
        Self {
            is_transient,
            message: Some(message.into()),
            source: None,
        }
    }

    /// Returns `true` when the failure may resolve on a future attempt.
    pub fn is_transient(&self) -> bool {
        self.is_transient
    }
}

impl std::fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let retryability = if self.is_transient {
            "but future attempts may succeed"
        } else {
            "and future attempts will not succeed"
        };
        match (&self.message, &self.source) {
            (Some(m), _) => write!(f, "{m} {retryability}"),
            (None, Some(e)) => write!(f, "cannot create credentials {retryability}: {e}"),
            (None, None) => write!(f, "cannot create credentials {retryability}"),
        }
    }
}

impl std::error::Error for CredentialsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}
