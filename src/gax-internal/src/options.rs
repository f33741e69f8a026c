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

pub use gax::credentials::Credentials;

/// The client configuration for [crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<Credentials>;

pub(crate) const LOGGING_VAR: &str = "GOOGLE_SHEETS_RUST_LOGGING";

/// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The environment probe is tested only through the explicit flag; tests
    // do not mutate the process environment because they run concurrently.
    #[test]
    fn config_tracing() {
        let config = ClientConfig::default();
        if std::env::var(LOGGING_VAR).is_err() {
            assert!(!tracing_enabled(&config), "expected tracing to be disabled");
        }
        let mut config = ClientConfig::default();
        config.tracing = true;
        assert!(tracing_enabled(&config), "expected tracing to be enabled");
    }
}
