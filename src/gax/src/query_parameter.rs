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

type Result<T> = std::result::Result<T, crate::request_parameter::Error>;

/// Adds a query parameter to a builder.
///
/// Some request fields are sent as query parameters and may need special
/// formatting:
/// - Simple scalars are formatted as usual.
/// - [Option] fields that do not contain a value are not included in the
///   HTTP query.
/// - Repeated fields are formatted as repeated query parameters.
///
/// This function is called from the transport. It is not intended for
/// general use.
pub fn add<T>(
    builder: reqwest::RequestBuilder,
    name: &str,
    parameter: &T,
) -> Result<reqwest::RequestBuilder>
where
    T: QueryParameter,
{
    QueryParameter::add(parameter, builder, name)
}

/// [QueryParameter] is a trait representing types that can be used as a
/// query parameter.
pub trait QueryParameter {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> Result<reqwest::RequestBuilder>;
}

impl<T: QueryParameter> QueryParameter for Option<T> {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> Result<reqwest::RequestBuilder> {
        match &self {
            None => Ok(builder),
            Some(t) => t.add(builder, name),
        }
    }
}

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> Result<reqwest::RequestBuilder> {
        let mut builder = builder;
        for e in self.iter() {
            builder = e.add(builder, name)?;
        }
        Ok(builder)
    }
}

impl<T: crate::request_parameter::RequestParameter> QueryParameter for T {
    fn add(&self, builder: reqwest::RequestBuilder, name: &str) -> Result<reqwest::RequestBuilder> {
        let s = self.format()?;
        Ok(builder.query(&[(name, s)]))
    }
}
