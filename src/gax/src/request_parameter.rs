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

type Result = std::result::Result<String, Error>;

/// Formats a value as a request parameter.
///
/// Query and path parameters are always sent as strings; this trait converts
/// the supported scalar types.
pub(crate) trait RequestParameter {
    fn format(&self) -> Result;
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot format as request parameter {0:?}")]
    Format(Box<dyn std::error::Error + Send + Sync>),
}

impl RequestParameter for i32 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for i64 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for u32 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for u64 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for f32 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for f64 {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}
impl RequestParameter for String {
    fn format(&self) -> Result {
        Ok(self.clone())
    }
}
impl RequestParameter for bool {
    fn format(&self) -> Result {
        Ok(format!("{self}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    type Result = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn with_value() -> Result {
        let want = "42".to_string();
        assert_eq!(want, RequestParameter::format(&42_i32)?);
        assert_eq!(want, RequestParameter::format(&42_i64)?);
        assert_eq!(want, RequestParameter::format(&42_u32)?);
        assert_eq!(want, RequestParameter::format(&42_u64)?);
        assert_eq!(want, RequestParameter::format(&42_f32)?);
        assert_eq!(want, RequestParameter::format(&42_f64)?);
        assert_eq!("true", RequestParameter::format(&true)?);
        assert_eq!("A1:B2", RequestParameter::format(&"A1:B2".to_string())?);
        Ok(())
    }
}
