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

//! Path parameter encoding.
//!
//! Parameters used to build the request path are substituted into a URL
//! template. Caller-supplied values such as A1 ranges (`Sheet1!A1:B2`)
//! contain characters with special meaning in URLs and must be percent
//! encoded.

/// The set of characters that are percent encoded in path parameters.
///
/// Encode the characters with special meaning in a URL path or query when
/// they appear in a path parameter:
///     !, #, $, &, ', (, ), *, +, ,, /, :, ;, =, ?, @, [, ], and space.
const ENCODED_CHARS: percent_encoding::AsciiSet = percent_encoding::CONTROLS
    .add(b'!')
    .add(b'#')
    .add(b'$')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'=')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b' ');

/// Percent encode a path parameter value.
///
/// # Example
/// ```
/// # use google_sheets_gax::path_parameter::enc;
/// assert_eq!(enc("Sheet1!A1:B2"), "Sheet1%21A1%3AB2");
/// ```
pub fn enc(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, &ENCODED_CHARS).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("simple", "simple")]
    #[test_case("Sheet1!A1:B2", "Sheet1%21A1%3AB2")]
    #[test_case("'My Sheet'!A1", "%27My%20Sheet%27%21A1")]
    #[test_case("a/b", "a%2Fb")]
    #[test_case("a?b=c&d", "a%3Fb%3Dc%26d")]
    fn encodes(input: &str, want: &str) {
        assert_eq!(enc(input), want);
    }

    #[test]
    fn preserves_unicode() {
        // Multi-byte characters are UTF-8 percent encoded.
        assert_eq!(enc("déjà"), "d%C3%A9j%C3%A0");
    }
}
