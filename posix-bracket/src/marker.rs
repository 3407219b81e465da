// Copyright 2025 OPPO.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::trace;
use memchr::memmem;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimal marker unit: `[:name:]` or `[=x=]`.
/// The name may not contain the separator or either bracket, so
/// interleaved forms like `[:[lower:]]` stay unmatched.
static MARKER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[(?::[^\[\]:]+:|=[^\[\]=]+=)\]").unwrap());

/// Check if string contains a POSIX character class or equivalence
/// class marker, e.g. `[:alpha:]`, `[[:digit:]]` or `[=b=]`.
///
/// The check is local to the marker: surrounding brackets do not need
/// to be balanced (`[[=b=]` matches), and the class name is not
/// validated against the POSIX class list (`[:al:]` matches).
pub fn is_posix_bracket(s: &str) -> bool {
    // Fast heuristic: every marker starts with `[:` or `[=`
    let bytes = s.as_bytes();
    if memmem::find(bytes, b"[:").is_none() && memmem::find(bytes, b"[=").is_none() {
        return false;
    }

    // Double-check with the compiled marker pattern
    let matched = MARKER_PATTERN.is_match(s);
    if matched {
        trace!("posix bracket marker in {:?}", s);
    }
    matched
}
