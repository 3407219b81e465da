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

//! POSIX bracket-expression detection for glob-like strings.
//!
//! This crate answers one question: does a string contain a POSIX
//! character class (`[:alpha:]`), a POSIX equivalence class (`[=b=]`),
//! or either one nested inside a set expression (`[[:alpha:]]`)?
//!
//! The check is lexical only. Class names are not validated against the
//! POSIX class list, surrounding brackets do not need to be balanced,
//! and nothing is parsed or expanded.
//!
//! # Marker Format
//!
//! A marker is the minimal unit `[:name:]` or `[=x=]`. The separator
//! must sit directly against the opening bracket, and the name may not
//! contain the separator or either bracket. The conventional outer
//! `[` `]` wrapping is optional.
//!
//! # Example
//!
//! ```rust
//! use posix_bracket::is_posix_bracket;
//!
//! assert!(is_posix_bracket("[[:alpha:]123]"));
//! assert!(is_posix_bracket("[a-c[:digit:]x-z]"));
//! assert!(is_posix_bracket("[:al:]"));
//!
//! // `:` not adjacent to the opening bracket
//! assert!(!is_posix_bracket("foo[[lower:]]bar"));
//! ```

mod marker;

pub use self::marker::is_posix_bracket;
