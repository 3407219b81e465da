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

use posix_bracket::is_posix_bracket;

#[test]
fn test_equivalence_classes() {
    assert!(is_posix_bracket("[[=b=]]"));
    assert!(is_posix_bracket("[[=b=]][[:ascii:]]"));
    assert!(is_posix_bracket("[[:alpha:]][[=b=]][[:ascii:]]"));
    assert!(is_posix_bracket("[[:alpha:]][[=B=]][[:ascii:]]"));
}

#[test]
fn test_truncated_outer_brackets() {
    // The marker itself is intact, outer balance is irrelevant
    assert!(is_posix_bracket("[[=b=]"));
    assert!(is_posix_bracket("[=b=]]"));
}

#[test]
fn test_broken_equivalence_forms() {
    // No closing `=]`
    assert!(!is_posix_bracket("[=b]"));
    assert!(!is_posix_bracket("[=b"));

    // Empty name
    assert!(!is_posix_bracket("[==]"));

    // Separator or bracket inside the name
    assert!(!is_posix_bracket("[=a=b]"));
    assert!(!is_posix_bracket("[=[b=]]"));
}
