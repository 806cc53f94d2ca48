// Copyright 2025 Fernando Borretti
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

use std::fmt::Display;
use std::fmt::Formatter;

/// Position within a study deck. `current` is one-based; an empty session
/// is `0 of 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
}

impl Progress {
    pub fn empty() -> Self {
        Self {
            current: 0,
            total: 0,
        }
    }

    /// The fraction of the deck seen so far, in `(0, 1]` for a non-empty
    /// deck and `0` otherwise.
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.current as f64 / self.total as f64
        }
    }

    /// Whether the deck has a card before the current one.
    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    /// Whether the deck has a card after the current one.
    pub fn has_next(&self) -> bool {
        self.current < self.total
    }
}

impl Display for Progress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} of {}", self.current, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let p = Progress::empty();
        assert_eq!(p.fraction(), 0.0);
        assert!(!p.has_previous());
        assert!(!p.has_next());
        assert_eq!(p.to_string(), "0 of 0");
    }

    #[test]
    fn test_middle() {
        let p = Progress {
            current: 2,
            total: 4,
        };
        assert_eq!(p.fraction(), 0.5);
        assert!(p.has_previous());
        assert!(p.has_next());
        assert_eq!(p.to_string(), "2 of 4");
    }

    #[test]
    fn test_last() {
        let p = Progress {
            current: 3,
            total: 3,
        };
        assert_eq!(p.fraction(), 1.0);
        assert!(p.has_previous());
        assert!(!p.has_next());
    }
}
