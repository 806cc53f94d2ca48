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

use maud::Markup;
use maud::PreEscaped;
use maud::html;

use crate::markdown::markdown_to_html;

/// A question/answer pair filed under a category. Cards are plain values:
/// two cards with the same text are the same card.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Card {
    question: String,
    answer: String,
    /// The name of the category this card belongs to.
    category: String,
}

impl Card {
    pub fn new(
        question: impl Into<String>,
        answer: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            category: category.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn html_question(&self) -> Markup {
        html! {
            (PreEscaped(markdown_to_html(self.question())))
        }
    }

    pub fn html_answer(&self) -> Markup {
        html! {
            (PreEscaped(markdown_to_html(self.answer())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_equality() {
        let a = Card::new("Q", "A", "C");
        let b = Card::new("Q", "A", "C");
        let c = Card::new("Q", "A", "D");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_html() {
        let card = Card::new("Which organ is affected *first*?", "Brain", "Special Topics");
        assert_eq!(
            card.html_question().into_string(),
            "<p>Which organ is affected <em>first</em>?</p>\n"
        );
        assert_eq!(card.html_answer().into_string(), "<p>Brain</p>\n");
    }
}
