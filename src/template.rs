// Copyright 2024 FastLabs Developers
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

use crate::Severity;

/// The template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "[%date%] [%type%] [%namespace%] [%message%]";

/// A message template.
///
/// The placeholders `%date%`, `%type%`, `%namespace%` and `%message%` are replaced on every
/// occurrence; any other text is copied as is. The template is parsed once, so a substituted
/// value that itself contains a placeholder is never expanded again.
///
/// # Examples
///
/// ```
/// use dayroll::Template;
///
/// let template = Template::new("%type% %namespace%: %message%");
/// assert_eq!(template.as_str(), "%type% %namespace%: %message%");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Date,
    Type,
    Namespace,
    Message,
}

/// The values substituted into a [`Template`].
#[derive(Debug)]
pub(crate) struct Fields<'a> {
    pub date: &'a str,
    pub severity: Severity,
    pub namespace: &'a str,
    pub message: &'a str,
}

impl Default for Template {
    fn default() -> Self {
        Template::new(DEFAULT_TEMPLATE)
    }
}

impl From<&str> for Template {
    fn from(source: &str) -> Self {
        Template::new(source)
    }
}

impl From<String> for Template {
    fn from(source: String) -> Self {
        Template::new(source)
    }
}

impl Template {
    /// Parse a new template.
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        let segments = parse(&source);
        Self { source, segments }
    }

    /// Return the template text.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub(crate) fn render(&self, fields: &Fields) -> String {
        let mut line = String::with_capacity(self.source.len() + fields.message.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Date => line.push_str(fields.date),
                Segment::Type => line.push_str(fields.severity.as_str()),
                Segment::Namespace => line.push_str(fields.namespace),
                Segment::Message => line.push_str(fields.message),
            }
        }
        line
    }
}

fn placeholder(text: &str) -> Option<(usize, Segment)> {
    [
        ("%date%", Segment::Date),
        ("%type%", Segment::Type),
        ("%namespace%", Segment::Namespace),
        ("%message%", Segment::Message),
    ]
    .into_iter()
    .find(|(token, _)| text.starts_with(*token))
    .map(|(token, segment)| (token.len(), segment))
}

fn parse(source: &str) -> Vec<Segment> {
    let mut segments = vec![];
    let mut literal = String::new();
    let mut rest = source;

    while let Some(pos) = rest.find('%') {
        literal.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match placeholder(rest) {
            Some((len, segment)) => {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(segment);
                rest = &rest[len..];
            }
            None => {
                literal.push('%');
                rest = &rest[1..];
            }
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    segments
}
