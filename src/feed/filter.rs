//! Subject tabs and title search that narrow the feed before navigation.

use crate::models::FeedItem;

/// Tab label that shows every subject.
pub const ALL_SUBJECTS: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubjectFilter {
    #[default]
    All,
    Subject(String),
}

impl SubjectFilter {
    pub fn from_label(label: &str) -> Self {
        if label == ALL_SUBJECTS {
            SubjectFilter::All
        } else {
            SubjectFilter::Subject(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SubjectFilter::All => ALL_SUBJECTS,
            SubjectFilter::Subject(subject) => subject,
        }
    }

    pub fn matches(&self, subject: &str) -> bool {
        match self {
            SubjectFilter::All => true,
            SubjectFilter::Subject(wanted) => wanted == subject,
        }
    }
}

/// Tab labels: `"all"` then each distinct subject in order of first appearance.
pub fn subjects(items: &[FeedItem]) -> Vec<String> {
    let mut labels = vec![ALL_SUBJECTS.to_string()];
    for item in items {
        if !item.subject.is_empty() && !labels.contains(&item.subject) {
            labels.push(item.subject.clone());
        }
    }
    labels
}

/// Current subject tab plus search query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedFilter {
    subject: SubjectFilter,
    query: String,
}

impl FeedFilter {
    pub fn subject(&self) -> &SubjectFilter {
        &self.subject
    }

    pub fn set_subject(&mut self, subject: SubjectFilter) {
        self.subject = subject;
    }

    /// Step to the neighbouring tab in `labels`, wrapping at either end.
    pub fn cycle_subject(&mut self, labels: &[String], forward: bool) {
        if labels.is_empty() {
            return;
        }
        let current = labels
            .iter()
            .position(|label| label == self.subject.label())
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % labels.len()
        } else {
            (current + labels.len() - 1) % labels.len()
        };
        self.subject = SubjectFilter::from_label(&labels[next]);
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn matches(&self, item: &FeedItem) -> bool {
        if !self.subject.matches(&item.subject) {
            return false;
        }
        let query = self.query.trim();
        query.is_empty() || item.title.to_lowercase().contains(&query.to_lowercase())
    }

    pub fn apply(&self, items: &[FeedItem]) -> Vec<FeedItem> {
        items.iter().filter(|item| self.matches(item)).cloned().collect()
    }
}
