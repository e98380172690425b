/// Ordered list of user-defined print categories, referenced by index
/// from queue entries.
///
/// The catalog has its own lifecycle (edited via the settings surface,
/// persisted by the host); entries hold a positional back-reference into
/// it, so every lookup here is bounds-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintTypeCatalog {
    labels: Vec<String>,
}

impl Default for PrintTypeCatalog {
    fn default() -> Self {
        Self {
            labels: ["Urgent", "Customer", "Student", "Internal", "Other"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl PrintTypeCatalog {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at `index`, or an empty label when the catalog no longer
    /// covers that index.
    pub fn label_at(&self, index: usize) -> &str {
        self.labels.get(index).map(String::as_str).unwrap_or("")
    }

    /// Index of the first label equal to `label`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.labels.iter().position(|l| l == label)
    }

    pub fn add(&mut self, label: String) {
        self.labels.push(label);
    }

    /// Removes the first label equal to `label`. Returns whether anything
    /// was removed.
    pub fn remove(&mut self, label: &str) -> bool {
        match self.index_of(label) {
            Some(index) => {
                self.labels.remove(index);
                true
            }
            None => false,
        }
    }

    /// Swaps the label at `index` one position towards the front.
    /// No-op at the first position or out of range.
    pub fn move_up(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.labels.len() {
            return false;
        }
        self.labels.swap(index - 1, index);
        true
    }

    /// Swaps the label at `index` one position towards the back.
    /// No-op at the last position or out of range.
    pub fn move_down(&mut self, index: usize) -> bool {
        if index + 1 >= self.labels.len() {
            return false;
        }
        self.labels.swap(index, index + 1);
        true
    }
}
