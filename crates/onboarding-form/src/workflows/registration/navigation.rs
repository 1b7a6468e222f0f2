/// Path of the form page.
pub const FORM_PATH: &str = "/";
/// Destination after a successful submit.
pub const SUCCESS_PATH: &str = "/success";

/// Router collaborator the controller and confirmation view navigate through.
pub trait Navigator {
    fn push(&mut self, destination: &str);
    fn back(&mut self);
    fn current(&self) -> &str;
}

impl<N: Navigator + ?Sized> Navigator for &mut N {
    fn push(&mut self, destination: &str) {
        (**self).push(destination);
    }

    fn back(&mut self) {
        (**self).back();
    }

    fn current(&self) -> &str {
        (**self).current()
    }
}

/// In-memory history stack, the way a browser session tracks pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryNavigator {
    entries: Vec<String>,
    pushes: usize,
}

impl HistoryNavigator {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            entries: vec![start.into()],
            pushes: 0,
        }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of forward navigations performed, for asserting side effects.
    pub fn push_count(&self) -> usize {
        self.pushes
    }
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(FORM_PATH)
    }
}

impl Navigator for HistoryNavigator {
    fn push(&mut self, destination: &str) {
        tracing::debug!(from = %self.current(), to = destination, "navigate");
        self.entries.push(destination.to_string());
        self.pushes += 1;
    }

    fn back(&mut self) {
        // The first entry is the page the session started on.
        if self.entries.len() > 1 {
            self.entries.pop();
        }
        tracing::debug!(to = %self.current(), "navigate back");
    }

    fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or(FORM_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_never_pops_the_starting_page() {
        let mut navigator = HistoryNavigator::default();
        navigator.push(SUCCESS_PATH);
        assert_eq!(navigator.current(), SUCCESS_PATH);

        navigator.back();
        navigator.back();
        assert_eq!(navigator.current(), FORM_PATH);
        assert_eq!(navigator.entries(), [FORM_PATH.to_string()]);
        assert_eq!(navigator.push_count(), 1);
    }
}
