use gemnasium_maven::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter that keeps what it was given
#[derive(Default, Clone)]
pub struct MockOutputPresenter {
    pub content: Arc<Mutex<Option<String>>>,
    pub should_fail: bool,
}

impl MockOutputPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failure() -> Self {
        Self {
            content: Arc::new(Mutex::new(None)),
            should_fail: true,
        }
    }

    pub fn presented(&self) -> Option<String> {
        self.content.lock().unwrap().clone()
    }
}

impl OutputPresenter for MockOutputPresenter {
    fn present(&self, content: &str) -> Result<()> {
        if self.should_fail {
            anyhow::bail!("disk full");
        }
        *self.content.lock().unwrap() = Some(content.to_string());
        Ok(())
    }

    fn destination(&self) -> String {
        "mock://dependencies".to_string()
    }
}
