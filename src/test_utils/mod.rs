//! Test utilities
//! Shared testing helpers and mocks

use std::cell::{Cell, RefCell};

use crate::anu::QrnSource;
use crate::error::{QError, Result};

/// Scripted randomness source
/// Hands out a counting byte sequence and records every request
pub struct FakeSource {
    next: Cell<u8>,
    pub requests: RefCell<Vec<usize>>,
    fail_with: Option<String>,
}

impl FakeSource {
    /// A source whose bytes count up from zero, wrapping at 255
    pub fn new() -> Self {
        FakeSource {
            next: Cell::new(0),
            requests: RefCell::new(Vec::new()),
            fail_with: None,
        }
    }

    /// A source whose every fetch fails with a `ParseResponseError`
    pub fn failing(detail: &str) -> Self {
        FakeSource {
            fail_with: Some(detail.to_string()),
            ..FakeSource::new()
        }
    }

    /// Total number of bytes requested so far
    pub fn fetched(&self) -> usize {
        self.requests.borrow().iter().sum()
    }
}

impl QrnSource for FakeSource {
    fn request(&self, count: usize) -> Result<Vec<u8>> {
        self.requests.borrow_mut().push(count);
        if let Some(detail) = &self.fail_with {
            return Err(QError::ParseResponseError(detail.clone()).into());
        }
        let bytes = (0..count)
            .map(|_| {
                let b = self.next.get();
                self.next.set(b.wrapping_add(1));
                b
            })
            .collect();
        Ok(bytes)
    }
}
