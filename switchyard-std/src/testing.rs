//! Testing utilities for switchyard.
//!
//! This module provides spies for verifying how a table evaluates.
//!
//! # Features
//!
//! - [`CountingPredicate`]: wraps a predicate and counts how often it ran
//! - [`RecordingAction`]: records every subject it was invoked with

use std::sync::{
    Arc, Mutex, PoisonError,
    atomic::{AtomicUsize, Ordering},
};
use switchyard_core::{Action, Predicate};

// ============================================================================
// Counting Predicate
// ============================================================================

/// A predicate that counts its evaluations and delegates to an inner one.
///
/// Useful for checking that rules after the first match are never tested.
///
/// # Example
///
/// ```rust,ignore
/// let spy = CountingPredicate::new(always());
/// let counter = spy.clone();
///
/// // Use in a table...
/// table.evaluate(&subject);
///
/// assert_eq!(counter.count(), 1);
/// ```
pub struct CountingPredicate<P> {
    inner: Arc<P>,
    count: Arc<AtomicUsize>,
}

impl<P> CountingPredicate<P> {
    /// Wrap `inner`.
    pub fn new(inner: P) -> Self {
        Self {
            inner: Arc::new(inner),
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of evaluations so far, across all clones.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<P> Clone for CountingPredicate<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            count: self.count.clone(),
        }
    }
}

impl<S, P: Predicate<S>> Predicate<S> for CountingPredicate<P> {
    fn test(&self, subject: &S) -> bool {
        self.count.fetch_add(1, Ordering::SeqCst);
        self.inner.test(subject)
    }
}

// ============================================================================
// Recording Action
// ============================================================================

/// An action that records the subjects it receives and returns a fixed
/// output.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = RecordingAction::new("matched".to_string());
/// let seen = recorder.clone();
///
/// // Use in a table...
/// table.evaluate(&subject);
///
/// assert_eq!(seen.subjects(), vec![subject]);
/// ```
pub struct RecordingAction<S, O> {
    subjects: Arc<Mutex<Vec<S>>>,
    output: O,
}

impl<S: Clone, O: Clone> RecordingAction<S, O> {
    /// Create a recorder that returns `output`.
    pub fn new(output: O) -> Self {
        Self {
            subjects: Arc::new(Mutex::new(Vec::new())),
            output,
        }
    }

    /// Clones of the recorded subjects, in invocation order.
    pub fn subjects(&self) -> Vec<S> {
        self.subjects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of invocations so far.
    pub fn count(&self) -> usize {
        self.subjects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Clear all recorded subjects.
    pub fn clear(&self) {
        self.subjects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl<S, O: Clone> Clone for RecordingAction<S, O> {
    fn clone(&self) -> Self {
        Self {
            subjects: self.subjects.clone(),
            output: self.output.clone(),
        }
    }
}

impl<S, O> Action<S, O> for RecordingAction<S, O>
where
    S: Clone + Send + 'static,
    O: Clone + Send + Sync + 'static,
{
    fn act(&self, subject: &S) -> O {
        self.subjects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(subject.clone());
        self.output.clone()
    }
}
