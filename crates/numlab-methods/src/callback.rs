//! Per-iteration hooks for iterative solvers.
//!
//! Solvers report every new iterate to an [`IterationCallback`]. The
//! callback decides what to do with it: nothing, print it, or keep it.

use numlab_core::Scalar;

/// Trait for observing the iterates of a solver.
pub trait IterationCallback<T: Scalar> {
    /// Called once per iteration with the one-based iteration number and
    /// the iterate it produced.
    fn on_iteration(&mut self, iteration: usize, x: T) {
        let _ = (iteration, x);
    }
}

/// A callback that ignores every iterate.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCallback;

impl<T: Scalar> IterationCallback<T> for NoOpCallback {}

/// A callback that prints `Iteration <n>: x = <x>` to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintIterationCallback;

impl<T: Scalar> IterationCallback<T> for PrintIterationCallback {
    fn on_iteration(&mut self, iteration: usize, x: T) {
        println!("Iteration {}: x = {}", iteration, x);
    }
}

/// A callback that records every iterate in order.
#[derive(Debug, Clone, Default)]
pub struct IterationHistory<T> {
    /// Iterates in the order they were produced
    pub iterates: Vec<T>,
}

impl<T: Scalar> IterationCallback<T> for IterationHistory<T> {
    fn on_iteration(&mut self, iteration: usize, x: T) {
        debug_assert_eq!(iteration, self.iterates.len() + 1);
        self.iterates.push(x);
    }
}
