//! Connection cleanup utilities for graceful shutdown.

use tracing::{error, info};

/// Generic cleanup coordinator for multiple connections.
///
/// Runs all cleanup tasks concurrently and waits for all to complete.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::CleanupCoordinator;
///
/// let mut cleanup = CleanupCoordinator::new();
/// cleanup.add_task("mongodb", async move { client.shutdown().await });
/// cleanup.run().await;
/// ```
pub struct CleanupCoordinator {
    tasks: Vec<(&'static str, tokio::task::JoinHandle<()>)>,
}

impl CleanupCoordinator {
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Add a named cleanup task. The task is spawned immediately and
    /// tracked for completion.
    pub fn add_task<F>(&mut self, name: &'static str, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(task);
        self.tasks.push((name, handle));
    }

    /// Wait for all cleanup tasks. A panicking task is logged but does
    /// not stop the others.
    pub async fn run(self) {
        info!("Running {} cleanup tasks", self.tasks.len());

        for (name, handle) in self.tasks {
            match handle.await {
                Ok(_) => {
                    info!("Cleanup task '{}' completed successfully", name);
                }
                Err(e) => {
                    error!("Cleanup task '{}' failed: {}", name, e);
                }
            }
        }

        info!("All cleanup tasks completed");
    }
}

impl Default for CleanupCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_run_waits_for_all_tasks() {
        let completed = Arc::new(AtomicUsize::new(0));
        let mut cleanup = CleanupCoordinator::new();

        for name in ["first", "second"] {
            let counter = Arc::clone(&completed);
            cleanup.add_task(name, async move {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        }

        cleanup.run().await;
        assert_eq!(completed.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_panicking_task_does_not_stop_the_others() {
        let completed = Arc::new(AtomicUsize::new(0));
        let mut cleanup = CleanupCoordinator::new();

        cleanup.add_task("panicking", async { panic!("connection already closed") });
        let counter = Arc::clone(&completed);
        cleanup.add_task("surviving", async move {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        cleanup.run().await;
        assert_eq!(completed.load(Ordering::SeqCst), 1);
    }
}
