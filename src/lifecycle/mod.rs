//! Process lifecycle: `Created -> Starting -> Ready -> Stopping -> Stopped`.
//!
//! [`Lifecycle::start`] is the startup-before-serving barrier: it runs
//! credential provisioning and only transitions to `Ready` on success. The
//! entry points build the routers after `start` returns, so no request is
//! dispatched to any route group before provisioning has completed. A
//! provisioning failure leaves the lifecycle stuck short of `Ready` and the
//! process must exit instead of serving.

use crate::config::CredentialsConfig;
use crate::credentials;
use crate::error::{GatewayError, Result};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Created,
    Starting,
    Ready,
    Stopping,
    Stopped,
}

pub struct Lifecycle {
    config: CredentialsConfig,
    state: LifecycleState,
    credential_path: Option<PathBuf>,
}

impl Lifecycle {
    pub fn new(config: CredentialsConfig) -> Self {
        Self {
            config,
            state: LifecycleState::Created,
            credential_path: None,
        }
    }

    /// Run startup provisioning. One-shot and non-reentrant: legal from
    /// `Created`, or from `Stopped` to model a restart, in which case the
    /// artifact is overwritten rather than duplicated.
    pub fn start(&mut self) -> Result<Option<&PathBuf>> {
        match self.state {
            LifecycleState::Created | LifecycleState::Stopped => {}
            other => {
                return Err(GatewayError::Lifecycle(format!(
                    "start is not legal from {:?}",
                    other
                )));
            }
        }

        self.state = LifecycleState::Starting;
        self.credential_path = credentials::provision(&self.config)?;
        self.state = LifecycleState::Ready;
        info!("Startup complete, accepting traffic");
        Ok(self.credential_path.as_ref())
    }

    /// Run the teardown hook exactly once and transition to `Stopped`.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.state != LifecycleState::Ready {
            return Err(GatewayError::Lifecycle(format!(
                "shutdown is not legal from {:?}",
                self.state
            )));
        }

        self.state = LifecycleState::Stopping;
        credentials::teardown(&self.config)?;
        self.state = LifecycleState::Stopped;
        info!("Shutdown complete");
        Ok(())
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// The resolved artifact path, carried explicitly so collaborators can
    /// take it from application state instead of the ambient environment.
    pub fn credential_path(&self) -> Option<&PathBuf> {
        self.credential_path.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unprovisioned_config() -> CredentialsConfig {
        CredentialsConfig {
            // A variable name nothing in the environment sets, so start()
            // is a provisioning no-op in these state-machine tests.
            secret_env: "EDGESERVE_TEST_LIFECYCLE_UNSET".to_string(),
            ..CredentialsConfig::default()
        }
    }

    #[test]
    fn start_transitions_to_ready() {
        let mut lifecycle = Lifecycle::new(unprovisioned_config());
        assert_eq!(lifecycle.state(), LifecycleState::Created);
        lifecycle.start().unwrap();
        assert_eq!(lifecycle.state(), LifecycleState::Ready);
        assert!(lifecycle.credential_path().is_none());
    }

    #[test]
    fn start_is_not_reentrant() {
        let mut lifecycle = Lifecycle::new(unprovisioned_config());
        lifecycle.start().unwrap();
        assert!(lifecycle.start().is_err());
    }

    #[test]
    fn shutdown_requires_ready() {
        let mut lifecycle = Lifecycle::new(unprovisioned_config());
        assert!(lifecycle.shutdown().is_err());
        lifecycle.start().unwrap();
        lifecycle.shutdown().unwrap();
        assert_eq!(lifecycle.state(), LifecycleState::Stopped);
    }

    #[test]
    fn restart_after_stop_is_legal() {
        let mut lifecycle = Lifecycle::new(unprovisioned_config());
        lifecycle.start().unwrap();
        lifecycle.shutdown().unwrap();
        lifecycle.start().unwrap();
        assert_eq!(lifecycle.state(), LifecycleState::Ready);
    }
}
