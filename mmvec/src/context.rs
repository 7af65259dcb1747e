//! Process-scoped runtime context
//!
//! The converter is a uniprocessor tool. The context is constructed once
//! at program entry, refuses to start when a parallel launcher reports
//! more than one cooperating process, and is torn down when it drops at
//! program exit.

use tracing::debug;

use crate::error::{Error, Result};

/// Environment variables through which common launchers report the
/// number of cooperating processes.
const WORLD_SIZE_VARS: [&str; 3] = ["OMPI_COMM_WORLD_SIZE", "PMI_SIZE", "SLURM_NTASKS"];

/// Handle for process-wide runtime state
#[derive(Debug)]
pub struct Context {
    world_size: usize,
}

impl Context {
    /// Initialize the process context, detecting the launcher world size
    /// from the environment.
    pub fn init() -> Result<Self> {
        Self::with_world_size(detected_world_size())
    }

    /// Initialize with an explicit world size.
    ///
    /// Anything other than exactly one process is rejected; there is no
    /// multi-process mode to fall back to.
    pub fn with_world_size(world_size: usize) -> Result<Self> {
        if world_size != 1 {
            return Err(Error::Parallel { world_size });
        }
        debug!("context initialized");
        Ok(Self { world_size })
    }

    /// Number of cooperating processes, always 1 for a live context
    pub fn world_size(&self) -> usize {
        self.world_size
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        debug!("context torn down");
    }
}

/// Launcher-reported process count, defaulting to 1 when no launcher is
/// involved or its value is unreadable.
fn detected_world_size() -> usize {
    for var in WORLD_SIZE_VARS {
        if let Ok(value) = std::env::var(var) {
            if let Ok(n) = value.trim().parse::<usize>() {
                return n;
            }
        }
    }
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_process_context() {
        let context = Context::with_world_size(1).unwrap();
        assert_eq!(context.world_size(), 1);
    }

    #[test]
    fn test_parallel_launch_rejected() {
        match Context::with_world_size(4) {
            Err(Error::Parallel { world_size }) => assert_eq!(world_size, 4),
            other => panic!("expected Parallel error, got {other:?}"),
        }
        assert!(Context::with_world_size(0).is_err());
    }
}
