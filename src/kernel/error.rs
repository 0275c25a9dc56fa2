//=========================================================================
// Kernel Errors
//=========================================================================

use thiserror::Error;

use crate::core::host::{HostError, HostInterface};

/// Reasons `Kernel::exec()` can fail before the loop starts.
#[derive(Debug, Error)]
pub enum KernelError {
    #[error("no host factory registered for {0}")]
    HostUnavailable(HostInterface),

    #[error("host initialization failed: {0}")]
    HostInit(#[from] HostError),
}
