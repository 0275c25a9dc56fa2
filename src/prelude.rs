//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use xenon_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Kernel
pub use crate::{Kernel, KernelBuilder, KernelError};

// Screens
pub use crate::core::screen::{Screen, ScreenContext};

// Host contracts
pub use crate::core::host::{HeadlessHost, HostInterface, Window};

// Input system
pub use crate::core::input::{
    AndButton, AxisButton, AxisId, ButtonAxis, ButtonId, Input, InputDevice, InputDevices,
    InputEvent, InputGraph, KeyCode, MouseButton, NotButton, OrButton,
};

// Updaters
pub use crate::core::{InclusiveRange, Updatable, Updater};
