//=========================================================================
// Transition Queue
//=========================================================================
//
// Screen stack requests made while a screen is running.
//
// A screen cannot touch the stack that is currently calling it, so it
// queues requests through its `ScreenContext`. The kernel drains this
// queue right after the screen call returns.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::Screen;

//=== ScreenTransition ====================================================

/// One screen stack operation.
pub enum ScreenTransition {
    /// Push a screen on top of the stack and load it.
    Push(Box<dyn Screen>),

    /// Unload and remove the top screen.
    Pop,

    /// Pop, then push.
    Swap(Box<dyn Screen>),

    /// Stop the kernel after the current tick.
    Exit,
}

impl fmt::Debug for ScreenTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Push(_) => f.write_str("Push(..)"),
            Self::Pop => f.write_str("Pop"),
            Self::Swap(_) => f.write_str("Swap(..)"),
            Self::Exit => f.write_str("Exit"),
        }
    }
}

//=== TransitionQueue =====================================================

/// FIFO of pending screen transitions.
#[derive(Debug, Default)]
pub struct TransitionQueue {
    queue: Vec<ScreenTransition>,
}

impl TransitionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a transition to be applied once the current screen call returns.
    pub fn push(&mut self, transition: ScreenTransition) {
        self.queue.push(transition);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn clear(&mut self) {
        self.queue.clear()
    }

    /// Takes every queued transition, leaving the queue empty.
    pub fn take(&mut self) -> Vec<ScreenTransition> {
        std::mem::take(&mut self.queue)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
