//=========================================================================
// Xenon Engine — Library Root
//
// A small real-time application framework: a composable virtual input
// graph plus a screen-stack game loop over pluggable hosts.
//
// Responsibilities:
// - Expose the kernel facade (`Kernel`, `KernelBuilder`)
// - Expose the input, screen and host contracts under `core`
// - Keep the bundled host backends (`platform`) private; their public
//   types are re-exported through `core::host`
//
// Typical usage:
// ```no_run
// use xenon_engine::prelude::*;
//
// struct Game;
//
// impl Screen for Game {
//     fn update(&mut self, _ctx: &mut ScreenContext, _dt: f32) {}
//     fn render(&mut self, _ctx: &mut ScreenContext, _dt: f32) {}
// }
//
// fn main() -> Result<(), KernelError> {
//     Kernel::new().exec(Game)
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the input graph, screens, updaters and host contracts.
// `prelude` re-exports what a typical application touches.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit and headless hosts.
// `kernel` defines the main entry point and the tick protocol.
//
mod kernel;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use kernel::{Kernel, KernelBuilder, KernelError};
