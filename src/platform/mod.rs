//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Bundled host backends.
//
// Architecture:
// ```text
//  WinitHost     (desktop)                HeadlessHost  (no window)
//   ├─ EventLoop, pumped once per tick     ├─ Receiver<HostEvent>
//   ├─ InputProcessor                      ├─ HeadlessWindow
//   │    winit events → InputEvent         └─ fixed-step scheduler
//   └─ WinitWindow
//          │                                       │
//          └──────────── HostBindings ─────────────┘
//                 window / StandardInputs / scheduler
// ```
//
// Both hosts register the same keyboard and mouse devices, so screens
// behave identically under either one. Only the event source differs.
//
//=========================================================================

//=== Submodules ==========================================================

mod headless;
mod input_processor;
mod winit_host;

//=== Public API ==========================================================

pub use headless::{HeadlessHost, HeadlessRemote, HeadlessWindow, HostEvent};
pub use winit_host::WinitHost;
