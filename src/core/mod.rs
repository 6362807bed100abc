//! Generic real-time game loop: sessions, input latching, scheduling and
//! the render surface contract shared by every minigame.

pub mod constants;
pub mod engine;
pub mod input;
pub mod render;
pub mod runner;
pub mod schedule;
pub mod session;
pub mod spawn;
pub mod world;

pub use engine::{GameLoopEngine, InputOutcome, TickOutcome};
pub use input::{Command, InputEffect, InputLatch};
pub use render::{DisplayList, DrawCall, Paint, RenderSurface};
pub use runner::GameRunner;
pub use schedule::{FrameClock, FrameScheduler, LoopHandle};
pub use session::{GameSession, SessionState, TickInterval};
pub use spawn::SpawnPolicy;
pub use world::{RestartPolicy, World};
