//! The parallel tile pipeline.
//!
//! ```text
//!   dispatcher ──► work queue ──► worker 0..N ──► result queue ──► reducer ──► canvas
//!   (1 thread)     (bounded)      (N threads)     (bounded)        (1 thread)
//! ```
//!
//! The dispatcher enumerates the tile grid into a bounded work queue and
//! closes it by dropping its sender. Workers render each [`WorkItem`] into a
//! private tile buffer and hand it to the reducer, which is the only code
//! that ever writes the canvas. Tiles are disjoint, so the order in which
//! they arrive does not affect the final image.
//!
//! The [`Pipeline`] orchestrator wires the stages together, waits for the
//! workers before closing the result queue, then waits for the reducer.

mod cancel;
mod dispatcher;
mod orchestrator;
mod reducer;
mod work;
mod worker;

pub use cancel::CancelFlag;
pub use dispatcher::{dispatch, Dispatched};
pub use orchestrator::{render, Pipeline, RenderOutput, RenderStats};
pub use reducer::{run_reducer, ReduceStats};
pub use work::WorkItem;
pub use worker::{render_tile, run_worker, WorkerStats};
