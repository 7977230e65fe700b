//! FlatBuffers wire schemas for the shared-memory slots.
//!
//! The generated modules are checked in; regenerate after editing the
//! schemas with `flatc --rust -o src/ frame.fbs detection.fbs`.

#[allow(unused_imports, dead_code, clippy::all, unsafe_op_in_unsafe_fn)]
mod frame_generated;

#[allow(unused_imports, dead_code, clippy::all, unsafe_op_in_unsafe_fn)]
mod detection_generated;

pub use detection_generated::bridge::schema::*;
pub use frame_generated::bridge::schema::*;
