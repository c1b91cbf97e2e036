//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for interacting with the trading runtime
//! - **Use Cases**: The open → verify → close → end-of-run round trip

pub mod ports;
pub mod use_cases;

pub use ports::*;
pub use use_cases::*;
