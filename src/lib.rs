//! Collects the messages a compiler reports, forwards them to a log sink and
//! remembers the errors so the build can fail afterwards.

mod collector;
pub use collector::*;
mod error;
pub use error::*;
mod location;
pub use location::*;
mod severity;
pub use severity::*;
mod sink;
pub use sink::*;
