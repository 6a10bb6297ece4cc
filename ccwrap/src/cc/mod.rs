pub mod args;

mod dispatch;
pub use dispatch::{Dispatcher, Invocation, Reason};

mod error;
pub use error::{Error, ErrorKind};

pub mod flagfile;

mod toolchain;
pub use toolchain::{ToolFamily, which};
