//! This module contains helper functionality.

mod error;
pub use self::error::*;

mod logging;
pub use self::logging::*;

mod quota;
pub use self::quota::*;

mod timing;
pub use self::timing::*;

mod types;
pub use self::types::*;
