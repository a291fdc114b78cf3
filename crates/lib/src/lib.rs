pub mod cli;
pub mod input;
mod macros;

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::input::{IStr, Skip, Split, W};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub use arrayvec::ArrayVec;
    pub use bstr::ByteSlice;
}
