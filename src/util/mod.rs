mod callback;
pub use callback::*;

mod result_ext;
pub use result_ext::*;
