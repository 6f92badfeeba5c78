mod pose_buffer;
pub use pose_buffer::*;

mod input;
pub use input::*;

mod sampler;
pub use sampler::*;

mod stroke;
pub use stroke::*;

mod tool;
pub use tool::*;
