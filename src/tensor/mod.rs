// Shared numeric buffers referenced by loss options (class weights).
// The options never own tensor math; they only carry a handle the kernel reads.

pub mod buffer;

mod tests;

pub use buffer::Tensor;
