pub mod asset;
pub mod codec;
mod error;
pub mod msg;
pub mod packet;
#[cfg(test)]
mod testing;
pub mod wire;

pub use crate::codec::{decode, encode, from_slice, to_binary, Message};
pub use crate::error::CodecError;
