// #![deny(unused_crate_dependencies)]

mod client_management;
mod generic;

pub use client_management::*;
pub use generic::*;
