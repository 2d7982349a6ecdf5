// Interface adapters: wire protocol and update fan-out.

pub mod protocol;
pub mod serializer;
pub mod state;
pub mod utils;
