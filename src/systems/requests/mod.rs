mod commands;
mod worker;

pub(crate) use commands::RequestCommand;
pub(crate) use worker::Lane;
