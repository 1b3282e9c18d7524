//! Tool implementations shared by the CLI and the JSON-RPC server

pub mod verify;
