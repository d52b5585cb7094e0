//! One module per action. Each exposes an `execute` function.

pub mod clean;
pub mod ignore;
pub mod update;
pub mod view;
