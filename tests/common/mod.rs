#![allow(dead_code)]

pub use shellbar_test_utils::builders;
pub use shellbar_test_utils::scripted_runner::ScriptedRunner;
pub use shellbar_test_utils::{init_tracing, with_timeout};
