pub mod cargo_env {
    pub const CARGO_PKG_NAME: &'static str = env!("CARGO_PKG_NAME");
}

pub mod defaults {
    pub const RUN_COUNT: &'static str = "1";
}
