use std::sync::Arc;

use crate::{admin::AdminApp, config::Config};

pub struct State {
    pub config: Config,
    pub admin: Arc<AdminApp>,
}

impl State {
    pub fn new() -> Arc<Self> {
        let config = Config::load();

        let admin = AdminApp::instance(&config).expect("Credentials misconfigured!");

        Arc::new(Self { config, admin })
    }
}
