use std::fmt::{self, Display, Formatter};

use async_trait::async_trait;

use crate::{error::Result, instance::InstanceInfo};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Start,
    Stop,
}

impl PowerAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            PowerAction::Start => "start",
            PowerAction::Stop => "stop",
        }
    }
}

impl Display for PowerAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[async_trait]
pub trait CloudProvider: Send + Sync {
    async fn list_instances(&self) -> Result<Vec<InstanceInfo>>;
    async fn start_instance(&self, instance_id: &str) -> Result<String>;
    async fn stop_instance(&self, instance_id: &str) -> Result<String>;
}
