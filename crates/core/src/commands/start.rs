use crate::{
    cloud_provider::{CloudProvider, PowerAction},
    commands::power,
    error::Result,
};

pub async fn start_instance(provider: &dyn CloudProvider, name: &str) -> Result<()> {
    power::run_power_action(provider, name, PowerAction::Start).await
}
