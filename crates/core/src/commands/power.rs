use tracing::debug;

use crate::{
    cloud_provider::{CloudProvider, PowerAction},
    error::{ComputeError, Result},
    instance,
};

/// Resolve `name` against a fresh inventory snapshot and run `action` on the
/// first matching instance. Resolution failures surface as
/// [`ComputeError::InstanceNotFound`] without touching the provider action.
pub async fn run_power_action(
    provider: &dyn CloudProvider,
    name: &str,
    action: PowerAction,
) -> Result<()> {
    let instances = provider.list_instances().await?;

    let target = instance::find_by_name(&instances, name).ok_or_else(|| {
        ComputeError::InstanceNotFound {
            name: name.to_string(),
        }
    })?;

    debug!("Resolved instance '{}' to {}", name, target.id);

    let output = match action {
        PowerAction::Start => provider.start_instance(&target.id).await?,
        PowerAction::Stop => provider.stop_instance(&target.id).await?,
    };

    println!(
        "Action '{}' executed on instance '{}'. Response: {}",
        action, name, output
    );
    Ok(())
}
