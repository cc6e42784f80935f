use crate::{cloud_provider::CloudProvider, error::Result, table};

pub async fn list_instances(provider: &dyn CloudProvider) -> Result<()> {
    let instances = provider.list_instances().await?;
    print!("{}", table::render(&instances));
    Ok(())
}
