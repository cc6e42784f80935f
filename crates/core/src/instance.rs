use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub key: String,
    pub value: String,
}

/// One instance record from a single inventory snapshot. Fields the provider
/// omits are carried as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceInfo {
    pub id: String,
    pub state: String,
    pub private_ip: String,
    pub public_ip: String,
    pub availability_zone: String,
    pub tags: Vec<Tag>,
}

impl InstanceInfo {
    /// Value of the first tag whose key is "Name".
    pub fn display_name(&self) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == "Name")
            .map(|tag| tag.value.as_str())
    }

    fn has_name(&self, name: &str) -> bool {
        self.tags
            .iter()
            .any(|tag| tag.key == "Name" && tag.value == name)
    }
}

/// First instance, in response order, carrying a "Name" tag equal to `name`.
/// First match wins when several instances share a name.
pub fn find_by_name<'a>(instances: &'a [InstanceInfo], name: &str) -> Option<&'a InstanceInfo> {
    instances.iter().find(|instance| instance.has_name(name))
}
