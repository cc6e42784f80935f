use ec2ctl_core::instance::{InstanceInfo, Tag};
use serde::Deserialize;

/// Wire shape of `aws ec2 describe-instances --output json`. Leaf fields the
/// CLI omits (no public IP, no tags) decode to empty values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct DescribeInstancesResponse {
    #[serde(default)]
    reservations: Vec<Reservation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Reservation {
    #[serde(default)]
    instances: Vec<Ec2Instance>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Ec2Instance {
    #[serde(default)]
    instance_id: String,
    #[serde(default)]
    state: InstanceState,
    #[serde(default)]
    tags: Vec<Ec2Tag>,
    #[serde(default)]
    private_ip_address: String,
    #[serde(default)]
    public_ip_address: String,
    #[serde(default)]
    placement: Placement,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct InstanceState {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Ec2Tag {
    #[serde(default)]
    key: String,
    #[serde(default)]
    value: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Placement {
    #[serde(default)]
    availability_zone: String,
}

impl DescribeInstancesResponse {
    /// Flatten all reservations into one sequence, preserving response order.
    pub(crate) fn into_instances(self) -> Vec<InstanceInfo> {
        self.reservations
            .into_iter()
            .flat_map(|reservation| reservation.instances)
            .map(|instance| InstanceInfo {
                id: instance.instance_id,
                state: instance.state.name,
                private_ip: instance.private_ip_address,
                public_ip: instance.public_ip_address,
                availability_zone: instance.placement.availability_zone,
                tags: instance
                    .tags
                    .into_iter()
                    .map(|tag| Tag {
                        key: tag.key,
                        value: tag.value,
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "Reservations": [
            {
                "ReservationId": "r-1",
                "Instances": [
                    {
                        "InstanceId": "i-0aaa",
                        "State": { "Code": 16, "Name": "running" },
                        "Tags": [
                            { "Key": "env", "Value": "prod" },
                            { "Key": "Name", "Value": "web-1" }
                        ],
                        "PrivateIpAddress": "10.0.1.10",
                        "PublicIpAddress": "54.1.2.3",
                        "Placement": { "AvailabilityZone": "us-east-1a" }
                    },
                    {
                        "InstanceId": "i-0bbb",
                        "State": { "Name": "stopped" },
                        "PrivateIpAddress": "10.0.1.11",
                        "Placement": { "AvailabilityZone": "us-east-1b" }
                    }
                ]
            },
            {
                "Instances": [
                    {
                        "InstanceId": "i-0ccc",
                        "State": { "Name": "running" },
                        "Tags": [ { "Key": "Name", "Value": "db-1" } ],
                        "PrivateIpAddress": "10.0.2.10",
                        "PublicIpAddress": "54.4.5.6",
                        "Placement": { "AvailabilityZone": "us-east-1a" }
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn flattens_reservations_in_response_order() {
        let response: DescribeInstancesResponse = serde_json::from_str(RESPONSE).unwrap();
        let instances = response.into_instances();

        assert_eq!(instances.len(), 3);
        assert_eq!(instances[0].id, "i-0aaa");
        assert_eq!(instances[1].id, "i-0bbb");
        assert_eq!(instances[2].id, "i-0ccc");
    }

    #[test]
    fn decodes_fields_and_tags() {
        let response: DescribeInstancesResponse = serde_json::from_str(RESPONSE).unwrap();
        let instances = response.into_instances();

        let web = &instances[0];
        assert_eq!(web.state, "running");
        assert_eq!(web.private_ip, "10.0.1.10");
        assert_eq!(web.public_ip, "54.1.2.3");
        assert_eq!(web.availability_zone, "us-east-1a");
        assert_eq!(web.display_name(), Some("web-1"));
    }

    #[test]
    fn missing_optionals_decode_to_empty_values() {
        let response: DescribeInstancesResponse = serde_json::from_str(RESPONSE).unwrap();
        let instances = response.into_instances();

        let stopped = &instances[1];
        assert_eq!(stopped.public_ip, "");
        assert!(stopped.tags.is_empty());
        assert_eq!(stopped.display_name(), None);
    }

    #[test]
    fn empty_response_yields_no_instances() {
        let response: DescribeInstancesResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_instances().is_empty());
    }
}
