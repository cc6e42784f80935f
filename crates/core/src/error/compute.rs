use thiserror::Error;

#[derive(Debug, Error)]
pub enum ComputeError {
    #[error("error executing AWS CLI command: {reason}")]
    CommandFailed { reason: String },

    #[error("error parsing instance description JSON: {reason}")]
    MalformedResponse { reason: String },

    #[error("instance with Name '{name}' not found")]
    InstanceNotFound { name: String },

    #[error("action '{action}' failed for instance '{instance_id}': {output}")]
    ActionFailed {
        action: String,
        instance_id: String,
        output: String,
    },
}
