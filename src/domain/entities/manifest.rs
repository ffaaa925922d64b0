//! Deployment manifest
//!
//! Declarative description of the resources the provisioning engine creates
//! for one function: the bucket object holding the archive, the execution
//! role, the function itself and its public endpoint. Resource semantics
//! belong to the engine; values here are carried as opaque strings.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ArchiveDescriptor, AssetType};
use crate::domain::value_objects::{HandlerId, ObjectKey};

/// Service principal allowed to assume the execution role
pub const LAMBDA_SERVICE_PRINCIPAL: &str = "lambda.amazonaws.com";

/// Statement granting anonymous invocation of the function URL
pub const PUBLIC_URL_STATEMENT_ID: &str = "FunctionURLAllowPublicAccess";

/// Stack-level settings that feed the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackSpec {
    pub stack: String,
    pub region: String,
    pub bucket_prefix: String,
    pub role_name: String,
    pub managed_policy_arns: Vec<String>,
    pub function_name: String,
    pub runtime: String,
    pub public_url: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetSection {
    pub file_name: String,
    pub content_path: String,
    pub hash: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSection {
    pub bucket_prefix: String,
    pub object_key: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSection {
    pub name: String,
    pub assume_role_service: String,
    pub managed_policy_arns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSection {
    pub name: String,
    pub runtime: String,
    pub handler: String,
    pub s3_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSection {
    pub statement_id: String,
    pub principal: String,
    pub action: String,
    pub function_name: String,
    pub function_url_auth_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSection {
    pub authorization_type: String,
    pub public: bool,
    pub permission: PermissionSection,
}

/// Manifest handed to the provisioning engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentManifest {
    pub schema_version: u32,
    pub stack: String,
    pub region: String,
    pub asset: AssetSection,
    pub bucket: BucketSection,
    pub role: RoleSection,
    pub function: FunctionSection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<EndpointSection>,
    pub outputs: Vec<String>,
}

impl DeploymentManifest {
    pub const SCHEMA_VERSION: u32 = 1;
    pub const FUNCTION_URL_OUTPUT: &'static str = "function_url";

    /// Wire the packaged asset into the stack resources.
    pub fn compose(
        spec: &StackSpec,
        archive: &ArchiveDescriptor,
        key: &ObjectKey,
        handler: &HandlerId,
    ) -> Self {
        let content_path = display_path(archive.content_path());

        let (endpoint, outputs) = if spec.public_url {
            (
                Some(EndpointSection {
                    authorization_type: "NONE".to_string(),
                    public: true,
                    permission: PermissionSection {
                        statement_id: PUBLIC_URL_STATEMENT_ID.to_string(),
                        principal: "*".to_string(),
                        action: "lambda:InvokeFunctionUrl".to_string(),
                        function_name: spec.function_name.clone(),
                        function_url_auth_type: "NONE".to_string(),
                    },
                }),
                vec![Self::FUNCTION_URL_OUTPUT.to_string()],
            )
        } else {
            (None, Vec::new())
        };

        Self {
            schema_version: Self::SCHEMA_VERSION,
            stack: spec.stack.clone(),
            region: spec.region.clone(),
            asset: AssetSection {
                file_name: archive.file_name().to_string(),
                content_path: content_path.clone(),
                hash: archive.hash().to_string(),
                asset_type: archive.asset_type(),
            },
            bucket: BucketSection {
                bucket_prefix: spec.bucket_prefix.clone(),
                object_key: key.to_string(),
                source: content_path,
            },
            role: RoleSection {
                name: spec.role_name.clone(),
                assume_role_service: LAMBDA_SERVICE_PRINCIPAL.to_string(),
                managed_policy_arns: spec.managed_policy_arns.clone(),
            },
            function: FunctionSection {
                name: spec.function_name.clone(),
                runtime: spec.runtime.clone(),
                handler: handler.to_string(),
                s3_key: key.to_string(),
            },
            endpoint,
            outputs,
        }
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ContentHash, VersionLabel};

    fn spec(public_url: bool) -> StackSpec {
        StackSpec {
            stack: "search".to_string(),
            region: "ap-south-1".to_string(),
            bucket_prefix: "search-lambda".to_string(),
            role_name: "search-exec".to_string(),
            managed_policy_arns: vec!["arn:policy/basic".to_string()],
            function_name: "search".to_string(),
            runtime: "nodejs16.x".to_string(),
            public_url,
        }
    }

    fn archive() -> ArchiveDescriptor {
        ArchiveDescriptor::new(
            "/w/dist",
            Path::new("/w/.lambdapack/assets"),
            ContentHash::new("feed"),
            AssetType::Archive,
            "zip",
        )
    }

    #[test]
    fn compose_wires_key_into_bucket_and_function() {
        let archive = archive();
        let key = archive.object_key(&VersionLabel::parse("1.2.3").unwrap());
        let m = DeploymentManifest::compose(&spec(true), &archive, &key, &HandlerId::default());

        assert_eq!(m.bucket.object_key, "feed.zip/1.2.3");
        assert_eq!(m.function.s3_key, m.bucket.object_key);
        assert_eq!(m.function.handler, "index.handler");
        assert_eq!(m.bucket.source, "/w/.lambdapack/assets/feed.zip");
        assert_eq!(m.role.assume_role_service, LAMBDA_SERVICE_PRINCIPAL);
        let endpoint = m.endpoint.as_ref().unwrap();
        assert_eq!(endpoint.authorization_type, "NONE");
        assert_eq!(endpoint.permission.statement_id, PUBLIC_URL_STATEMENT_ID);
        assert_eq!(endpoint.permission.principal, "*");
        assert_eq!(endpoint.permission.action, "lambda:InvokeFunctionUrl");
        assert_eq!(endpoint.permission.function_name, "search");
        assert_eq!(m.outputs, vec!["function_url".to_string()]);
    }

    #[test]
    fn private_function_has_no_endpoint() {
        let archive = archive();
        let key = archive.object_key(&VersionLabel::parse("1").unwrap());
        let m = DeploymentManifest::compose(&spec(false), &archive, &key, &HandlerId::default());
        assert!(m.endpoint.is_none());
        assert!(m.outputs.is_empty());

        let json = m.to_json_pretty().unwrap();
        assert!(!json.contains("endpoint"));
        assert!(json.contains("\"type\": \"archive\""));
    }
}
