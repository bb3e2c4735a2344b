use k8s_openapi::api::core::v1::{Container, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, Time};
use kube::core::ObjectList;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Represents the 'spec' field of a KFService custom resource definition
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[kube(
    group = "serving.kubeflow.org",
    version = "v1alpha1",
    kind = "KFService",
    plural = "kfservices",
    shortname = "kfservice",
    namespaced,
    status = "KFServiceStatus",
    derive = "PartialEq",
    derive = "Default"
)]
#[serde(rename_all = "camelCase")]
pub struct KFServiceSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canary: Option<CanarySpec>,
    /// Share of traffic routed to `canary`, in percent
    #[serde(default)]
    pub canary_traffic_percent: i32,
}

/// One serving slot: a framework selection plus its scaling bounds.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DefaultSpec {
    #[serde(flatten)]
    pub frameworks: FrameworkSlots,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,
    #[serde(default)]
    pub min_replicas: i32,
    #[serde(default)]
    pub max_replicas: i32,
}

/// The canary slot has the same shape as the default one
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CanarySpec {
    #[serde(flatten)]
    pub default_spec: DefaultSpec,
}

/// The select-one-of-many framework configuration of a serving slot.
///
/// Exactly one slot is expected to be populated, but nothing here enforces it;
/// that belongs to admission. See `FrameworkSlots::selected`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkSlots {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tensorflow: Option<TensorflowSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xgboost: Option<XGBoostSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scikit_learn: Option<ScikitLearnSpec>,
}

/// A user supplied serving container
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomSpec {
    pub container: Container,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TensorflowSpec {
    pub model_uri: String,
    #[serde(default)]
    pub runtime_version: String,
    #[serde(default)]
    pub resources: ResourceRequirements,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct XGBoostSpec {
    pub model_uri: String,
    #[serde(default)]
    pub runtime_version: String,
    #[serde(default)]
    pub resources: ResourceRequirements,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScikitLearnSpec {
    pub model_uri: String,
    #[serde(default)]
    pub runtime_version: String,
    #[serde(default)]
    pub resources: ResourceRequirements,
}

/// Represents the 'status' field of a KFService resource
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KFServiceStatus {
    #[serde(default)]
    pub conditions: Vec<StatusCondition>,
    #[serde(default)]
    pub uri: URISpec,
    #[serde(default)]
    pub default: StatusConfigurationSpec,
    #[serde(default)]
    pub canary: StatusConfigurationSpec,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
pub enum ConditionStatus {
    True,
    False,
    Unknown,
}

impl Default for ConditionStatus {
    fn default() -> ConditionStatus {
        ConditionStatus::Unknown
    }
}

/// One entry of the condition history
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusCondition {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(default)]
    pub status: ConditionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_probe_time: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<Time>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct URISpec {
    #[serde(default)]
    pub internal: String,
    #[serde(default)]
    pub external: String,
}

/// Revision currently backing a serving slot
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusConfigurationSpec {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub replicas: i32,
    #[serde(default)]
    pub traffic: i32,
}

/// A collection of `KFService`s as returned by a list call
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct KFServiceList {
    #[serde(default)]
    pub metadata: ListMeta,
    #[serde(default)]
    pub items: Vec<KFService>,
}

impl From<ObjectList<KFService>> for KFServiceList {
    fn from(list: ObjectList<KFService>) -> Self {
        KFServiceList {
            metadata: list.metadata,
            items: list.items,
        }
    }
}
