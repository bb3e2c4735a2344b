pub mod kfservice;
pub use kfservice::*;

use kube::api::Api;
use kube::client::Client;

use crate::snapshot::Snapshot;

snapshot_record!(KFServiceSpec { default, canary, canary_traffic_percent });
snapshot_record!(DefaultSpec { frameworks, service_account_name, min_replicas, max_replicas });
snapshot_record!(CanarySpec { default_spec });
snapshot_record!(CustomSpec { container });
snapshot_record!(TensorflowSpec { model_uri, runtime_version, resources });
snapshot_record!(XGBoostSpec { model_uri, runtime_version, resources });
snapshot_record!(ScikitLearnSpec { model_uri, runtime_version, resources });
snapshot_record!(KFServiceStatus { conditions, uri, default, canary });
snapshot_record!(StatusCondition { type_, status, last_probe_time, last_transition_time, reason, message });
snapshot_record!(URISpec { internal, external });
snapshot_record!(StatusConfigurationSpec { name, replicas, traffic });
snapshot_record!(KFServiceList { metadata, items });
snapshot_leaf!(ConditionStatus, FrameworkKind);

impl Snapshot for FrameworkSlots {
    /// Copies every populated slot, whether zero, one or several of them are set.
    fn snapshot(&self) -> Self {
        FrameworkSlots {
            custom: self.custom.snapshot(),
            tensorflow: self.tensorflow.snapshot(),
            xgboost: self.xgboost.snapshot(),
            scikit_learn: self.scikit_learn.snapshot(),
        }
    }
}

impl Snapshot for KFService {
    fn snapshot(&self) -> Self {
        KFService {
            metadata: self.metadata.snapshot(),
            spec: self.spec.snapshot(),
            status: self.status.snapshot(),
        }
    }
}

/// The closed set of serving frameworks a slot can select
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameworkKind {
    Custom,
    Tensorflow,
    XGBoost,
    ScikitLearn,
}

/// A single framework selection, for building slot sets
#[derive(Clone, Debug, PartialEq)]
pub enum FrameworkSpec {
    Custom(CustomSpec),
    Tensorflow(TensorflowSpec),
    XGBoost(XGBoostSpec),
    ScikitLearn(ScikitLearnSpec),
}

impl From<FrameworkSpec> for FrameworkSlots {
    fn from(framework: FrameworkSpec) -> Self {
        let mut slots = FrameworkSlots::default();
        match framework {
            FrameworkSpec::Custom(spec) => slots.custom = Some(spec),
            FrameworkSpec::Tensorflow(spec) => slots.tensorflow = Some(spec),
            FrameworkSpec::XGBoost(spec) => slots.xgboost = Some(spec),
            FrameworkSpec::ScikitLearn(spec) => slots.scikit_learn = Some(spec),
        }
        slots
    }
}

impl FrameworkSlots {
    /// Kinds of every populated slot, in declaration order
    pub fn populated(&self) -> Vec<FrameworkKind> {
        let slots = [
            (self.custom.is_some(), FrameworkKind::Custom),
            (self.tensorflow.is_some(), FrameworkKind::Tensorflow),
            (self.xgboost.is_some(), FrameworkKind::XGBoost),
            (self.scikit_learn.is_some(), FrameworkKind::ScikitLearn),
        ];
        slots.iter().filter(|(set, _)| *set).map(|(_, kind)| *kind).collect()
    }

    /// The selected framework, when exactly one slot is populated.
    pub fn selected(&self) -> Option<FrameworkKind> {
        match self.populated().as_slice() {
            [kind] => Some(*kind),
            _ => None,
        }
    }
}

/// Condition type summarising overall readiness
pub const READY_CONDITION: &str = "Ready";

impl KFServiceStatus {
    pub fn condition(&self, type_: &str) -> Option<&StatusCondition> {
        self.conditions.iter().find(|condition| condition.type_ == type_)
    }
}

/// `Api<KFService>` scoped to `namespace`, or to the whole cluster when `None`
pub fn load_kfservice_resource(client: &Client, namespace: Option<&str>) -> Api<KFService> {
    match namespace {
        Some(namespace) => Api::namespaced(client.clone(), namespace),
        None => Api::all(client.clone()),
    }
}
