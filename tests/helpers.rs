use std::collections::BTreeMap;

use k8s_openapi::api::core::v1::ResourceRequirements;
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;
use serde_json::Value;
use serde_yaml;

use kfservice_snapshot::crd::kfservice::{
    ConditionStatus, DefaultSpec, FrameworkSlots, FrameworkSpec, KFService, KFServiceSpec, KFServiceStatus,
    StatusCondition, TensorflowSpec,
};

// Get a manifest from the repo root as a json `Value`
pub fn example_config(name: &str) -> Value {
    let config_str = std::fs::read_to_string(format!("{}/{}", env!("CARGO_MANIFEST_DIR"), name))
        .expect("Failed to read config file");
    serde_yaml::from_str(&config_str).expect("Unable to parse config file into yaml")
}

// The repo's example `KFService`
#[allow(dead_code)]
pub fn example_kfservice() -> KFService {
    serde_json::from_value(example_config("example-kfservice.yaml")).expect("Unable to parse example KFService")
}

// CPU requests and limits, e.g. `cpu_bounds("1", "2")`
pub fn cpu_bounds(min: &str, max: &str) -> ResourceRequirements {
    let cpu = |amount: &str| {
        let mut list = BTreeMap::new();
        list.insert("cpu".to_owned(), Quantity(amount.to_owned()));
        list
    };
    ResourceRequirements {
        requests: Some(cpu(min)),
        limits: Some(cpu(max)),
        ..ResourceRequirements::default()
    }
}

// A condition observed and transitioned just now
pub fn condition(type_: &str, status: ConditionStatus) -> StatusCondition {
    let now = Time(chrono::Utc::now());
    StatusCondition {
        type_: type_.to_owned(),
        status,
        last_probe_time: Some(now.clone()),
        last_transition_time: Some(now),
        ..StatusCondition::default()
    }
}

// A `KFService` serving tensorflow with a short condition history
pub fn tensorflow_kfservice(name: &str) -> KFService {
    let tensorflow = TensorflowSpec {
        model_uri: format!("gs://models/{}", name),
        runtime_version: "1.13.0".to_owned(),
        resources: cpu_bounds("1", "2"),
    };
    let spec = KFServiceSpec {
        default: Some(DefaultSpec {
            frameworks: FrameworkSlots::from(FrameworkSpec::Tensorflow(tensorflow)),
            min_replicas: 1,
            max_replicas: 2,
            ..DefaultSpec::default()
        }),
        ..KFServiceSpec::default()
    };

    let mut kfservice = KFService::new(name, spec);
    kfservice.metadata.namespace = Some("default".to_owned());
    kfservice.status = Some(KFServiceStatus {
        conditions: vec![
            condition("Ready", ConditionStatus::Unknown),
            condition("RoutesReady", ConditionStatus::True),
        ],
        ..KFServiceStatus::default()
    });
    kfservice
}
