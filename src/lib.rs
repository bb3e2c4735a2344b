use futures::future::BoxFuture;
use futures::{FutureExt, StreamExt};
use kube::api::ListParams;
use kube::client::Client;
use kube::runtime::reflector::{self, Store};
use kube::runtime::watcher;
use log::{debug, info, warn};
use serde::Deserialize;

#[macro_use]
pub mod snapshot;
pub mod crd;
pub mod errors;
pub mod utils;
pub mod views;

use crate::crd::kfservice::{load_kfservice_resource, ConditionStatus, KFServiceList, READY_CONDITION};
use crate::crd::metrics::{error_happened, snapshots_taken};
use crate::errors::Error;
use crate::snapshot::working_copy;
use crate::utils::{plural_str, resource_names};
pub use crd::kfservice::KFService;

#[derive(Deserialize, Debug, Clone)]
pub struct ControllerEnvironmentConfig {
    #[serde(default = "default_server_host")]
    pub server_host: String,
    #[serde(default = "default_server_port")]
    pub server_port: u16,
    #[serde(default)]
    pub watch_namespace: Option<String>,
}

fn default_server_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_server_port() -> u16 {
    8888
}

impl Default for ControllerEnvironmentConfig {
    fn default() -> Self {
        ControllerEnvironmentConfig {
            server_host: default_server_host(),
            server_port: default_server_port(),
            watch_namespace: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Namespace to watch, `None` watches every namespace
    pub watch_namespace: Option<String>,
}

impl Config {
    pub fn from_env_config(env_config: ControllerEnvironmentConfig) -> Result<Self, Error> {
        if env_config.server_host.trim().is_empty() {
            return Err(Error::InvalidConfig("SERVER_HOST is empty"));
        }
        if env_config.server_port == 0 {
            return Err(Error::InvalidConfig("SERVER_PORT must not be 0"));
        }
        let watch_namespace = match env_config.watch_namespace {
            Some(namespace) if namespace.trim().is_empty() => {
                return Err(Error::InvalidConfig("WATCH_NAMESPACE is blank"))
            }
            namespace => namespace,
        };
        Ok(Config {
            server_host: env_config.server_host,
            server_port: env_config.server_port,
            watch_namespace,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", &self.server_host, self.server_port)
    }
}

/// Read side of the KFService cache.
///
/// The reflector owns the cached objects and replaces them as watch events
/// arrive; callers only ever get working copies.
#[derive(Clone)]
pub struct Controller {
    store: Store<KFService>,
}

impl Controller {
    pub fn new(store: Store<KFService>) -> Self {
        Controller { store }
    }

    /// Working copies of every cached `KFService`, ordered by namespace then name
    pub fn kfservice_state(&self) -> KFServiceList {
        let mut items: Vec<KFService> = self
            .store
            .state()
            .iter()
            .map(|cached| working_copy::<KFService>(cached))
            .collect();
        items.sort_by(|a, b| {
            (a.metadata.namespace.as_deref(), a.metadata.name.as_deref())
                .cmp(&(b.metadata.namespace.as_deref(), b.metadata.name.as_deref()))
        });

        snapshots_taken("list", items.len());
        debug!(
            "Handing out {} ({} ready): {}",
            plural_str(items.len(), "kfservices", Some("working copies of ".to_owned())),
            count_ready(&items),
            resource_names(&items)
        );
        KFServiceList {
            items,
            ..KFServiceList::default()
        }
    }

    /// Working copy of the cached `KFService` called `name`.
    /// When several namespaces hold that name, the first namespace wins.
    pub fn kfservice(&self, name: &str) -> Option<KFService> {
        let cached = self.store.state();
        let found = cached
            .iter()
            .filter(|kfservice| kfservice.metadata.name.as_deref() == Some(name))
            .min_by(|a, b| a.metadata.namespace.cmp(&b.metadata.namespace))
            .map(|kfservice| working_copy::<KFService>(kfservice));

        if found.is_some() {
            snapshots_taken("get", 1);
        }
        found
    }
}

/// Number of `kfservices` whose `Ready` condition is `True`
fn count_ready(kfservices: &[KFService]) -> usize {
    kfservices
        .iter()
        .filter_map(|kfservice| kfservice.status.as_ref())
        .filter_map(|status| status.condition(READY_CONDITION))
        .filter(|ready| ready.status == ConditionStatus::True)
        .count()
}

/// Build the `Controller` and the future driving its KFService watch.
/// The future must be polled for the cache to fill.
pub fn init_controller(client: Client, config: &Config) -> (Controller, BoxFuture<'static, ()>) {
    let resource = load_kfservice_resource(&client, config.watch_namespace.as_deref());
    let writer = reflector::store::Writer::<KFService>::default();
    let reader = writer.as_reader();
    let watch = reflector::reflector(writer, watcher::watcher(resource, ListParams::default()));

    match &config.watch_namespace {
        Some(namespace) => info!("Watching KFServices in namespace '{}'", namespace),
        None => info!("Watching KFServices in all namespaces"),
    }

    let drive = async move {
        let mut watch = watch.boxed();
        while let Some(event) = watch.next().await {
            if let Err(err) = event {
                warn!("KFService watch failed: {:?}", err);
                error_happened("kfservice_watch");
            }
        }
        warn!("KFService watch stream ended");
    }
    .boxed();

    (Controller::new(reader), drive)
}
