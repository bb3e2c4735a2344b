//! Aliasing-free working copies of cached resources.
//!
//! A reflector cache hands out values that its watch loop keeps replacing.
//! Anything that wants to hold on to, diff or mutate such a value takes a
//! [`Snapshot`] of it first: the copy shares no storage with the source, so it
//! needs no further locking no matter how many threads read it.
//!
//! Snapshotting is total and has no effect besides allocating the copy.
use k8s_openapi::api::core::v1::{Container, ResourceRequirements};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta, Time};

/// A value whose copy owns every piece of its storage.
///
/// The `Send + Sync + 'static` bound keeps borrowed and `Rc`-shared fields out
/// of implementors. Implementors must not hold shared interior mutability
/// (`Arc<Mutex<_>>` and friends) either, since copying those would alias.
pub trait Snapshot: Send + Sync + 'static {
    /// Produce a structurally equal, independently owned copy of `self`.
    fn snapshot(&self) -> Self;
}

/// Snapshot a value living behind a cache handle, e.g. an `Arc<K>` out of a
/// reflector `Store`.
pub fn working_copy<T: Snapshot>(cached: &T) -> T {
    cached.snapshot()
}

/// Snapshot an optional top-level handle. Absence gives `None` without allocating.
pub fn snapshot_of<T: Snapshot>(source: Option<&T>) -> Option<T> {
    source.map(Snapshot::snapshot)
}

/// Implement [`Snapshot`] for leaf types whose `Clone` already owns all data.
macro_rules! snapshot_leaf {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::snapshot::Snapshot for $ty {
                #[inline]
                fn snapshot(&self) -> Self {
                    ::std::clone::Clone::clone(self)
                }
            }
        )*
    };
}

/// Implement [`Snapshot`] for a record by snapshotting each named field.
///
/// The expansion is a struct literal without `..`, so a field missing from the
/// list fails to compile.
macro_rules! snapshot_record {
    ($record:ident { $($field:ident),* $(,)? }) => {
        impl $crate::snapshot::Snapshot for $record {
            fn snapshot(&self) -> Self {
                $record {
                    $($field: $crate::snapshot::Snapshot::snapshot(&self.$field),)*
                }
            }
        }
    };
}

snapshot_leaf!(bool, char, u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, f32, f64, String);

// k8s-openapi records own all of their data, so their `Clone` is already deep.
snapshot_leaf!(Time, Quantity, ObjectMeta, ListMeta, ResourceRequirements, Container);

impl<T: Snapshot> Snapshot for Option<T> {
    fn snapshot(&self) -> Self {
        match self {
            Some(value) => Some(value.snapshot()),
            None => None,
        }
    }
}

impl<T: Snapshot> Snapshot for Vec<T> {
    fn snapshot(&self) -> Self {
        let mut out = Vec::with_capacity(self.len());
        out.extend(self.iter().map(Snapshot::snapshot));
        out
    }
}
