//! Device Name Resolver
//!
//! Snapshot of the device registry, keyed by device id. The snapshot is taken
//! once per refresh and never patched in place.

use ahash::AHashMap;
use std::sync::Arc;

use crate::domain::{DeviceId, DeviceRegistryEntry};
use crate::error::Result;
use crate::services::host::TimelineHost;

/// Maps device ids to display names
#[derive(Debug, Clone, Default)]
pub struct DeviceNameResolver {
    names: AHashMap<DeviceId, Arc<str>>,
}

impl DeviceNameResolver {
    /// Create an empty resolver (every lookup misses)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from registry rows. Devices without any name are skipped.
    pub fn from_registry(entries: impl IntoIterator<Item = DeviceRegistryEntry>) -> Self {
        let names = entries
            .into_iter()
            .filter_map(|entry| {
                let name: Arc<str> = entry.display_name()?.into();
                Some((DeviceId::new(entry.id), name))
            })
            .collect();
        Self { names }
    }

    /// Fetch the registry from the host and build a snapshot
    pub async fn fetch<H: TimelineHost>(host: &H) -> Result<Self> {
        let entries = host.fetch_device_registry().await?;
        tracing::debug!("Fetched {} device registry entries", entries.len());
        Ok(Self::from_registry(entries))
    }

    /// Replace the snapshot with a fresh registry fetch.
    ///
    /// On failure the previous snapshot stays in place.
    pub async fn refresh<H: TimelineHost>(&mut self, host: &H) -> Result<()> {
        *self = Self::fetch(host).await?;
        Ok(())
    }

    /// Display name of `id` in the current snapshot
    pub fn resolve(&self, id: &DeviceId) -> Option<&Arc<str>> {
        self.names.get(id)
    }

    /// Number of named devices
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory_host::MemoryHost;
    use crate::services::runtime::block_on;

    fn entry(id: &str, name: Option<&str>, name_by_user: Option<&str>) -> DeviceRegistryEntry {
        DeviceRegistryEntry {
            id: id.to_string(),
            name: name.map(str::to_string),
            name_by_user: name_by_user.map(str::to_string),
        }
    }

    #[test]
    fn test_resolve_prefers_user_name() {
        let resolver = DeviceNameResolver::from_registry(vec![
            entry("a", Some("Plug"), Some("Kitchen Plug")),
            entry("b", Some("Router"), None),
            entry("c", None, None),
        ]);

        assert_eq!(resolver.resolve(&"a".into()).map(|n| &**n), Some("Kitchen Plug"));
        assert_eq!(resolver.resolve(&"b".into()).map(|n| &**n), Some("Router"));
        assert!(resolver.resolve(&"c".into()).is_none());
        assert!(resolver.resolve(&"missing".into()).is_none());
        assert_eq!(resolver.len(), 2);
    }

    #[test]
    fn test_refresh_replaces_snapshot() {
        let host = MemoryHost::new();
        host.set_registry(vec![entry("a", Some("Old"), None), entry("b", Some("B"), None)]);

        let mut resolver = DeviceNameResolver::new();
        block_on(resolver.refresh(&host)).expect("refresh");
        assert_eq!(resolver.resolve(&"a".into()).map(|n| &**n), Some("Old"));

        host.set_registry(vec![entry("a", Some("New"), None)]);
        block_on(resolver.refresh(&host)).expect("refresh");
        assert_eq!(resolver.resolve(&"a".into()).map(|n| &**n), Some("New"));
        assert!(resolver.resolve(&"b".into()).is_none());
    }

    #[test]
    fn test_failed_refresh_keeps_previous_snapshot() {
        let host = MemoryHost::new();
        host.set_registry(vec![entry("a", Some("A"), None)]);

        let mut resolver = DeviceNameResolver::new();
        block_on(resolver.refresh(&host)).expect("refresh");

        host.fail_registry(true);
        assert!(block_on(resolver.refresh(&host)).is_err());
        assert_eq!(resolver.resolve(&"a".into()).map(|n| &**n), Some("A"));
    }
}
