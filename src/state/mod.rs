//! Host-resident state: the domain, partition and grant tables.
//!
//! [`HostState`] is the in-process view the commands operate on. It is
//! materialized by a [`StateLoader`] and written back by it once a command
//! has mutated it.

mod domain;
mod grant;
mod loader;
mod partition;

use std::collections::HashSet;

use anyhow::ensure;
use serde::{Deserialize, Serialize};

use crate::error::StoreResult;

pub use domain::{Domain, DomainId};
pub use grant::{AccessMode, BadAccessMode, Grant};
pub use loader::StateLoader;
pub use partition::{Partition, PartitionName};

/// The domain, partition and grant tables of one host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostState {
    #[serde(default)]
    domains: Vec<Domain>,
    #[serde(default)]
    partitions: Vec<Partition>,
    #[serde(default)]
    grants: Vec<Grant>,
}

impl HostState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a domain by id.
    pub fn domain(&self, id: DomainId) -> Option<&Domain> {
        self.domains.iter().find(|d| d.id == id)
    }

    /// Look up a partition by name.
    pub fn partition(&self, name: &PartitionName) -> Option<&Partition> {
        self.partitions.iter().find(|p| &p.name == name)
    }

    /// Look up the grant for a (domain, partition) pair.
    pub fn grant(&self, domain: DomainId, partition: &PartitionName) -> Option<&Grant> {
        self.grants.iter().find(|g| g.matches(domain, partition))
    }

    pub fn domains(&self) -> impl Iterator<Item = &Domain> {
        self.domains.iter()
    }

    pub fn partitions(&self) -> impl Iterator<Item = &Partition> {
        self.partitions.iter()
    }

    pub fn grants(&self) -> impl Iterator<Item = &Grant> {
        self.grants.iter()
    }

    /// All grants held by `domain`.
    pub fn grants_for(&self, domain: DomainId) -> impl Iterator<Item = &Grant> {
        self.grants.iter().filter(move |g| g.domain == domain)
    }

    /// All grants on `partition`.
    pub fn grants_on<'a>(&'a self, partition: &'a PartitionName) -> impl Iterator<Item = &'a Grant> {
        self.grants.iter().filter(move |g| &g.partition == partition)
    }

    /// Add a domain. Fails if the id is taken.
    pub fn add_domain(&mut self, domain: Domain) -> StoreResult<()> {
        ensure!(
            self.domain(domain.id).is_none(),
            "domain {} already exists",
            domain.id
        );
        self.domains.push(domain);
        Ok(())
    }

    /// Add a partition. Fails if the name is taken.
    pub fn add_partition(&mut self, partition: Partition) -> StoreResult<()> {
        ensure!(
            self.partition(&partition.name).is_none(),
            "partition {} already exists",
            partition.name
        );
        self.partitions.push(partition);
        Ok(())
    }

    /// Insert a grant, replacing the mode of an existing grant for the same
    /// pair. Returns the previous mode, if any.
    ///
    /// Callers check that the domain and partition exist.
    pub fn insert_grant(&mut self, grant: Grant) -> Option<AccessMode> {
        match self
            .grants
            .iter_mut()
            .find(|g| g.matches(grant.domain, &grant.partition))
        {
            Some(existing) => Some(core::mem::replace(&mut existing.mode, grant.mode)),
            None => {
                self.grants.push(grant);
                None
            }
        }
    }

    /// Remove the grant for a pair, returning it.
    pub fn remove_grant(&mut self, domain: DomainId, partition: &PartitionName) -> Option<Grant> {
        let index = self.grants.iter().position(|g| g.matches(domain, partition))?;
        Some(self.grants.remove(index))
    }

    /// Check the table invariants. Used after loading a persisted state.
    pub fn validate(&self) -> StoreResult<()> {
        let mut ids = HashSet::new();
        for domain in &self.domains {
            ensure!(ids.insert(domain.id), "duplicate domain {}", domain.id);
        }

        let mut names = HashSet::new();
        for partition in &self.partitions {
            ensure!(
                names.insert(&partition.name),
                "duplicate partition {}",
                partition.name
            );
        }

        let mut pairs = HashSet::new();
        for grant in &self.grants {
            ensure!(
                ids.contains(&grant.domain),
                "grant references unknown domain {}",
                grant.domain
            );
            ensure!(
                names.contains(&grant.partition),
                "grant references unknown partition {}",
                grant.partition
            );
            ensure!(
                !grant.mode.is_empty(),
                "grant of {} to domain {} has no access mode",
                grant.partition,
                grant.domain
            );
            ensure!(
                pairs.insert((grant.domain, &grant.partition)),
                "duplicate grant of {} to domain {}",
                grant.partition,
                grant.domain
            );
        }
        Ok(())
    }
}
