//! In-memory session used by the workflow and service tests.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::actor::Actor;
use crate::entities::{LibraryAliquot, Partition, QcStatus, Run, RunPurpose};
use crate::error::CoreError;
use crate::reference::{not_found, Lookup, Ref};
use crate::run_aliquot::{RunAliquotKey, RunPartitionAliquot};
use crate::session::{RunAliquotStore, Session, SessionFactory};
use crate::types::DbId;

pub const PASS: DbId = 1;
pub const FAIL: DbId = 2;

pub fn admin() -> Actor {
    Actor {
        id: 1,
        username: "admin".into(),
        is_admin: true,
        is_run_reviewer: false,
    }
}

pub fn technician() -> Actor {
    Actor {
        id: 2,
        username: "tech".into(),
        is_admin: false,
        is_run_reviewer: false,
    }
}

pub fn alice() -> Actor {
    Actor {
        id: 3,
        username: "alice".into(),
        is_admin: false,
        is_run_reviewer: true,
    }
}

/// A candidate carrying only the ids of its key entities.
pub fn candidate(key: RunAliquotKey) -> RunPartitionAliquot {
    RunPartitionAliquot::new(
        Ref::unresolved(key.run_id),
        Ref::unresolved(key.partition_id),
        Ref::unresolved(key.aliquot_id),
    )
}

#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    runs: HashMap<DbId, Run>,
    partitions: HashMap<DbId, Partition>,
    aliquots: HashMap<DbId, LibraryAliquot>,
    purposes: HashMap<DbId, RunPurpose>,
    statuses: HashMap<DbId, QcStatus>,
    records: BTreeMap<RunAliquotKey, RunPartitionAliquot>,
}

/// Shared committed state; each session works on a private copy.
#[derive(Clone, Default)]
pub struct MemoryFactory {
    committed: Arc<Mutex<MemoryState>>,
}

impl MemoryFactory {
    /// Runs 1 and 5; partitions 2 and 4 (container 10, pools 20 and 21);
    /// aliquots 3 and 6 (library 30); purpose 1; statuses `PASS` and `FAIL`.
    pub fn seeded() -> Self {
        let mut state = MemoryState::default();
        for (id, name) in [(1, "RUN_A"), (5, "RUN_B")] {
            state.runs.insert(
                id,
                Run {
                    id,
                    name: name.into(),
                    alias: None,
                },
            );
        }
        for (id, number, pool) in [(2, 1, 20), (4, 2, 21)] {
            state.partitions.insert(
                id,
                Partition {
                    id,
                    container_id: 10,
                    partition_number: number,
                    pool_id: Some(pool),
                },
            );
        }
        for (id, name) in [(3, "LDI3"), (6, "LDI6")] {
            state.aliquots.insert(
                id,
                LibraryAliquot {
                    id,
                    name: name.into(),
                    library_id: 30,
                },
            );
        }
        state.purposes.insert(
            1,
            RunPurpose {
                id: 1,
                alias: "Production".into(),
            },
        );
        for (id, description, passed) in [(PASS, "Passed", true), (FAIL, "Failed", false)] {
            state.statuses.insert(
                id,
                QcStatus {
                    id,
                    description: description.into(),
                    qc_passed: Some(passed),
                },
            );
        }
        Self {
            committed: Arc::new(Mutex::new(state)),
        }
    }

    /// Open a session without going through [`SessionFactory::begin`].
    pub fn session(&self) -> MemorySession {
        MemorySession {
            committed: Arc::clone(&self.committed),
            working: self.state(),
            creates: 0,
            updates: 0,
        }
    }

    pub fn state(&self) -> MemoryState {
        self.committed.lock().unwrap().clone()
    }

    pub fn insert(&self, record: RunPartitionAliquot) {
        self.committed
            .lock()
            .unwrap()
            .records
            .insert(record.key(), record);
    }

    pub fn record(&self, key: RunAliquotKey) -> Option<RunPartitionAliquot> {
        self.committed.lock().unwrap().records.get(&key).cloned()
    }

    pub fn record_count(&self) -> usize {
        self.committed.lock().unwrap().records.len()
    }

    pub fn run(&self, id: DbId) -> Run {
        self.state().runs[&id].clone()
    }

    pub fn partition(&self, id: DbId) -> Partition {
        self.state().partitions[&id].clone()
    }

    pub fn aliquot(&self, id: DbId) -> LibraryAliquot {
        self.state().aliquots[&id].clone()
    }

    pub fn purpose(&self, id: DbId) -> RunPurpose {
        self.state().purposes[&id].clone()
    }

    pub fn qc_status(&self, id: DbId) -> QcStatus {
        self.state().statuses[&id].clone()
    }
}

pub struct MemorySession {
    committed: Arc<Mutex<MemoryState>>,
    working: MemoryState,
    pub creates: usize,
    pub updates: usize,
}

impl MemorySession {
    fn filter(&self, keep: impl Fn(&RunPartitionAliquot) -> bool) -> Vec<RunPartitionAliquot> {
        self.working
            .records
            .values()
            .filter(|r| keep(r))
            .cloned()
            .collect()
    }

    fn remove_where(&mut self, remove: impl Fn(&RunAliquotKey) -> bool) -> u64 {
        let before = self.working.records.len();
        self.working.records.retain(|key, _| !remove(key));
        (before - self.working.records.len()) as u64
    }
}

#[async_trait]
impl RunAliquotStore for MemorySession {
    async fn get(
        &mut self,
        key: RunAliquotKey,
    ) -> Result<Option<RunPartitionAliquot>, CoreError> {
        Ok(self.working.records.get(&key).cloned())
    }

    async fn list_by_run(&mut self, run_id: DbId) -> Result<Vec<RunPartitionAliquot>, CoreError> {
        Ok(self.filter(|r| r.run.id() == run_id))
    }

    async fn list_by_aliquot(
        &mut self,
        aliquot_id: DbId,
    ) -> Result<Vec<RunPartitionAliquot>, CoreError> {
        Ok(self.filter(|r| r.aliquot.id() == aliquot_id))
    }

    async fn list_by_library(
        &mut self,
        library_id: DbId,
    ) -> Result<Vec<RunPartitionAliquot>, CoreError> {
        let aliquots = &self.working.aliquots;
        Ok(self.filter(|r| {
            aliquots
                .get(&r.aliquot.id())
                .is_some_and(|a| a.library_id == library_id)
        }))
    }

    async fn create(&mut self, record: &RunPartitionAliquot) -> Result<(), CoreError> {
        if self.working.records.contains_key(&record.key()) {
            return Err(CoreError::Conflict("run-aliquot already exists".into()));
        }
        self.creates += 1;
        self.working.records.insert(record.key(), record.clone());
        Ok(())
    }

    async fn update(&mut self, record: &RunPartitionAliquot) -> Result<(), CoreError> {
        let slot = self
            .working
            .records
            .get_mut(&record.key())
            .ok_or_else(|| CoreError::Storage("update of missing run-aliquot".into()))?;
        *slot = record.clone();
        self.updates += 1;
        Ok(())
    }

    async fn delete_for_run_container(
        &mut self,
        run_id: DbId,
        container_id: DbId,
    ) -> Result<u64, CoreError> {
        let partitions = self.working.partitions.clone();
        Ok(self.remove_where(|key| {
            key.run_id == run_id
                && partitions
                    .get(&key.partition_id)
                    .is_some_and(|p| p.container_id == container_id)
        }))
    }

    async fn delete_for_pool_aliquot(
        &mut self,
        pool_id: DbId,
        aliquot_id: DbId,
    ) -> Result<u64, CoreError> {
        let partitions = self.working.partitions.clone();
        Ok(self.remove_where(|key| {
            key.aliquot_id == aliquot_id
                && partitions
                    .get(&key.partition_id)
                    .is_some_and(|p| p.pool_id == Some(pool_id))
        }))
    }
}

macro_rules! memory_lookup {
    ($($ty:ty => $field:ident),* $(,)?) => {
        $(
            #[async_trait]
            impl Lookup<$ty> for MemorySession {
                async fn fetch(&mut self, id: DbId) -> Result<$ty, CoreError> {
                    self.working
                        .$field
                        .get(&id)
                        .cloned()
                        .ok_or_else(|| not_found::<$ty>(id))
                }
            }
        )*
    };
}

memory_lookup! {
    Run => runs,
    Partition => partitions,
    LibraryAliquot => aliquots,
    RunPurpose => purposes,
    QcStatus => statuses,
}

#[async_trait]
impl Session for MemorySession {
    async fn commit(self) -> Result<(), CoreError> {
        *self.committed.lock().unwrap() = self.working;
        Ok(())
    }

    async fn rollback(self) -> Result<(), CoreError> {
        Ok(())
    }
}

#[async_trait]
impl SessionFactory for MemoryFactory {
    type Session = MemorySession;

    async fn begin(&self) -> Result<MemorySession, CoreError> {
        Ok(self.session())
    }
}
