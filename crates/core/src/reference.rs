//! Deferred entity references and the lookup resolver.
//!
//! Callers frequently know only the id of a related entity. Instead of
//! guessing whether a struct is "fully loaded", such references are modelled
//! as [`Ref::Unresolved`] and turned into [`Ref::Resolved`] exactly once per
//! save through a [`Lookup`].

use async_trait::async_trait;
use serde::Serialize;

use crate::entities::Identified;
use crate::error::CoreError;
use crate::types::DbId;

/// A reference to a canonical entity, either loaded or known only by id.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Resolved(T),
    Unresolved { id: DbId },
}

impl<T: Identified> Ref<T> {
    pub fn id(&self) -> DbId {
        match self {
            Ref::Resolved(entity) => entity.id(),
            Ref::Unresolved { id } => *id,
        }
    }

    /// The loaded entity, if this reference has been resolved.
    pub fn resolved(&self) -> Option<&T> {
        match self {
            Ref::Resolved(entity) => Some(entity),
            Ref::Unresolved { .. } => None,
        }
    }
}

impl<T> Ref<T> {
    pub fn unresolved(id: DbId) -> Self {
        Ref::Unresolved { id }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Ref::Resolved(_))
    }
}

impl<T> From<T> for Ref<T> {
    fn from(entity: T) -> Self {
        Ref::Resolved(entity)
    }
}

/// Fetches the canonical instance of `T` by id.
///
/// Implementations return [`CoreError::NotFound`] for unknown ids.
#[async_trait]
pub trait Lookup<T>: Send {
    async fn fetch(&mut self, id: DbId) -> Result<T, CoreError>;
}

/// Build the `NotFound` error for an entity type.
pub fn not_found<T: Identified>(id: DbId) -> CoreError {
    CoreError::NotFound {
        entity: T::ENTITY,
        id,
    }
}

/// Resolve an optional reference.
///
/// Absent stays absent. Anything else is fetched by id through `lookup`, so
/// an embedded copy never stands in for the canonical row and an unknown id
/// is always a hard failure.
pub async fn resolve<T, L>(
    reference: Option<Ref<T>>,
    lookup: &mut L,
) -> Result<Option<Ref<T>>, CoreError>
where
    T: Identified + Send,
    L: Lookup<T> + ?Sized,
{
    match reference {
        None => Ok(None),
        Some(reference) => Ok(Some(reload(&reference, lookup).await?)),
    }
}

/// Fetch a fresh canonical copy regardless of what the reference carries.
pub async fn reload<T, L>(reference: &Ref<T>, lookup: &mut L) -> Result<Ref<T>, CoreError>
where
    T: Identified + Send,
    L: Lookup<T> + ?Sized,
{
    Ok(Ref::Resolved(lookup.fetch(reference.id()).await?))
}
