//! ──────────────────────────────────────────────────────────────────────────
//! In-memory activity store
//! ──────────────────────────────────────────────────────────────────────────
//! * One entry per activity, keyed by name
//! * Listing follows the order activities were seeded in
//! * Signup / unregister hold the entry's shard write lock for the whole
//!   check-then-act sequence
//! * Shared across actix workers through `web::Data<ActivityStore>`
//! ──────────────────────────────────────────────────────────────────────────

use dashmap::DashMap;

use crate::{
    db::{
        models::{Activity, ActivityListing},
        seed::default_activities,
    },
    utils::errors::SignupError,
};

#[derive(Debug, Default)]
pub struct ActivityStore {
    activities: DashMap<String, Activity>,
    /// Seed order of the keys. Activities are never added or removed at
    /// runtime, so this is fixed after construction.
    order: Vec<String>,
}

impl ActivityStore {
    /// A repeated name keeps its first position and its last record.
    pub fn from_activities<I>(activities: I) -> Self
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        let map = DashMap::new();
        let mut order = Vec::new();
        for (name, activity) in activities {
            if map.insert(name.clone(), activity).is_none() {
                order.push(name);
            }
        }
        Self { activities: map, order }
    }

    /// Store holding the built-in catalogue.
    pub fn seeded() -> Self {
        Self::from_activities(default_activities())
    }

    /// Snapshot of every activity, in seed order.
    pub fn list_activities(&self) -> ActivityListing {
        let entries = self
            .order
            .iter()
            .filter_map(|name| {
                self.activities
                    .get(name)
                    .map(|a| (name.clone(), a.value().clone()))
            })
            .collect();
        ActivityListing(entries)
    }

    pub fn get(&self, activity_name: &str) -> Option<Activity> {
        self.activities.get(activity_name).map(|a| a.value().clone())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// `max_participants` is informational and not checked here.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), SignupError> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(SignupError::NotFound)?;

        if activity.is_participant(email) {
            return Err(SignupError::DuplicateSignup);
        }

        activity.participants.push(email.to_owned());
        Ok(())
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), SignupError> {
        let mut activity = self
            .activities
            .get_mut(activity_name)
            .ok_or(SignupError::NotFound)?;

        let idx = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(SignupError::NotSignedUp)?;

        // `remove`, not `swap_remove`: signup order is observable
        activity.participants.remove(idx);
        Ok(())
    }
}

// ======================================================================
// UNIT TESTS
// ======================================================================
