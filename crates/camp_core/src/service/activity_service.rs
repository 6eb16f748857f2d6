//! Activity use-case service.

use crate::model::activity::{Activity, ActivityId, NewActivity};
use crate::model::camper::Camper;
use crate::repo::activity_repo::ActivityRepository;
use crate::repo::RepoResult;
use log::info;

/// Use-case service wrapper for activity operations.
pub struct ActivityService<R: ActivityRepository> {
    repo: R,
}

impl<R: ActivityRepository> ActivityService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_activities(&self) -> RepoResult<Vec<Activity>> {
        self.repo.list_activities()
    }

    pub fn create_activity(&self, activity: &NewActivity) -> RepoResult<Activity> {
        let created = self.repo.create_activity(activity)?;
        info!(
            "event=activity_create module=service status=ok activity_id={}",
            created.id()
        );
        Ok(created)
    }

    pub fn get_activity(&self, id: ActivityId) -> RepoResult<Option<Activity>> {
        self.repo.get_activity(id)
    }

    /// Deletes an activity after removing its signups.
    ///
    /// Returns `RepoError::NotFound` when the activity does not exist; nothing
    /// is deleted in that case.
    pub fn delete_activity(&self, id: ActivityId) -> RepoResult<usize> {
        self.repo.delete_activity(id)
    }

    /// Campers reachable from the activity through its signups.
    pub fn campers_for_activity(&self, id: ActivityId) -> RepoResult<Vec<Camper>> {
        self.repo.list_campers_for_activity(id)
    }
}
