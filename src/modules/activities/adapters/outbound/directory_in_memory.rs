// In memory activity directory.
//
// Holds the seeded activities for the lifetime of the process. The set of
// activities is fixed at construction; only participants change. Each
// activity sits behind its own mutex so concurrent signups on one activity
// cannot lose updates, while different activities never contend.

use crate::modules::activities::adapters::outbound::directory::{
    ActivityDirectory, Decider, DirectoryError,
};
use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::decision::Decision;
use crate::modules::activities::core::events::ActivityEvent;
use crate::modules::activities::core::evolve::evolve;
use crate::modules::activities::core::seed;
use crate::modules::activities::use_cases::list_activities::projection::ActivityView;
use crate::modules::activities::use_cases::list_activities::queries_port::ActivityQueries;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

pub struct InMemoryActivityDirectory {
    activities: BTreeMap<String, Mutex<Activity>>,
    is_offline: bool,
}

impl Default for InMemoryActivityDirectory {
    fn default() -> Self {
        Self::seeded()
    }
}

impl InMemoryActivityDirectory {
    pub fn new(activities: impl IntoIterator<Item = Activity>) -> Self {
        Self {
            activities: activities
                .into_iter()
                .map(|a| (a.name.clone(), Mutex::new(a)))
                .collect(),
            is_offline: false,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::activities())
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    #[cfg(test)]
    pub async fn get(&self, activity_name: &str) -> Option<Activity> {
        let slot = self.activities.get(activity_name)?;
        Some(slot.lock().await.clone())
    }
}

#[async_trait::async_trait]
impl ActivityDirectory for InMemoryActivityDirectory {
    async fn transact(
        &self,
        activity_name: &str,
        decider: Decider,
    ) -> Result<Vec<ActivityEvent>, DirectoryError> {
        if self.is_offline {
            return Err(DirectoryError::Backend("Activity directory offline".into()));
        }

        let slot = self
            .activities
            .get(activity_name)
            .ok_or(DirectoryError::NotFound)?;
        let mut activity = slot.lock().await;

        match decider(&*activity) {
            Decision::Accepted { events } => {
                let next = events.iter().cloned().fold(activity.clone(), evolve);
                *activity = next;
                Ok(events)
            }
            Decision::Rejected { reason } => Err(DirectoryError::Rejected(reason)),
        }
    }
}

#[async_trait::async_trait]
impl ActivityQueries for InMemoryActivityDirectory {
    async fn list_activities(&self) -> anyhow::Result<BTreeMap<String, ActivityView>> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Activity directory offline"));
        }

        let mut views = BTreeMap::new();
        for (name, slot) in &self.activities {
            let activity = slot.lock().await.clone();
            views.insert(name.clone(), ActivityView::from(activity));
        }
        Ok(views)
    }
}
