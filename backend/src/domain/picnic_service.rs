//! Picnic domain service.
//!
//! Implements the picnic driving ports. Listings are enriched in batches: one
//! city lookup and one registration lookup (plus one user lookup) per page,
//! independent of the number of picnics returned.

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    CityRepository, PicnicRepository, PicnicsCommand, PicnicsQuery, RegistrationRepository,
    UserRepository,
};
use crate::domain::{
    CityId, Error, NewPicnic, NewRegistration, Picnic, PicnicDetails, PicnicFilter, PicnicId,
    PicnicListQuery, PicnicSummary, RegistrationReceipt, User, UserId,
};

/// Driven ports required by [`PicnicService`].
pub struct PicnicServicePorts {
    pub picnics: Arc<dyn PicnicRepository>,
    pub registrations: Arc<dyn RegistrationRepository>,
    pub cities: Arc<dyn CityRepository>,
    pub users: Arc<dyn UserRepository>,
}

/// Domain service implementing [`PicnicsCommand`] and [`PicnicsQuery`].
#[derive(Clone)]
pub struct PicnicService {
    picnics: Arc<dyn PicnicRepository>,
    registrations: Arc<dyn RegistrationRepository>,
    cities: Arc<dyn CityRepository>,
    users: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock>,
}

impl PicnicService {
    /// Build the service; `clock` decides what "now" means for `past=false`.
    pub fn new(ports: PicnicServicePorts, clock: Arc<dyn Clock>) -> Self {
        Self {
            picnics: ports.picnics,
            registrations: ports.registrations,
            cities: ports.cities,
            users: ports.users,
            clock,
        }
    }

    async fn city_names(&self, ids: &[CityId]) -> Result<HashMap<CityId, String>, Error> {
        let cities = self.cities.find_by_ids(ids).await?;
        Ok(cities
            .into_iter()
            .map(|city| (city.id, String::from(city.name)))
            .collect())
    }

    async fn users_by_id(&self, ids: &[UserId]) -> Result<HashMap<UserId, User>, Error> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let users = self.users.find_by_ids(ids).await?;
        Ok(users.into_iter().map(|user| (user.id, user)).collect())
    }

    async fn attendees(&self, picnics: &[Picnic]) -> Result<HashMap<PicnicId, Vec<User>>, Error> {
        let picnic_ids: Vec<PicnicId> = picnics.iter().map(|picnic| picnic.id).collect();
        let registrations = self.registrations.list_for_picnics(&picnic_ids).await?;

        let user_ids: Vec<UserId> = registrations
            .iter()
            .map(|registration| registration.user_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let users = self.users_by_id(&user_ids).await?;

        let mut attendees: HashMap<PicnicId, Vec<User>> = HashMap::new();
        for registration in registrations {
            match users.get(&registration.user_id) {
                Some(user) => attendees
                    .entry(registration.picnic_id)
                    .or_default()
                    .push(user.clone()),
                None => debug!(
                    registration_id = %registration.id,
                    user_id = %registration.user_id,
                    "skipping registration for missing user"
                ),
            }
        }
        Ok(attendees)
    }
}

#[async_trait]
impl PicnicsCommand for PicnicService {
    async fn create_picnic(
        &self,
        city_id: CityId,
        time: DateTime<Utc>,
    ) -> Result<PicnicSummary, Error> {
        let picnic = self.picnics.insert(NewPicnic { city_id, time }).await?;
        let mut names = self.city_names(&[picnic.city_id]).await?;
        info!(picnic_id = %picnic.id, city_id = %picnic.city_id, "picnic created");

        Ok(PicnicSummary {
            id: picnic.id,
            city: names.remove(&picnic.city_id),
            time: picnic.time,
        })
    }

    async fn register_user(
        &self,
        user_id: UserId,
        picnic_id: PicnicId,
    ) -> Result<RegistrationReceipt, Error> {
        let registration = self
            .registrations
            .insert(NewRegistration { user_id, picnic_id })
            .await?;
        let mut users = self.users_by_id(&[registration.user_id]).await?;
        info!(
            registration_id = %registration.id,
            %user_id,
            %picnic_id,
            "user registered to picnic"
        );

        Ok(RegistrationReceipt {
            id: registration.id,
            user: users.remove(&registration.user_id).map(|user| user.name),
            picnic_id: registration.picnic_id,
        })
    }
}

#[async_trait]
impl PicnicsQuery for PicnicService {
    async fn list_picnics(&self, filter: PicnicFilter) -> Result<Vec<PicnicDetails>, Error> {
        let query = PicnicListQuery {
            at: filter.at,
            not_before: (!filter.include_past).then(|| self.clock.utc()),
        };
        let picnics = self.picnics.list(query).await?;
        if picnics.is_empty() {
            return Ok(Vec::new());
        }

        let city_ids: Vec<CityId> = picnics
            .iter()
            .map(|picnic| picnic.city_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let city_names = self.city_names(&city_ids).await?;
        let mut attendees = self.attendees(&picnics).await?;

        Ok(picnics
            .into_iter()
            .map(|picnic| PicnicDetails {
                id: picnic.id,
                city: city_names.get(&picnic.city_id).cloned(),
                time: picnic.time,
                users: attendees.remove(&picnic.id).unwrap_or_default(),
            })
            .collect())
    }
}

#[cfg(test)]
#[path = "picnic_service_tests.rs"]
mod tests;
