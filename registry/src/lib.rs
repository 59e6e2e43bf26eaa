use std::sync::Arc;

use adapter::datastore::JsonDataStore;
use adapter::repository::booking::BookingRepositoryImpl;
use adapter::repository::health::HealthCheckRepositoryImpl;
use adapter::repository::resource::ResourceRepositoryImpl;
use adapter::repository::room::RoomRepositoryImpl;
use adapter::repository::user::UserRepositoryImpl;
use kernel::repository::booking::BookingRepository;
use kernel::repository::health::HealthCheckRepository;
use kernel::repository::resource::ResourceRepository;
use kernel::repository::room::RoomRepository;
use kernel::repository::user::UserRepository;

#[derive(Clone)]
pub struct AppRegistry {
    health_check_repository: Arc<dyn HealthCheckRepository>,
    room_repository: Arc<dyn RoomRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    resource_repository: Arc<dyn ResourceRepository>,
    user_repository: Arc<dyn UserRepository>,
}

impl AppRegistry {
    pub fn new(store: JsonDataStore) -> Self {
        let health_check_repository = Arc::new(HealthCheckRepositoryImpl::new(store.clone()));
        let room_repository = Arc::new(RoomRepositoryImpl::new(store.clone()));
        let booking_repository = Arc::new(BookingRepositoryImpl::new(store.clone()));
        let resource_repository = Arc::new(ResourceRepositoryImpl::new(store.clone()));
        let user_repository = Arc::new(UserRepositoryImpl::new(store));
        Self {
            health_check_repository,
            room_repository,
            booking_repository,
            resource_repository,
            user_repository,
        }
    }

    pub fn health_check_repository(&self) -> Arc<dyn HealthCheckRepository> {
        self.health_check_repository.clone()
    }

    pub fn room_repository(&self) -> Arc<dyn RoomRepository> {
        self.room_repository.clone()
    }

    pub fn booking_repository(&self) -> Arc<dyn BookingRepository> {
        self.booking_repository.clone()
    }

    pub fn resource_repository(&self) -> Arc<dyn ResourceRepository> {
        self.resource_repository.clone()
    }

    pub fn user_repository(&self) -> Arc<dyn UserRepository> {
        self.user_repository.clone()
    }
}
