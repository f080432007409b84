//! Infrastructure layer: persistence, configuration and the booking lifecycle.

pub mod booking_manager;
pub mod config;
pub mod db;
pub mod error;
pub mod repository;


pub use booking_manager::BookingManager;
pub use config::{AppConfig, AuthSettings, ConfigError};
pub use error::{StoreError, StoreResult};
pub use repository::{
    BookingRepository, CustomerRepository, HotelStore, InMemoryHotelStore, PaymentRepository,
    PostgresHotelStore, RoomRepository, StatusTransition,
};
