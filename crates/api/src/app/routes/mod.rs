use axum::{
    routing::{get, post, put},
    Router,
};

pub mod auth;
pub mod bookings;
pub mod customers;
pub mod payments;
pub mod rooms;
pub mod system;

/// Endpoints open to anyone (the public booking form and room browsing).
pub fn public_router() -> Router {
    Router::new()
        .route("/ping", get(system::ping))
        .route("/health", get(system::health))
        .route("/auth/login", post(auth::login))
        .route("/rooms", get(rooms::list_rooms))
        .route("/rooms/:id", get(rooms::get_room))
        .route("/rooms/:id/availability", get(rooms::availability))
        .route("/customers", post(customers::find_or_create_customer))
        .route("/bookings", post(bookings::create_booking))
}

/// Endpoints behind the admin auth middleware.
pub fn admin_router() -> Router {
    Router::new()
        .route("/rooms", post(rooms::create_room))
        .route("/rooms/:id", put(rooms::update_room).delete(rooms::delete_room))
        .route("/customers", get(customers::list_customers))
        .route("/bookings", get(bookings::list_bookings))
        .route("/bookings/:id", get(bookings::get_booking))
        .route("/bookings/:id/status", put(bookings::update_status))
        .route("/payments", post(payments::record_payment))
        .route("/payments/:booking_id", get(payments::list_payments))
}

