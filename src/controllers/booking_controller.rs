use std::sync::Arc;

use uuid::Uuid;

use crate::dto::booking_dto::{
    AvailabilityQuery, AvailabilityResponse, BookingResponse, ChangeStatusRequest,
    CreateBookingRequest, UpdateBookingRequest,
};
use crate::dto::ApiResponse;
use crate::models::auth::UserRole;
use crate::services::access_policy::AccessPolicy;
use crate::services::booking_service::BookingService;
use crate::utils::errors::AppError;
use crate::utils::validation::{parse_date, parse_uuid};

pub struct BookingController {
    service: Arc<BookingService>,
    policy: Arc<dyn AccessPolicy>,
}

impl BookingController {
    pub fn new(service: Arc<BookingService>, policy: Arc<dyn AccessPolicy>) -> Self {
        Self { service, policy }
    }

    pub async fn create(
        &self,
        role: UserRole,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.service.create(role, request).await?;
        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Booking added successfully".to_string(),
        ))
    }

    pub async fn get_by_id(&self, role: UserRole, id: Uuid) -> Result<BookingResponse, AppError> {
        self.policy.require(role, "bookings", "view")?;
        let booking = self.service.get(id).await?;
        Ok(booking.into())
    }

    pub async fn list(&self, role: UserRole) -> Result<Vec<BookingResponse>, AppError> {
        self.policy.require(role, "bookings", "view")?;
        let bookings = self.service.list().await?;
        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    pub async fn update(
        &self,
        role: UserRole,
        id: Uuid,
        request: UpdateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.service.update(role, id, request).await?;
        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Booking updated successfully".to_string(),
        ))
    }

    pub async fn change_status(
        &self,
        role: UserRole,
        id: Uuid,
        request: ChangeStatusRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let booking = self.service.change_status(role, id, &request.status).await?;
        Ok(ApiResponse::success_with_message(
            booking.into(),
            format!("Booking marked as {}", request.status),
        ))
    }

    pub async fn delete(&self, role: UserRole, id: Uuid) -> Result<(), AppError> {
        self.service.delete(role, id).await?;
        Ok(())
    }

    /// Consulta de disponibilidad; los params llegan como strings del query
    pub async fn check_availability(
        &self,
        query: AvailabilityQuery,
    ) -> Result<AvailabilityResponse, AppError> {
        let vehicle_id = parse_uuid("vehicle", &query.vehicle)?;
        let start_date = parse_date("startDate", &query.start_date)?;
        let end_date = parse_date("endDate", &query.end_date)?;

        let available = self
            .service
            .check_availability(vehicle_id, start_date, end_date)
            .await?;

        Ok(AvailabilityResponse {
            vehicle: vehicle_id,
            available,
        })
    }
}
