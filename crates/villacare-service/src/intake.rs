//! Public intake: contact messages and visitor reviews.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use villacare_core::error::AppError;
use villacare_core::types::pagination::{PageRequest, PageResponse};
use villacare_database::repositories::contact::ContactRepository;
use villacare_database::repositories::review::ReviewRepository;
use villacare_entity::contact::Contact;
use villacare_entity::review::Review;

use crate::context::RequestContext;

/// Number of approved reviews shown on the public landing page.
const PUBLIC_REVIEW_LIMIT: i64 = 6;

/// Request to submit a contact message.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SubmitContactRequest {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Request to submit a review.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SubmitReviewRequest {
    /// Reviewer name.
    pub name: String,
    /// Star rating, 1 through 5.
    pub rating: i32,
    /// Review text.
    pub comment: String,
}

/// Handles anonymous visitor submissions and their staff moderation.
#[derive(Debug, Clone)]
pub struct IntakeService {
    /// Contact repository.
    contact_repo: Arc<ContactRepository>,
    /// Review repository.
    review_repo: Arc<ReviewRepository>,
}

impl IntakeService {
    /// Creates a new intake service.
    pub fn new(contact_repo: Arc<ContactRepository>, review_repo: Arc<ReviewRepository>) -> Self {
        Self {
            contact_repo,
            review_repo,
        }
    }

    /// Stores a visitor contact message. No authentication required.
    pub async fn submit_contact(&self, req: SubmitContactRequest) -> Result<Contact, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }
        if req.message.trim().is_empty() {
            return Err(AppError::validation("Message cannot be empty"));
        }

        let contact = self
            .contact_repo
            .create(&req.name, &req.email, &req.message)
            .await?;

        info!(contact_id = %contact.id, "Contact message received");
        Ok(contact)
    }

    /// Stores a visitor review. Always written unapproved; it appears
    /// publicly only after staff approval.
    pub async fn submit_review(&self, req: SubmitReviewRequest) -> Result<Review, AppError> {
        if !(1..=5).contains(&req.rating) {
            return Err(AppError::validation("Rating must be between 1 and 5"));
        }
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }

        let review = self
            .review_repo
            .create(&req.name, req.rating, &req.comment)
            .await?;

        info!(review_id = %review.id, rating = review.rating, "Review submitted");
        Ok(review)
    }

    /// Lists approved reviews for the public landing page.
    pub async fn list_approved_reviews(&self) -> Result<Vec<Review>, AppError> {
        self.review_repo.find_approved(PUBLIC_REVIEW_LIMIT).await
    }

    /// Lists reviews awaiting moderation. Staff only.
    pub async fn list_pending_reviews(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Review>, AppError> {
        if !ctx.is_staff() {
            return Err(AppError::forbidden("Staff role required"));
        }
        self.review_repo.find_pending(&page).await
    }

    /// Approves a review for public display. Staff only.
    pub async fn approve_review(
        &self,
        ctx: &RequestContext,
        review_id: Uuid,
    ) -> Result<Review, AppError> {
        if !ctx.is_staff() {
            return Err(AppError::forbidden("Staff role required"));
        }

        let review = self.review_repo.approve(review_id).await?;
        info!(user_id = %ctx.user_id, review_id = %review.id, "Review approved");
        Ok(review)
    }

    /// Lists contact messages. Staff only.
    pub async fn list_contacts(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Contact>, AppError> {
        if !ctx.is_staff() {
            return Err(AppError::forbidden("Staff role required"));
        }
        self.contact_repo.find_all(&page).await
    }
}
