use thiserror::Error;

/// Shortest review accepted, counted in characters after trimming.
pub const MIN_REVIEW_CHARS: usize = 10;
/// Longest review accepted, counted in characters as typed.
pub const MAX_REVIEW_CHARS: usize = 500;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FeedbackError {
    #[error("Please select a star rating before submitting")]
    RatingRequired,
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
    #[error("Please write a review with at least {min} characters")]
    ReviewTooShort { min: usize },
    #[error("Reviews are limited to {max} characters")]
    ReviewTooLong { max: usize },
}

/// A star rating and written review for a completed order.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub stars: u8,
    pub review: String,
}

impl Feedback {
    pub fn new(stars: u8, review: impl Into<String>) -> Self {
        Self { stars, review: review.into() }
    }

    pub fn validate(&self) -> Result<(), FeedbackError> {
        match self.stars {
            0 => return Err(FeedbackError::RatingRequired),
            1..=5 => {}
            other => return Err(FeedbackError::RatingOutOfRange(other)),
        }
        if self.review.trim().chars().count() < MIN_REVIEW_CHARS {
            return Err(FeedbackError::ReviewTooShort { min: MIN_REVIEW_CHARS });
        }
        if self.review.chars().count() > MAX_REVIEW_CHARS {
            return Err(FeedbackError::ReviewTooLong { max: MAX_REVIEW_CHARS });
        }
        Ok(())
    }
}
