//! Save path for the variant form: validate, gate, send, report.
//!
//! Validation errors come back as data. Transport and service failures stop
//! here and become a [`Notice`]; they are never propagated further.

use std::sync::atomic::{AtomicBool, Ordering};

use catalog_products::{ErrorSet, ProductEditRequest, VariantForm};

use crate::client::ProductSink;
use crate::error::ClientError;

/// Single-flight gate: at most one submission in progress.
#[derive(Debug, Default)]
pub struct SubmitGate {
    in_flight: AtomicBool,
}

/// Held while a submission is in progress; releases the gate on drop.
#[derive(Debug)]
pub struct SubmitPermit<'a> {
    gate: &'a SubmitGate,
}

impl SubmitGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<SubmitPermit<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SubmitPermit { gate: self })
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }
}

impl Drop for SubmitPermit<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.store(false, Ordering::Release);
    }
}

/// User-facing failure message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

impl Notice {
    fn from_error(err: &ClientError) -> Self {
        let message = match err {
            ClientError::Network(_) => "could not reach the catalog service",
            _ => "an error occurred while updating the product",
        };
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service accepted the edit; the form can be discarded.
    Submitted(ProductEditRequest),
    /// Validation failed locally; nothing was sent.
    Invalid(ErrorSet),
    /// Another submission is still in flight; nothing was sent.
    Busy,
    /// The service rejected the edit or could not be reached.
    Failed(Notice),
}

/// Validate `form` and, if it is clean, send it through `sink`.
pub async fn submit_form<S: ProductSink + ?Sized>(
    sink: &S,
    form: &VariantForm,
    gate: &SubmitGate,
) -> SubmitOutcome {
    let Some(_permit) = gate.try_acquire() else {
        tracing::debug!(product_id = %form.product_id(), "submission already in flight");
        return SubmitOutcome::Busy;
    };

    let request = match form.build_submission() {
        Ok(request) => request,
        Err(errors) => {
            tracing::warn!(
                product_id = %form.product_id(),
                errors = errors.len(),
                "product edit rejected by validation"
            );
            return SubmitOutcome::Invalid(errors);
        }
    };

    match sink.edit_product(&request).await {
        Ok(()) => {
            tracing::info!(
                product_id = %request.product_id,
                colors = request.variants.len(),
                "product updated"
            );
            SubmitOutcome::Submitted(request)
        }
        Err(err) => {
            tracing::warn!(product_id = %request.product_id, error = %err, "product update failed");
            SubmitOutcome::Failed(Notice::from_error(&err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use catalog_products::{FormField, VariantForm};
    use std::sync::Mutex;

    /// Records every request; answers with a canned result.
    struct RecordingSink {
        sent: Mutex<Vec<ProductEditRequest>>,
        fail_with: Option<fn() -> ClientError>,
    }

    impl RecordingSink {
        fn ok() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_with: None,
            }
        }

        fn failing(f: fn() -> ClientError) -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail_with: Some(f),
            }
        }

        fn sent(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ProductSink for RecordingSink {
        async fn edit_product(&self, request: &ProductEditRequest) -> Result<(), ClientError> {
            self.sent.lock().unwrap().push(request.clone());
            match self.fail_with {
                Some(f) => Err(f()),
                None => Ok(()),
            }
        }
    }

    fn valid_form() -> VariantForm {
        let mut form = VariantForm::initialize("A00001".parse().unwrap(), &[]);
        form.set_field(0, None, FormField::Color, "#ff0000").unwrap();
        form.set_field(0, Some(0), FormField::Price, "100").unwrap();
        form.set_field(0, Some(0), FormField::Quantity, "5").unwrap();
        form
    }

    #[test]
    fn gate_allows_one_permit_at_a_time() {
        let gate = SubmitGate::new();
        let permit = gate.try_acquire().unwrap();
        assert!(gate.is_busy());
        assert!(gate.try_acquire().is_none());
        drop(permit);
        assert!(!gate.is_busy());
        assert!(gate.try_acquire().is_some());
    }

    #[tokio::test]
    async fn valid_form_is_sent_once() {
        let sink = RecordingSink::ok();
        let gate = SubmitGate::new();

        let outcome = submit_form(&sink, &valid_form(), &gate).await;
        match outcome {
            SubmitOutcome::Submitted(request) => assert_eq!(request.variants[0].color, "ff0000"),
            other => panic!("Expected Submitted, got {other:?}"),
        }
        assert_eq!(sink.sent(), 1);
        assert!(!gate.is_busy());
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let sink = RecordingSink::ok();
        let gate = SubmitGate::new();
        let form = VariantForm::initialize("A00001".parse().unwrap(), &[]);

        let outcome = submit_form(&sink, &form, &gate).await;
        match outcome {
            SubmitOutcome::Invalid(errors) => {
                assert_eq!(errors.paths(), vec!["0-details-0-price", "0-details-0-quantity"]);
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
        assert_eq!(sink.sent(), 0);
    }

    #[tokio::test]
    async fn busy_gate_skips_submission() {
        let sink = RecordingSink::ok();
        let gate = SubmitGate::new();
        let _held = gate.try_acquire().unwrap();

        let outcome = submit_form(&sink, &valid_form(), &gate).await;
        assert_eq!(outcome, SubmitOutcome::Busy);
        assert_eq!(sink.sent(), 0);
    }

    #[tokio::test]
    async fn service_failure_becomes_notice_and_releases_gate() {
        let sink = RecordingSink::failing(|| ClientError::Api(500, "boom".to_string()));
        let gate = SubmitGate::new();

        let outcome = submit_form(&sink, &valid_form(), &gate).await;
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(Notice {
                message: "an error occurred while updating the product".to_string()
            })
        );
        assert!(!gate.is_busy());
    }

    #[tokio::test]
    async fn network_failure_has_its_own_notice() {
        let sink = RecordingSink::failing(|| ClientError::Network("refused".to_string()));
        let gate = SubmitGate::new();

        match submit_form(&sink, &valid_form(), &gate).await {
            SubmitOutcome::Failed(notice) => {
                assert_eq!(notice.message, "could not reach the catalog service")
            }
            other => panic!("Expected Failed, got {other:?}"),
        }
    }
}
