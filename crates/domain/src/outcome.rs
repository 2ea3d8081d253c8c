//! Success-or-tagged-failure result of a domain operation.
//!
//! `Outcome` carries exactly one of a success value or a tag from the
//! operation's closed error set. Contents come out through [`Outcome::fold`],
//! which takes a handler for each side, so every caller decides what every
//! tag means at the point of use.
//!
//! Infrastructure failures are not part of any taxonomy. Async lookups return
//! `Result<Outcome<T, E>, X>` and the outer `Result` carries the
//! infrastructure error `X`.

use std::future::Future;

/// Result of a domain operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "an Outcome may carry a failure that must be handled"]
pub enum Outcome<T, E> {
    Success(T),
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Lift a lookup result into an outcome, failing with `tag` on absence.
    pub fn found(value: Option<T>, tag: E) -> Self {
        match value {
            Some(value) => Self::Success(value),
            None => Self::Failure(tag),
        }
    }

    /// Fails with `tag` unless `condition` holds.
    pub fn ensure(condition: bool, value: T, tag: E) -> Self {
        if condition {
            Self::Success(value)
        } else {
            Self::Failure(tag)
        }
    }

    /// Consume the outcome, mapping each side into the same downstream type.
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(tag) => on_failure(tag),
        }
    }

    /// Continue with another step that may fail with the same taxonomy.
    pub fn and_then<U, F>(self, next: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => next(value),
            Self::Failure(tag) => Outcome::Failure(tag),
        }
    }

    /// Continue with an asynchronous lookup.
    ///
    /// `next` runs only on success. A failure short-circuits and is returned
    /// unchanged; an infrastructure error from `next` propagates in the
    /// outer `Result`.
    pub async fn and_then_async<U, X, F, Fut>(self, next: F) -> Result<Outcome<U, E>, X>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<Outcome<U, E>, X>>,
    {
        match self {
            Self::Success(value) => next(value).await,
            Self::Failure(tag) => Ok(Outcome::Failure(tag)),
        }
    }

    pub fn map_success<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(tag) => Outcome::Failure(tag),
        }
    }

    /// Translate the failure tag, typically to widen it into a larger taxonomy.
    pub fn map_failure<G, F>(self, function: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(tag) => Outcome::Failure(function(tag)),
        }
    }

    /// Widen the failure tag through its `From` conversion.
    pub fn widen<G>(self) -> Outcome<T, G>
    where
        G: From<E>,
    {
        self.map_failure(G::from)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MoveCharacterError, ReadCharacterError, ReadGameError};

    #[test]
    fn fold_routes_each_side_to_its_handler() {
        let ok: Outcome<i32, ReadGameError> = Outcome::Success(3);
        let failed: Outcome<i32, ReadGameError> = Outcome::Failure(ReadGameError::NotFound);

        let describe = |outcome: Outcome<i32, ReadGameError>| {
            outcome.fold(
                |value| format!("found {value}"),
                |error| match error {
                    ReadGameError::NotFound => "missing".to_string(),
                },
            )
        };

        assert_eq!(describe(ok), "found 3");
        assert_eq!(describe(failed), "missing");
    }

    #[test]
    fn found_lifts_absence_into_the_given_tag() {
        let outcome = Outcome::found(None::<u8>, ReadCharacterError::CharacterNotFound);
        assert_eq!(outcome, Outcome::Failure(ReadCharacterError::CharacterNotFound));
        assert_eq!(
            Outcome::found(Some(1), ReadCharacterError::CharacterNotFound),
            Outcome::Success(1)
        );
    }

    #[test]
    fn and_then_short_circuits_on_first_failure() {
        let mut second_step_ran = false;
        let outcome: Outcome<i32, MoveCharacterError> =
            Outcome::Failure(MoveCharacterError::GameNotFound).and_then(|value: i32| {
                second_step_ran = true;
                Outcome::Success(value + 1)
            });

        assert!(!second_step_ran);
        assert_eq!(outcome, Outcome::Failure(MoveCharacterError::GameNotFound));
    }

    #[test]
    fn widen_preserves_the_tag() {
        let outcome: Outcome<(), MoveCharacterError> =
            Outcome::<(), ReadGameError>::Failure(ReadGameError::NotFound).widen();
        assert_eq!(outcome, Outcome::Failure(MoveCharacterError::GameNotFound));
    }

    #[test]
    fn ensure_fails_with_tag_when_condition_is_false() {
        assert_eq!(
            Outcome::ensure(false, (), MoveCharacterError::NotAnAvailableMovement),
            Outcome::Failure(MoveCharacterError::NotAnAvailableMovement)
        );
        assert!(Outcome::<(), MoveCharacterError>::ensure(true, (), MoveCharacterError::LocationNotFound).is_success());
    }

    #[tokio::test]
    async fn and_then_async_chains_lookups() {
        let lookup = |value: i32| async move {
            Ok::<_, String>(Outcome::<i32, ReadCharacterError>::Success(value * 2))
        };

        let chained = Outcome::<i32, ReadCharacterError>::Success(4)
            .and_then_async(lookup)
            .await;
        assert_eq!(chained, Ok(Outcome::Success(8)));

        let skipped = Outcome::<i32, ReadCharacterError>::Failure(ReadCharacterError::GameNotFound)
            .and_then_async(|_| async { Err::<Outcome<i32, ReadCharacterError>, _>("store down".to_string()) })
            .await;
        assert_eq!(skipped, Ok(Outcome::Failure(ReadCharacterError::GameNotFound)));
    }

    #[tokio::test]
    async fn and_then_async_propagates_infrastructure_errors() {
        let result = Outcome::<i32, ReadGameError>::Success(1)
            .and_then_async(|_| async { Err::<Outcome<i32, ReadGameError>, _>("store down") })
            .await;
        assert_eq!(result, Err("store down"));
    }
}
