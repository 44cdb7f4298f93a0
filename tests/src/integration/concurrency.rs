//! # Same-Key Contention
//!
//! Concurrent requests for one key: one signs, the rest are refused as
//! locked or slashable. Requests for different keys never contend.

#[cfg(test)]
mod tests {
    use std::sync::Barrier;

    use vs_03_signing_coordinator::{ErrorKind, SignResponse, SigningApi, SigningError};

    use crate::harness::{attestation, request, SignerHarness};

    const THREADS: usize = 8;

    fn race<F>(f: F) -> Vec<Result<SignResponse, SigningError>>
    where
        F: Fn(usize) -> Result<SignResponse, SigningError> + Sync,
    {
        let barrier = Barrier::new(THREADS);
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|i| {
                    let barrier = &barrier;
                    let f = &f;
                    scope.spawn(move || {
                        barrier.wait();
                        f(i)
                    })
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().expect("signing thread panicked"))
                .collect()
        })
    }

    #[test]
    fn test_conflicting_votes_sign_once() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let pk = harness.key(0);

        // Same target epoch, distinct target roots: pairwise double votes.
        let outcomes = race(|i| {
            harness
                .service
                .sign(&request(pk, attestation(284115, 77, 78, 0x10 + i as u8)))
        });

        let successes = outcomes.iter().filter(|outcome| outcome.is_ok()).count();
        assert_eq!(successes, 1);
        for outcome in outcomes.iter().filter_map(|outcome| outcome.as_ref().err()) {
            assert!(
                matches!(outcome.kind(), ErrorKind::Locked | ErrorKind::Slashable),
                "unexpected error: {}",
                outcome
            );
        }
        assert!(!harness.service.store().is_locked(&pk)?);
        Ok(())
    }

    #[test]
    fn test_conflicting_proposals_sign_once() -> anyhow::Result<()> {
        let harness = SignerHarness::new(1)?;
        let pk = harness.key(0);

        let outcomes = race(|_| {
            harness
                .service
                .sign(&request(pk, vs_01_envelope_codec::fixtures::phase0_block_payload(40)))
        });

        assert_eq!(outcomes.iter().filter(|outcome| outcome.is_ok()).count(), 1);
        assert!(outcomes
            .iter()
            .filter_map(|outcome| outcome.as_ref().err())
            .all(|e| matches!(e.kind(), ErrorKind::Locked | ErrorKind::Slashable)));
        Ok(())
    }

    #[test]
    fn test_distinct_keys_sign_concurrently() -> anyhow::Result<()> {
        let harness = SignerHarness::new(THREADS as u8)?;

        let outcomes = race(|i| {
            harness
                .service
                .sign(&request(harness.key(i), attestation(284115, 77, 78, 0x03)))
        });

        for outcome in outcomes {
            outcome?;
        }
        for pk in &harness.keys {
            assert!(harness.service.store().retrieve_highest_attestation(pk)?.is_some());
            assert!(!harness.service.store().is_locked(pk)?);
        }
        Ok(())
    }
}
