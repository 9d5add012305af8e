//! Message verification
//!
//! Outcomes stay classified ([`VerificationOutcome`]) until the display
//! boundary so callers can tell a bad signature from an unreachable key.
//! Batch verification runs resolutions concurrently (key fetches are the
//! dominant latency) but reports results in input order.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use wolt_core::{
    normalize_timestamp, signing_bytes, Fetcher, Message, VerificationOutcome, VerifiedMessage,
};
use wolt_crypto::{decode_signature, verify_signature};

use crate::resolver::KeyResolver;

/// Verifies relay-fetched messages against their published keys.
#[derive(Clone)]
pub struct Verifier {
    resolver: KeyResolver,
}

impl Verifier {
    /// Create a verifier backed by the given fetch capability.
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self {
            resolver: KeyResolver::new(fetcher),
        }
    }

    /// Verify a single message.
    ///
    /// Never returns an error: every failure mode maps to a non-valid
    /// outcome so one unverifiable message cannot abort a batch.
    pub async fn verify(&self, message: &Message) -> VerificationOutcome {
        let signature = match decode_signature(&message.signature) {
            Ok(sig) => sig,
            Err(e) => {
                tracing::debug!(sender = %message.from_wolt, "malformed signature field: {e}");
                return VerificationOutcome::MalformedRecord(e.to_string());
            }
        };

        let key = match self.resolver.resolve(&message.pubkey_url).await {
            Ok(key) => key,
            Err(e) => {
                tracing::warn!(url = %message.pubkey_url, "public key unavailable: {e}");
                return VerificationOutcome::KeyUnavailable(e.to_string());
            }
        };

        // The relay rewrites the Z suffix on round-trip; the signer signed
        // over the original form, so reconstruct it before recomputing the
        // canonical bytes.
        let created_at = normalize_timestamp(&message.created_at);
        let payload = signing_bytes(&message.from_wolt, &message.content, &created_at);

        if verify_signature(&key, &payload, &signature) {
            VerificationOutcome::Valid
        } else {
            VerificationOutcome::BadSignature
        }
    }

    /// Verify a batch, at most `concurrency` resolutions in flight.
    ///
    /// Results come back in the same order as `messages` regardless of
    /// completion order.
    pub async fn verify_batch(
        &self,
        messages: Vec<Message>,
        concurrency: usize,
    ) -> Vec<VerifiedMessage> {
        let mut annotated: Vec<(usize, VerifiedMessage)> =
            stream::iter(messages.into_iter().enumerate())
                .map(|(index, message)| async move {
                    let outcome = self.verify(&message).await;
                    (index, VerifiedMessage { message, outcome })
                })
                .buffer_unordered(concurrency.max(1))
                .collect()
                .await;

        annotated.sort_by_key(|(index, _)| *index);
        annotated.into_iter().map(|(_, verified)| verified).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::collections::HashMap;
    use wolt_core::{FetchError, FetchResponse};
    use wolt_crypto::{generate_keypair, sign_message_at, KeyPair};

    const KEY_URL: &str = "https://alice.example/.well-known/wolt.pub";

    struct FixtureFetcher {
        bodies: HashMap<String, FetchResponse>,
    }

    impl FixtureFetcher {
        fn serving_key(url: &str, pair: &KeyPair) -> Arc<dyn Fetcher> {
            let mut bodies = HashMap::new();
            bodies.insert(
                url.to_string(),
                FetchResponse {
                    status: 200,
                    body: pair.public.clone(),
                },
            );
            Arc::new(Self { bodies })
        }
    }

    #[async_trait]
    impl Fetcher for FixtureFetcher {
        async fn get(
            &self,
            url: &str,
            _headers: &[(&str, &str)],
        ) -> Result<FetchResponse, FetchError> {
            self.bodies
                .get(url)
                .cloned()
                .ok_or_else(|| FetchError::request(url, "connection refused"))
        }

        async fn head(&self, url: &str) -> Result<u16, FetchError> {
            Err(FetchError::request(url, "not supported"))
        }
    }

    fn signed_fixture(pair: &KeyPair) -> Message {
        let at = chrono::Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap();
        sign_message_at("alice", KEY_URL, "hello wolts", &pair.private, at).unwrap()
    }

    #[tokio::test]
    async fn round_trip_verifies() {
        let pair = generate_keypair().unwrap();
        let verifier = Verifier::new(FixtureFetcher::serving_key(KEY_URL, &pair));
        let msg = signed_fixture(&pair);
        assert_eq!(verifier.verify(&msg).await, VerificationOutcome::Valid);
    }

    #[tokio::test]
    async fn relay_rewritten_timestamp_still_verifies() {
        let pair = generate_keypair().unwrap();
        let verifier = Verifier::new(FixtureFetcher::serving_key(KEY_URL, &pair));

        let mut msg = signed_fixture(&pair);
        assert_eq!(msg.created_at, "2026-02-01T12:00:00.000Z");
        // Simulate the relay's round-trip rewrite of the UTC suffix.
        msg.created_at = "2026-02-01T12:00:00.000+00:00".to_string();

        assert_eq!(verifier.verify(&msg).await, VerificationOutcome::Valid);
    }

    #[tokio::test]
    async fn tampered_content_is_a_bad_signature() {
        let pair = generate_keypair().unwrap();
        let verifier = Verifier::new(FixtureFetcher::serving_key(KEY_URL, &pair));

        let mut msg = signed_fixture(&pair);
        msg.content.push('!');
        assert_eq!(verifier.verify(&msg).await, VerificationOutcome::BadSignature);
    }

    #[tokio::test]
    async fn tampered_sender_is_a_bad_signature() {
        let pair = generate_keypair().unwrap();
        let verifier = Verifier::new(FixtureFetcher::serving_key(KEY_URL, &pair));

        let mut msg = signed_fixture(&pair);
        msg.from_wolt = "mallory".to_string();
        assert_eq!(verifier.verify(&msg).await, VerificationOutcome::BadSignature);
    }

    #[tokio::test]
    async fn unreachable_key_url_is_key_unavailable() {
        let pair = generate_keypair().unwrap();
        let verifier = Verifier::new(FixtureFetcher::serving_key(KEY_URL, &pair));

        let mut msg = signed_fixture(&pair);
        msg.pubkey_url = "https://gone.example/wolt.pub".to_string();
        assert!(matches!(
            verifier.verify(&msg).await,
            VerificationOutcome::KeyUnavailable(_)
        ));
    }

    #[tokio::test]
    async fn missing_key_url_is_key_unavailable() {
        let pair = generate_keypair().unwrap();
        let mut bodies = HashMap::new();
        bodies.insert(
            KEY_URL.to_string(),
            FetchResponse {
                status: 404,
                body: "not found".to_string(),
            },
        );
        let verifier = Verifier::new(Arc::new(FixtureFetcher { bodies }));

        let msg = signed_fixture(&pair);
        assert!(matches!(
            verifier.verify(&msg).await,
            VerificationOutcome::KeyUnavailable(_)
        ));
    }

    #[tokio::test]
    async fn undecodable_signature_is_malformed() {
        let pair = generate_keypair().unwrap();
        let verifier = Verifier::new(FixtureFetcher::serving_key(KEY_URL, &pair));

        let mut msg = signed_fixture(&pair);
        msg.signature = "***".to_string();
        assert!(matches!(
            verifier.verify(&msg).await,
            VerificationOutcome::MalformedRecord(_)
        ));
    }

    #[tokio::test]
    async fn batch_results_keep_input_order_and_isolate_failures() {
        let pair = generate_keypair().unwrap();
        let verifier = Verifier::new(FixtureFetcher::serving_key(KEY_URL, &pair));

        let good_a = signed_fixture(&pair);
        let mut broken = signed_fixture(&pair);
        broken.pubkey_url = "https://gone.example/wolt.pub".to_string();
        let at = chrono::Utc.with_ymd_and_hms(2026, 2, 2, 9, 30, 0).unwrap();
        let good_b = sign_message_at("alice", KEY_URL, "second", &pair.private, at).unwrap();

        let results = verifier
            .verify_batch(vec![good_a.clone(), broken, good_b.clone()], 4)
            .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].message, good_a);
        assert_eq!(results[0].outcome, VerificationOutcome::Valid);
        assert!(matches!(
            results[1].outcome,
            VerificationOutcome::KeyUnavailable(_)
        ));
        assert_eq!(results[2].message, good_b);
        assert_eq!(results[2].outcome, VerificationOutcome::Valid);
    }
}
