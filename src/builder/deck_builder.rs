//! Deck construction: sample IDs, resolve entities, pair and shuffle.
//!
//! Construction is all-or-nothing. Every entity is fetched concurrently
//! and the first failure aborts the batch; no partial deck is returned.

use futures::future::try_join_all;
use tracing::{debug, info};

use super::lookup::{fetch_entity, EntityLookup};
use crate::cards::Deck;
use crate::core::config::GameConfig;
use crate::core::entity::EntityId;
use crate::core::error::{ConfigError, FetchError};
use crate::core::rng::GameRng;

/// Draw `count` distinct entity IDs uniformly from `min..=max`.
pub fn sample_unique_ids(
    rng: &mut GameRng,
    count: usize,
    min: u32,
    max: u32,
) -> Result<Vec<EntityId>, ConfigError> {
    if count == 0 {
        return Err(ConfigError::NoPairs);
    }
    if max < min {
        return Err(ConfigError::InvertedRange { min, max });
    }
    let available = u64::from(max - min) + 1;
    if count as u64 > available {
        return Err(ConfigError::RangeTooSmall { pairs: count, available });
    }

    Ok(rng.sample_unique(count, min, max).into_iter().map(EntityId).collect())
}

/// Build a shuffled deck of `2 * config.pair_count` cards.
///
/// ID sampling and the deck (key tokens + shuffle) draw from separate
/// context streams of `rng`, so the same seed and the same lookup
/// results always give the same deck.
pub async fn build_deck<L>(
    lookup: &L,
    rng: &GameRng,
    config: &GameConfig,
) -> Result<Deck, FetchError>
where
    L: EntityLookup + ?Sized,
{
    config.validate()?;

    let ids = sample_unique_ids(
        &mut rng.for_context("ids"),
        config.pair_count,
        config.id_min,
        config.id_max,
    )?;
    debug!(?ids, "sampled entity ids");

    let entities =
        try_join_all(ids.iter().map(|&id| fetch_entity(lookup, id, &config.language))).await?;

    let deck = Deck::from_entities(&entities, &mut rng.for_context("deck"));
    info!(pairs = deck.pair_count(), cards = deck.len(), "deck built");
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_unique_ids_validates() {
        let mut rng = GameRng::new(1);
        assert_eq!(sample_unique_ids(&mut rng, 0, 1, 10), Err(ConfigError::NoPairs));
        assert_eq!(
            sample_unique_ids(&mut rng, 2, 9, 3),
            Err(ConfigError::InvertedRange { min: 9, max: 3 })
        );
        assert_eq!(
            sample_unique_ids(&mut rng, 4, 1, 3),
            Err(ConfigError::RangeTooSmall { pairs: 4, available: 3 })
        );
    }

    #[test]
    fn test_sample_unique_ids_full_range() {
        let mut rng = GameRng::new(1);
        let mut ids = sample_unique_ids(&mut rng, 3, 7, 9).unwrap();
        ids.sort();
        assert_eq!(ids, vec![EntityId(7), EntityId(8), EntityId(9)]);
    }

    #[test]
    fn test_sample_unique_ids_is_seeded() {
        let a = sample_unique_ids(&mut GameRng::new(5), 5, 1, 151).unwrap();
        let b = sample_unique_ids(&mut GameRng::new(5), 5, 1, 151).unwrap();
        assert_eq!(a, b);
    }
}
