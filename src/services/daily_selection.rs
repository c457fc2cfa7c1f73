// src/services/daily_selection.rs

//! Daily content rotation.
//!
//! A game asks for `k` items out of a fixed pool. Within one calendar day
//! every call returns the same items in the same order; the first call of a
//! new day draws a fresh uniform sample and pins it in the store as a
//! (date marker, id list) pair.

use std::fmt;
use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::AppError;
use crate::store::{KeyValueStore, load_value, save_value};
use crate::utils::clock::{Clock, date_marker};

/// An item with an identifier that stays stable across releases of the pool.
pub trait PoolItem {
    type Id: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned;

    fn pool_id(&self) -> Self::Id;
}

/// The pair of store keys pinning one game's daily draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheKeys {
    pub date_key: &'static str,
    pub ids_key: &'static str,
}

pub const QUIZ_CACHE: CacheKeys = CacheKeys {
    date_key: "lastQuizDate",
    ids_key: "dailyQuestionIds",
};

pub const TRUE_FALSE_CACHE: CacheKeys = CacheKeys {
    date_key: "lastTrueFalseGameDate",
    ids_key: "dailyTrueFalseQuestionIds",
};

#[derive(Clone)]
pub struct DailySelectionCache {
    store: Arc<dyn KeyValueStore>,
    clock: Arc<dyn Clock>,
}

impl DailySelectionCache {
    pub fn new(store: Arc<dyn KeyValueStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    /// Today's selection for `keys`, drawing and persisting a new one if the
    /// stored selection is from another day or unusable.
    pub fn select<T>(&self, pool: &[T], keys: CacheKeys, k: usize) -> Vec<T>
    where
        T: PoolItem + Clone,
    {
        self.select_with_rng(pool, keys, k, &mut rand::thread_rng())
    }

    pub fn select_with_rng<T, R>(&self, pool: &[T], keys: CacheKeys, k: usize, rng: &mut R) -> Vec<T>
    where
        T: PoolItem + Clone,
        R: Rng + ?Sized,
    {
        let today = date_marker(self.clock.today());

        if let Some(items) = self.cached(pool, keys, k, &today) {
            tracing::debug!("Reusing daily selection for '{}' ({})", keys.ids_key, today);
            return items;
        }

        self.draw(pool, keys, k, &today, rng)
    }

    /// Forces a fresh draw regardless of the stored date ("new game").
    pub fn reset<T>(&self, pool: &[T], keys: CacheKeys, k: usize) -> Vec<T>
    where
        T: PoolItem + Clone,
    {
        self.reset_with_rng(pool, keys, k, &mut rand::thread_rng())
    }

    pub fn reset_with_rng<T, R>(&self, pool: &[T], keys: CacheKeys, k: usize, rng: &mut R) -> Vec<T>
    where
        T: PoolItem + Clone,
        R: Rng + ?Sized,
    {
        let today = date_marker(self.clock.today());
        tracing::debug!("Manual reset of daily selection for '{}'", keys.ids_key);
        self.draw(pool, keys, k, &today, rng)
    }

    /// Resolves the stored selection if it belongs to `today` and every id
    /// still names a distinct pool member.
    fn cached<T>(&self, pool: &[T], keys: CacheKeys, k: usize, today: &str) -> Option<Vec<T>>
    where
        T: PoolItem + Clone,
    {
        let stored_date = self.store.get(keys.date_key)?;
        if stored_date != today {
            return None;
        }

        let ids: Vec<T::Id> = load_value(self.store.as_ref(), keys.ids_key)?;
        if ids.len() != k.min(pool.len()) {
            tracing::warn!(
                "Stored selection '{}' has {} ids, expected {}; redrawing",
                keys.ids_key,
                ids.len(),
                k.min(pool.len())
            );
            return None;
        }

        let mut items = Vec::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if ids[..i].contains(id) {
                tracing::warn!("Stored selection '{}' repeats id {:?}; redrawing", keys.ids_key, id);
                return None;
            }
            match pool.iter().find(|item| item.pool_id() == *id) {
                Some(item) => items.push(item.clone()),
                None => {
                    tracing::warn!("Stored selection '{}' has stale id {:?}; redrawing", keys.ids_key, id);
                    return None;
                }
            }
        }

        Some(items)
    }

    fn draw<T, R>(&self, pool: &[T], keys: CacheKeys, k: usize, today: &str, rng: &mut R) -> Vec<T>
    where
        T: PoolItem + Clone,
        R: Rng + ?Sized,
    {
        let selected = sample(pool, k, rng);
        let ids: Vec<T::Id> = selected.iter().map(PoolItem::pool_id).collect();

        if let Err(e) = self.persist(keys, today, &ids) {
            tracing::warn!("Failed to persist daily selection '{}': {}", keys.ids_key, e);
        }

        tracing::info!("Drew {} items for '{}' on {}", selected.len(), keys.ids_key, today);
        selected
    }

    // Ids first: if the date write fails the old marker forces a redraw.
    fn persist<Id: Serialize>(&self, keys: CacheKeys, today: &str, ids: &[Id]) -> Result<(), AppError> {
        save_value(self.store.as_ref(), keys.ids_key, ids)?;
        self.store.set(keys.date_key, today)
    }
}

/// Uniform sample of `k` items without replacement, in draw order.
///
/// Shuffles a copy of the whole pool (Fisher–Yates) and keeps the first `k`.
/// A `k` larger than the pool yields the whole pool, shuffled.
pub fn sample<T, R>(pool: &[T], k: usize, rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = pool.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(k);
    shuffled
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{TimeZone, Utc};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::store::MemoryStore;
    use crate::utils::clock::FixedClock;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(u32);

    impl PoolItem for Item {
        type Id = u32;

        fn pool_id(&self) -> u32 {
            self.0
        }
    }

    const KEYS: CacheKeys = CacheKeys {
        date_key: "testDate",
        ids_key: "testIds",
    };

    fn pool(n: u32) -> Vec<Item> {
        (1..=n).map(Item).collect()
    }

    fn setup() -> (Arc<MemoryStore>, Arc<FixedClock>, DailySelectionCache) {
        let store = Arc::new(MemoryStore::new());
        let clock = Arc::new(FixedClock::new(
            Utc.with_ymd_and_hms(2024, 3, 14, 9, 30, 0).unwrap(),
        ));
        let cache = DailySelectionCache::new(store.clone(), clock.clone());
        (store, clock, cache)
    }

    fn stored_ids(store: &MemoryStore) -> Vec<u32> {
        serde_json::from_str(&store.get(KEYS.ids_key).unwrap()).unwrap()
    }

    fn assert_valid_subset(items: &[Item], pool: &[Item], k: usize) {
        assert_eq!(items.len(), k);
        let distinct: HashSet<u32> = items.iter().map(|i| i.0).collect();
        assert_eq!(distinct.len(), k);
        assert!(items.iter().all(|i| pool.contains(i)));
    }

    #[test]
    fn first_draw_persists_today_and_ids_in_order() {
        let (store, _clock, cache) = setup();
        let pool = pool(20);

        let items = cache.select(&pool, KEYS, 5);

        assert_valid_subset(&items, &pool, 5);
        assert_eq!(store.get(KEYS.date_key).as_deref(), Some("2024-03-14"));
        assert_eq!(
            stored_ids(&store),
            items.iter().map(|i| i.0).collect::<Vec<_>>()
        );
    }

    #[test]
    fn same_day_returns_identical_ordered_selection() {
        let (_store, _clock, cache) = setup();
        let pool = pool(20);

        let first = cache.select(&pool, KEYS, 5);
        for _ in 0..10 {
            assert_eq!(cache.select(&pool, KEYS, 5), first);
        }
    }

    #[test]
    fn honours_a_preexisting_selection_for_today() {
        let (store, _clock, cache) = setup();
        let pool = pool(20);
        store.set(KEYS.date_key, "2024-03-14").unwrap();
        store.set(KEYS.ids_key, "[7,3,19,1,12]").unwrap();

        let items = cache.select(&pool, KEYS, 5);

        assert_eq!(
            items,
            vec![Item(7), Item(3), Item(19), Item(1), Item(12)]
        );
    }

    #[test]
    fn new_day_redraws_and_overwrites_marker() {
        let (store, clock, cache) = setup();
        let pool = pool(20);
        store.set(KEYS.date_key, "2024-03-14").unwrap();
        store.set(KEYS.ids_key, "[1,2,3,4,5]").unwrap();

        clock.advance_days(1);
        let items = cache.select(&pool, KEYS, 5);

        assert_valid_subset(&items, &pool, 5);
        assert_eq!(store.get(KEYS.date_key).as_deref(), Some("2024-03-15"));
        assert_eq!(
            stored_ids(&store),
            items.iter().map(|i| i.0).collect::<Vec<_>>()
        );
    }

    #[test]
    fn any_other_marker_counts_as_new_day() {
        let (store, _clock, cache) = setup();
        let pool = pool(20);
        store.set(KEYS.date_key, "Thu Mar 14 2024").unwrap();
        store.set(KEYS.ids_key, "[1,2,3,4,5]").unwrap();

        cache.select(&pool, KEYS, 5);

        assert_eq!(store.get(KEYS.date_key).as_deref(), Some("2024-03-14"));
    }

    #[test]
    fn stale_ids_fall_back_to_a_new_draw() {
        let (store, _clock, cache) = setup();
        let pool = pool(10);
        store.set(KEYS.date_key, "2024-03-14").unwrap();
        // Pool shrank from 20 to 10.
        store.set(KEYS.ids_key, "[2,4,15,18,20]").unwrap();

        let items = cache.select(&pool, KEYS, 5);

        assert_valid_subset(&items, &pool, 5);
        assert!(stored_ids(&store).iter().all(|id| *id <= 10));
    }

    #[test]
    fn corrupt_or_inconsistent_ids_fall_back_to_a_new_draw() {
        let (store, _clock, cache) = setup();
        let pool = pool(20);

        for bad in ["not json", "[1,2,3]", "[1,1,2,3,4]", r#"["a","b"]"#] {
            store.set(KEYS.date_key, "2024-03-14").unwrap();
            store.set(KEYS.ids_key, bad).unwrap();

            let items = cache.select(&pool, KEYS, 5);

            assert_valid_subset(&items, &pool, 5);
            assert_eq!(stored_ids(&store).len(), 5, "{bad}");
        }
    }

    #[test]
    fn missing_ids_with_todays_marker_redraws() {
        let (store, _clock, cache) = setup();
        let pool = pool(20);
        store.set(KEYS.date_key, "2024-03-14").unwrap();

        let items = cache.select(&pool, KEYS, 5);

        assert_valid_subset(&items, &pool, 5);
        assert!(store.get(KEYS.ids_key).is_some());
    }

    #[test]
    fn manual_reset_redraws_on_the_same_day_each_time() {
        let (store, _clock, cache) = setup();
        let pool = pool(20);
        let mut rng = StdRng::seed_from_u64(42);

        cache.select_with_rng(&pool, KEYS, 5, &mut rng);
        let reset_one = cache.reset_with_rng(&pool, KEYS, 5, &mut rng);
        assert_valid_subset(&reset_one, &pool, 5);
        assert_eq!(
            stored_ids(&store),
            reset_one.iter().map(|i| i.0).collect::<Vec<_>>()
        );

        let reset_two = cache.reset_with_rng(&pool, KEYS, 5, &mut rng);
        assert_valid_subset(&reset_two, &pool, 5);
        assert_eq!(
            stored_ids(&store),
            reset_two.iter().map(|i| i.0).collect::<Vec<_>>()
        );
        assert_eq!(store.get(KEYS.date_key).as_deref(), Some("2024-03-14"));

        // The pinned selection now follows the last reset.
        assert_eq!(cache.select(&pool, KEYS, 5), reset_two);
    }

    #[test]
    fn separate_key_pairs_are_independent() {
        let (_store, _clock, cache) = setup();
        let pool = pool(20);

        let quiz = cache.select(&pool, QUIZ_CACHE, 5);
        cache.reset(&pool, TRUE_FALSE_CACHE, 5);
        cache.reset(&pool, TRUE_FALSE_CACHE, 5);

        assert_eq!(cache.select(&pool, QUIZ_CACHE, 5), quiz);
    }

    #[test]
    fn k_larger_than_pool_returns_whole_pool() {
        let (_store, _clock, cache) = setup();
        let pool = pool(3);

        let items = cache.select(&pool, KEYS, 5);
        assert_valid_subset(&items, &pool, 3);
        assert_eq!(cache.select(&pool, KEYS, 5), items);
    }

    #[test]
    fn sample_is_unbiased_enough_to_reach_every_item() {
        let pool = pool(20);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = HashSet::new();
        for _ in 0..200 {
            for item in sample(&pool, 5, &mut rng) {
                seen.insert(item.0);
            }
        }
        assert_eq!(seen.len(), 20);
    }
}
